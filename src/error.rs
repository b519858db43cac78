// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(HttpError),
    Decode(String),
    Svg(String),
}

/// Failures reported while fetching a remote resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// The server answered with a non-success status code.
    Status(u16),

    /// The request never produced a response (DNS, TLS, timeout, ...).
    Transport(String),
}

impl HttpError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            HttpError::Status(404) => "error-load-not-found",
            HttpError::Status(_) => "error-load-http-status",
            HttpError::Transport(_) => "error-load-network",
        }
    }

    /// Whether the server refused the request method itself.
    #[must_use]
    pub fn rejects_method(&self) -> bool {
        matches!(self, HttpError::Status(405 | 501))
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::Status(code) => write!(f, "HTTP status {}", code),
            HttpError::Transport(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error {
    /// Returns the i18n message key used by the fallback panel.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-load-io",
            Error::Config(_) => "error-load-general",
            Error::Http(http) => http.i18n_key(),
            Error::Decode(_) | Error::Svg(_) => "error-load-decode",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<HttpError> for Error {
    fn from(err: HttpError) -> Self {
        Error::Http(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Error::Http(HttpError::Status(status.as_u16())),
            None => Error::Http(HttpError::Transport(err.to_string())),
        }
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
