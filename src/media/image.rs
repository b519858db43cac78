// SPDX-License-Identifier: MPL-2.0
//! Image decoding for the preview surface (raster formats and SVG).

use super::source;
use crate::error::{Error, Result};
use crate::preview::FileReference;
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::io::Cursor;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Loads and decodes the image behind `reference`.
///
/// # Errors
///
/// Propagates fetch errors from [`source::fetch_bytes`] and decode errors
/// from [`decode_image`].
pub async fn load_image(reference: FileReference) -> Result<ImageData> {
    let bytes = source::fetch_bytes(&reference).await?;
    decode_image(&bytes, looks_like_svg(&reference, &bytes))
}

/// Decodes encoded image bytes. SVG input is rasterized at its intrinsic size.
///
/// # Errors
///
/// Returns [`Error::Decode`] for undecodable raster data and [`Error::Svg`]
/// for unparsable SVG or SVG with empty dimensions.
pub fn decode_image(bytes: &[u8], svg: bool) -> Result<ImageData> {
    if svg {
        return rasterize_svg(bytes);
    }
    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
}

fn rasterize_svg(bytes: &[u8]) -> Result<ImageData> {
    let tree = parse_svg(bytes)?;
    let (width, height) = svg_size(&tree)?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let png_data = pixmap.encode_png().map_err(|e| Error::Svg(e.to_string()))?;
    Ok(ImageData {
        handle: image::Handle::from_bytes(png_data),
        width,
        height,
    })
}

fn parse_svg(bytes: &[u8]) -> Result<usvg::Tree> {
    usvg::Tree::from_data(bytes, &usvg::Options::default()).map_err(|e| Error::Svg(e.to_string()))
}

fn svg_size(tree: &usvg::Tree) -> Result<(u32, u32)> {
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }
    Ok((size.width(), size.height()))
}

/// Reads only as much of a local file as needed to learn its dimensions.
///
/// The read runs on the blocking pool so probes never stall the executor.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened and
/// [`Error::Decode`] / [`Error::Svg`] if its header is not understood.
pub async fn read_dimensions(path: PathBuf) -> Result<(u32, u32)> {
    tokio::task::spawn_blocking(move || read_dimensions_blocking(&path))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}

fn read_dimensions_blocking(path: &Path) -> Result<(u32, u32)> {
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        let bytes = std::fs::read(path)?;
        return svg_size(&parse_svg(&bytes)?);
    }
    let reader = image_rs::ImageReader::open(path)?.with_guessed_format()?;
    Ok(reader.into_dimensions()?)
}

/// Dimensions of in-memory encoded data, which may be only the leading
/// bytes of a file.
///
/// # Errors
///
/// Same as [`read_dimensions`].
pub fn dimensions_of(bytes: &[u8], svg: bool) -> Result<(u32, u32)> {
    if svg {
        return svg_size(&parse_svg(bytes)?);
    }
    let reader = image_rs::ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    Ok(reader.into_dimensions()?)
}

pub(crate) fn looks_like_svg(reference: &FileReference, bytes: &[u8]) -> bool {
    let by_name = reference
        .path_portion()
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("svg"));
    by_name || {
        let head = &bytes[..bytes.len().min(256)];
        let head = String::from_utf8_lossy(head);
        let head = head.trim_start();
        head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
        <rect width="6" height="3" fill="blue" />
    </svg>"#;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]))
            .save(&path)
            .expect("failed to write temporary png");
        path
    }

    #[tokio::test]
    async fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_png(temp_dir.path(), "sample.png", 4, 2);

        let data = load_image(FileReference::new(path.to_string_lossy()))
            .await
            .expect("png should load successfully");
        assert_eq!((data.width, data.height), (4, 2));
    }

    #[tokio::test]
    async fn load_svg_image_rasterizes_successfully() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("sample.svg");
        fs::write(&path, SVG).expect("failed to write svg");

        let data = load_image(FileReference::new(path.to_string_lossy()))
            .await
            .expect("svg should load successfully");
        assert_eq!((data.width, data.height), (6, 3));
    }

    #[test]
    fn svg_is_detected_from_content() {
        let reference = FileReference::new("https://example.com/render?id=4");
        assert!(looks_like_svg(&reference, SVG.as_bytes()));
        assert!(looks_like_svg(
            &reference,
            br#"<?xml version="1.0"?><svg xmlns="http://www.w3.org/2000/svg"/>"#
        ));
        assert!(!looks_like_svg(&reference, b"\x89PNG\r\n"));
    }

    #[test]
    fn invalid_raster_bytes_are_decode_errors() {
        match decode_image(b"not a png", false) {
            Err(Error::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_or_empty_svg_is_svg_error() {
        assert!(matches!(decode_image(b"<svg>oops", true), Err(Error::Svg(_))));

        let zero = br"<svg xmlns='http://www.w3.org/2000/svg' width='0' height='10'></svg>";
        assert!(matches!(decode_image(zero, true), Err(Error::Svg(_))));
    }

    #[tokio::test]
    async fn read_dimensions_uses_header_only() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let png = write_png(temp_dir.path(), "wide.png", 9, 5);
        assert_eq!(read_dimensions(png).await.expect("dimensions"), (9, 5));

        let svg = temp_dir.path().join("icon.svg");
        fs::write(&svg, SVG).expect("write svg");
        assert_eq!(read_dimensions(svg).await.expect("dimensions"), (6, 3));

        let missing = temp_dir.path().join("missing.png");
        assert!(matches!(read_dimensions(missing).await, Err(Error::Io(_))));
    }

    #[test]
    fn dimensions_of_reads_in_memory_data() {
        let mut encoded = Vec::new();
        RgbaImage::from_pixel(3, 7, Rgba([0, 0, 0, 255]))
            .write_to(&mut Cursor::new(&mut encoded), image_rs::ImageFormat::Png)
            .expect("encode png");
        assert_eq!(dimensions_of(&encoded, false).expect("dimensions"), (3, 7));
        assert_eq!(dimensions_of(SVG.as_bytes(), true).expect("dimensions"), (6, 3));
    }
}
