// SPDX-License-Identifier: MPL-2.0
use iced_preview::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: iced_preview [OPTIONS] [FILE]...

Previews each FILE (path or URL) in order. Without files, a demo list is shown.

Options:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,iced_preview=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = option(&mut args, "--lang");
    let config_dir = option(&mut args, "--config-dir");
    let files = args
        .finish()
        .into_iter()
        .filter_map(|arg| match arg.into_string() {
            Ok(file) => Some(file),
            Err(raw) => {
                tracing::warn!(?raw, "ignoring non UTF-8 argument");
                None
            }
        })
        .collect();

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags {
        lang,
        config_dir,
        files,
    })
}

fn option(args: &mut pico_args::Arguments, name: &'static str) -> Option<String> {
    match args.opt_value_from_str(name) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(%error, option = name, "invalid command-line option");
            None
        }
    }
}
