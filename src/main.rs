// SPDX-License-Identifier: MPL-2.0
use storefront_admin::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
storefront-admin

USAGE:
  storefront_admin [OPTIONS]

OPTIONS:
  --lang <ID>          UI language, e.g. en-US
  --config-dir <DIR>   Directory holding settings.toml
  --log <FILTER>       Log filter, e.g. debug or storefront_admin=trace
  -h, --help           Print this help
";

struct Args {
    flags: Flags,
    log: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        flags: Flags {
            lang: args.opt_value_from_str("--lang")?,
            config_dir: args.opt_value_from_str("--config-dir")?,
        },
        log: args.opt_value_from_str("--log")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(parsed))
}

/// `--log` wins over `RUST_LOG`; without either, log at info.
fn init_tracing(log: Option<&str>) {
    let filter = log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    init_tracing(args.log.as_deref());
    app::run(args.flags)
}
