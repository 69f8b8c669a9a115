//! Tracing subscriber initialisation.
//!
//! Only the binary calls [`init_logging`]; library modules only emit events.
//!
//! | Flag(s)   | Filter level |
//! |-----------|--------------|
//! | (none)    | WARN         |
//! | `-v`      | INFO         |
//! | `-vv`     | DEBUG        |
//! | `-vvv`    | TRACE        |
//! | `--quiet` | ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::GlobalArgs;

/// Initialise the global tracing subscriber, writing to stderr.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args.verbose, args.quiet);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("relver={level}")));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Translate the verbosity counter + quiet flag to a level string.
fn derive_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_default() {
        assert_eq!(derive_level(0, false), "warn");
    }

    #[test]
    fn level_verbose() {
        assert_eq!(derive_level(1, false), "info");
        assert_eq!(derive_level(2, false), "debug");
        assert_eq!(derive_level(3, false), "trace");
        assert_eq!(derive_level(9, false), "trace");
    }

    // quiet takes precedence over verbose
    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(derive_level(3, true), "error");
    }
}
