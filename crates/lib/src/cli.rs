//! CLI helpers.

mod stdout_logger;

use anyhow::{anyhow, bail, Result};

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Input options.
#[derive(Default)]
pub struct Opts {
    /// Run in verbose mode.
    pub verbose: bool,
}

impl Opts {
    /// Parse CLI options.
    pub fn parse() -> Result<Self> {
        let mut opts = Self::default();
        let mut it = std::env::args_os().skip(1);

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--verbose" => {
                    opts.verbose = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        let level = if opts.verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        };

        log::set_max_level(level);
        log::set_logger(&STDOUT_LOGGER).map_err(|error| anyhow!("failed to set log: {error}"))?;

        Ok(opts)
    }
}
