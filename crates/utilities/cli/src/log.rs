//! Logging arguments and subscriber setup.

use crate::{CliError, CliResult};
use clap::{ArgAction, Args, ValueEnum};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Output format of the log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Multi-field lines with targets and timestamps.
    #[default]
    Full,
    /// Abbreviated single lines.
    Compact,
}

/// Logging arguments shared by the binaries.
///
/// Logs are written to stderr so stdout stays free for command output. The `RUST_LOG`
/// environment variable adds directives on top of the level selected here.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct LogArgs {
    /// Verbosity level. `-v` enables debug logs, `-vv` trace logs.
    #[arg(short = 'v', long = "verbosity", action = ArgAction::Count, global = true)]
    pub v: u8,
    /// Only log errors.
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "v")]
    pub quiet: bool,
    /// Format of the log lines.
    #[arg(long = "log.format", value_enum, default_value_t = LogFormat::Full, global = true)]
    pub format: LogFormat,
}

impl LogArgs {
    /// Returns the default level filter selected by the flags.
    pub const fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.v {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Builds the [`EnvFilter`] from the selected level and `RUST_LOG`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::builder().with_default_directive(self.level().into()).from_env_lossy()
    }

    /// Installs the global tracing subscriber.
    pub fn init_tracing_subscriber(&self) -> CliResult<()> {
        let builder = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(self.env_filter());
        let res = match self.format {
            LogFormat::Full => builder.try_init(),
            LogFormat::Compact => builder.compact().try_init(),
        };
        res.map_err(|err| CliError::TracingInit(err.to_string()))
    }
}
