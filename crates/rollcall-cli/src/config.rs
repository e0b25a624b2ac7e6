use clap::{Parser, ValueEnum};

/// Largest batch a single invocation may print.
pub const MAX_COUNT: usize = 1_000_000;

/// Runtime configuration for the `rollcall` binary.
///
/// All values are parsed from CLI arguments or environment variables. A
/// `.env` file in the working directory is loaded before parsing.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "rollcall",
    version,
    about = "Generate short record identifiers in the range 0..=999999"
)]
pub struct CliArgs {
    /// Number of identifiers to print.
    ///
    /// Identifiers are not unique. Large batches generated within the same
    /// few milliseconds will contain duplicates.
    ///
    /// Environment variable: `ROLLCALL_COUNT`
    #[arg(short = 'n', long, env = "ROLLCALL_COUNT", default_value_t = 1)]
    pub count: usize,

    /// Time source used for the timestamp component.
    ///
    /// `system` reads the wall clock on every call. `monotonic` anchors to
    /// the wall clock once and never goes backward.
    ///
    /// Environment variable: `ROLLCALL_CLOCK`
    #[arg(long, env = "ROLLCALL_CLOCK", value_enum, default_value_t = ClockKind::System)]
    pub clock: ClockKind,

    /// Output format written to stdout.
    ///
    /// Environment variable: `ROLLCALL_FORMAT`
    #[arg(short, long, env = "ROLLCALL_FORMAT", value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Log format written to stderr. Verbosity is controlled by `RUST_LOG`.
    ///
    /// Environment variable: `ROLLCALL_LOG_FORMAT`
    #[arg(long, env = "ROLLCALL_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockKind {
    System,
    Monotonic,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One identifier per line.
    Plain,
    /// One identifier per line, zero-padded to six digits.
    Padded,
    /// A single JSON array of numbers.
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("COUNT must be greater than 0")]
    ZeroCount,

    #[error("COUNT ({count}) exceeds the maximum batch size ({max})")]
    CountTooLarge { count: usize, max: usize },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub count: usize,
    pub clock: ClockKind,
    pub format: OutputFormat,
    pub log_format: LogFormat,
}

impl TryFrom<CliArgs> for Config {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.count == 0 {
            return Err(ConfigError::ZeroCount);
        }

        if args.count > MAX_COUNT {
            return Err(ConfigError::CountTooLarge {
                count: args.count,
                max: MAX_COUNT,
            });
        }

        Ok(Self {
            count: args.count,
            clock: args.clock,
            format: args.format,
            log_format: args.log_format,
        })
    }
}
