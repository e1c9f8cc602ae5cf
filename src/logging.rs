use tracing_subscriber::EnvFilter;

/// Verbosity of the stderr log, selected with `--log-level`. The
/// `ELM_ANALYSE_LOG` environment variable takes precedence when set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Install the global tracing subscriber. Logs go to stderr so they never
/// interleave with the analysis messages on stdout.
pub fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_env("ELM_ANALYSE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level.filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
