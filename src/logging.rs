use flexi_logger::{default_format, FlexiLoggerError, Logger, LoggerHandle};

/// Start the global logger, writing to stderr. `RUST_LOG` takes precedence
/// over `default_spec` (e.g. `"info"` or `"minimax_connect_four=debug"`).
///
/// Keep the returned handle alive for as long as logging is needed.
pub fn setup_logging(default_spec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(default_spec)?
        .log_to_stderr()
        .format(default_format)
        .start()
}
