use anyhow::{Context, Result};
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};

use crate::config::LoggingConfig;

/// Start the global logger. `RUST_LOG` wins over `level_override`, which
/// wins over the config file. Keep the returned handle alive for the
/// lifetime of the process so the file writer gets flushed.
pub fn init(cfg: &LoggingConfig, level_override: Option<&str>) -> Result<LoggerHandle> {
    let spec = level_override.unwrap_or(&cfg.level);
    let logger = Logger::try_with_env_or_str(spec)
        .with_context(|| format!("invalid log spec {:?}", spec))?;

    let logger = match &cfg.directory {
        Some(dir) => logger
            .format(flexi_logger::detailed_format)
            .log_to_file(
                FileSpec::default()
                    .directory(dir.clone())
                    .basename("ringlog")
                    .suffix("log"),
            )
            .duplicate_to_stderr(Duplicate::Warn)
            .format_for_stderr(flexi_logger::colored_opt_format)
            .rotate(
                Criterion::Size(10_000_000), // 10MB
                Naming::Numbers,
                Cleanup::KeepLogFiles(5),
            ),
        None => logger
            .log_to_stderr()
            .format(flexi_logger::colored_opt_format),
    };

    logger.start().context("starting logger")
}
