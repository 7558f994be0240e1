//! File logging for the terminal binary.
//!
//! The terminal itself is the game screen, so log records go to a file and
//! only when a path is configured.

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

use crate::config::GameConfig;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l} {t} {m}{n}";

/// Build the log4rs config for a file at `path`.
pub fn file_config(level: LevelFilter, path: &str) -> Result<Config> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(path)
        .with_context(|| format!("opening log file {path}"))?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))?;
    Ok(config)
}

/// Install the global logger. Returns `false` when logging stays disabled.
pub fn init_log(config: &GameConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };
    if config.log_level == LevelFilter::Off {
        return Ok(false);
    }
    log4rs::init_config(file_config(config.log_level, path)?)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_means_no_logger() {
        let cfg = GameConfig::default();
        assert!(!init_log(&cfg).unwrap());
    }

    #[test]
    fn test_off_level_means_no_logger() {
        let cfg = GameConfig {
            log_path: Some("unused.log".to_string()),
            log_level: LevelFilter::Off,
            ..GameConfig::default()
        };
        assert!(!init_log(&cfg).unwrap());
    }

    #[test]
    fn test_file_config_builds() {
        let path = std::env::temp_dir().join("modern-tetris-logging-test.log");
        let path = path.to_string_lossy();
        assert!(file_config(LevelFilter::Debug, &path).is_ok());
    }
}
