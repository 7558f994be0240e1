//! Host configuration read from the environment.
//!
//! Every key is optional. A value that does not parse falls back to its
//! default instead of aborting start-up.

use std::time::Duration;

use log::LevelFilter;

use crate::types::DEFAULT_GRAVITY_MS;

/// Gravity interval in milliseconds.
pub const ENV_GRAVITY_MS: &str = "TETRIS_GRAVITY_MS";
/// Fixed seed for a reproducible piece sequence.
pub const ENV_SEED: &str = "TETRIS_SEED";
/// Log file path; logging is off without it.
pub const ENV_LOG_PATH: &str = "TETRIS_LOG_PATH";
/// `error`, `warn`, `info`, `debug`, `trace` or `off`.
pub const ENV_LOG_LEVEL: &str = "TETRIS_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub gravity_ms: u64,
    pub seed: Option<u32>,
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity_ms: DEFAULT_GRAVITY_MS,
            seed: None,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let gravity_ms = lookup(ENV_GRAVITY_MS)
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(|ms| ms.max(1))
            .unwrap_or(defaults.gravity_ms);

        let seed = lookup(ENV_SEED).and_then(|s| s.trim().parse().ok());

        let log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_level = lookup(ENV_LOG_LEVEL)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.log_level);

        Self {
            gravity_ms,
            seed,
            log_path,
            log_level,
        }
    }

    pub fn gravity_interval(&self) -> Duration {
        Duration::from_millis(self.gravity_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = GameConfig::from_lookup(lookup_from(&[]));
        assert_eq!(cfg, GameConfig::default());
        assert_eq!(cfg.gravity_interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_reads_every_key() {
        let cfg = GameConfig::from_lookup(lookup_from(&[
            (ENV_GRAVITY_MS, "250"),
            (ENV_SEED, "42"),
            (ENV_LOG_PATH, " /tmp/tetris.log "),
            (ENV_LOG_LEVEL, "debug"),
        ]));
        assert_eq!(cfg.gravity_ms, 250);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/tetris.log"));
        assert_eq!(cfg.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let cfg = GameConfig::from_lookup(lookup_from(&[
            (ENV_GRAVITY_MS, "fast"),
            (ENV_SEED, "-3"),
            (ENV_LOG_PATH, "   "),
            (ENV_LOG_LEVEL, "loud"),
        ]));
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn test_zero_gravity_is_clamped() {
        let cfg = GameConfig::from_lookup(lookup_from(&[(ENV_GRAVITY_MS, "0")]));
        assert_eq!(cfg.gravity_ms, 1);
    }

    #[test]
    fn test_level_parse_is_case_insensitive() {
        let cfg = GameConfig::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "OFF")]));
        assert_eq!(cfg.log_level, LevelFilter::Off);
    }
}
