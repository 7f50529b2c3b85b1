use std::collections::HashMap;
use tracing::Level;

/// Per-scope log level configuration parsed from an environment variable.
///
/// The format is a comma-separated list of either a bare level (which becomes
/// the global level) or `scope=level` pairs, e.g. `warn,teleport=debug`.
#[derive(Debug, Clone)]
pub struct LogConfig {
    global_level: Level,
    scope_levels: HashMap<String, Level>,
}

impl LogConfig {
    pub fn new() -> Self {
        Self {
            global_level: Level::WARN,
            scope_levels: HashMap::new(),
        }
    }

    pub fn from_env(env_var_name: &str) -> Self {
        let mut config = Self::new();
        if let Ok(raw) = std::env::var(env_var_name) {
            config.parse_config_string(&raw);
        }
        config
    }

    fn parse_config_string(&mut self, raw: &str) {
        for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part.split_once('=') {
                Some((scope, level)) => {
                    if let Ok(level) = parse_level(level.trim()) {
                        self.scope_levels.insert(scope.trim().to_string(), level);
                    }
                }
                None => {
                    if let Ok(level) = parse_level(part) {
                        self.global_level = level;
                    }
                }
            }
        }
    }

    pub fn should_log(&self, scope: &str, level: Level) -> bool {
        let target_level = self.scope_levels.get(scope).unwrap_or(&self.global_level);
        level <= *target_level
    }

    pub fn set_global_level(&mut self, level: Level) {
        self.global_level = level;
    }

    pub fn set_scope_level(&mut self, scope: String, level: Level) {
        self.scope_levels.insert(scope, level);
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_level(level_str: &str) -> Result<Level, ()> {
    match level_str.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err(()),
    }
}

/// Initialize logging with the specified environment variable name.
/// Example: init_logging("HOUSEVR_LOG")
pub fn init_logging(env_var_name: &str) -> LogConfig {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let config = LogConfig::from_env(env_var_name);
    super::set_log_config(config.clone());
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_global_level() {
        let mut config = LogConfig::new();
        config.parse_config_string("debug");
        assert_eq!(config.global_level, Level::DEBUG);
    }

    #[test]
    fn test_parse_scope_levels() {
        let mut config = LogConfig::new();
        config.parse_config_string("warn,teleport=debug,input=trace");

        assert_eq!(config.global_level, Level::WARN);
        assert_eq!(config.scope_levels.get("teleport"), Some(&Level::DEBUG));
        assert_eq!(config.scope_levels.get("input"), Some(&Level::TRACE));
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let mut config = LogConfig::new();
        config.parse_config_string("info, ,teleport=nonsense,=debug");

        assert_eq!(config.global_level, Level::INFO);
        assert!(config.scope_levels.get("teleport").is_none());
    }

    #[test]
    fn test_init_logging_tolerates_existing_subscriber() {
        // Runtimes install their own fmt subscriber before calling this;
        // the second install must be a silent no-op, not a panic.
        let first = init_logging("HOUSEVR_LOG_TEST_UNSET");
        let second = init_logging("HOUSEVR_LOG_TEST_UNSET");
        assert!(first.should_log("teleport", Level::WARN));
        assert!(second.should_log("teleport", Level::WARN));
    }

    #[test]
    fn test_should_log() {
        let mut config = LogConfig::new();
        config.global_level = Level::WARN;
        config
            .scope_levels
            .insert("teleport".to_string(), Level::DEBUG);

        // Global level filtering
        assert!(config.should_log("unknown", Level::ERROR));
        assert!(config.should_log("unknown", Level::WARN));
        assert!(!config.should_log("unknown", Level::INFO));

        // Scope-specific level filtering
        assert!(config.should_log("teleport", Level::ERROR));
        assert!(config.should_log("teleport", Level::DEBUG));
        assert!(!config.should_log("teleport", Level::TRACE));
    }
}
