//! Logger setup for binaries and tests. The library itself only ever talks to the `log` facade.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger};

/// Environment variable read by [`LogConfig::from_env`].
pub const LOG_ENV_VAR: &str = "RBTREE_LOG";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("couldn't create log file: {0}")]
    File(#[from] std::io::Error),
    #[error("a logger is already installed")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

/// Where log records go and how much of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub term_level: LevelFilter,
    /// Also write records to this file, if set.
    pub file: Option<PathBuf>,
    pub file_level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            term_level: LevelFilter::Warn,
            file: None,
            file_level: LevelFilter::Debug,
        }
    }
}

impl LogConfig {
    /// The default config, with the terminal level taken from `RBTREE_LOG` when it holds a valid level name.
    pub fn from_env() -> Self {
        let level = std::env::var(LOG_ENV_VAR).ok();
        Self::default().with_term_level_str(level.as_deref())
    }

    fn with_term_level_str(mut self, level: Option<&str>) -> Self {
        if let Some(level) = level.and_then(|l| l.trim().parse().ok()) {
            self.term_level = level;
        }
        self
    }

    pub fn with_term_level(mut self, level: LevelFilter) -> Self {
        self.term_level = level;
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, level: LevelFilter) -> Self {
        self.file = Some(path.into());
        self.file_level = level;
        self
    }
}

/// Installs the global logger described by `config`.
///
/// Fails if the log file can't be created or if some logger is already set up.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::with_capacity(2);
    loggers.push(TermLogger::new(config.term_level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto));
    if let Some(path) = &config.file {
        loggers.push(WriteLogger::new(config.file_level, Config::default(), File::create(path)?));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_from_env_value() {
        let config = LogConfig::default().with_term_level_str(Some("trace"));
        assert_eq!(config.term_level, LevelFilter::Trace);

        let config = LogConfig::default().with_term_level_str(Some(" Info "));
        assert_eq!(config.term_level, LevelFilter::Info);

        // junk and missing values leave the default alone
        let config = LogConfig::default().with_term_level_str(Some("loud"));
        assert_eq!(config.term_level, LevelFilter::Warn);
        let config = LogConfig::default().with_term_level_str(None);
        assert_eq!(config.term_level, LevelFilter::Warn);
    }

    #[test]
    fn with_file_sets_path_and_level() {
        let config = LogConfig::default().with_file("tree.log", LevelFilter::Trace);
        assert_eq!(config.file.as_deref(), Some(std::path::Path::new("tree.log")));
        assert_eq!(config.file_level, LevelFilter::Trace);
    }

    #[test]
    fn unwritable_file_is_an_error() {
        let config = LogConfig::default().with_file("/nonexistent-dir/for/sure/tree.log", LevelFilter::Debug);
        assert!(matches!(init_logging(&config), Err(LoggingError::File(_))));
    }
}
