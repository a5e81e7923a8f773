//! Tunables for the cost-matrix computation.
//!
//! Every field has a default, so a TOML file only needs the values it
//! changes:
//!
//! ```
//! use shipment_core::MatrixConfig;
//!
//! let config = MatrixConfig::from_toml_str("max_threads = 8").unwrap();
//! assert_eq!(config.max_threads, 8);
//! assert_eq!(config.chunk_size, 100);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Below this many cells the matrix is computed on the calling thread.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 150_000;
/// Drivers per worker task.
pub const DEFAULT_CHUNK_SIZE: usize = 100;
pub const DEFAULT_MAX_THREADS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatrixConfig {
    /// Matrices with fewer cells (`drivers * destinations`) stay serial.
    pub parallel_threshold: usize,
    pub chunk_size: usize,
    /// Upper bound on worker threads; the pool may be smaller.
    pub max_threads: usize,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_threads: DEFAULT_MAX_THREADS,
        }
    }
}

impl MatrixConfig {
    pub fn with_parallel_threshold(mut self, cells: usize) -> Self {
        self.parallel_threshold = cells;
        self
    }

    pub fn with_chunk_size(mut self, drivers: usize) -> Self {
        self.chunk_size = drivers;
        self
    }

    pub fn with_max_threads(mut self, threads: usize) -> Self {
        self.max_threads = threads;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::Invalid(
                "chunk_size must be a positive integer".to_string(),
            ));
        }
        if self.max_threads == 0 {
            return Err(ConfigError::Invalid(
                "max_threads must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = MatrixConfig::default();
        assert_eq!(config.parallel_threshold, 150_000);
        assert_eq!(config.chunk_size, 100);
        assert_eq!(config.max_threads, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = MatrixConfig::from_toml_str("chunk_size = 25\nparallel_threshold = 10")
            .expect("config should parse");
        assert_eq!(config.chunk_size, 25);
        assert_eq!(config.parallel_threshold, 10);
        assert_eq!(config.max_threads, DEFAULT_MAX_THREADS);
    }

    #[test]
    fn rejects_zero_values_and_unknown_keys() {
        assert!(matches!(
            MatrixConfig::from_toml_str("max_threads = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            MatrixConfig::from_toml_str("chunk_size = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            MatrixConfig::from_toml_str("threads = 2"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "max_threads = 2").expect("write config");
        let config = MatrixConfig::load(file.path()).expect("config should load");
        assert_eq!(config.max_threads, 2);

        assert!(matches!(
            MatrixConfig::load("/definitely/not/here.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
