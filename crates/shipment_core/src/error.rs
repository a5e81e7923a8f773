//! Error types shared by the parser, scorer, worker pool and orchestrator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const TYPE_ERROR: &str = "TYPE_ERROR";
pub const STREET_NAME_NOT_FOUND_ERROR: &str = "STREET_NAME_NOT_FOUND_ERROR";
pub const WORKER_PANIC_ERROR: &str = "WORKER_PANIC_ERROR";
pub const MALFORMED_TASK_ERROR: &str = "MALFORMED_TASK_ERROR";

/// Failures raised while extracting a street name from an address.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    /// The input was not a string. `value` is the JSON serialization of the
    /// offending value.
    #[error("Error: [{value}] not of type {expected}")]
    Type { value: String, expected: &'static str },

    #[error("Street name not found!")]
    StreetNameNotFound,
}

impl AddressError {
    pub fn code(&self) -> &'static str {
        match self {
            AddressError::Type { .. } => TYPE_ERROR,
            AddressError::StreetNameNotFound => STREET_NAME_NOT_FOUND_ERROR,
        }
    }
}

/// A failed task, as reported back across the worker boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{error_code}: {error_message}")]
pub struct WorkerFailure {
    pub error_code: String,
    pub error_message: String,
}

impl WorkerFailure {
    pub fn new(error_code: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            error_message: error_message.into(),
        }
    }
}

impl From<AddressError> for WorkerFailure {
    fn from(err: AddressError) -> Self {
        WorkerFailure::new(err.code(), err.to_string())
    }
}

/// Worker pool lifecycle and transport errors.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("pool size must be a positive integer")]
    InvalidSize,

    #[error("pool is closed")]
    Closed,

    #[error("failed to encode task payload: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode task result: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("worker disconnected before replying")]
    Disconnected,

    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[source] std::io::Error),
}

/// Why a submitted task produced no result.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The worker ran the task and it failed.
    #[error(transparent)]
    Failed(#[from] WorkerFailure),

    #[error(transparent)]
    Pool(#[from] PoolError),
}

/// Errors surfaced by the cost-matrix computation.
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error(transparent)]
    Address(#[from] AddressError),

    #[error("chunk {chunk_id} failed: {failure}")]
    Worker {
        chunk_id: usize,
        failure: WorkerFailure,
    },

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error("invalid chunk plan: {0}")]
    Chunking(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors raised while loading a [`crate::config::MatrixConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
