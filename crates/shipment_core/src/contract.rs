//! Payloads that cross the worker boundary.
//!
//! Tasks and results travel as JSON bytes, so nothing but plain data is ever
//! shared between the orchestrator and a worker.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// One chunk of work: a slice of drivers scored against every destination.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChunkTask {
    pub drivers: Vec<String>,
    pub destinations: Vec<String>,
}

/// Negated scores for a chunk, one row per driver in the task.
pub type ChunkRows = Vec<Vec<f64>>;

pub fn encode_payload<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(value)
}

pub fn decode_payload<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(bytes)
}
