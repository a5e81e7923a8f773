use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crossbeam::channel::{Receiver, Sender};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::trace;

use crate::contract::{decode_payload, encode_payload};
use crate::error::{WorkerFailure, MALFORMED_TASK_ERROR, WORKER_PANIC_ERROR};

use super::stats::PoolStats;

/// Code reported when a task's output cannot be encoded for the trip back.
const UNENCODABLE_OUTPUT_ERROR: &str = "UNENCODABLE_OUTPUT_ERROR";

/// A unit of work that runs on its own pool thread.
///
/// Each pool thread owns one instance, so implementations may keep per-thread
/// scratch state in `&mut self`. Tasks arrive and outputs leave as serialized
/// bytes; the types only need to round-trip through serde.
pub trait WorkerUnit: Send + 'static {
    type Task: Serialize + DeserializeOwned;
    type Output: Serialize + DeserializeOwned;

    fn execute(&mut self, task: Self::Task) -> Result<Self::Output, WorkerFailure>;
}

/// Encoded task plus the channel its reply goes back on.
pub(super) struct Envelope {
    pub(super) payload: Vec<u8>,
    pub(super) reply: Sender<Reply>,
}

/// Encoded output, or the failure that replaced it.
pub(super) type Reply = Result<Vec<u8>, WorkerFailure>;

/// Serve envelopes until the queue is closed and drained.
pub(super) fn worker_loop<W: WorkerUnit>(
    worker_id: usize,
    mut unit: W,
    jobs: Receiver<Envelope>,
    stats: Arc<PoolStats>,
) {
    let _live = stats.live_guard();
    for envelope in jobs.iter() {
        stats.task_started();
        let reply = handle_payload(&mut unit, &envelope.payload);
        stats.task_finished();
        trace!(worker_id, ok = reply.is_ok(), "task finished");
        // The submitter may have stopped waiting; nothing to do then.
        let _ = envelope.reply.send(reply);
    }
    trace!(worker_id, "worker stopped");
}

fn handle_payload<W: WorkerUnit>(unit: &mut W, payload: &[u8]) -> Reply {
    let task = decode_payload::<W::Task>(payload)
        .map_err(|err| WorkerFailure::new(MALFORMED_TASK_ERROR, err.to_string()))?;

    let output = panic::catch_unwind(AssertUnwindSafe(|| unit.execute(task)))
        .map_err(|panic| WorkerFailure::new(WORKER_PANIC_ERROR, panic_message(panic.as_ref())))??;

    encode_payload(&output)
        .map_err(|err| WorkerFailure::new(UNENCODABLE_OUTPUT_ERROR, err.to_string()))
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}
