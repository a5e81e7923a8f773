//! Bounded pool of isolated worker threads.
//!
//! The pool owns `size` OS threads, each holding its own [`WorkerUnit`].
//! Tasks are serialized on submission and queued on a shared channel; whichever
//! thread is free picks the next one up, so at most `size` tasks execute at
//! once. Every task gets a private reply channel, which lets callers collect
//! results in any order they like.

mod stats;
mod worker;

use std::marker::PhantomData;
use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam::channel::{self, Receiver, Sender};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::contract::{decode_payload, encode_payload};
use crate::error::{PoolError, TaskError};

use stats::PoolStats;
use worker::{worker_loop, Envelope, Reply};

pub use worker::WorkerUnit;

/// Fixed-size pool of worker threads running `W` units.
pub struct WorkerPool<W: WorkerUnit> {
    jobs: Option<Sender<Envelope>>,
    workers: Vec<JoinHandle<()>>,
    stats: Arc<PoolStats>,
    size: usize,
    _unit: PhantomData<fn() -> W>,
}

impl<W: WorkerUnit> WorkerPool<W> {
    /// Spawn `size` worker threads, building one unit per thread with `factory`.
    pub fn new<F>(mut factory: F, size: usize) -> Result<Self, PoolError>
    where
        F: FnMut() -> W,
    {
        if size == 0 {
            return Err(PoolError::InvalidSize);
        }

        let (sender, receiver) = channel::unbounded::<Envelope>();
        let mut pool = Self {
            jobs: Some(sender),
            workers: Vec::with_capacity(size),
            stats: Arc::new(PoolStats::default()),
            size,
            _unit: PhantomData,
        };

        for worker_id in 0..size {
            // On failure `pool` drops here, which joins the threads already started.
            pool.spawn_worker(worker_id, factory(), receiver.clone())?;
        }

        info!(size, "worker pool started");
        Ok(pool)
    }

    fn spawn_worker(
        &mut self,
        worker_id: usize,
        unit: W,
        jobs: Receiver<Envelope>,
    ) -> Result<(), PoolError> {
        let stats = Arc::clone(&self.stats);
        self.stats.worker_registered();
        let spawned = std::thread::Builder::new()
            .name(format!("shipment-worker-{worker_id}"))
            .spawn(move || worker_loop(worker_id, unit, jobs, stats));

        match spawned {
            Ok(handle) => {
                self.workers.push(handle);
                Ok(())
            }
            Err(err) => {
                self.stats.worker_spawn_failed();
                Err(PoolError::Spawn(err))
            }
        }
    }

    /// Queue a task. The returned handle resolves once a worker has run it.
    pub fn run(&self, task: &W::Task) -> Result<TaskHandle<W::Output>, PoolError> {
        let jobs = self.jobs.as_ref().ok_or(PoolError::Closed)?;
        let payload = encode_payload(task).map_err(PoolError::Encode)?;
        let (reply, receiver) = channel::bounded(1);

        jobs.send(Envelope { payload, reply })
            .map_err(|_| PoolError::Closed)?;

        Ok(TaskHandle {
            reply: receiver,
            _output: PhantomData,
        })
    }

    /// Stop accepting tasks, let queued ones finish, and join every thread.
    ///
    /// Calling `close` more than once is harmless.
    pub fn close(&mut self) {
        if self.jobs.take().is_none() && self.workers.is_empty() {
            return;
        }

        let completed = self.stats.completed();
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                warn!("worker thread panicked outside of a task");
            }
        }
        info!(
            size = self.size,
            completed = self.stats.completed(),
            drained = self.stats.completed() - completed,
            "worker pool closed"
        );
    }

    pub fn is_closed(&self) -> bool {
        self.jobs.is_none()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Tasks executing right now.
    pub fn active_tasks(&self) -> usize {
        self.stats.active()
    }

    /// Highest number of tasks that were ever executing at the same time.
    pub fn peak_active_tasks(&self) -> usize {
        self.stats.peak_active()
    }

    /// Worker threads that have not exited yet.
    pub fn live_workers(&self) -> usize {
        self.stats.live_workers()
    }

    pub fn completed_tasks(&self) -> usize {
        self.stats.completed()
    }
}

impl<W: WorkerUnit> Drop for WorkerPool<W> {
    fn drop(&mut self) {
        if !self.is_closed() {
            debug!("worker pool dropped without close");
        }
        self.close();
    }
}

/// Pending result of a task submitted with [`WorkerPool::run`].
#[must_use = "a task's failure is only observed through its handle"]
pub struct TaskHandle<O> {
    reply: Receiver<Reply>,
    _output: PhantomData<fn() -> O>,
}

impl<O: DeserializeOwned> TaskHandle<O> {
    /// Block until the task has run and decode its output.
    pub fn wait(self) -> Result<O, TaskError> {
        let bytes = self
            .reply
            .recv()
            .map_err(|_| PoolError::Disconnected)??;
        let output = decode_payload(&bytes).map_err(PoolError::Decode)?;
        Ok(output)
    }
}
