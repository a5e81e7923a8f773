use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use shipment_core::contract::{ChunkRows, ChunkTask};
use shipment_core::jobs::CostMatrixWorker;
use shipment_core::{PoolError, SuitabilityScorer, TaskError, WorkerFailure, WorkerPool, WorkerUnit};

/// Reports the thread it ran on, to show tasks spread across the pool.
struct ThreadReporter;

impl WorkerUnit for ThreadReporter {
    type Task = u64;
    type Output = String;

    fn execute(&mut self, sleep_ms: u64) -> Result<String, WorkerFailure> {
        thread::sleep(Duration::from_millis(sleep_ms));
        Ok(thread::current().name().unwrap_or("unnamed").to_string())
    }
}

#[test]
fn tasks_run_on_named_pool_threads_within_size() {
    let mut pool = WorkerPool::new(|| ThreadReporter, 3).expect("pool");
    let handles: Vec<_> = (0..12).map(|_| pool.run(&15).expect("submit")).collect();
    let threads: HashSet<String> = handles
        .into_iter()
        .map(|h| h.wait().expect("task"))
        .collect();

    assert!(threads.len() <= 3);
    assert!(threads.iter().all(|name| name.starts_with("shipment-worker-")));
    assert!(pool.peak_active_tasks() <= pool.size());

    pool.close();
    assert_eq!(pool.live_workers(), 0);
}

#[test]
fn cost_worker_is_reusable_across_tasks() {
    let mut pool = WorkerPool::new(|| CostMatrixWorker::new(SuitabilityScorer::new()), 1)
        .expect("pool");
    let destinations = vec!["123 Fake St".to_string()];

    for driver in ["Pat White", "Sue Johns", "Minnie Auer"] {
        let task = ChunkTask {
            drivers: vec![driver.to_string()],
            destinations: destinations.clone(),
        };
        let rows: ChunkRows = pool.run(&task).expect("submit").wait().expect("task");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 1);
        assert!(rows[0][0] <= 0.0);
    }
    pool.close();
}

#[test]
fn address_failure_crosses_worker_boundary_with_code() {
    let pool = WorkerPool::new(|| CostMatrixWorker::new(SuitabilityScorer::new()), 2)
        .expect("pool");
    let task = ChunkTask {
        drivers: vec!["Pat White".to_string()],
        destinations: vec![String::new()],
    };

    match pool.run(&task).expect("submit").wait() {
        Err(TaskError::Failed(failure)) => {
            assert_eq!(failure.error_code, "STREET_NAME_NOT_FOUND_ERROR");
            assert_eq!(failure.error_message, "Street name not found!");
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn run_after_close_is_rejected() {
    let mut pool = WorkerPool::new(|| ThreadReporter, 1).expect("pool");
    pool.close();
    assert!(matches!(pool.run(&1), Err(PoolError::Closed)));
}
