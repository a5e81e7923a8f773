use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters describing what the pool's threads are doing.
///
/// Only the pool's own bookkeeping lives here; worker units never see it.
#[derive(Debug, Default)]
pub(super) struct PoolStats {
    active: AtomicUsize,
    peak_active: AtomicUsize,
    live_workers: AtomicUsize,
    completed: AtomicUsize,
}

impl PoolStats {
    pub(super) fn task_started(&self) {
        let active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_active.fetch_max(active, Ordering::SeqCst);
    }

    pub(super) fn task_finished(&self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
        self.completed.fetch_add(1, Ordering::SeqCst);
    }

    /// Count a worker thread as live until the returned guard drops.
    pub(super) fn live_guard(&self) -> LiveGuard<'_> {
        LiveGuard { stats: self }
    }

    /// Register a worker before its thread starts, so `live_workers` never
    /// under-reports right after construction.
    pub(super) fn worker_registered(&self) {
        self.live_workers.fetch_add(1, Ordering::SeqCst);
    }

    /// Undo [`Self::worker_registered`] for a thread that never started.
    pub(super) fn worker_spawn_failed(&self) {
        self.live_workers.fetch_sub(1, Ordering::SeqCst);
    }

    pub(super) fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    pub(super) fn peak_active(&self) -> usize {
        self.peak_active.load(Ordering::SeqCst)
    }

    pub(super) fn live_workers(&self) -> usize {
        self.live_workers.load(Ordering::SeqCst)
    }

    pub(super) fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

pub(super) struct LiveGuard<'a> {
    stats: &'a PoolStats,
}

impl Drop for LiveGuard<'_> {
    fn drop(&mut self) {
        self.stats.live_workers.fetch_sub(1, Ordering::SeqCst);
    }
}
