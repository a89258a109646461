use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::thread;

use log::{trace, warn};
use thread_local::ThreadLocal;

/// What a single worker thread got through during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerStats {
    pub name: String,
    pub jobs: usize,
    pub emitted: usize,
}

/// Handed to every job so it can tell who's running it.
pub(super) struct Worker<'a> {
    name: &'a str,
    stats: &'a RefCell<WorkerStats>,
}

impl Worker<'_> {
    pub(super) fn name(&self) -> &str {
        self.name
    }

    pub(super) fn record_emit(&self) {
        self.stats.borrow_mut().emitted += 1;
    }
}

/// Runs `work` over every job on `workers` scoped threads pulling from one shared queue.
///
/// Blocks until the queue is drained, then returns per-thread stats sorted by thread name.
pub(super) fn run_pool<J, F>(workers: usize, jobs: Vec<J>, work: F) -> Vec<WorkerStats>
where
    J: Send,
    F: Fn(J, &Worker<'_>) + Sync,
{
    let queue = Mutex::new(VecDeque::from(jobs));
    // each thread only ever touches its own entry, so a `RefCell` is enough
    let stats: ThreadLocal<RefCell<WorkerStats>> = ThreadLocal::new();

    let drain = || {
        let current = thread::current();
        let name = current.name().unwrap_or("unnamed");
        let cell = stats.get_or(|| RefCell::new(WorkerStats { name: name.to_owned(), jobs: 0, emitted: 0 }));
        trace!("{name}: started");

        loop {
            let job = queue.lock().unwrap_or_else(PoisonError::into_inner).pop_front();
            let Some(job) = job else { break };
            cell.borrow_mut().jobs += 1;
            work(job, &Worker { name, stats: cell });
        }

        trace!("{name}: queue drained");
    };

    thread::scope(|s| {
        for i in 0..workers.max(1) {
            let spawned = thread::Builder::new()
                .name(format!("worker-{i}"))
                .spawn_scoped(s, &drain);
            if let Err(err) = spawned {
                warn!("couldn't spawn worker-{i}: {err}");
            }
        }
    });

    // only happens if no worker could be spawned at all
    if !queue.lock().unwrap_or_else(PoisonError::into_inner).is_empty() {
        warn!("running leftover jobs on the calling thread");
        drain();
    }

    let mut stats: Vec<_> = stats.into_iter().map(RefCell::into_inner).collect();
    stats.sort_by(|a, b| a.name.cmp(&b.name));
    stats
}
