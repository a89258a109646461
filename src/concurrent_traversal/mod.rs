//! Demo harness: several read-only traversals of one tree, run side by side.
//!
//! The tree is borrowed immutably for the whole run, so nothing can mutate it
//! while workers are reading. Each traversal ("process") is materialised up
//! front and then emitted one item at a time with a random pause in between,
//! which makes the interleaving between worker threads visible in the output.

use std::fmt;
use std::ops::RangeInclusive;
use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use log::debug;
use rand::Rng;

use crate::non_concurrent::rbtree::{RBTree, Snapshot};

mod pool;

pub use pool::WorkerStats;

/// Knobs for a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Worker threads in the pool. Zero is treated as one.
    pub workers: usize,
    /// Each emitted item waits a random time in this range first.
    pub pause: RangeInclusive<Duration>,
    /// How long a membership check waits before it looks.
    pub lookup_delay: Duration,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            workers: thread::available_parallelism().map_or(1, |n| n.get()),
            pause: Duration::from_millis(500)..=Duration::from_millis(2000),
            lookup_delay: Duration::from_secs(1),
        }
    }
}

impl HarnessConfig {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_pause(mut self, pause: RangeInclusive<Duration>) -> Self {
        self.pause = pause;
        self
    }

    pub fn with_lookup_delay(mut self, lookup_delay: Duration) -> Self {
        self.lookup_delay = lookup_delay;
        self
    }

    /// No waiting anywhere. Handy for tests.
    pub fn immediate() -> Self {
        Self::default()
            .with_pause(Duration::ZERO..=Duration::ZERO)
            .with_lookup_delay(Duration::ZERO)
    }

    fn random_pause(&self) -> Duration {
        let (lo, hi) = (*self.pause.start(), *self.pause.end());
        if hi <= lo {
            return lo
        }
        rand::thread_rng().gen_range(lo..=hi)
    }
}

/// Which read-only view of the tree a process emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Process {
    Inorder,
    Preorder,
    Postorder,
    /// The whole parent-to-children snapshot, as a single item.
    Snapshot,
}

/// One emitted unit of a process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item<T> {
    Value(T),
    Snapshot(Snapshot<T>),
}

impl<T: fmt::Display> fmt::Display for Item<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Value(v) => fmt::Display::fmt(v, f),
            Item::Snapshot(s) => fmt::Display::fmt(s, f),
        }
    }
}

/// Progress callbacks, fired from whichever worker runs the process.
#[derive(Debug)]
pub enum Event<'a, T> {
    Next { process: usize, worker: &'a str, item: &'a Item<T> },
    Completed { process: usize, worker: &'a str },
}

/// Everything one process emitted. Processes are numbered from 1, in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessReport<T> {
    pub process: usize,
    pub kind: Process,
    pub worker: String,
    pub items: Vec<Item<T>>,
}

#[derive(Debug, Clone)]
pub struct RunSummary<T> {
    /// Sorted by process number.
    pub reports: Vec<ProcessReport<T>>,
    /// Sorted by worker name.
    pub workers: Vec<WorkerStats>,
}

fn materialise<T>(tree: &RBTree<T>, kind: Process) -> Vec<Item<T>>
where
    T: Clone + Ord,
{
    match kind {
        Process::Inorder => tree.inorder().into_iter().map(Item::Value).collect(),
        Process::Preorder => tree.preorder().into_iter().map(Item::Value).collect(),
        Process::Postorder => tree.postorder().into_iter().map(Item::Value).collect(),
        Process::Snapshot => vec![Item::Snapshot(tree.snapshot())],
    }
}

/// Runs every process in `processes` on a worker pool and waits for all of them.
///
/// `on_event` sees every item as it is emitted; the returned summary has the same
/// items grouped per process.
pub fn run_processes<T, F>(
    tree: &RBTree<T>,
    processes: &[Process],
    config: &HarnessConfig,
    on_event: F,
) -> RunSummary<T>
where
    T: Clone + Ord + Send + Sync,
    F: Fn(Event<'_, T>) + Sync,
{
    let reports = Mutex::new(Vec::with_capacity(processes.len()));
    let jobs: Vec<_> = processes.iter().copied().enumerate().map(|(i, kind)| (i + 1, kind)).collect();

    let workers = pool::run_pool(config.workers, jobs, |(process, kind), worker| {
        debug!("process {process} ({kind:?}) picked up by {}", worker.name());
        let items = materialise(tree, kind);

        for item in &items {
            let pause = config.random_pause();
            if !pause.is_zero() {
                thread::sleep(pause);
            }
            worker.record_emit();
            on_event(Event::Next { process, worker: worker.name(), item });
        }

        on_event(Event::Completed { process, worker: worker.name() });
        debug!("process {process} done, {} items", items.len());

        let report = ProcessReport { process, kind, worker: worker.name().to_owned(), items };
        reports.lock().unwrap_or_else(PoisonError::into_inner).push(report);
    });

    let mut reports = reports.into_inner().unwrap_or_else(PoisonError::into_inner);
    reports.sort_by_key(|r| r.process);
    RunSummary { reports, workers }
}

/// Looks up every value after `config.lookup_delay`, all lookups waiting at once.
///
/// Results come back in the order the values were given.
pub fn check_membership<T>(tree: &RBTree<T>, values: &[T], config: &HarnessConfig) -> Vec<(T, bool)>
where
    T: Clone + Ord + Send + Sync,
{
    if values.is_empty() {
        return Vec::new()
    }
    let per_thread = values.len().div_ceil(config.workers.max(1));

    thread::scope(|s| {
        let handles: Vec<_> = values.chunks(per_thread)
            .map(|chunk| s.spawn(move || {
                thread::sleep(config.lookup_delay);
                chunk.iter().map(|v| (v.clone(), tree.find(v))).collect::<Vec<_>>()
            }))
            .collect();

        handles.into_iter()
            .flat_map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    })
}
