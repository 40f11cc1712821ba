use crate::{KvsEngine, ThreadPool};
use crossbeam_utils::sync::WaitGroup;
use log::{info, warn};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Outcome of one [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadReport {
    pub keys: u32,
    /// Entries in the store once both phases finished.
    pub entries: usize,
    /// Gets that did not return the value written for their key.
    pub mismatches: u32,
    pub elapsed: Duration,
}

impl WorkloadReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches == 0
    }
}

impl fmt::Display for WorkloadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "keys: {}, entries: {}, mismatches: {}, elapsed: {:?}",
            self.keys, self.entries, self.mismatches, self.elapsed
        )
    }
}

pub fn workload_key(i: u32) -> String {
    format!("key{i}")
}

pub fn workload_value(i: u32) -> String {
    format!("value{i}")
}

/// Puts `keys` distinct keys concurrently on `pool`, waits for every put, then
/// reads every key back concurrently and counts values that do not match what
/// was written to that key.
pub fn run<E: KvsEngine, P: ThreadPool>(store: &E, pool: &P, keys: u32) -> WorkloadReport {
    let start = Instant::now();

    info!("Workload: putting {keys} keys");
    let wg = WaitGroup::new();
    for i in 0..keys {
        let n_store = store.clone();
        let wg = wg.clone();
        pool.spawn(move || {
            if let Err(e) = n_store.put(workload_key(i), workload_value(i)) {
                warn!("Put of {} failed: {e}", workload_key(i));
            }
            drop(wg);
        });
    }
    wg.wait();

    info!("Workload: reading {keys} keys back");
    let mismatches = Arc::new(AtomicU32::new(0));
    let wg = WaitGroup::new();
    for i in 0..keys {
        let n_store = store.clone();
        let n_mismatches = Arc::clone(&mismatches);
        let wg = wg.clone();
        pool.spawn(move || {
            let key = workload_key(i);
            let value = n_store.get(&key);
            if value != workload_value(i) {
                warn!("Mismatch on {key}: got '{value}'");
                n_mismatches.fetch_add(1, Ordering::Relaxed);
            }
            drop(wg);
        });
    }
    wg.wait();

    let report = WorkloadReport {
        keys,
        entries: store.len(),
        mismatches: mismatches.load(Ordering::Relaxed),
        elapsed: start.elapsed(),
    };
    info!("Workload finished: {report}");
    report
}
