pub mod naive;
pub mod rayon;
pub mod shared_queue;

pub use naive::NaiveThreadPool;
pub use shared_queue::SharedQueueThreadPool;
pub use crate::thread_pool::rayon::RayonThreadPool;

use crate::Result;

/// Runs jobs submitted by store callers on some set of threads.
pub trait ThreadPool {
    fn new(threads: u32) -> Result<Self>
    where
        Self: Sized;

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static;
}
