use crate::{KvsError, Result, ThreadPool};

/// Runs store jobs on a dedicated rayon pool with exactly `threads` workers.
pub struct RayonThreadPool {
    inner: rayon::ThreadPool,
}

impl ThreadPool for RayonThreadPool {
    fn new(threads: u32) -> Result<Self> {
        // rayon treats 0 as "pick a default".
        if threads == 0 {
            return Err(KvsError::ThreadPool(
                "rayon pool needs at least one worker".to_owned(),
            ));
        }
        let inner = rayon::ThreadPoolBuilder::new()
            .num_threads(threads as usize)
            .thread_name(|i| format!("memkv-rayon-{i}"))
            .build()
            .map_err(|e| KvsError::ThreadPool(e.to_string()))?;
        Ok(RayonThreadPool { inner })
    }

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.inner.spawn(job)
    }
}
