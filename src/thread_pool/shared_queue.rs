use log::{debug, warn};
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use crate::{KvsError, Result, ThreadPool};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// A fixed set of workers pulling jobs off one shared channel.
///
/// A job that panics is caught so its worker keeps serving. Dropping the pool
/// closes the channel and the workers exit once the queue drains.
pub struct SharedQueueThreadPool {
    producer: Sender<Job>,
}

impl ThreadPool for SharedQueueThreadPool {
    fn new(threads: u32) -> Result<SharedQueueThreadPool> {
        if threads == 0 {
            return Err(KvsError::ThreadPool(
                "shared queue needs at least one worker".to_owned(),
            ));
        }
        let (producer, consumer) = mpsc::channel::<Job>();
        let consumer = Arc::new(Mutex::new(consumer));
        for id in 0..threads {
            let n_consumer = Arc::clone(&consumer);
            thread::Builder::new()
                .name(format!("memkv-worker-{id}"))
                .spawn(move || worker_loop(id, n_consumer))?;
        }
        Ok(SharedQueueThreadPool { producer })
    }

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.producer.send(Box::new(job)).is_err() {
            warn!("No worker left to run the job");
        }
    }
}

fn worker_loop(id: u32, consumer: Arc<Mutex<Receiver<Job>>>) {
    loop {
        // The guard is a temporary, so it is released before the job runs.
        let job = consumer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .recv();
        match job {
            Ok(job) => {
                if panic::catch_unwind(AssertUnwindSafe(job)).is_err() {
                    warn!("Job panicked on worker {id}");
                }
            }
            Err(_) => {
                debug!("Worker {id} exiting, queue closed");
                break;
            }
        }
    }
}
