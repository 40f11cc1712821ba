pub mod config;
pub mod engines;
pub mod error;
pub mod thread_pool;
pub mod workload;

pub use config::{DriverConfig, EngineKind, PoolKind};
pub use engines::KvsEngine;
pub use engines::{MemTable, ShardedMemTable};
pub use error::{KvsError, Result};
pub use thread_pool::NaiveThreadPool;
pub use thread_pool::RayonThreadPool;
pub use thread_pool::SharedQueueThreadPool;
pub use thread_pool::ThreadPool;
pub use workload::WorkloadReport;
