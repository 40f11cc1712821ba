use crate::{KvsEngine, KvsError, Result};
use dashmap::DashMap;
use log::{debug, warn};
use std::sync::Arc;

/// A table whose lock is split across `DashMap` shards.
///
/// Writers to keys in different shards do not contend. The empty-key policy
/// is the same as [`MemTable`](super::MemTable).
#[derive(Clone, Default)]
pub struct ShardedMemTable {
    data: Arc<DashMap<String, String>>,
}

impl ShardedMemTable {
    pub fn new() -> ShardedMemTable {
        ShardedMemTable::default()
    }

    /// Creates a table with a fixed shard count, which must be a power of two
    /// greater than one.
    pub fn with_shards(shards: usize) -> Result<ShardedMemTable> {
        if shards < 2 || !shards.is_power_of_two() {
            return Err(KvsError::InvalidConfig(format!(
                "shard count must be a power of two greater than 1, got {shards}"
            )));
        }
        Ok(ShardedMemTable {
            data: Arc::new(DashMap::with_shard_amount(shards)),
        })
    }
}

impl KvsEngine for ShardedMemTable {
    fn put(&self, key: String, value: String) -> Result<()> {
        if key.is_empty() {
            warn!("Rejected put with empty key");
            return Err(KvsError::EmptyKey);
        }
        debug!("Put: key: {key}, {} bytes", value.len());
        self.data.insert(key, value);
        Ok(())
    }

    fn get(&self, key: &str) -> String {
        if key.is_empty() {
            return String::new();
        }
        match self.data.get(key) {
            None => String::new(),
            Some(value) => value.value().clone(),
        }
    }

    fn delete(&self, key: &str) {
        if key.is_empty() {
            return;
        }
        if self.data.remove(key).is_some() {
            debug!("Deleted: key: {key}");
        }
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
