use crate::{KvsEngine, KvsError, Result};
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// The in-memory table: one `HashMap` behind one reader/writer lock.
///
/// `put` and `delete` hold the write guard, `get` and `len` the read guard.
/// Every critical section is a single map call, so a poisoned lock still
/// guards a consistent map and is recovered instead of propagated.
///
/// ```rust
/// # use memkv::{KvsEngine, MemTable};
/// let table = MemTable::new();
/// table.put("name".to_owned(), "Replit".to_owned()).unwrap();
/// assert_eq!(table.get("name"), "Replit");
/// table.delete("name");
/// assert_eq!(table.get("name"), "");
/// ```
#[derive(Clone, Default)]
pub struct MemTable {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl MemTable {
    pub fn new() -> MemTable {
        MemTable::default()
    }
}

impl KvsEngine for MemTable {
    fn put(&self, key: String, value: String) -> Result<()> {
        if key.is_empty() {
            warn!("Rejected put with empty key");
            return Err(KvsError::EmptyKey);
        }
        let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);
        debug!("Put: key: {key}, {} bytes", value.len());
        data.insert(key, value);
        Ok(())
    }

    fn get(&self, key: &str) -> String {
        if key.is_empty() {
            return String::new();
        }
        let data = self.data.read().unwrap_or_else(PoisonError::into_inner);
        data.get(key).cloned().unwrap_or_default()
    }

    fn delete(&self, key: &str) {
        if key.is_empty() {
            return;
        }
        let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);
        if data.remove(key).is_some() {
            debug!("Deleted: key: {key}");
        }
    }

    fn len(&self) -> usize {
        self.data.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
