pub mod memtable;
pub mod sharded;

pub use memtable::MemTable;
pub use sharded::ShardedMemTable;

use crate::Result;

/// A concurrency-safe string map.
///
/// Clones are handles to the same underlying store, so an engine can be moved
/// into worker jobs freely. A missing key reads back as `""`; there is no way
/// to tell it apart from a key explicitly mapped to an empty value.
pub trait KvsEngine: Clone + Send + Sync + 'static {
    /// Inserts or overwrites `key`. Empty keys are rejected with
    /// [`KvsError::EmptyKey`](crate::KvsError::EmptyKey).
    fn put(&self, key: String, value: String) -> Result<()>;

    /// Returns the value of `key`, or an empty string if it is absent.
    fn get(&self, key: &str) -> String;

    /// Removes `key`. Absent keys are a no-op.
    fn delete(&self, key: &str);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
