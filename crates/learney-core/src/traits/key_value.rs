use crate::errors::LearneyResult;

/// String key-value cache, the local half of progress persistence.
pub trait IKeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> LearneyResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> LearneyResult<()>;
    fn remove(&self, key: &str) -> LearneyResult<()>;
}
