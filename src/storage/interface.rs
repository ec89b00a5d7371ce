use serde_json::Value;

/// A local, synchronous key-value blob store.
///
/// Backends never fail from the caller's point of view: a value that cannot be read is reported
/// as absent, and write failures are the backend's business to log.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<Value>;

    fn set(&mut self, key: &str, value: Value);

    fn remove(&mut self, key: &str);
}
