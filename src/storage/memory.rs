use crate::storage::interface::KeyValueStore;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct HashMapKeyValueStorage {
    storage: HashMap<String, Value>,
}

impl KeyValueStore for HashMapKeyValueStorage {
    fn get(&self, key: &str) -> Option<Value> {
        self.storage.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.storage.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.storage.remove(key);
    }
}
