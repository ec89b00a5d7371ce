use crate::pins::consts::PINS_KEY;
use crate::pins::models::{Pin, PinRecord};
use crate::storage::interface::KeyValueStore;
use serde_json::{json, Value};

/// The pin collection, kept as one ordered list under a single key of a [`KeyValueStore`].
#[derive(Debug)]
pub struct PinStore<S: KeyValueStore> {
    storage: S,
}

impl<S> PinStore<S>
where
    S: KeyValueStore,
{
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Appends `pin` to the collection. The whole list is rewritten.
    ///
    /// Pins with a non-finite coordinate are not saved: JSON has no NaN or infinity, so the record
    /// would not decode again and would take the rest of the collection with it.
    pub fn save(&mut self, pin: &Pin) {
        if !pin.location.is_finite() {
            tracing::warn!(
                latitude = pin.location.latitude,
                longitude = pin.location.longitude,
                "Refusing to save a pin with a non-finite coordinate.",
            );
            return;
        }
        let mut records = self.load();
        records.push(pin.to_record());
        let count = records.len();
        self.storage.set(PINS_KEY, encode_records(&records));
        tracing::info!(
            task = "pin_saved",
            latitude = pin.location.latitude,
            longitude = pin.location.longitude,
            title = pin.title(),
            count,
        );
    }

    pub fn load(&self) -> Vec<PinRecord> {
        self.storage
            .get(PINS_KEY)
            .map(decode_records)
            .unwrap_or_default()
    }

    pub fn load_pins(&self) -> Vec<Pin> {
        self.load().into_iter().map(Pin::from).collect()
    }

    pub fn clear(&mut self) {
        self.storage.remove(PINS_KEY);
        tracing::info!(task = "pins_cleared");
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

fn encode_records(records: &[PinRecord]) -> Value {
    records
        .iter()
        .map(|record| {
            json!({
                "title": record.title,
                "latitude": record.latitude,
                "longitude": record.longitude,
            })
        })
        .collect()
}

fn decode_records(value: Value) -> Vec<PinRecord> {
    match serde_json::from_value(value) {
        Ok(records) => records,
        Err(err) => {
            tracing::debug!(error = %err, "Stored pins are unreadable, treating them as absent.");
            Vec::new()
        }
    }
}
