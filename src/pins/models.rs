use crate::geo::models::Coordinate;
use serde::{Deserialize, Serialize};

/// A user-created point of interest. Pins carry no identifier: two pins with the same location
/// and title are the same pin, so an empty label and no label compare equal.
#[derive(Clone, Debug)]
pub struct Pin {
    pub location: Coordinate,
    pub label: Option<String>,
}

impl Pin {
    pub fn new(location: Coordinate, label: Option<String>) -> Self {
        Self { location, label }
    }

    pub fn title(&self) -> &str {
        self.label.as_deref().unwrap_or_default()
    }

    pub fn to_record(&self) -> PinRecord {
        PinRecord {
            title: self.title().to_string(),
            latitude: self.location.latitude,
            longitude: self.location.longitude,
        }
    }
}

impl PartialEq for Pin {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location && self.title() == other.title()
    }
}

impl From<PinRecord> for Pin {
    fn from(record: PinRecord) -> Self {
        let label = Some(record.title).filter(|title| !title.is_empty());
        Pin {
            location: Coordinate::new(record.latitude, record.longitude),
            label,
        }
    }
}

/// Persisted form of a [`Pin`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PinRecord {
    #[serde(default)]
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
}
