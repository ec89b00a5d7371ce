use crate::geo::distance_meters;
use crate::geo::models::Coordinate;
use crate::location::consts::DISTANCE_FILTER_METERS;

/// Drops location fixes closer than a threshold to the last delivered one.
#[derive(Clone, Debug)]
pub struct DistanceFilter {
    threshold_meters: f64,
    last_delivered: Option<Coordinate>,
}

impl DistanceFilter {
    pub fn new(threshold_meters: f64) -> Self {
        Self {
            threshold_meters,
            last_delivered: None,
        }
    }

    pub fn accept(&mut self, fix: Coordinate) -> bool {
        let moved_enough = self
            .last_delivered
            .map_or(true, |last| distance_meters(last, fix) >= self.threshold_meters);
        if moved_enough {
            self.last_delivered = Some(fix);
        }
        moved_enough
    }
}

impl Default for DistanceFilter {
    fn default() -> Self {
        Self::new(DISTANCE_FILTER_METERS)
    }
}
