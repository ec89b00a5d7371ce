/// Minimum movement before a new location update is delivered.
pub const DISTANCE_FILTER_METERS: f64 = 10.0;
