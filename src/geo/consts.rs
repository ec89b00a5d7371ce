pub const EARTH_RADIUS: f64 = 6371e3;
pub const DEFAULT_SPAN_DEGREES: f64 = 0.1;
