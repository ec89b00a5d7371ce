use crate::geo::consts::DEFAULT_SPAN_DEGREES;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Extent of a region in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Default for Span {
    fn default() -> Self {
        Self {
            latitude_delta: DEFAULT_SPAN_DEGREES,
            longitude_delta: DEFAULT_SPAN_DEGREES,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: Coordinate,
    pub span: Span,
}

impl Region {
    pub fn around(center: Coordinate) -> Self {
        Self {
            center,
            span: Span::default(),
        }
    }

    pub fn min_latitude(&self) -> f64 {
        self.center.latitude - self.span.latitude_delta / 2.0
    }

    pub fn max_latitude(&self) -> f64 {
        self.center.latitude + self.span.latitude_delta / 2.0
    }

    pub fn min_longitude(&self) -> f64 {
        self.center.longitude - self.span.longitude_delta / 2.0
    }

    pub fn max_longitude(&self) -> f64 {
        self.center.longitude + self.span.longitude_delta / 2.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ±{}°/{}°",
            self.center, self.span.latitude_delta, self.span.longitude_delta
        )
    }
}
