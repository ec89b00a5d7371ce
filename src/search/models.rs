use crate::geo::models::{Coordinate, Region};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq)]
pub struct PlaceQuery {
    pub text: String,
    /// Visible map region the search is biased towards, if the map has one yet.
    pub region: Option<Region>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    pub name: Option<String>,
    pub coordinate: Coordinate,
    pub address: Option<String>,
}

/// One entry of a Nominatim `format=jsonv2` search response.
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    pub lat: String,
    pub lon: String,
}
