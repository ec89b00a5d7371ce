use crate::geo::models::Region;
use crate::map::models::Annotation;
use crate::map::surface::MapSurface;
use async_trait::async_trait;
use errors::SearchError;
use models::{Place, PlaceQuery};

pub mod consts;
pub mod errors;
pub mod models;
pub mod nominatim;
#[cfg(test)]
pub mod tests;

/// A natural-language place search service.
///
/// A request either fails as a whole or yields a list of places; there is no per-place error.
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    async fn search(&self, query: &PlaceQuery) -> Result<Vec<Place>, SearchError>;
}

/// Builds queries from the visible map and turns results into transient annotations.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchAdapter;

impl SearchAdapter {
    pub fn query(&self, text: &str, region: Option<Region>) -> Result<PlaceQuery, SearchError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(PlaceQuery {
            text: text.to_string(),
            region,
        })
    }

    /// Adds one transient annotation per place and returns how many were added. A failed request
    /// is logged and adds nothing.
    pub fn apply<M: MapSurface>(
        &self,
        surface: &mut M,
        query: &PlaceQuery,
        outcome: Result<Vec<Place>, SearchError>,
    ) -> usize {
        let places = match outcome {
            Ok(places) => places,
            Err(err) => {
                tracing::warn!(task = "search", query = %query.text, error = %err, "Search failed.");
                return 0;
            }
        };
        for place in &places {
            surface.add_annotation(Annotation::transient(
                place.coordinate,
                place.name.clone(),
                place.address.clone(),
            ));
        }
        tracing::info!(task = "search", query = %query.text, results = places.len());
        places.len()
    }
}
