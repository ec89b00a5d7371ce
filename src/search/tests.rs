use crate::geo::models::{Coordinate, Region};
use crate::map::models::AnnotationKind;
use crate::map::surface::{InMemoryMapSurface, MapSurface};
use crate::search::errors::SearchError;
use crate::search::models::{NominatimPlace, Place, PlaceQuery};
use crate::search::nominatim::{into_place, NominatimSearch};
use crate::search::{PlaceSearch, SearchAdapter};
use async_trait::async_trait;
use std::sync::Mutex;
use url::Url;

/// Place search that answers every query with the same places, or fails when it has none.
#[derive(Debug, Default)]
pub struct CannedSearch {
    pub places: Option<Vec<Place>>,
    pub queries: Mutex<Vec<PlaceQuery>>,
}

impl CannedSearch {
    pub fn answering(places: Vec<Place>) -> Self {
        Self {
            places: Some(places),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<PlaceQuery> {
        self.queries
            .lock()
            .expect("Canned search lock poisoned.")
            .clone()
    }
}

#[async_trait]
impl PlaceSearch for CannedSearch {
    async fn search(&self, query: &PlaceQuery) -> Result<Vec<Place>, SearchError> {
        self.queries
            .lock()
            .expect("Canned search lock poisoned.")
            .push(query.clone());
        match &self.places {
            Some(places) => Ok(places.clone()),
            None => Err(decode_error()),
        }
    }
}

pub fn decode_error() -> SearchError {
    SearchError::Decode(
        serde_json::from_str::<serde_json::Value>("<html>")
            .expect_err("Garbage unexpectedly parsed as JSON."),
    )
}

pub fn station() -> Place {
    Place {
        name: Some(String::from("Tokyo Station")),
        coordinate: Coordinate::new(35.6812, 139.7671),
        address: Some(String::from("1 Marunouchi, Chiyoda, Tokyo, Japan")),
    }
}

fn query(text: &str) -> PlaceQuery {
    PlaceQuery {
        text: text.to_string(),
        region: None,
    }
}

#[test]
fn blank_query_is_rejected() {
    let adapter = SearchAdapter;

    assert!(matches!(adapter.query("   ", None), Err(SearchError::EmptyQuery)));
}

#[test]
fn query_is_trimmed_and_scoped_to_region() {
    let region = Region::around(Coordinate::new(35.0, 139.0));

    let query = SearchAdapter
        .query("  coffee ", Some(region))
        .expect("Query should be accepted.");

    assert_eq!(query.text, "coffee");
    assert_eq!(query.region, Some(region));
}

#[test]
fn results_become_transient_annotations() {
    let mut surface = InMemoryMapSurface::default();

    let added = SearchAdapter.apply(&mut surface, &query("station"), Ok(vec![station()]));

    assert_eq!(added, 1);
    let annotation = &surface.annotations()[0];
    assert_eq!(annotation.kind, AnnotationKind::Transient);
    assert_eq!(annotation.title.as_deref(), Some("Tokyo Station"));
    assert_eq!(
        annotation.subtitle.as_deref(),
        Some("1 Marunouchi, Chiyoda, Tokyo, Japan")
    );
}

#[test]
fn failed_search_adds_nothing() {
    let mut surface = InMemoryMapSurface::default();

    let added = SearchAdapter.apply(&mut surface, &query("station"), Err(decode_error()));

    assert_eq!(added, 0);
    assert!(surface.annotations().is_empty());
}

#[tokio::test]
async fn canned_search_records_queries() {
    let search = CannedSearch::answering(vec![station()]);

    let places = search.search(&query("a")).await.expect("Search should succeed.");
    let _ = search.search(&query("b")).await;

    assert_eq!(places, vec![station()]);
    assert_eq!(search.received(), vec![query("a"), query("b")]);
}

#[test]
fn nominatim_url_carries_query_and_viewbox() {
    let search = NominatimSearch::new(
        Url::parse("https://geocoder.test/").expect("Valid test URL."),
        "pinmap-tests",
    )
    .expect("Client should build.");
    let query = PlaceQuery {
        text: String::from("ramen shop"),
        region: Some(Region::around(Coordinate::new(35.0, 139.0))),
    };

    let url = search.request_url(&query).expect("URL should build.");

    assert_eq!(url.path(), "/search");
    let pairs = url.query_pairs().into_owned().collect::<Vec<_>>();
    assert!(pairs.contains(&(String::from("q"), String::from("ramen shop"))));
    assert!(pairs.contains(&(String::from("format"), String::from("jsonv2"))));
    let viewbox = pairs
        .iter()
        .find(|(key, _)| key == "viewbox")
        .map(|(_, value)| value.clone())
        .expect("Viewbox should be set for a scoped query.");
    let corners = viewbox
        .split(',')
        .map(|corner| corner.parse::<f64>().expect("Numeric corner."))
        .collect::<Vec<_>>();
    assert_eq!(corners.len(), 4);
    assert!((corners[0] - 138.95).abs() < 1e-9);
    assert!((corners[1] - 35.05).abs() < 1e-9);
    assert!((corners[2] - 139.05).abs() < 1e-9);
    assert!((corners[3] - 34.95).abs() < 1e-9);
}

#[test]
fn nominatim_url_without_region_has_no_viewbox() {
    let search = NominatimSearch::new(
        Url::parse("https://geocoder.test/").expect("Valid test URL."),
        "pinmap-tests",
    )
    .expect("Client should build.");

    let url = search.request_url(&query("cafe")).expect("URL should build.");

    assert!(url.query_pairs().all(|(key, _)| key != "viewbox"));
}

#[test]
fn nominatim_entries_are_converted() {
    let raw: Vec<NominatimPlace> = serde_json::from_str(
        r#"[
            {"name": "Tokyo Station", "display_name": "1 Marunouchi, Chiyoda, Tokyo, Japan",
             "lat": "35.6812", "lon": "139.7671", "place_id": 1},
            {"name": "", "display_name": "Somewhere", "lat": "1.0", "lon": "2.0"},
            {"name": "Broken", "lat": "north", "lon": "2.0"}
        ]"#,
    )
    .expect("Fixture should parse.");

    let places = raw.into_iter().filter_map(into_place).collect::<Vec<_>>();

    assert_eq!(places.len(), 2);
    assert_eq!(places[0], station());
    assert_eq!(places[1].name, None);
    assert_eq!(places[1].address.as_deref(), Some("Somewhere"));
}
