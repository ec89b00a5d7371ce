use crate::geo::models::Coordinate;
use crate::search::consts::{NOMINATIM_FORMAT, SEARCH_RESULT_LIMIT};
use crate::search::errors::SearchError;
use crate::search::models::{NominatimPlace, Place, PlaceQuery};
use crate::search::PlaceSearch;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Place search backed by an OpenStreetMap Nominatim instance.
#[derive(Clone, Debug)]
pub struct NominatimSearch {
    client: Client,
    base_url: Url,
}

impl NominatimSearch {
    pub fn new(base_url: Url, user_agent: &str) -> Result<Self, SearchError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client, base_url })
    }

    pub fn request_url(&self, query: &PlaceQuery) -> Result<Url, SearchError> {
        let mut url = self.base_url.join("search")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("q", &query.text)
                .append_pair("format", NOMINATIM_FORMAT)
                .append_pair("limit", &SEARCH_RESULT_LIMIT.to_string());
            if let Some(region) = query.region {
                // left, top, right, bottom
                let viewbox = format!(
                    "{},{},{},{}",
                    region.min_longitude(),
                    region.max_latitude(),
                    region.max_longitude(),
                    region.min_latitude(),
                );
                pairs.append_pair("viewbox", &viewbox);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl PlaceSearch for NominatimSearch {
    async fn search(&self, query: &PlaceQuery) -> Result<Vec<Place>, SearchError> {
        let url = self.request_url(query)?;
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let raw_places: Vec<NominatimPlace> = serde_json::from_str(&body)?;
        Ok(raw_places.into_iter().filter_map(into_place).collect())
    }
}

pub fn into_place(raw: NominatimPlace) -> Option<Place> {
    let (Ok(latitude), Ok(longitude)) = (raw.lat.parse::<f64>(), raw.lon.parse::<f64>()) else {
        tracing::warn!(
            lat = %raw.lat,
            lon = %raw.lon,
            "Dropping a search result with unparsable coordinates.",
        );
        return None;
    };
    Some(Place {
        name: raw.name.filter(|name| !name.is_empty()),
        coordinate: Coordinate::new(latitude, longitude),
        address: raw.display_name,
    })
}
