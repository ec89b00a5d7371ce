use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("the search query is empty")]
    EmptyQuery,
    #[error("invalid geocoder URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("geocoder request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("geocoder returned an unreadable response: {0}")]
    Decode(#[from] serde_json::Error),
}
