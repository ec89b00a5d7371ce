pub const NOMINATIM_FORMAT: &str = "jsonv2";
pub const SEARCH_RESULT_LIMIT: usize = 10;
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/";
