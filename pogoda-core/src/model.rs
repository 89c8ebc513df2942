use serde::{Deserialize, Serialize};

/// One entry of the `weather` array in an OpenWeather response.
///
/// The first entry drives the on-screen description; the rest are kept in
/// API order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionEntry {
    pub id: i64,
    #[serde(rename = "main")]
    pub main_category: String,
    pub description: String,
    #[serde(rename = "icon")]
    pub icon_code: String,
}

/// Immutable snapshot of one successful lookup.
///
/// Produced only by decoding a successful API response; a new fetch replaces
/// the whole record, nothing updates it field-by-field.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    pub city_name: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub conditions: Vec<ConditionEntry>,
    /// Raw (lowercase) description of the first condition, empty if the API
    /// sent an empty `weather` array.
    pub description: String,
}
