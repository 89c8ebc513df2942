use std::sync::Arc;

use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::error::FetchError;
use crate::model::{ConditionEntry, WeatherRecord};

const OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const UNITS: &str = "metric";
// Condition descriptions are requested in Russian; a fixed choice, not a
// user-facing knob.
const LANG: &str = "ru";

/// Side-channel for the "request in flight" signal.
///
/// The fetch outcome itself travels through the returned `Result`; this
/// trait only mirrors the loading indicator of the original screen. Called
/// with `true` right before I/O starts and `false` exactly once after the
/// attempt resolves.
pub trait LoadingObserver: Send + Sync {
    fn loading_changed(&self, is_loading: bool);
}

/// Client for the OpenWeather current-weather endpoint.
///
/// Owns the API key and the HTTP connection pool; one call to
/// [`fetch_weather`](WeatherClient::fetch_weather) is one GET with no retry.
#[derive(Clone)]
pub struct WeatherClient {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
    observer: Option<Arc<dyn LoadingObserver>>,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, OPENWEATHER_URL.to_string())
    }

    /// Same as [`new`](Self::new) but against a different endpoint. Used by
    /// tests to point the client at a local server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: reqwest::Client::new(),
            observer: None,
        }
    }

    /// Attach a loading observer.
    pub fn with_observer(mut self, observer: Arc<dyn LoadingObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Fetch current weather for a free-text city name.
    ///
    /// Empty or whitespace-only input fails with
    /// [`FetchError::InvalidInput`] before the loading signal and without
    /// touching the network. Every other path notifies loading started, then
    /// loading ended once the attempt resolves, then returns exactly one
    /// outcome.
    pub async fn fetch_weather(&self, city_input: &str) -> Result<WeatherRecord, FetchError> {
        let city = city_input.trim();
        if city.is_empty() {
            return Err(FetchError::InvalidInput);
        }

        self.notify_loading(true);

        // parse_with_params percent-encodes the city for the query string.
        let url = match Url::parse_with_params(
            &self.base_url,
            &[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", UNITS),
                ("lang", LANG),
            ],
        ) {
            Ok(url) => url,
            Err(err) => {
                error!("failed to build request URL for {city:?}: {err}");
                self.notify_loading(false);
                return Err(FetchError::InvalidUrl);
            }
        };

        info!("fetching weather for city: {city}");
        let outcome = self.perform(url).await;
        self.notify_loading(false);
        let (status, body) = outcome?;

        match status {
            StatusCode::OK => {
                if body.is_empty() {
                    return Err(FetchError::NoData);
                }
                let parsed: CurrentResponse = serde_json::from_str(&body).map_err(|err| {
                    error!("failed to decode weather response: {err}");
                    FetchError::Decoding
                })?;
                let record = WeatherRecord::from(parsed);
                debug!("decoded weather record for {}", record.city_name);
                Ok(record)
            }
            StatusCode::NOT_FOUND => Err(FetchError::CityNotFound),
            other => {
                error!("weather request failed with status {other}");
                Err(FetchError::Server)
            }
        }
    }

    async fn perform(&self, url: Url) -> Result<(StatusCode, String), FetchError> {
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        Ok((status, body))
    }

    fn notify_loading(&self, is_loading: bool) {
        if let Some(observer) = &self.observer {
            observer.loading_changed(is_loading);
        }
    }
}

/// Wire shape of a successful current-weather response. Unknown fields are
/// ignored on decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentResponse {
    pub main: ApiMain,
    pub weather: Vec<ConditionEntry>,
    pub wind: ApiWind,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMain {
    pub temp: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiWind {
    pub speed: f64,
}

impl From<CurrentResponse> for WeatherRecord {
    fn from(res: CurrentResponse) -> Self {
        let description = res
            .weather
            .first()
            .map(|w| w.description.clone())
            .unwrap_or_default();

        WeatherRecord {
            city_name: res.name,
            temperature_c: res.main.temp,
            humidity_pct: res.main.humidity,
            wind_speed_mps: res.wind.speed,
            conditions: res.weather,
            description,
        }
    }
}
