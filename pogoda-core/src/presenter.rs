use crate::model::WeatherRecord;

const NOT_AVAILABLE: &str = "N/A";

/// Holds the most recent successful [`WeatherRecord`] and derives display
/// strings from it.
///
/// Starts empty; [`set_record`](WeatherPresenter::set_record) is called only
/// after a successful fetch, so a failed lookup never clears what is shown.
/// All formatting is locale-independent apart from the fixed unit and
/// fallback literals.
#[derive(Debug, Default)]
pub struct WeatherPresenter {
    record: Option<WeatherRecord>,
}

impl WeatherPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held record unconditionally.
    pub fn set_record(&mut self, record: WeatherRecord) {
        self.record = Some(record);
    }

    pub fn city_name(&self) -> String {
        match &self.record {
            Some(record) => record.city_name.clone(),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    /// Temperature with one decimal place, e.g. `"21.3°C"`.
    pub fn formatted_temperature(&self) -> String {
        match &self.record {
            Some(record) => format!("{}°C", format_one_decimal(record.temperature_c)),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn formatted_humidity(&self) -> String {
        match &self.record {
            Some(record) => format!("{}%", record.humidity_pct),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    /// Wind speed with one decimal place, e.g. `"3.4 м/с"`.
    pub fn formatted_wind_speed(&self) -> String {
        match &self.record {
            Some(record) => format!("{} м/с", format_one_decimal(record.wind_speed_mps)),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    /// First condition's description with each word capitalized
    /// (the API sends descriptions in lowercase).
    pub fn weather_description(&self) -> String {
        self.record
            .as_ref()
            .and_then(|record| record.conditions.first())
            .map(|condition| capitalize_words(&condition.description))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

// Ties round away from zero, so 21.25 displays as "21.3". Plain `{:.1}`
// would round ties to even.
fn format_one_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{rounded:.1}")
}

// Capitalizes in place rather than splitting and rejoining, so the source
// spacing is preserved verbatim.
fn capitalize_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            result.push(ch);
        } else if at_word_start {
            result.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConditionEntry;

    fn record(temp: f64, humidity: u8, wind: f64, description: &str) -> WeatherRecord {
        WeatherRecord {
            city_name: "Paris".to_string(),
            temperature_c: temp,
            humidity_pct: humidity,
            wind_speed_mps: wind,
            conditions: vec![ConditionEntry {
                id: 800,
                main_category: "Clear".to_string(),
                description: description.to_string(),
                icon_code: "01d".to_string(),
            }],
            description: description.to_string(),
        }
    }

    #[test]
    fn empty_presenter_falls_back_everywhere() {
        let presenter = WeatherPresenter::new();

        assert_eq!(presenter.city_name(), "N/A");
        assert_eq!(presenter.formatted_temperature(), "N/A");
        assert_eq!(presenter.formatted_humidity(), "N/A");
        assert_eq!(presenter.formatted_wind_speed(), "N/A");
        assert_eq!(presenter.weather_description(), "N/A");
    }

    #[test]
    fn paris_scenario_formats_every_field() {
        let mut presenter = WeatherPresenter::new();
        presenter.set_record(record(18.2, 60, 2.1, "clear sky"));

        assert_eq!(presenter.city_name(), "Paris");
        assert_eq!(presenter.formatted_temperature(), "18.2°C");
        assert_eq!(presenter.formatted_humidity(), "60%");
        assert_eq!(presenter.formatted_wind_speed(), "2.1 м/с");
        assert_eq!(presenter.weather_description(), "Clear Sky");
    }

    #[test]
    fn temperature_ties_round_away_from_zero() {
        let mut presenter = WeatherPresenter::new();

        presenter.set_record(record(21.25, 50, 1.0, "clear sky"));
        assert_eq!(presenter.formatted_temperature(), "21.3°C");

        presenter.set_record(record(-3.45, 50, 1.0, "clear sky"));
        assert_eq!(presenter.formatted_temperature(), "-3.5°C");
    }

    #[test]
    fn whole_numbers_keep_one_decimal_place() {
        let mut presenter = WeatherPresenter::new();
        presenter.set_record(record(21.0, 55, 3.0, "clear sky"));

        assert_eq!(presenter.formatted_temperature(), "21.0°C");
        assert_eq!(presenter.formatted_wind_speed(), "3.0 м/с");
    }

    #[test]
    fn description_capitalizes_each_word() {
        let mut presenter = WeatherPresenter::new();

        presenter.set_record(record(10.0, 50, 1.0, "light rain"));
        assert_eq!(presenter.weather_description(), "Light Rain");

        presenter.set_record(record(10.0, 50, 1.0, "небольшой дождь"));
        assert_eq!(presenter.weather_description(), "Небольшой Дождь");
    }

    #[test]
    fn description_keeps_the_source_spacing() {
        let mut presenter = WeatherPresenter::new();
        presenter.set_record(record(10.0, 50, 1.0, "light  rain"));

        assert_eq!(presenter.weather_description(), "Light  Rain");
    }

    #[test]
    fn description_falls_back_when_record_has_no_conditions() {
        let mut presenter = WeatherPresenter::new();
        let mut rec = record(10.0, 50, 1.0, "clear sky");
        rec.conditions.clear();
        rec.description.clear();
        presenter.set_record(rec);

        assert_eq!(presenter.weather_description(), "N/A");
        // The other fields still render from the record.
        assert_eq!(presenter.city_name(), "Paris");
    }

    #[test]
    fn set_record_replaces_the_previous_one_wholesale() {
        let mut presenter = WeatherPresenter::new();
        presenter.set_record(record(18.2, 60, 2.1, "clear sky"));
        presenter.set_record(record(-1.5, 80, 5.7, "snow"));

        assert_eq!(presenter.formatted_temperature(), "-1.5°C");
        assert_eq!(presenter.formatted_humidity(), "80%");
        assert_eq!(presenter.formatted_wind_speed(), "5.7 м/с");
        assert_eq!(presenter.weather_description(), "Snow");
    }
}
