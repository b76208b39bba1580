use serde::{Deserialize, Serialize};

/// Current conditions for one resolved location, as returned by a single
/// lookup. Replaced wholesale on every new search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Canonical city name as resolved by the weather service.
    pub city: String,
    pub country: String,
    pub temp_c: f64,
    pub condition: String,
    pub wind_kph: f64,
    pub humidity: u8,
    pub vis_km: f64,
    pub feelslike_c: f64,
}

impl WeatherSnapshot {
    /// "Ankara, Turkey"-style display name.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}
