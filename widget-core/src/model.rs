use serde::{Deserialize, Serialize};

/// Unit label attached to every report produced by the current provider.
pub const CELSIUS: &str = "C";

/// Current conditions for one location, as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location_name: String,
    pub temperature_c: f64,
    pub condition: String,

    /// Always `"C"` under the current provider; kept so the temperature
    /// formatter can fall back to a bare `{value}°{unit}` for anything else.
    pub unit: String,
}

impl WeatherReport {
    pub fn celsius(location_name: String, temperature_c: f64, condition: String) -> Self {
        Self { location_name, temperature_c, condition, unit: CELSIUS.to_string() }
    }
}
