//! Pure formatters that turn a weather report into display text.
//!
//! All three are plain functions of their inputs; the location formatter
//! additionally takes the wall-clock hour, with a convenience wrapper that
//! reads the local clock at call time.

use chrono::{Local, Timelike};

use crate::model::CELSIUS;

/// Canned sentences for known condition descriptions, matched after
/// lowercasing. Adding a provider vocabulary entry is a data change here,
/// not a new branch.
const CONDITION_MESSAGES: &[(&str, &str)] = &[
    ("sunny", "It's a beautiful sunny day!"),
    ("partly cloudy", "Expect some clouds and sunshine."),
    ("cloudy", "It's cloudy today!"),
    ("overcast", "The sky is overcast."),
    ("rain", "Don't forget your umbrella! It's raining."),
    ("thunderstorm", "Thunderstorms are expected today. Be careful!"),
    ("snow", "Bundle up! It's snowing."),
    ("mist", "It's misty outside."),
    ("fog", "Be careful! There's fog outside."),
];

/// Commentary for a temperature reading.
///
/// Celsius values fall into five buckets, inclusive-low / exclusive-high,
/// with the final bucket open-ended. Any other unit gets a bare
/// `{value}°{unit}` with no commentary.
pub fn temperature_message(value: f64, unit: &str) -> String {
    if unit != CELSIUS {
        return format!("{value}°{unit}");
    }

    if value < 0.0 {
        format!("It's freezing at {value}°C! Bundle up!")
    } else if value < 10.0 {
        format!("It's quite cold at {value}°C. Wear warm clothes.")
    } else if value < 20.0 {
        format!("The temperature is {value}°C. Comfortable for a light jacket.")
    } else if value < 30.0 {
        format!("It's a pleasant {value}°C. Enjoy the nice weather!")
    } else {
        format!("It's hot at {value}°C. Stay hydrated!")
    }
}

/// Commentary for a condition description.
///
/// Unknown descriptions are returned verbatim; the provider vocabulary is
/// open-ended and anything outside the fixed table is displayed as-is.
pub fn condition_message(description: &str) -> String {
    let lower = description.to_lowercase();

    CONDITION_MESSAGES
        .iter()
        .find(|(key, _)| *key == lower)
        .map_or_else(|| description.to_string(), |(_, msg)| (*msg).to_string())
}

/// Location label qualified by the given hour of day (0-23).
///
/// Night is hour >= 18 or hour < 6.
pub fn location_message_at(name: &str, hour: u32) -> String {
    let is_night = hour >= 18 || hour < 6;
    let qualifier = if is_night { "at Night" } else { "During the Day" };

    format!("{name} {qualifier}")
}

/// Location label qualified by the local wall-clock hour right now.
pub fn location_message(name: &str) -> String {
    location_message_at(name, Local::now().hour())
}
