//! Data structures for the OpenWeather current-weather endpoint.
//!
//! Mirrors the documented response body; fields the upstream only includes for
//! some stations are `Option`.

use serde::{Deserialize, Serialize};

/// Full current-weather report for one city.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherReport {
    pub coord: Option<Coord>,
    /// Weather conditions, most significant first.
    pub weather: Vec<Condition>,
    pub main: MainReadings,
    /// Visibility in meters, capped at 10 km by the upstream.
    pub visibility: Option<u32>,
    pub wind: Option<Wind>,
    pub clouds: Option<Clouds>,
    /// Time of data calculation, unix seconds UTC.
    pub dt: i64,
    pub sys: Option<Sys>,
    /// Shift in seconds from UTC.
    pub timezone: Option<i32>,
    pub id: Option<i64>,
    /// City name as resolved by the upstream geocoder.
    pub name: String,
}

/// Geographical coordinates of the station.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
}

/// One weather condition entry (group, description, icon).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Condition {
    pub id: i32,
    pub main: String,
    /// Localized description (Spanish, via `lang=es`).
    pub description: String,
    pub icon: String,
}

/// Core temperature and atmosphere readings. Metric units.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Atmospheric pressure in hPa.
    pub pressure: u32,
    /// Humidity in percent.
    pub humidity: u32,
}

/// Wind readings; direction is omitted for calm readings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Wind {
    /// Wind speed in meter/sec.
    pub speed: f64,
    pub deg: Option<i32>,
}

/// Cloudiness in percent.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Clouds {
    pub all: u32,
}

/// Country and sun times for the station.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Sys {
    pub country: Option<String>,
    /// Sunrise time, unix seconds UTC.
    pub sunrise: Option<i64>,
    /// Sunset time, unix seconds UTC.
    pub sunset: Option<i64>,
}
