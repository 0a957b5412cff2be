use chrono::{DateTime, Utc};

/// First entry of the provider's `weather` list.
#[derive(Debug, Clone, PartialEq)]
pub struct Conditions {
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// One observation of current conditions, in imperial units.
///
/// Built fresh for every fetch and dropped once it has been formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentReading {
    pub temperature_f: f64,
    pub feels_like_f: f64,
    pub humidity_pct: f64,
    /// Always > 0.
    pub pressure_mb: f64,
    pub wind_speed_mph: f64,
    /// `None` when the provider leaves `wind_gust` out. Never negative.
    pub wind_gust_mph: Option<f64>,
    pub wind_bearing_deg: f64,
    pub conditions: Conditions,
    pub observed_at: Option<DateTime<Utc>>,
}
