//! Display strings for a [`CurrentReading`].

use serde::Serialize;

use crate::{compass::bearing_to_compass, reading::CurrentReading};

/// Millibars to inches of mercury.
pub const MB_TO_INHG: f64 = 0.029530;

/// Everything the panel shows, already rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayStrings {
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub pressure_mb: String,
    pub pressure_in: String,
    pub wind_speed: String,
    pub gust: String,
    /// `None` when the bearing has no compass label.
    pub direction: Option<String>,
    pub summary: String,
    pub description: String,
    pub icon: String,
    pub observed: Option<String>,
}

pub fn format(reading: &CurrentReading) -> DisplayStrings {
    let gust = match reading.wind_gust_mph {
        Some(gust) => format!("Gust {}", fixed(gust, 1)),
        None => "Gust 0".to_string(),
    };

    DisplayStrings {
        temperature: format!("{} F", fixed(reading.temperature_f, 1)),
        feels_like: format!("{} F", fixed(reading.feels_like_f, 1)),
        humidity: format!("{} %", reading.humidity_pct),
        pressure_mb: format!("{} mb", reading.pressure_mb),
        pressure_in: format!("{} in", fixed(reading.pressure_mb * MB_TO_INHG, 2)),
        wind_speed: format!("{} mph", fixed(reading.wind_speed_mph, 1)),
        gust,
        direction: bearing_to_compass(reading.wind_bearing_deg).map(str::to_owned),
        summary: reading.conditions.main.clone(),
        description: reading.conditions.description.clone(),
        icon: reading.conditions.icon.clone(),
        observed: reading
            .observed_at
            .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string()),
    }
}

/// `<base>/<icon>@2x.png`
pub fn icon_url(base: &str, icon: &str) -> String {
    format!("{}/{icon}@2x.png", base.trim_end_matches('/'))
}

/// Above this every f64 is a whole number, so there is nothing left to round.
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// Fixed number of fractional digits, ties rounded away from zero.
///
/// `{:.N}` alone rounds exact binary ties to even (3.25 -> "3.2").
fn fixed(value: f64, digits: i32) -> String {
    let prec = digits as usize;
    let scale = 10f64.powi(digits);
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() > EXACT_INTEGER_LIMIT {
        return format!("{value:.prec$}");
    }
    let rounded = scaled.round() / scale;
    format!("{rounded:.prec$}")
}
