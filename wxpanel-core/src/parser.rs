//! Turns a One Call response body into a [`CurrentReading`].

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::{
    error::ParseError,
    reading::{Conditions, CurrentReading},
};

/// Parse the raw response text.
///
/// Numeric fields may arrive either as JSON numbers or as numeric strings.
/// `wind_gust` and `dt` are optional; everything else is required.
pub fn parse(raw: &str) -> Result<CurrentReading, ParseError> {
    let root: Value = serde_json::from_str(raw)?;

    let current = root
        .get("current")
        .and_then(Value::as_object)
        .ok_or(ParseError::MissingField("current"))?;

    let temperature_f = required_number(current, "temp")?;
    let feels_like_f = required_number(current, "feels_like")?;
    let humidity_pct = required_number(current, "humidity")?;
    let pressure_mb = required_number(current, "pressure")?;
    if pressure_mb <= 0.0 {
        return Err(ParseError::MissingField("pressure"));
    }
    let wind_speed_mph = required_number(current, "wind_speed")?;
    let wind_bearing_deg = required_number(current, "wind_deg")?;

    let wind_gust_mph = optional_number(current, "wind_gust")?;
    if wind_gust_mph.is_some_and(|gust| gust < 0.0) {
        return Err(ParseError::MissingField("wind_gust"));
    }

    let conditions = first_conditions(current)?;

    let observed_at = current
        .get("dt")
        .and_then(Value::as_i64)
        .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0));

    tracing::debug!(
        temperature_f,
        pressure_mb,
        wind_bearing_deg,
        gust = ?wind_gust_mph,
        "parsed current reading"
    );

    Ok(CurrentReading {
        temperature_f,
        feels_like_f,
        humidity_pct,
        pressure_mb,
        wind_speed_mph,
        wind_gust_mph,
        wind_bearing_deg,
        conditions,
        observed_at,
    })
}

fn required_number(obj: &Map<String, Value>, name: &'static str) -> Result<f64, ParseError> {
    optional_number(obj, name)?.ok_or(ParseError::MissingField(name))
}

/// `Ok(None)` when the key is absent or `null`, an error when it is present
/// but cannot be read as a finite number.
fn optional_number(
    obj: &Map<String, Value>,
    name: &'static str,
) -> Result<Option<f64>, ParseError> {
    let number = match obj.get(name) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match number {
        Some(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(ParseError::MissingField(name)),
    }
}

fn first_conditions(current: &Map<String, Value>) -> Result<Conditions, ParseError> {
    const FIELD: &str = "weather";

    let first = current
        .get(FIELD)
        .and_then(Value::as_array)
        .and_then(|list| list.first())
        .and_then(Value::as_object)
        .ok_or(ParseError::MissingField(FIELD))?;

    let text = |key: &str| {
        first
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or(ParseError::MissingField(FIELD))
    };

    Ok(Conditions {
        main: text("main")?,
        description: text("description")?,
        icon: text("icon")?,
    })
}
