use httpmock::prelude::*;
use wxpanel_core::{Endpoints, Location, OneCallClient, ParseError, WeatherSource, format, parse};

fn client_for(server: &MockServer) -> OneCallClient {
    let endpoints = Endpoints {
        onecall_url: server.url("/data/2.5/onecall"),
        icon_base_url: server.url("/img/wn"),
    };
    OneCallClient::new("TESTKEY".to_string(), endpoints)
}

fn houston() -> Location {
    Location::new(30.22, -95.36).unwrap()
}

#[tokio::test]
async fn fetches_and_renders_current_conditions() {
    let server = MockServer::start();
    let body = serde_json::json!({
        "lat": 30.22,
        "lon": -95.36,
        "current": {
            "dt": 1602692411,
            "temp": 77.56, "feels_like": 82.8, "pressure": 1017, "humidity": 71,
            "wind_speed": 1.99, "wind_deg": 185,
            "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}]
        }
    });

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/data/2.5/onecall")
            .query_param("lat", "30.22")
            .query_param("lon", "-95.36")
            .query_param("exclude", "hourly,minutely,alerts,daily")
            .query_param("units", "imperial")
            .query_param("appid", "TESTKEY");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(body);
    });

    let raw = client_for(&server).fetch_current(&houston()).await.unwrap();
    mock.assert();

    let display = format(&parse(&raw).unwrap());
    assert_eq!(display.temperature, "77.6 F");
    assert_eq!(display.pressure_in, "30.03 in");
    assert_eq!(display.gust, "Gust 0");
    assert_eq!(display.direction.as_deref(), Some("South"));
}

#[tokio::test]
async fn error_status_is_reported_with_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/data/2.5/onecall");
        then.status(401).body(r#"{"cod":401,"message":"Invalid API key"}"#);
    });

    let err = client_for(&server).fetch_current(&houston()).await.unwrap_err();
    mock.assert();

    let msg = err.to_string();
    assert!(msg.contains("401"), "{msg}");
    assert!(msg.contains("Invalid API key"), "{msg}");
}

#[tokio::test]
async fn garbage_body_fails_in_parser_not_client() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data/2.5/onecall");
        then.status(200).body("<html>maintenance</html>");
    });

    let raw = client_for(&server).fetch_current(&houston()).await.unwrap();
    assert!(matches!(parse(&raw), Err(ParseError::Malformed(_))));
}

#[tokio::test]
async fn fetches_icon_bytes() {
    let server = MockServer::start();
    let png = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    let mock = server.mock(|when, then| {
        when.method(GET).path("/img/wn/10d@2x.png");
        then.status(200).header("Content-Type", "image/png").body(png.clone());
    });

    let bytes = client_for(&server).fetch_icon("10d").await.unwrap();
    mock.assert();
    assert_eq!(bytes, png);
}

#[tokio::test]
async fn missing_icon_is_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/img/wn/zz@2x.png");
        then.status(404).body("not found");
    });

    let err = client_for(&server).fetch_icon("zz").await.unwrap_err();
    assert!(err.to_string().contains("404"));
}
