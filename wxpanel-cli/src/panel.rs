//! Terminal rendering of [`DisplayStrings`].

use wxpanel_core::DisplayStrings;

const LABEL_WIDTH: usize = 12;
const UNLABELED: &str = "--";

pub fn render(display: &DisplayStrings) -> String {
    let mut rows: Vec<(&str, &str)> = vec![
        ("Conditions", display.summary.as_str()),
        ("Description", display.description.as_str()),
        ("Temperature", display.temperature.as_str()),
        ("Feels like", display.feels_like.as_str()),
        ("Humidity", display.humidity.as_str()),
        ("Pressure", display.pressure_mb.as_str()),
        ("", display.pressure_in.as_str()),
        ("Wind", display.wind_speed.as_str()),
        ("", display.gust.as_str()),
        ("Direction", display.direction.as_deref().unwrap_or(UNLABELED)),
        ("Icon", display.icon.as_str()),
    ];
    if let Some(observed) = &display.observed {
        rows.push(("Observed", observed.as_str()));
    }

    rows.iter()
        .map(|(label, value)| format!("{label:<LABEL_WIDTH$} {value}\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> DisplayStrings {
        DisplayStrings {
            temperature: "77.6 F".into(),
            feels_like: "82.8 F".into(),
            humidity: "71 %".into(),
            pressure_mb: "1017 mb".into(),
            pressure_in: "30.03 in".into(),
            wind_speed: "2.0 mph".into(),
            gust: "Gust 0".into(),
            direction: Some("South".into()),
            summary: "Clear".into(),
            description: "clear sky".into(),
            icon: "01d".into(),
            observed: None,
        }
    }

    #[test]
    fn one_row_per_field() {
        let out = render(&display());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "Conditions   Clear");
        assert_eq!(lines[6], "             30.03 in");
        assert_eq!(lines[8], "             Gust 0");
        assert_eq!(lines[9], "Direction    South");
    }

    #[test]
    fn unlabeled_direction_and_observed_row() {
        let mut d = display();
        d.direction = None;
        d.observed = Some("2020-10-14 16:20 UTC".into());

        let out = render(&d);
        assert!(out.contains("Direction    --\n"));
        assert!(out.ends_with("Observed     2020-10-14 16:20 UTC\n"));
    }
}
