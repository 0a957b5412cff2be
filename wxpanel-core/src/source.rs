use async_trait::async_trait;
use std::fmt::Debug;

use crate::config::Location;

pub mod onecall;

pub use onecall::OneCallClient;

/// Where raw weather data and icons come from.
///
/// Implementations only move bytes; parsing is left to [`crate::parser`].
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    /// Body of the current-conditions response for `location`.
    async fn fetch_current(&self, location: &Location) -> anyhow::Result<String>;

    /// PNG bytes for a provider icon identifier such as `"01d"`.
    async fn fetch_icon(&self, icon: &str) -> anyhow::Result<Vec<u8>>;
}

/// Cut an error body down to something that fits in a message.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_is_untouched() {
        assert_eq!(truncate_body("nope"), "nope");
    }

    #[test]
    fn long_body_is_cut() {
        let body = "x".repeat(300);
        let cut = truncate_body(&body);
        assert_eq!(cut.len(), 203);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn cut_respects_char_boundaries() {
        // 'é' is two bytes, so byte 200 falls inside a char.
        let body = format!("x{}", "é".repeat(150));
        let cut = truncate_body(&body);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.len(), 199 + 3);
    }
}
