use thiserror::Error;

/// Why a provider response could not be turned into a [`CurrentReading`].
///
/// Both variants are recoverable: the caller decides whether to show an
/// error state or keep whatever it displayed before.
///
/// [`CurrentReading`]: crate::CurrentReading
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("response is not valid JSON: {0}")]
    Malformed(String),

    #[error("response is missing field '{0}' or it is not usable")]
    MissingField(&'static str),
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Malformed(err.to_string())
    }
}
