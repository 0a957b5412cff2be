//! Core library for the `wxpanel` weather panel.
//!
//! This crate defines:
//! - Parsing of One Call responses into a [`CurrentReading`]
//! - Unit conversion and formatting into [`DisplayStrings`]
//! - The HTTP collaborator that fetches responses and icons
//! - Configuration handling
//!
//! Parsing and formatting are pure; only [`source`] and [`config`] touch the
//! outside world.

pub mod compass;
pub mod config;
pub mod error;
pub mod format;
pub mod parser;
pub mod reading;
pub mod source;

pub use compass::bearing_to_compass;
pub use config::{Config, Endpoints, Location};
pub use error::ParseError;
pub use format::{DisplayStrings, format, icon_url};
pub use parser::parse;
pub use reading::{Conditions, CurrentReading};
pub use source::{OneCallClient, WeatherSource};
