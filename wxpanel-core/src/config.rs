use anyhow::{Context, Result, anyhow, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

pub const DEFAULT_ONECALL_URL: &str = "https://api.openweathermap.org/data/2.5/onecall";
pub const DEFAULT_ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Coordinates the panel reports on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            bail!("Latitude {latitude} is out of range (-90..=90)");
        }
        if !(-180.0..=180.0).contains(&longitude) {
            bail!("Longitude {longitude} is out of range (-180..=180)");
        }
        Ok(Self { latitude, longitude })
    }
}

/// Provider URLs. Overridable mostly so a mock server can stand in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub onecall_url: String,
    pub icon_base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            onecall_url: DEFAULT_ONECALL_URL.to_string(),
            icon_base_url: DEFAULT_ICON_BASE_URL.to_string(),
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
///
/// [location]
/// latitude = 30.22
/// longitude = -95.36
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    pub location: Option<Location>,
    #[serde(default)]
    pub endpoints: Endpoints,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "wxpanel", "wxpanel")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty()).ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `wxpanel configure` or pass --api-key."
            )
        })
    }

    pub fn require_location(&self) -> Result<Location> {
        self.location.ok_or_else(|| {
            anyhow!(
                "No location configured.\n\
                 Hint: run `wxpanel configure` or pass --lat and --lon."
            )
        })
    }
}
