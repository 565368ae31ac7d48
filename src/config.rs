use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub fidelity: FidelityConfig,
    pub figma: FigmaConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Upper bound for each individual host call.
    #[serde(with = "humantime_serde")]
    pub host_timeout: Duration,
    pub export_svg: bool,
    /// Line height used for line boxes when the text declares AUTO.
    pub auto_line_height_ratio: f64,
    /// Minimum width recorded on the synthesized `md` breakpoint.
    pub breakpoint_min_width: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            host_timeout: Duration::from_secs(10),
            export_svg: true,
            auto_line_height_ratio: 1.2,
            breakpoint_min_width: 768.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FidelityConfig {
    pub pixel_perfect_threshold: f64,
    pub suggestion_threshold: f64,
    pub position_tolerance: f64,
}

impl Default for FidelityConfig {
    fn default() -> Self {
        Self {
            pixel_perfect_threshold: 95.0,
            suggestion_threshold: 90.0,
            position_tolerance: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigmaConfig {
    pub base_url: String,
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for FigmaConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.figma.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported file extension '{0}' (expected .toml, .yaml or .yml)")]
    UnsupportedExtension(String),
    #[error("{0}")]
    Invalid(String),
}

impl Config {
    /// `$HOME/.config/dbe/config.toml`, when `HOME` is set.
    pub fn central_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(|home| PathBuf::from(home).join(".config/dbe/config.toml"))
    }

    /// Priority: explicit path > central config (if present) > defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::central_config_path() {
            Some(central) if central.is_file() => Self::from_file(&central),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Ok(toml::from_str(&contents)?),
            "yaml" | "yml" => Ok(serde_yaml::from_str(&contents)?),
            other => Err(ConfigError::UnsupportedExtension(other.to_string())),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extraction.host_timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "extraction.host_timeout must be greater than zero".into(),
            ));
        }
        if self.figma.timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "figma.timeout must be greater than zero".into(),
            ));
        }
        if self.extraction.auto_line_height_ratio <= 0.0 {
            return Err(ConfigError::Invalid(
                "extraction.auto_line_height_ratio must be positive".into(),
            ));
        }
        for (name, value) in [
            (
                "fidelity.pixel_perfect_threshold",
                self.fidelity.pixel_perfect_threshold,
            ),
            (
                "fidelity.suggestion_threshold",
                self.fidelity.suggestion_threshold,
            ),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be between 0 and 100 (got {value})"
                )));
            }
        }
        if self.fidelity.position_tolerance < 0.0 {
            return Err(ConfigError::Invalid(
                "fidelity.position_tolerance must not be negative".into(),
            ));
        }
        Ok(())
    }
}
