//! Configuration loading for the SHOWCASE TUI.
//!
//! All fields are required unless explicitly marked optional. No defaults,
//! except the per-catalog page sizes which fall back to the built-in ones.

use serde::Deserialize;
use showcase_core::{CatalogKind, CatalogSpec};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    /// Listing API root, e.g. `http://localhost:5000/api`.
    pub api_base_url: String,
    /// Prefix for relative thumbnail paths.
    #[serde(default)]
    pub image_base_url: Option<String>,
    pub request_timeout_ms: u64,
    pub refresh_interval_ms: u64,
    pub persistence_path: PathBuf,
    pub log_path: PathBuf,
    pub theme: ThemeConfig,
    #[serde(default)]
    pub page_size: PageSizeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSizeConfig {
    pub websites: Option<u32>,
    pub landing_pages: Option<u32>,
    pub reels: Option<u32>,
    pub corporate_videos: Option<u32>,
    pub creatives: Option<u32>,
}

impl PageSizeConfig {
    pub fn for_kind(&self, kind: CatalogKind) -> Option<u32> {
        match kind {
            CatalogKind::Websites => self.websites,
            CatalogKind::LandingPages => self.landing_pages,
            CatalogKind::Reels => self.reels,
            CatalogKind::CorporateVideos => self.corporate_videos,
            CatalogKind::Creatives => self.creatives,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or SHOWCASE_TUI_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let path = path.ok_or(ConfigError::MissingConfigPath)?;
        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.api_base_url.trim();
        if base.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must start with http:// or https://".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "refresh_interval_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.persistence_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "persistence_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.theme.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "must not be empty".to_string(),
            });
        }
        if self.theme.name.to_ascii_lowercase() != "gallery" {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "only 'gallery' is supported".to_string(),
            });
        }
        for kind in CatalogKind::all() {
            if self.page_size.for_kind(*kind) == Some(0) {
                return Err(ConfigError::InvalidValue {
                    field: "page_size",
                    reason: format!("{} must be > 0", kind),
                });
            }
        }
        Ok(())
    }

    /// Catalog configuration with any page size override applied.
    pub fn catalog_spec(&self, kind: CatalogKind) -> CatalogSpec {
        let spec = kind.spec();
        match self.page_size.for_kind(kind) {
            Some(limit) => spec.with_limit(limit),
            None => spec,
        }
    }

    /// Image base URL, treating an empty string as unset.
    pub fn image_base(&self) -> Option<&str> {
        self.image_base_url
            .as_deref()
            .map(str::trim)
            .filter(|base| !base.is_empty())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("SHOWCASE_TUI_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}
