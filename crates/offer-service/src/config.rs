//! # Configuration
//!
//! Service settings loaded from a TOML file. Every section has defaults, so a missing file or a
//! partial file is fine:
//!
//! ```toml
//! [store]
//! buffer_size = 32
//!
//! [dates]
//! format = "%d/%m/%Y"
//!
//! [http]
//! bind_address = "0.0.0.0"
//! port = 8080
//!
//! [logging]
//! level = "info"
//!
//! [[catalog.products]]
//! id = 4621346
//! name = "Sample product"
//! ```

use crate::model::{ProductCreate, ProductId};
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

/// Files looked up, in order, by [`discover`].
pub const CONFIG_PATHS: [&str; 2] = ["offers.toml", "config/offers.toml"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferConfig {
    pub store: StoreConfig,
    pub dates: DatesConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
    pub catalog: CatalogConfig,
}

/// Record store settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Request channel capacity of each store.
    pub buffer_size: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatesConfig {
    /// strftime pattern for `createdOn`.
    pub format: DateFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind_address: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Used when `RUST_LOG` is not set (trace, debug, info, warn, error).
    pub level: String,
}

/// Products registered at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub products: Vec<SeedProduct>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedProduct {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl SeedProduct {
    pub fn to_create(&self) -> ProductCreate {
        ProductCreate {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            products: vec![SeedProduct {
                id: ProductId(4621346),
                name: "Sample product".to_string(),
                description: "Seeded at startup".to_string(),
            }],
        }
    }
}

impl OfferConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: OfferConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::FileWrite(e.to_string()))?;
        }

        fs::write(path.as_ref(), content).map_err(|e| ConfigError::FileWrite(e.to_string()))?;

        Ok(())
    }

    /// Loads the first file in [`CONFIG_PATHS`] that exists, or the defaults.
    ///
    /// Returns the path that was used alongside the config, so it can be logged once tracing is
    /// up.
    pub fn load() -> Result<(Self, Option<PathBuf>), ConfigError> {
        match discover() {
            Some(path) => {
                let config = Self::load_from_file(&path)?;
                Ok((config, Some(path)))
            }
            None => Ok((Self::default(), None)),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.buffer_size == 0 {
            return Err(ConfigError::Validation(
                "store buffer size must be greater than 0".to_string(),
            ));
        }

        if self.http.port == 0 {
            return Err(ConfigError::Validation(
                "http port must be greater than 0".to_string(),
            ));
        }
        if self.http.bind_address.trim().is_empty() {
            return Err(ConfigError::Validation(
                "http bind address must not be empty".to_string(),
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "invalid log level: {}, expected one of {:?}",
                self.logging.level, valid_levels
            )));
        }

        let mut seen = HashSet::new();
        for product in &self.catalog.products {
            if product.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "catalog product {} needs a name",
                    product.id
                )));
            }
            if !seen.insert(product.id) {
                return Err(ConfigError::Validation(format!(
                    "catalog product {} listed twice",
                    product.id
                )));
            }
        }

        Ok(())
    }
}

/// First existing file in [`CONFIG_PATHS`].
pub fn discover() -> Option<PathBuf> {
    CONFIG_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

/// A validated strftime pattern for calendar dates.
///
/// Construction checks that the pattern parses and that a formatted date reads back to the same
/// date, so a pattern missing the day, month or year is rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateFormat(String);

impl DateFormat {
    pub const DEFAULT: &'static str = "%d/%m/%Y";

    pub fn new(pattern: impl Into<String>) -> Result<Self, ConfigError> {
        let pattern = pattern.into();
        if pattern.trim().is_empty() {
            return Err(ConfigError::Validation(
                "date format must not be empty".to_string(),
            ));
        }
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Validation(format!(
                "invalid date format: {:?}",
                pattern
            )));
        }

        let probe = NaiveDate::from_ymd_opt(2024, 2, 29)
            .ok_or_else(|| ConfigError::Validation("probe date out of range".to_string()))?;
        let rendered = probe.format(&pattern).to_string();
        match NaiveDate::parse_from_str(&rendered, &pattern) {
            Ok(date) if date == probe => Ok(Self(pattern)),
            _ => Err(ConfigError::Validation(format!(
                "date format {:?} does not identify a calendar day",
                pattern
            ))),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.0
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.0).to_string()
    }

    pub fn parse(&self, text: &str) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(text.trim(), &self.0)
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl TryFrom<String> for DateFormat {
    type Error = ConfigError;

    fn try_from(pattern: String) -> Result<Self, Self::Error> {
        Self::new(pattern)
    }
}

impl From<DateFormat> for String {
    fn from(format: DateFormat) -> Self {
        format.0
    }
}

impl Display for DateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file read error: {0}")]
    FileRead(String),
    #[error("Config file write error: {0}")]
    FileWrite(String),
    #[error("Config parse error: {0}")]
    Parse(String),
    #[error("Config serialize error: {0}")]
    Serialize(String),
    #[error("Config validation error: {0}")]
    Validation(String),
}
