use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for the command-line demos.
///
/// This struct holds the settings that are otherwise passed on every
/// invocation: where the journal lives, which product catalog to filter, and
/// whether saving the journal may replace an existing file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Path of the journal file.
    ///
    /// Relative paths are resolved against the working directory.
    journal: PathBuf,

    /// Path of a TOML product catalog.
    ///
    /// If this is unset, the built-in catalog is used.
    catalog: Option<PathBuf>,

    /// Whether saving the journal may replace an existing file.
    pub overwrite: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            journal: default_journal(),
            catalog: None,
            overwrite: true,
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Loads the configuration, falling back to the defaults if the file is
    /// missing or invalid.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::debug!("Failed to load config: {e}");
            Self::default()
        })
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the path of the journal file.
    #[must_use]
    pub fn journal(&self) -> &Path {
        &self.journal
    }

    /// Returns the path of the product catalog, if configured.
    #[must_use]
    pub fn catalog(&self) -> Option<&Path> {
        self.catalog.as_deref()
    }

    /// Sets the path of the product catalog.
    pub fn set_catalog(&mut self, catalog: Option<PathBuf>) {
        self.catalog = catalog;
    }
}

fn default_journal() -> PathBuf {
    PathBuf::from("journal.txt")
}

const fn default_overwrite() -> bool {
    true
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_journal")]
        journal: PathBuf,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        catalog: Option<PathBuf>,

        #[serde(default = "default_overwrite")]
        overwrite: bool,
    },
}

impl From<Versions> for super::Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                journal,
                catalog,
                overwrite,
            } => Self {
                journal,
                catalog,
                overwrite,
            },
        }
    }
}

impl From<super::Config> for Versions {
    fn from(config: super::Config) -> Self {
        Self::V1 {
            journal: config.journal,
            catalog: config.catalog,
            overwrite: config.overwrite,
        }
    }
}
