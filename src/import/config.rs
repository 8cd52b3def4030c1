//! Configuration for the Markdown schema parser

use serde::{Deserialize, Serialize};

use crate::models::schema::{DESCRIPTION_OPTION, TYPE_OPTION};

/// Configuration for the Markdown schema parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParserConfig {
    /// Option keys every attribute must define (lower-case)
    pub mandatory_options: Vec<String>,

    /// Log a warning for option lines that appear outside an attribute
    pub warn_on_stray_options: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            mandatory_options: vec![DESCRIPTION_OPTION.to_string(), TYPE_OPTION.to_string()],
            warn_on_stray_options: true,
        }
    }
}

impl ParserConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }

    /// Parse a configuration from TOML
    ///
    /// Missing keys fall back to their defaults.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        use anyhow::Context;

        let config: ParserConfig =
            toml::from_str(content).context("Failed to parse parser configuration")?;
        Ok(config.normalized())
    }

    /// Load a configuration file
    #[cfg(feature = "toml")]
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    fn normalized(mut self) -> Self {
        self.mandatory_options = self
            .mandatory_options
            .into_iter()
            .map(|key| key.trim().to_lowercase())
            .filter(|key| !key.is_empty())
            .collect();
        self.mandatory_options.sort();
        self.mandatory_options.dedup();
        self
    }
}

/// Builder for ParserConfig
#[derive(Debug, Default)]
pub struct ParserConfigBuilder {
    config: ParserConfig,
}

impl ParserConfigBuilder {
    /// Replace the set of mandatory option keys
    pub fn mandatory_options<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.mandatory_options = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Add one mandatory option key
    pub fn require_option(mut self, key: impl Into<String>) -> Self {
        self.config.mandatory_options.push(key.into());
        self
    }

    /// Enable or disable warnings for stray option lines
    pub fn warn_on_stray_options(mut self, warn: bool) -> Self {
        self.config.warn_on_stray_options = warn;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ParserConfig {
        self.config.normalized()
    }
}
