use std::{collections::HashSet, path::Path};

use httperr_core::is_valid_status_code;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Load `path` when it exists, otherwise fall back to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the log filter is empty or catalog entries use
    /// invalid or duplicate status codes
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_log_config()?;
        self.validate_catalog_config()?;
        Ok(())
    }

    fn validate_log_config(&self) -> anyhow::Result<()> {
        if self.log.filter.trim().is_empty() {
            anyhow::bail!("log.filter must not be empty");
        }

        Ok(())
    }

    fn validate_catalog_config(&self) -> anyhow::Result<()> {
        let mut seen = HashSet::new();

        for entry in &self.catalog.entries {
            if !is_valid_status_code(entry.code) {
                anyhow::bail!("catalog entry code {} is outside 100..=699", entry.code);
            }
            if !seen.insert(entry.code) {
                anyhow::bail!("catalog entry code {} is configured more than once", entry.code);
            }
        }

        Ok(())
    }
}
