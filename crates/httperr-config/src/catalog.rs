use httperr_core::{Catalog, CatalogError, ErrorOptions};
use serde::Deserialize;

/// Error catalog customisation
///
/// Entries are merged over the standard variant with the same code, or added
/// as new entries when the code has no standard variant.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Start from the standard 4xx/5xx variants
    #[serde(default = "default_standard")]
    pub standard: bool,
    /// Custom or overriding entries
    #[serde(default)]
    pub entries: Vec<CatalogEntry>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            standard: true,
            entries: Vec::new(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_standard() -> bool {
    true
}

/// One catalog entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogEntry {
    /// Status code, 100 through 699
    pub code: u16,
    pub title: Option<String>,
    pub message: Option<String>,
    /// Reference link for the error category
    pub r#type: Option<String>,
    pub name: Option<String>,
    pub detail: Option<String>,
}

impl CatalogEntry {
    /// Preset fields contributed by this entry
    pub fn to_options(&self) -> ErrorOptions {
        ErrorOptions {
            name: self.name.clone(),
            title: self.title.clone(),
            status_code: Some(self.code),
            message: self.message.clone(),
            detail: self.detail.clone(),
            r#type: self.r#type.clone(),
            ..ErrorOptions::default()
        }
    }
}

impl CatalogConfig {
    /// Build the catalog described by this configuration
    pub fn build(&self) -> Result<Catalog, CatalogError> {
        let mut builder = if self.standard {
            Catalog::builder()
        } else {
            Catalog::empty_builder()
        };

        for entry in &self.entries {
            builder = builder.extend_entry(entry.code, entry.to_options())?;
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_standard() {
        let config: CatalogConfig = toml::from_str("").unwrap();
        assert!(config.standard);
        assert_eq!(config.build().unwrap(), Catalog::standard());
    }

    #[test]
    fn entries_merge_over_standard_variants() {
        let toml = r#"
            [[entries]]
            code = 404
            message = "Nothing lives here"

            [[entries]]
            code = 499
            title = "Client Closed Request"
            type = "https://example.com/errors/499"
        "#;

        let config: CatalogConfig = toml::from_str(toml).unwrap();
        let catalog = config.build().unwrap();

        let missing = catalog.create_error(&404, None);
        assert_eq!(missing.title, "Not Found");
        assert_eq!(missing.message, "Nothing lives here");

        let closed = catalog.create_error(&499, None);
        assert_eq!(closed.title, "Client Closed Request");
        assert_eq!(closed.r#type.as_deref(), Some("https://example.com/errors/499"));
    }

    #[test]
    fn standard_can_be_disabled() {
        let toml = r#"
            standard = false

            [[entries]]
            code = 418
            title = "Short And Stout"
        "#;

        let config: CatalogConfig = toml::from_str(toml).unwrap();
        let catalog = config.build().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.create_error(&404, None).title, "Internal Server Error");
        assert_eq!(catalog.create_error(&418, None).title, "Short And Stout");
    }

    #[test]
    fn invalid_codes_fail_to_build() {
        let config: CatalogConfig = toml::from_str("[[entries]]\ncode = 42").unwrap();
        assert_eq!(config.build().unwrap_err(), CatalogError::InvalidStatusCode(42));
    }

    #[test]
    fn unknown_entry_fields_are_rejected() {
        assert!(toml::from_str::<CatalogConfig>("[[entries]]\ncode = 404\ncolour = \"red\"").is_err());
    }
}
