use std::{collections::BTreeMap, sync::OnceLock};

use strum::IntoEnumIterator;
use thiserror::Error;

use crate::{
    HttpError,
    input::ErrorInput,
    options::ErrorOptions,
    status::{AsStatusCode, get_status_code, is_valid_status_code},
    variant::Variant,
};

/// Errors raised while assembling a catalog
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Entry code is outside `100..=699`
    #[error("invalid catalog status code: {0}")]
    InvalidStatusCode(u16),
}

/// Mapping from status code to preset options
///
/// Built once and read-only afterwards. [`Catalog::global`] holds the
/// standard variants; [`Catalog::builder`] extends or replaces entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: BTreeMap<u16, ErrorOptions>,
}

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Catalog holding every standard [`Variant`]
    pub fn standard() -> Self {
        Self {
            entries: Variant::iter()
                .map(|variant| (variant.code(), variant.preset()))
                .collect(),
        }
    }

    /// Shared standard catalog
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::standard)
    }

    /// Builder seeded with the standard variants
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder {
            entries: Self::standard().entries,
        }
    }

    /// Builder with no entries
    pub fn empty_builder() -> CatalogBuilder {
        CatalogBuilder {
            entries: BTreeMap::new(),
        }
    }

    /// Preset for `code`
    pub fn get(&self, code: u16) -> Option<&ErrorOptions> {
        self.entries.get(&code)
    }

    pub fn contains(&self, code: u16) -> bool {
        self.entries.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending code order
    pub fn entries(&self) -> impl Iterator<Item = (u16, &ErrorOptions)> {
        self.entries.iter().map(|(code, preset)| (*code, preset))
    }

    /// Instantiate the entry for `code` with caller overrides merged last
    pub fn instantiate<I>(&self, code: u16, overrides: I) -> Option<HttpError>
    where
        I: IntoIterator,
        I::Item: Into<ErrorInput>,
    {
        let preset = self.entries.get(&code)?;
        let inputs = std::iter::once(ErrorInput::from(preset.clone())).chain(overrides.into_iter().map(Into::into));
        Some(HttpError::new(inputs))
    }

    /// Build the error for `code`, preferring a catalog entry
    ///
    /// A known code yields its preset with `message` as the only override.
    /// Any other code yields a generic error carrying the coerced code, so an
    /// uncoercible code ends up as the default 500.
    pub fn create_error<C: AsStatusCode + ?Sized>(&self, code: &C, message: Option<&str>) -> HttpError {
        let status_code = get_status_code(code);

        if let Some(known) = status_code
            && let Some(error) = self.instantiate(known, [message])
        {
            return error;
        }

        tracing::trace!(?status_code, "no catalog entry, building generic error");
        HttpError::from_options(ErrorOptions {
            status_code,
            message: message.map(str::to_owned),
            ..ErrorOptions::default()
        })
    }
}

impl FromIterator<(u16, ErrorOptions)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (u16, ErrorOptions)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Create the error for `code` from the standard catalog
///
/// ```
/// use httperr_core::create_error;
///
/// assert_eq!(create_error(&405, None).title, "Method Not Allowed");
///
/// let unknown = create_error(&499, None);
/// assert_eq!(unknown.title, "Internal Server Error");
/// assert_eq!(unknown.status_code(), 499);
/// ```
pub fn create_error<C: AsStatusCode + ?Sized>(code: &C, message: Option<&str>) -> HttpError {
    Catalog::global().create_error(code, message)
}

/// Assembles a [`Catalog`]
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    entries: BTreeMap<u16, ErrorOptions>,
}

impl CatalogBuilder {
    /// Add or replace the entry for `code`
    ///
    /// The preset's own status code is forced to `code`.
    pub fn insert(mut self, code: u16, preset: ErrorOptions) -> Result<Self, CatalogError> {
        if !is_valid_status_code(code) {
            return Err(CatalogError::InvalidStatusCode(code));
        }

        self.entries.insert(code, preset.with_status_code(code));
        Ok(self)
    }

    /// Merge `overrides` into the existing entry for `code`, or add it
    pub fn extend_entry(mut self, code: u16, overrides: ErrorOptions) -> Result<Self, CatalogError> {
        if !is_valid_status_code(code) {
            return Err(CatalogError::InvalidStatusCode(code));
        }

        let entry = self.entries.entry(code).or_default();
        entry.merge(overrides.validated());
        entry.status_code = Some(code);
        Ok(self)
    }

    /// Drop the entry for `code`
    #[must_use]
    pub fn remove(mut self, code: u16) -> Self {
        self.entries.remove(&code);
        self
    }

    pub fn build(self) -> Catalog {
        tracing::debug!(entries = self.entries.len(), "built error catalog");
        Catalog { entries: self.entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Body, error::DEFAULT_MESSAGE};

    #[test]
    fn standard_catalog_holds_every_variant() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), Variant::count());
        for variant in Variant::iter() {
            assert!(catalog.contains(variant.code()));
        }
    }

    #[test]
    fn global_catalog_is_shared() {
        assert!(std::ptr::eq(Catalog::global(), Catalog::global()));
        assert_eq!(Catalog::global(), &Catalog::standard());
    }

    #[test]
    fn iteration_is_ordered_by_code() {
        let codes: Vec<u16> = Catalog::standard().entries().map(|(code, _)| code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn known_code_resolves_to_variant() {
        let error = create_error(&405, None);
        let expected = Variant::MethodNotAllowed.default_error();
        assert_eq!(error.title, "Method Not Allowed");
        assert_eq!(error, expected);
    }

    #[test]
    fn every_supported_code_resolves() {
        for variant in Variant::iter() {
            let error = create_error(&variant.code(), None);
            assert_eq!(error.status_code(), variant.code());
            assert_eq!(error.title, variant.title());
        }
    }

    #[test]
    fn message_overrides_known_variant() {
        let error = create_error(&404, Some("no such user"));
        assert_eq!(error.title, "Not Found");
        assert_eq!(error.message, "no such user");
        assert_eq!(error.body, Some(Body::error_text("no such user")));
    }

    #[test]
    fn unknown_code_keeps_code_with_generic_fields() {
        let error = create_error(&499, None);
        assert_eq!(error.status_code(), 499);
        assert_eq!(error.title, "Internal Server Error");
        assert_eq!(error.message, DEFAULT_MESSAGE);
        assert_eq!(error.name, None);
    }

    #[test]
    fn invalid_code_falls_back_to_default() {
        let error = create_error(&9000, Some("weird"));
        assert_eq!(error.status_code(), 500);
        assert_eq!(error.message, "weird");
        assert_eq!(error.body, None);

        let error = create_error("not a code", None);
        assert_eq!(error.status_code(), 500);
    }

    #[test]
    fn string_codes_are_coerced() {
        assert_eq!(create_error("404", None).title, "Not Found");
        assert_eq!(create_error("418.7", None).status_code(), 418);
    }

    #[test]
    fn builder_adds_and_replaces_entries() {
        let catalog = Catalog::builder()
            .insert(
                499,
                ErrorOptions::default().with_title("Client Closed Request").with_status_code(200),
            )
            .unwrap()
            .insert(404, ErrorOptions::default().with_title("Nothing Here"))
            .unwrap()
            .remove(418)
            .build();

        let closed = catalog.create_error(&499, None);
        assert_eq!(closed.status_code(), 499);
        assert_eq!(closed.title, "Client Closed Request");

        let missing = catalog.create_error(&404, None);
        assert_eq!(missing.title, "Nothing Here");
        assert_eq!(missing.message, DEFAULT_MESSAGE);

        assert!(!catalog.contains(418));
        assert_eq!(catalog.create_error(&418, None).title, "Internal Server Error");
    }

    #[test]
    fn extend_entry_merges_over_existing_preset() {
        let catalog = Catalog::builder()
            .extend_entry(404, ErrorOptions::default().with_message("Nothing to see here"))
            .unwrap()
            .build();

        let error = catalog.create_error(&404, None);
        assert_eq!(error.title, "Not Found");
        assert_eq!(error.message, "Nothing to see here");
    }

    #[test]
    fn builder_rejects_invalid_codes() {
        let err = Catalog::builder()
            .insert(7000, ErrorOptions::default())
            .unwrap_err();
        assert_eq!(err, CatalogError::InvalidStatusCode(7000));
        assert_eq!(err.to_string(), "invalid catalog status code: 7000");
    }

    #[test]
    fn empty_builder_starts_blank() {
        let catalog = Catalog::empty_builder().build();
        assert!(catalog.is_empty());
        assert_eq!(catalog.create_error(&404, None).title, "Internal Server Error");
    }
}
