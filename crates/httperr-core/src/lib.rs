//! Structured HTTP error values
//!
//! Normalizes loosely typed error inputs (status codes, messages, option
//! records, other errors, nested lists of these) into a single [`HttpError`],
//! and provides the standard 4xx/5xx [`Variant`]s plus the [`create_error`]
//! factory.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod catalog;
mod error;
mod input;
mod options;
mod parse;
pub mod status;
pub mod variant;

pub use catalog::{Catalog, CatalogBuilder, CatalogError, create_error};
pub use error::{DEFAULT_MESSAGE, DEFAULT_STATUS_CODE, DEFAULT_TITLE, HttpError, IntoHttpError};
pub use input::{ErrorInput, ErrorSnapshot};
pub use options::{Body, ErrorOptions};
pub use parse::parse_error_options;
pub use status::{AsStatusCode, get_status_code, is_valid_status_code};
pub use variant::{Variant, errors};
