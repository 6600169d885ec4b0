use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::{
    catalog::Catalog,
    input::{ErrorInput, ErrorSnapshot},
    options::{Body, ErrorOptions},
    parse::parse_error_options,
    status::is_valid_status_code,
};

/// Status code used when no valid one was supplied
pub const DEFAULT_STATUS_CODE: u16 = 500;

/// Title used when none was supplied
pub const DEFAULT_TITLE: &str = "Internal Server Error";

/// Message used when none was supplied
pub const DEFAULT_MESSAGE: &str =
    "The server encountered an unexpected condition that prevented it from fulfilling the request";

/// Structured HTTP error value
///
/// Built from any mix of status codes, messages, option records and other
/// errors. Fields missing from the inputs fall back to a generic 500. Errors
/// below 500 without an explicit body get `{ "error_text": message }`.
///
/// The status code is reachable under two names, [`status_code`](Self::status_code)
/// and [`status`](Self::status), backed by a single stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{status_code} {title}: {message}")]
pub struct HttpError {
    status_code: u16,
    /// Short human-readable title
    pub title: String,
    /// Human-readable explanation
    pub message: String,
    /// Response payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    /// Error category label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Supplementary explanation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Diagnostic trace text, never serialized
    #[serde(skip_serializing)]
    pub stack: Option<String>,
    /// URI reference describing the error category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

impl HttpError {
    /// Build an error from a sequence of inputs
    ///
    /// See [`parse_error_options`] for how inputs are merged.
    pub fn new<I>(inputs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ErrorInput>,
    {
        Self::from_options(parse_error_options(inputs))
    }

    /// Build an error from an already merged options record
    pub fn from_options(options: ErrorOptions) -> Self {
        let ErrorOptions {
            name,
            title,
            status_code,
            body,
            message,
            detail,
            stack,
            r#type,
        } = options.validated();

        let mut error = Self {
            status_code: status_code.unwrap_or(DEFAULT_STATUS_CODE),
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            message: message.unwrap_or_else(|| DEFAULT_MESSAGE.to_owned()),
            body,
            name,
            detail,
            stack,
            r#type,
        };

        if error.body.is_none() && error.status_code < 500 {
            let text = if error.message.is_empty() {
                DEFAULT_MESSAGE
            } else {
                error.message.as_str()
            };
            error.body = Some(Body::error_text(text));
        }

        error
    }

    /// Capture a standard error, keeping the default 500 status
    pub fn from_error<E: std::error::Error + ?Sized>(error: &E) -> Self {
        Self::new([ErrorInput::from_error(error)])
    }

    /// HTTP status code
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Alias of [`status_code`](Self::status_code)
    pub const fn status(&self) -> u16 {
        self.status_code
    }

    /// Replace the status code
    ///
    /// Codes outside `100..=699` are ignored.
    pub fn set_status_code(&mut self, code: u16) {
        if is_valid_status_code(code) {
            self.status_code = code;
        } else {
            tracing::debug!(code, current = self.status_code, "ignoring invalid status code");
        }
    }

    /// Alias of [`set_status_code`](Self::set_status_code)
    pub fn set_status(&mut self, code: u16) {
        self.set_status_code(code);
    }

    /// The status as an [`http::StatusCode`]
    pub fn http_status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Whether the status is in the 4xx range
    pub const fn is_client_error(&self) -> bool {
        matches!(self.status_code, 400..=499)
    }

    /// Whether the status is in the 5xx range
    pub const fn is_server_error(&self) -> bool {
        matches!(self.status_code, 500..=599)
    }

    /// Every field of this error as an options record
    pub fn to_options(&self) -> ErrorOptions {
        ErrorOptions {
            name: self.name.clone(),
            title: Some(self.title.clone()),
            status_code: Some(self.status_code),
            body: self.body.clone(),
            message: Some(self.message.clone()),
            detail: self.detail.clone(),
            stack: self.stack.clone(),
            r#type: self.r#type.clone(),
        }
    }
}

impl Default for HttpError {
    fn default() -> Self {
        Self::from_options(ErrorOptions::default())
    }
}

impl From<ErrorOptions> for HttpError {
    fn from(options: ErrorOptions) -> Self {
        Self::from_options(options)
    }
}

/// Trait for domain errors that can be described as an [`HttpError`]
///
/// Implemented by application error types. The provided
/// [`to_http_error`](Self::to_http_error) starts from the catalog entry for
/// the status (if there is one) and layers the client-safe message, the
/// error type as `name`, and the cause chain as `stack` on top. The stack
/// stays server-side: it is not part of the serialized error.
pub trait IntoHttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `invalid_request_error`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;

    /// Build the structured error value
    fn to_http_error(&self) -> HttpError {
        let message = self.client_message();
        let mut error = Catalog::global().create_error(&self.status_code().as_u16(), Some(message.as_str()));

        error.name = Some(self.error_type().to_owned());
        error.stack = ErrorSnapshot::from_error(self).stack;
        error
    }
}
