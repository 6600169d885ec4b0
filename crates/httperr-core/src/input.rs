use serde_json::{Map, Value};

use crate::{HttpError, options::ErrorOptions};

/// Error-like object captured from a `std::error::Error`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSnapshot {
    /// Category label, if the caller knows one
    pub name: Option<String>,
    /// The error's `Display` output
    pub message: String,
    /// Rendered `source()` chain, one cause per line
    pub stack: Option<String>,
}

impl ErrorSnapshot {
    /// Name given to captured errors until [`with_name`](Self::with_name) replaces it
    pub const DEFAULT_NAME: &'static str = "Error";

    /// Capture the message and cause chain of `error`
    pub fn from_error<E: std::error::Error + ?Sized>(error: &E) -> Self {
        let mut causes = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            causes.push(format!("caused by: {cause}"));
            source = cause.source();
        }

        Self {
            name: Some(Self::DEFAULT_NAME.to_owned()),
            message: error.to_string(),
            stack: (!causes.is_empty()).then(|| causes.join("\n")),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub(crate) fn into_options(self) -> ErrorOptions {
        ErrorOptions {
            name: self.name,
            message: Some(self.message),
            stack: self.stack,
            ..ErrorOptions::default()
        }
    }
}

/// One item accepted by [`parse_error_options`](crate::parse_error_options)
///
/// Numbers, strings, JSON objects and arrays travel as [`ErrorInput::Value`].
/// Typed records, error-like objects and nested sequences have their own
/// variants. Use [`error_inputs!`](crate::error_inputs) to build a mixed list.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorInput {
    /// Loosely typed JSON value
    Value(Value),
    /// Typed options record
    Options(Box<ErrorOptions>),
    /// Error-like object
    Error(ErrorSnapshot),
    /// Nested sequence, flattened in place
    List(Vec<ErrorInput>),
}

impl ErrorInput {
    /// Capture an arbitrary error as an error-like input
    pub fn from_error<E: std::error::Error + ?Sized>(error: &E) -> Self {
        Self::Error(ErrorSnapshot::from_error(error))
    }
}

macro_rules! impl_from_json {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ErrorInput {
                fn from(value: $ty) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

impl_from_json!(u16, u32, u64, usize, i16, i32, i64, isize, f32, f64, bool, &str, String);

impl From<Value> for ErrorInput {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Map<String, Value>> for ErrorInput {
    fn from(object: Map<String, Value>) -> Self {
        Self::Value(Value::Object(object))
    }
}

impl From<ErrorOptions> for ErrorInput {
    fn from(options: ErrorOptions) -> Self {
        Self::Options(Box::new(options))
    }
}

impl From<ErrorSnapshot> for ErrorInput {
    fn from(snapshot: ErrorSnapshot) -> Self {
        Self::Error(snapshot)
    }
}

impl From<HttpError> for ErrorInput {
    fn from(error: HttpError) -> Self {
        Self::from(error.to_options())
    }
}

impl From<&HttpError> for ErrorInput {
    fn from(error: &HttpError) -> Self {
        Self::from(error.to_options())
    }
}

impl<T: Into<Self>> From<Option<T>> for ErrorInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Value(Value::Null), Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for ErrorInput {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>, const N: usize> From<[T; N]> for ErrorInput {
    fn from(items: [T; N]) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Build a `Vec<ErrorInput>` from values of mixed types
///
/// ```
/// use httperr_core::{error_inputs, parse_error_options};
///
/// let options = parse_error_options(error_inputs![405, "Bad Request"]);
/// assert_eq!(options.status_code, Some(405));
/// assert_eq!(options.message.as_deref(), Some("Bad Request"));
/// ```
#[macro_export]
macro_rules! error_inputs {
    () => {
        ::std::vec::Vec::<$crate::ErrorInput>::new()
    };
    ($($input:expr),+ $(,)?) => {
        ::std::vec![$($crate::ErrorInput::from($input)),+]
    };
}

/// Construct an [`HttpError`](crate::HttpError) from values of mixed types
///
/// ```
/// use httperr_core::http_error;
///
/// let error = http_error!(404, "no such widget");
/// assert_eq!(error.status_code(), 404);
/// assert_eq!(error.message, "no such widget");
/// ```
#[macro_export]
macro_rules! http_error {
    ($($input:expr),* $(,)?) => {
        $crate::HttpError::new($crate::error_inputs![$($input),*])
    };
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("disk full")
        }
    }

    impl std::error::Error for Inner {}

    #[derive(Debug)]
    struct Outer(Inner);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("could not save upload")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn snapshot_captures_message_and_cause_chain() {
        let snapshot = ErrorSnapshot::from_error(&Outer(Inner));
        assert_eq!(snapshot.message, "could not save upload");
        assert_eq!(snapshot.stack.as_deref(), Some("caused by: disk full"));
        assert_eq!(snapshot.name.as_deref(), Some("Error"));
    }

    #[test]
    fn snapshot_without_source_has_no_stack() {
        let snapshot = ErrorSnapshot::from_error(&Inner).with_name("StorageError");
        assert_eq!(snapshot.stack, None);
        assert_eq!(snapshot.name.as_deref(), Some("StorageError"));
    }

    #[test]
    fn none_becomes_null() {
        let input = ErrorInput::from(None::<&str>);
        assert_eq!(input, ErrorInput::Value(Value::Null));
    }

    #[test]
    fn arrays_become_lists() {
        let input = ErrorInput::from([405, 406]);
        assert_eq!(
            input,
            ErrorInput::List(vec![ErrorInput::Value(Value::from(405)), ErrorInput::Value(Value::from(406))])
        );
    }

    #[test]
    fn macro_accepts_mixed_types() {
        let inputs = crate::error_inputs![404, "gone", ErrorOptions::default().with_title("Gone")];
        assert_eq!(inputs.len(), 3);
        assert!(matches!(inputs[2], ErrorInput::Options(_)));
    }
}
