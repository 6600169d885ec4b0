use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::status::{get_status_code, is_valid_status_code};

/// Response payload carried by an error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Body {
    /// Plain text payload
    Text(String),
    /// JSON object payload
    Object(Map<String, Value>),
}

impl Body {
    /// Key used for bodies derived from the error message
    pub const ERROR_TEXT_KEY: &'static str = "error_text";

    /// Build the `{ "error_text": message }` body
    pub fn error_text(message: impl Into<String>) -> Self {
        let mut object = Map::new();
        object.insert(Self::ERROR_TEXT_KEY.to_owned(), Value::String(message.into()));
        Self::Object(object)
    }

    /// Accept a JSON string or a JSON object; anything else is not a body
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(Self::Text(text.clone())),
            Value::Object(object) => Some(Self::Object(object.clone())),
            _ => None,
        }
    }

    /// The body as a JSON value
    pub fn to_value(&self) -> Value {
        match self {
            Self::Text(text) => Value::String(text.clone()),
            Self::Object(object) => Value::Object(object.clone()),
        }
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Map<String, Value>> for Body {
    fn from(object: Map<String, Value>) -> Self {
        Self::Object(object)
    }
}

/// Partial description of an error
///
/// Every field is optional. Records are combined with [`ErrorOptions::merge`],
/// where fields present in the later record replace earlier ones.
///
/// Deserializing goes through [`ErrorOptions::from_object`], so serde input
/// obeys the same per-field checks as loose JSON input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Map<String, Value>")]
pub struct ErrorOptions {
    /// Error category label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Short human-readable title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// HTTP status code, 100 through 699
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Response payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    /// Human-readable explanation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Supplementary explanation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Diagnostic trace text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    /// URI reference describing the error category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

type FieldSetter = fn(&mut ErrorOptions, &Value) -> bool;

/// Recognized object keys with their typed setters, applied in order
///
/// `status` precedes `statusCode` so the canonical key wins when both are set.
const OPTION_FIELDS: [(&str, FieldSetter); 9] = [
    ("name", |options, value| set_text(&mut options.name, value)),
    ("title", |options, value| set_text(&mut options.title, value)),
    ("status", set_status_field),
    ("statusCode", set_status_field),
    ("body", |options, value| match Body::from_value(value) {
        Some(body) => {
            options.body = Some(body);
            true
        }
        None => false,
    }),
    ("message", |options, value| set_text(&mut options.message, value)),
    ("detail", |options, value| set_text(&mut options.detail, value)),
    ("stack", |options, value| set_text(&mut options.stack, value)),
    ("type", |options, value| set_text(&mut options.r#type, value)),
];

fn set_text(slot: &mut Option<String>, value: &Value) -> bool {
    match value {
        Value::String(text) => {
            *slot = Some(text.clone());
            true
        }
        _ => false,
    }
}

/// Only integral JSON numbers in range are status codes
fn set_status_field(options: &mut ErrorOptions, value: &Value) -> bool {
    let Value::Number(number) = value else {
        return false;
    };
    if number.as_f64().is_none_or(|n| n.fract() != 0.0) {
        return false;
    }

    match get_status_code(value) {
        Some(code) => {
            options.status_code = Some(code);
            true
        }
        None => false,
    }
}

impl From<Map<String, Value>> for ErrorOptions {
    fn from(object: Map<String, Value>) -> Self {
        Self::from_object(&object)
    }
}

fn overwrite<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

impl ErrorOptions {
    /// Extract the recognized, correctly typed fields of a JSON object
    ///
    /// Unknown keys are ignored and wrongly typed values are dropped.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let mut options = Self::default();

        for (field, setter) in OPTION_FIELDS {
            let Some(value) = object.get(field) else {
                continue;
            };
            if !setter(&mut options, value) {
                tracing::trace!(field, "dropping wrongly typed error option");
            }
        }

        options
    }

    /// Overwrite every field that is present in `other`
    pub fn merge(&mut self, other: Self) {
        let Self {
            name,
            title,
            status_code,
            body,
            message,
            detail,
            stack,
            r#type,
        } = other;

        overwrite(&mut self.name, name);
        overwrite(&mut self.title, title);
        overwrite(&mut self.status_code, status_code);
        overwrite(&mut self.body, body);
        overwrite(&mut self.message, message);
        overwrite(&mut self.detail, detail);
        overwrite(&mut self.stack, stack);
        overwrite(&mut self.r#type, r#type);
    }

    /// Drop a status code that falls outside the accepted range
    #[must_use]
    pub fn validated(mut self) -> Self {
        if let Some(code) = self.status_code
            && !is_valid_status_code(code)
        {
            tracing::trace!(code, "dropping out of range status code");
            self.status_code = None;
        }
        self
    }

    /// Whether no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_status_code(mut self, code: u16) -> Self {
        self.status_code = Some(code);
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, r#type: impl Into<String>) -> Self {
        self.r#type = Some(r#type.into());
        self
    }
}
