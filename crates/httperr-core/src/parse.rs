use serde_json::Value;

use crate::{input::ErrorInput, options::ErrorOptions, status::get_status_code};

/// Merge a sequence of loosely typed inputs into one options record
///
/// Inputs are applied left to right, descending into nested sequences
/// depth-first; each recognized field of a later input replaces the same
/// field of an earlier one. Per input:
///
/// * falsy values (`null`, `false`, `""`, `0`) are skipped
/// * numbers and strings become the status code when they coerce to one,
///   otherwise strings become the message
/// * options records, error-like objects and non-empty JSON objects
///   contribute their recognized, correctly typed fields
/// * anything else contributes nothing
///
/// Never fails; unusable input is ignored.
pub fn parse_error_options<I>(inputs: I) -> ErrorOptions
where
    I: IntoIterator,
    I::Item: Into<ErrorInput>,
{
    let mut options = ErrorOptions::default();

    let mut pending: Vec<ErrorInput> = inputs.into_iter().map(Into::into).collect();
    pending.reverse();

    while let Some(input) = pending.pop() {
        match input {
            ErrorInput::List(items) => pending.extend(items.into_iter().rev()),
            ErrorInput::Value(Value::Array(items)) => {
                pending.extend(items.into_iter().rev().map(ErrorInput::Value));
            }
            ErrorInput::Value(value) => apply_value(&mut options, value),
            ErrorInput::Options(record) => options.merge((*record).validated()),
            ErrorInput::Error(snapshot) => options.merge(snapshot.into_options()),
        }
    }

    options
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(text) => text.is_empty(),
        Value::Number(number) => number.as_f64() == Some(0.0),
        _ => false,
    }
}

fn apply_value(options: &mut ErrorOptions, value: Value) {
    if is_falsy(&value) {
        return;
    }

    match value {
        Value::Number(_) => match get_status_code(&value) {
            Some(code) => options.status_code = Some(code),
            None => tracing::trace!(%value, "ignoring number that is not a status code"),
        },
        Value::String(text) => match get_status_code(text.as_str()) {
            Some(code) => options.status_code = Some(code),
            None => options.message = Some(text),
        },
        Value::Object(object) if !object.is_empty() => options.merge(ErrorOptions::from_object(&object)),
        other => tracing::trace!(value = %other, "ignoring unusable error input"),
    }
}
