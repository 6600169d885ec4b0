use httperr_core::{Catalog, ErrorInput, HttpError, get_status_code};
use serde::Serialize;
use serde_json::Value;

/// Read a command-line argument as an error input
///
/// JSON numbers, objects, arrays, booleans and null keep their JSON type;
/// anything else, quoted JSON strings included, is taken verbatim.
pub fn parse_input(arg: &str) -> ErrorInput {
    match serde_json::from_str::<Value>(arg) {
        Ok(Value::String(_)) | Err(_) => ErrorInput::from(arg),
        Ok(value) => ErrorInput::from(value),
    }
}

/// Merge command-line inputs into one error value
pub fn build(inputs: &[String]) -> HttpError {
    let error = HttpError::new(inputs.iter().map(|arg| parse_input(arg)));
    tracing::debug!(inputs = inputs.len(), status = error.status_code(), "built error value");
    error
}

/// Run the factory against `catalog`
pub fn create(catalog: &Catalog, code: &str, message: Option<&str>) -> HttpError {
    catalog.create_error(code, message)
}

/// Coerce a command-line value to a status code
pub fn status(value: &str) -> Option<u16> {
    match serde_json::from_str::<Value>(value) {
        Ok(json) => get_status_code(&json),
        Err(_) => get_status_code(value),
    }
}

/// One `code title` line per catalog entry
pub fn list(catalog: &Catalog) -> Vec<String> {
    catalog
        .entries()
        .map(|(code, preset)| format!("{code} {}", preset.title.as_deref().unwrap_or_default()))
        .collect()
}

/// Serialize `value` as compact or pretty JSON
pub fn render<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use httperr_core::{Body, DEFAULT_MESSAGE};
    use serde_json::json;

    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    #[test]
    fn json_arguments_keep_their_type() {
        assert_eq!(parse_input("404"), ErrorInput::Value(json!(404)));
        assert_eq!(parse_input("{\"title\":\"Gone\"}"), ErrorInput::Value(json!({"title": "Gone"})));
        assert_eq!(parse_input("no such user"), ErrorInput::Value(json!("no such user")));
    }

    #[test]
    fn quoted_arguments_stay_verbatim() {
        assert_eq!(parse_input("\"hello\""), ErrorInput::Value(json!("\"hello\"")));

        let error = build(&args(&["404", "\"gone\""]));
        assert_eq!(error.message, "\"gone\"");
    }

    #[test]
    fn build_merges_arguments() {
        let error = build(&args(&["404", "no such user", "{\"detail\":\"id 7\"}"]));
        assert_eq!(error.status_code(), 404);
        assert_eq!(error.message, "no such user");
        assert_eq!(error.detail.as_deref(), Some("id 7"));
        assert_eq!(error.body, Some(Body::error_text("no such user")));
    }

    #[test]
    fn build_without_arguments_is_default() {
        let error = build(&[]);
        assert_eq!(error.status_code(), 500);
        assert_eq!(error.message, DEFAULT_MESSAGE);
    }

    #[test]
    fn create_uses_catalog() {
        let catalog = Catalog::standard();
        assert_eq!(create(&catalog, "405", None).title, "Method Not Allowed");
        assert_eq!(create(&catalog, "499", Some("closed")).message, "closed");
        assert_eq!(create(&catalog, "abc", None).status_code(), 500);
    }

    #[test]
    fn status_coercion() {
        assert_eq!(status("404"), Some(404));
        assert_eq!(status("404.9"), Some(404));
        assert_eq!(status("\"410\""), Some(410));
        assert_eq!(status("700"), None);
        assert_eq!(status("abc"), None);
    }

    #[test]
    fn list_shows_code_and_title() {
        let lines = list(&Catalog::standard());
        assert_eq!(lines.first().map(String::as_str), Some("400 Bad Request"));
        assert_eq!(lines.last().map(String::as_str), Some("511 Network Authentication Required"));
    }

    #[test]
    fn render_compact_and_pretty() {
        let error = build(&args(&["500"]));
        let compact = render(&error, false).unwrap();
        assert!(!compact.contains('\n'));

        let pretty = render(&error, true).unwrap();
        assert!(pretty.contains("\n  \"statusCode\": 500"));
    }
}
