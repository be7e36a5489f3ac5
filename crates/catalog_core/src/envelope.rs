//! Reading the JSON envelopes returned by the site's ajax endpoints.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("envelope has no {0}")]
    MissingField(&'static str),
}

#[derive(Deserialize)]
struct Envelope {
    result: Option<Value>,
}

fn result(payload: &str) -> Result<Value, EnvelopeError> {
    let envelope: Envelope = serde_json::from_str(payload)?;
    envelope.result.ok_or(EnvelopeError::MissingField("result"))
}

/// Markup held directly in `result`.
pub fn markup(payload: &str) -> Result<String, EnvelopeError> {
    match result(payload)? {
        Value::String(markup) => Ok(markup),
        _ => Err(EnvelopeError::MissingField("result markup")),
    }
}

/// Markup held in `result.html`.
pub fn nested_markup(payload: &str) -> Result<String, EnvelopeError> {
    match result(payload)?.get_mut("html").map(Value::take) {
        Some(Value::String(markup)) => Ok(markup),
        _ => Err(EnvelopeError::MissingField("result.html")),
    }
}

/// First element of every `result.images` tuple, in order.
///
/// Tuples whose first element is missing, empty or not a string are skipped.
pub fn image_urls(payload: &str) -> Result<Vec<String>, EnvelopeError> {
    let images = match result(payload)?.get_mut("images").map(Value::take) {
        Some(Value::Array(images)) => images,
        _ => return Err(EnvelopeError::MissingField("result.images")),
    };
    Ok(images
        .into_iter()
        .filter_map(|tuple| match tuple {
            Value::Array(mut parts) if !parts.is_empty() => match parts.swap_remove(0) {
                Value::String(url) if !url.is_empty() => Some(url),
                _ => None,
            },
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_markup_result() {
        let payload = r#"{"status":200,"result":"<ul><li>a</li></ul>"}"#;
        assert_eq!(markup(payload).unwrap(), "<ul><li>a</li></ul>");
    }

    #[test]
    fn reads_nested_html() {
        let payload = r#"{"result":{"html":"<li>x</li>","title_format":"Chapter"}}"#;
        assert_eq!(nested_markup(payload).unwrap(), "<li>x</li>");
        assert!(matches!(
            markup(payload),
            Err(EnvelopeError::MissingField("result markup"))
        ));
    }

    #[test]
    fn image_tuples_keep_order() {
        let payload = r#"{"result":{"images":[["https://i/1.jpg",1,0],["https://i/2.jpg",1,0],[],[7],["",1,0],["https://i/3.jpg"]]}}"#;
        assert_eq!(
            image_urls(payload).unwrap(),
            vec!["https://i/1.jpg", "https://i/2.jpg", "https://i/3.jpg"]
        );
    }

    #[test]
    fn missing_result_and_bad_json_are_errors() {
        assert!(matches!(markup("{}"), Err(EnvelopeError::MissingField("result"))));
        assert!(matches!(markup("<html>"), Err(EnvelopeError::Json(_))));
        assert!(matches!(
            image_urls(r#"{"result":{}}"#),
            Err(EnvelopeError::MissingField("result.images"))
        ));
    }
}
