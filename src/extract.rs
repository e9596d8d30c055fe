use serde_json::{Map, Value};

use crate::error::GenerationError;
use crate::models::ProductContent;

const SNIPPET_MAX: usize = 120;

/// Pull the structured payload out of free-form model text.
///
/// The model is told to return only a JSON object but routinely wraps it in
/// prose, so the candidate span runs from the first `{` to the last `}` in
/// the whole text. A partially correct object is rejected, never patched.
pub fn extract(raw: &str) -> Result<ProductContent, GenerationError> {
    let span = braced_span(raw).ok_or(GenerationError::NoStructuredPayload)?;

    let value: Value = serde_json::from_str(span)
        .map_err(|_| GenerationError::MalformedPayload(snippet(span)))?;
    let obj = value
        .as_object()
        .ok_or(GenerationError::SchemaMismatch("object"))?;

    let features = required_text_list(obj, "features")?;
    if features.is_empty() {
        return Err(GenerationError::SchemaMismatch("features"));
    }

    Ok(ProductContent {
        title: required_text(obj, "title")?,
        long_description: required_text(obj, "longDescription")?,
        features,
        price_range: required_text(obj, "priceRange")?,
        tags: required_text_list(obj, "tags")?,
    })
}

fn braced_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

fn required_text(obj: &Map<String, Value>, field: &'static str) -> Result<String, GenerationError> {
    obj.get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(GenerationError::SchemaMismatch(field))
}

fn required_text_list(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Vec<String>, GenerationError> {
    let items = obj
        .get(field)
        .and_then(Value::as_array)
        .ok_or(GenerationError::SchemaMismatch(field))?;
    items
        .iter()
        .map(|v| {
            v.as_str()
                .map(str::to_owned)
                .ok_or(GenerationError::SchemaMismatch(field))
        })
        .collect()
}

// Keep diagnostics readable when the model dumps a huge span.
fn snippet(span: &str) -> String {
    if span.chars().count() > SNIPPET_MAX {
        let head: String = span.chars().take(SNIPPET_MAX).collect();
        format!("{head}...")
    } else {
        span.to_string()
    }
}
