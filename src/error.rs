use thiserror::Error;

/// Everything that can end a generation attempt. All variants are terminal
/// for the current request; nothing is retried.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("transport: {0}")] Transport(String),
    #[error("no structured payload in model output")] NoStructuredPayload,
    #[error("malformed payload: {0}")] MalformedPayload(String),
    #[error("schema mismatch: missing or invalid field `{0}`")] SchemaMismatch(&'static str),
}
