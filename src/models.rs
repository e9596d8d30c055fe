use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub product_name: String,
    pub category: String,
}

/// The five fields the model is instructed to return. Key names are shared
/// with the prompt and the frontend renderer; change all three together.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductContent {
    pub title: String,
    pub long_description: String,
    pub features: Vec<String>,
    pub price_range: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum GenerationState {
    Idle,
    Loading,
    #[serde(rename_all = "camelCase")]
    Success {
        content: ProductContent,
        /// Category that was selected when the request was made, not
        /// whatever the selector shows now.
        category: String,
        generated_at: DateTime<Utc>,
    },
    Error { message: String },
}
