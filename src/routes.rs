use axum::{Json, Router, extract::State, routing::{get, post}};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::controller::GenerationController;
use crate::models::{GenerateRequest, GenerationState};

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<GenerationController>,
    /// Selectable categories, owned by configuration and injected at
    /// startup; the pipeline itself never computes or checks this list.
    pub categories: Arc<Vec<String>>,
}

pub fn default_categories() -> Vec<&'static str> {
    vec![
        "Electronics", "Fashion", "Home & Kitchen", "Health & Beauty",
        "Sports & Fitness", "Books", "Toys & Games", "Automotive",
    ]
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/generate", post(generate_content))
        .route("/api/state", get(current_state))
        .route("/api/categories", get(list_categories))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn generate_content(
    State(state): State<AppState>,
    Json(body): Json<GenerateRequest>,
) -> Json<GenerationState> {
    if !body.category.is_empty() && !state.categories.iter().any(|c| *c == body.category) {
        tracing::warn!("Ignoring request with unknown category '{}'", body.category);
        return Json(state.controller.state());
    }
    Json(state.controller.generate(&body.product_name, &body.category).await)
}

pub async fn current_state(State(state): State<AppState>) -> Json<GenerationState> {
    Json(state.controller.state())
}

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.categories.as_ref().clone())
}
