use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::{info, error, warn};

use crate::error::GenerationError;
use crate::extract::extract;
use crate::groq::CompletionApi;
use crate::models::{GenerationState, ProductContent};
use crate::prompt::build_prompt;

/// Shown for every failure kind; the concrete cause only goes to the logs.
pub const FAILURE_MESSAGE: &str =
    "Something went wrong. Please check your internet connection or API key.";

#[derive(Debug, Clone)]
pub enum GenerationEvent {
    RequestStarted,
    Succeeded {
        content: ProductContent,
        category: String,
        generated_at: DateTime<Utc>,
    },
    Failed { message: String },
}

/// Pure transition function. A new request always wins the state; completion
/// events are only honored while a request is in flight.
pub fn transition(current: &GenerationState, event: GenerationEvent) -> GenerationState {
    match (current, event) {
        (_, GenerationEvent::RequestStarted) => GenerationState::Loading,
        (
            GenerationState::Loading,
            GenerationEvent::Succeeded { content, category, generated_at },
        ) => GenerationState::Success { content, category, generated_at },
        (GenerationState::Loading, GenerationEvent::Failed { message }) => {
            GenerationState::Error { message }
        }
        (other, _) => other.clone(),
    }
}

pub struct GenerationController {
    api: Arc<dyn CompletionApi>,
    state: RwLock<GenerationState>,
    latest_token: AtomicU64,
}

impl GenerationController {
    pub fn new(api: Arc<dyn CompletionApi>) -> Self {
        Self {
            api,
            state: RwLock::new(GenerationState::Idle),
            latest_token: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> GenerationState {
        self.state.read().clone()
    }

    /// Run the full pipeline for one user action and return the settled
    /// state. Empty inputs are a no-op, mirroring the disabled submit
    /// action in the frontend.
    pub async fn generate(&self, product_name: &str, category: &str) -> GenerationState {
        if product_name.trim().is_empty() || category.trim().is_empty() {
            return self.state();
        }

        // Claim a token and flip to Loading before the first await, so stale
        // content is never shown while this request is in flight.
        let token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut guard = self.state.write();
            *guard = transition(&guard, GenerationEvent::RequestStarted);
        }

        info!("🚀 Generating content for '{}' in category '{}'", product_name, category);

        let result = self.run(product_name, category).await;

        let event = match result {
            Ok(content) => {
                info!("✅ Content generated: '{}'", content.title);
                GenerationEvent::Succeeded {
                    content,
                    category: category.to_string(),
                    generated_at: Utc::now(),
                }
            }
            Err(e) => {
                error!("❌ Generation failed: {}", e);
                GenerationEvent::Failed { message: FAILURE_MESSAGE.to_string() }
            }
        };

        self.commit(token, event);
        self.state()
    }

    async fn run(&self, product_name: &str, category: &str) -> Result<ProductContent, GenerationError> {
        let prompt = build_prompt(product_name, category);
        let raw = self.api.complete(&prompt).await?;
        extract(&raw)
    }

    /// Only the most recently started request may settle the state; anything
    /// older lost the race to a newer user action and is dropped.
    fn commit(&self, token: u64, event: GenerationEvent) {
        let mut guard = self.state.write();
        if self.latest_token.load(Ordering::SeqCst) != token {
            warn!("Discarding stale completion (a newer request superseded it)");
            return;
        }
        *guard = transition(&guard, event);
    }
}
