//! Conversational role: roadmap chat and on-demand monthly task plans.

pub mod chat;
pub mod month;
pub mod prompts;

use crate::llm_client::{GenerationOptions, LlmClient};

pub(crate) const CHAT_OPTIONS: GenerationOptions = GenerationOptions::new(0.8, 500);
pub(crate) const SINGLE_MONTH_OPTIONS: GenerationOptions = GenerationOptions::new(0.7, 1000);

/// Interactive assistant over a user's roadmap. Holds no conversation state;
/// the caller passes the full context on every turn.
#[derive(Clone)]
pub struct RoadmapAssistant {
    llm: LlmClient,
}

impl RoadmapAssistant {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    pub fn llm(&self) -> &LlmClient {
        &self.llm
    }
}
