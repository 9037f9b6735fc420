//! Generator role: one-shot LLM generations over a student profile.
//!
//! Every operation comes in two forms. `try_*` returns the parse/validation
//! outcome; the plain form is total and substitutes the fixed fallback
//! from `fallback` after logging the failure.

pub mod analyzer;
pub mod content;
pub mod fallback;
pub mod prompts;
pub mod roadmap;

use crate::llm_client::{GenerationOptions, LlmClient};

/// Profile analysis and roadmap generation share the service default.
pub(crate) const ANALYSIS_OPTIONS: GenerationOptions =
    GenerationOptions::new(0.7, 8192).with_top_p(0.9);
pub(crate) const ROADMAP_OPTIONS: GenerationOptions =
    GenerationOptions::new(0.7, 8192).with_top_p(0.9);
pub(crate) const ENCOURAGEMENT_OPTIONS: GenerationOptions = GenerationOptions::new(0.8, 200);
pub(crate) const RESUME_BULLETS_OPTIONS: GenerationOptions = GenerationOptions::new(0.7, 500);
pub(crate) const LINKEDIN_CONTENT_OPTIONS: GenerationOptions = GenerationOptions::new(0.8, 1000);
pub(crate) const TASK_POST_OPTIONS: GenerationOptions = GenerationOptions::new(0.8, 800);

/// Career analysis, roadmap and content generation over one LLM handle.
#[derive(Clone)]
pub struct CareerAdvisor {
    llm: LlmClient,
}

impl CareerAdvisor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    pub fn llm(&self) -> &LlmClient {
        &self.llm
    }
}
