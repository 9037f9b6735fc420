//! Career advisor: renders student data into prompts for Gemini and parses
//! the replies into typed records, falling back to fixed content whenever
//! the model fails or answers off-format.
//!
//! ```no_run
//! # async fn demo() -> anyhow::Result<()> {
//! use advisor::{CareerAdvisor, Config, LlmClient, Profile};
//!
//! let config = Config::from_env()?;
//! advisor::telemetry::init_tracing(&config);
//!
//! let llm = LlmClient::from_config(&config)?;
//! let advisor = CareerAdvisor::new(llm);
//! let analysis = advisor.analyze_profile(&Profile::default()).await;
//! let roadmap = advisor.generate_roadmap(&Profile::default(), &analysis, 6, 1).await;
//! # let _ = roadmap;
//! # Ok(())
//! # }
//! ```

pub mod advisor;
pub mod assistant;
pub mod config;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod telemetry;

pub use advisor::CareerAdvisor;
pub use assistant::RoadmapAssistant;
pub use config::Config;
pub use errors::GenerationError;
pub use llm_client::{GenerationOptions, LlmClient, LlmError, TextOracle};
pub use models::chat::{ChatAction, ChatContext, ChatReply, Pace, Preferences};
pub use models::profile::{Analysis, Profile};
pub use models::roadmap::{MonthPlan, RoadmapPhase};
