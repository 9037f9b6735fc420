//! Roadmap chat — one reply per user message, with an optional adjustment action.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::assistant::prompts::{CHAT_TEMPLATE, NO_PROGRESS_PLACEHOLDER, NO_TASKS_PLACEHOLDER};
use crate::assistant::{RoadmapAssistant, CHAT_OPTIONS};
use crate::errors::{or_fallback, GenerationError};
use crate::llm_client::prompts::{
    or_not_specified, or_placeholder, render_template, JSON_ONLY_INSTRUCTION,
};
use crate::models::chat::{
    ChatAction, ChatContext, ChatReply, ChatRole, ChatTurn, CompletedPhase, TaskSnapshot,
};

pub const DEFAULT_ENCOURAGEMENT_SCORE: u8 = 7;
const MIN_SCORE: f64 = 1.0;
const MAX_SCORE: f64 = 10.0;

/// Reply returned when the model is unreachable or unintelligible.
pub fn fallback_reply() -> ChatReply {
    ChatReply {
        response: "I see. Could you elaborate on how you would like to adjust your learning plan?"
            .to_string(),
        action: ChatAction::None,
        action_details: HashMap::new(),
        encouragement_score: DEFAULT_ENCOURAGEMENT_SCORE,
    }
}

/// One `User:`/`Assistant:` line per turn. Empty history renders as "".
pub fn render_history(history: &[ChatTurn]) -> String {
    history
        .iter()
        .map(|turn| {
            let role = match turn.role {
                ChatRole::User => "User",
                ChatRole::Assistant => "Assistant",
            };
            format!("{role}: {}\n", turn.message)
        })
        .collect()
}

pub fn render_completed_phases(phases: &[CompletedPhase], placeholder: &str) -> String {
    if phases.is_empty() {
        return placeholder.to_string();
    }
    phases
        .iter()
        .map(|p| format!("- Month {}: {}", p.month, p.summary))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_current_tasks(tasks: &[TaskSnapshot]) -> String {
    if tasks.is_empty() {
        return NO_TASKS_PLACEHOLDER.to_string();
    }
    tasks
        .iter()
        .map(|t| format!("- [{}] {} ({})", t.status, t.item_name, t.item_type))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_chat_prompt(message: &str, ctx: &ChatContext) -> String {
    let profile = &ctx.profile;
    render_template(
        CHAT_TEMPLATE,
        &[
            ("name", or_placeholder(profile.name.as_deref(), "Student").to_string()),
            ("major", or_not_specified(profile.major.as_deref()).to_string()),
            (
                "career_goal",
                or_not_specified(profile.career_aspirations.as_deref()).to_string(),
            ),
            ("current_month", ctx.current_month.to_string()),
            ("current_tasks", render_current_tasks(&ctx.current_tasks)),
            (
                "completed_progress",
                render_completed_phases(&ctx.completed_phases, NO_PROGRESS_PLACEHOLDER),
            ),
            ("project_ratio", ctx.preferences.project_ratio().to_string()),
            ("pace", ctx.preferences.pace.as_str().to_string()),
            ("history", render_history(&ctx.conversation_history)),
            ("json_only", JSON_ONLY_INSTRUCTION.to_string()),
            ("message", message.to_string()),
        ],
    )
}

/// Reply as the model produced it, before validation.
#[derive(Debug, Deserialize)]
struct RawChatReply {
    response: String,
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    action_details: Option<Value>,
    #[serde(default)]
    encouragement_score: Option<Value>,
}

/// Coerces a parsed reply into the closed action set and score range.
/// Only a missing or blank `response` is fatal.
fn validate_reply(raw: RawChatReply) -> Result<ChatReply, GenerationError> {
    let response = raw.response.trim().to_string();
    if response.is_empty() {
        return Err(GenerationError::invalid("chat reply has an empty response"));
    }

    let action = match raw.action.as_deref() {
        None => ChatAction::None,
        Some(tag) => ChatAction::parse(tag).unwrap_or_else(|| {
            warn!("Unknown chat action {tag:?}; treating as none");
            ChatAction::None
        }),
    };

    let action_details = match raw.action_details {
        Some(Value::Object(map)) => map.into_iter().collect(),
        None | Some(Value::Null) => HashMap::new(),
        Some(other) => {
            warn!("Ignoring non-object action_details: {other}");
            HashMap::new()
        }
    };

    Ok(ChatReply {
        response,
        action,
        action_details,
        encouragement_score: normalize_score(raw.encouragement_score.as_ref()),
    })
}

/// Rounds and clamps to 1–10. Missing or non-numeric scores become the default.
fn normalize_score(score: Option<&Value>) -> u8 {
    let parsed = match score {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed.filter(|v| v.is_finite()) {
        Some(v) => {
            let clamped = v.round().clamp(MIN_SCORE, MAX_SCORE);
            if clamped != v {
                warn!("Encouragement score {v} normalized to {clamped}");
            }
            clamped as u8
        }
        None => DEFAULT_ENCOURAGEMENT_SCORE,
    }
}

impl RoadmapAssistant {
    pub async fn try_chat(&self, message: &str, ctx: &ChatContext) -> Result<ChatReply, GenerationError> {
        let prompt = build_chat_prompt(message, ctx);
        let raw: RawChatReply = self.llm().call_json(&prompt, &CHAT_OPTIONS).await?;
        validate_reply(raw)
    }

    /// Answers a chat message. Never fails: a clarifying question is
    /// returned when the model cannot be used.
    pub async fn chat(&self, message: &str, ctx: &ChatContext) -> ChatReply {
        or_fallback("chat", self.try_chat(message, ctx).await, fallback_reply)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::llm_client::testing::ScriptedOracle;
    use crate::llm_client::LlmClient;
    use crate::models::chat::{Pace, Preferences};
    use crate::models::profile::Profile;

    fn assistant(oracle: &Arc<ScriptedOracle>) -> RoadmapAssistant {
        RoadmapAssistant::new(LlmClient::new(oracle.clone(), "test-model"))
    }

    fn busy_context() -> ChatContext {
        ChatContext {
            profile: Profile {
                name: Some("Sam".to_string()),
                major: Some("Economics".to_string()),
                ..Default::default()
            },
            current_month: 3,
            conversation_history: vec![
                ChatTurn {
                    role: ChatRole::User,
                    message: "Hi".to_string(),
                },
                ChatTurn {
                    role: ChatRole::Assistant,
                    message: "Hello! How can I help?".to_string(),
                },
            ],
            completed_phases: vec![CompletedPhase {
                month: 2,
                summary: "Finished Excel basics".to_string(),
            }],
            current_tasks: vec![TaskSnapshot {
                item_name: "SQL for Analysts".to_string(),
                item_type: "course".to_string(),
                status: "in_progress".to_string(),
            }],
            preferences: Preferences {
                project_ratio: 70,
                pace: Pace::Relaxed,
                focus_areas: vec![],
            },
        }
    }

    fn raw(value: Value) -> RawChatReply {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_prompt_with_empty_context_uses_placeholders() {
        let prompt = build_chat_prompt("What next?", &ChatContext::default());
        assert!(prompt.contains("Current Month (1) Tasks:\nNo tasks yet\n"));
        assert!(prompt.contains("Completed Progress:\nJust starting the journey!\n"));
        assert!(prompt.contains("Recent Conversation:\n\n\nCurrent User Message: What next?"));
        assert!(prompt.contains("- Name: Student"));
        assert!(prompt.contains("- Pace: moderate"));
        assert!(prompt.contains("- Project vs Course Balance: 50% projects"));
    }

    #[test]
    fn test_prompt_renders_history_tasks_and_progress() {
        let prompt = build_chat_prompt("Fewer courses please", &busy_context());
        assert!(prompt.contains("User: Hi\nAssistant: Hello! How can I help?\n"));
        assert!(prompt.contains("- [in_progress] SQL for Analysts (course)"));
        assert!(prompt.contains("- Month 2: Finished Excel basics"));
        assert!(prompt.contains("Current Month (3) Tasks:"));
        assert!(prompt.contains("- Project vs Course Balance: 70% projects"));
        assert!(prompt.contains("- Pace: relaxed"));
    }

    #[test]
    fn test_user_message_is_not_expanded() {
        let prompt = build_chat_prompt("what is {pace}?", &ChatContext::default());
        assert!(prompt.contains("Current User Message: what is {pace}?"));
    }

    #[test]
    fn test_context_text_is_not_expanded() {
        let mut ctx = busy_context();
        ctx.profile.name = Some("{major}".to_string());
        ctx.conversation_history[0].message = "literally type {message} and {json_only}".to_string();
        ctx.current_tasks[0].item_name = "{history}".to_string();

        let prompt = build_chat_prompt("NEW MSG", &ctx);
        assert!(prompt.contains("User: literally type {message} and {json_only}\n"));
        assert!(prompt.contains("- Name: {major}"));
        assert!(prompt.contains("- [in_progress] {history} (course)"));
        assert!(prompt.contains("Current User Message: NEW MSG"));
    }

    #[test]
    fn test_validate_unknown_action_becomes_none() {
        let reply = validate_reply(raw(json!({
            "response": "Sure.",
            "action": "rewrite_everything",
            "encouragement_score": 5
        })))
        .unwrap();
        assert_eq!(reply.action, ChatAction::None);
        assert_eq!(reply.encouragement_score, 5);
    }

    #[test]
    fn test_validate_score_is_rounded_and_clamped() {
        let high = validate_reply(raw(json!({"response": "ok", "encouragement_score": 14}))).unwrap();
        let low = validate_reply(raw(json!({"response": "ok", "encouragement_score": -2}))).unwrap();
        let frac = validate_reply(raw(json!({"response": "ok", "encouragement_score": 6.6}))).unwrap();
        let text = validate_reply(raw(json!({"response": "ok", "encouragement_score": "8"}))).unwrap();
        let missing = validate_reply(raw(json!({"response": "ok"}))).unwrap();

        assert_eq!(high.encouragement_score, 10);
        assert_eq!(low.encouragement_score, 1);
        assert_eq!(frac.encouragement_score, 7);
        assert_eq!(text.encouragement_score, 8);
        assert_eq!(missing.encouragement_score, DEFAULT_ENCOURAGEMENT_SCORE);
    }

    #[test]
    fn test_validate_rejects_blank_response() {
        assert!(validate_reply(raw(json!({"response": "  "}))).is_err());
    }

    #[test]
    fn test_validate_ignores_non_object_details() {
        let reply = validate_reply(raw(json!({
            "response": "ok",
            "action": "adjust_pace",
            "action_details": ["slower"]
        })))
        .unwrap();
        assert_eq!(reply.action, ChatAction::AdjustPace);
        assert!(reply.action_details.is_empty());
    }

    #[tokio::test]
    async fn test_chat_parses_reply_with_details() {
        let body = r#"```json
{
  "response": "I can add another project this month.",
  "action": "adjust_projects",
  "action_details": {"project_ratio": 70},
  "encouragement_score": 8
}
```"#;
        let oracle = Arc::new(ScriptedOracle::replying(body));
        let reply = assistant(&oracle).chat("More projects", &busy_context()).await;

        assert_eq!(reply.action, ChatAction::AdjustProjects);
        assert_eq!(reply.action_details["project_ratio"], json!(70));
        assert_eq!(reply.encouragement_score, 8);
        assert_eq!(oracle.calls()[0].options, CHAT_OPTIONS);
        assert!(oracle.single_prompt().contains("Current User Message: More projects"));
    }

    #[tokio::test]
    async fn test_chat_fallback_on_oracle_error() {
        let oracle = Arc::new(ScriptedOracle::failing(429, "rate limited"));
        let reply = assistant(&oracle).chat("Hello", &ChatContext::default()).await;
        assert_eq!(reply, fallback_reply());
        assert_eq!(reply.encouragement_score, 7);
        assert_eq!(oracle.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_chat_fallback_on_missing_response_key() {
        let oracle = Arc::new(ScriptedOracle::replying(r#"{"action": "none"}"#));
        let reply = assistant(&oracle).chat("Hello", &ChatContext::default()).await;
        assert_eq!(reply, fallback_reply());
    }
}
