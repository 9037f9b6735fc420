use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::profile::Profile;

/// Monthly workload tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Pace {
    Relaxed,
    #[default]
    Moderate,
    Intensive,
}

impl Pace {
    /// Unknown names map to `Moderate`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "relaxed" => Pace::Relaxed,
            "intensive" => Pace::Intensive,
            _ => Pace::Moderate,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Relaxed => "relaxed",
            Pace::Moderate => "moderate",
            Pace::Intensive => "intensive",
        }
    }

    /// Tasks per month for this pace.
    pub fn total_tasks(&self) -> u32 {
        match self {
            Pace::Relaxed => 3,
            Pace::Moderate => 4,
            Pace::Intensive => 6,
        }
    }
}

impl From<String> for Pace {
    fn from(name: String) -> Self {
        Pace::parse(&name)
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_project_ratio() -> u8 {
    50
}

/// User-adjustable roadmap preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Share of projects among monthly tasks, 0–100.
    #[serde(default = "default_project_ratio")]
    pub project_ratio: u8,
    #[serde(default)]
    pub pace: Pace,
    #[serde(default)]
    pub focus_areas: Vec<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            project_ratio: default_project_ratio(),
            pace: Pace::default(),
            focus_areas: Vec::new(),
        }
    }
}

impl Preferences {
    pub fn project_ratio(&self) -> u8 {
        self.project_ratio.min(100)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    #[serde(alias = "model")]
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub message: String,
}

/// Summary of a finished month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedPhase {
    pub month: u32,
    pub summary: String,
}

/// A task of the current month as the user sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    pub item_name: String,
    pub item_type: String,
    pub status: String,
}

fn default_current_month() -> u32 {
    1
}

/// Everything the assistant knows about the user for one chat turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatContext {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default = "default_current_month")]
    pub current_month: u32,
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
    #[serde(default)]
    pub completed_phases: Vec<CompletedPhase>,
    #[serde(default)]
    pub current_tasks: Vec<TaskSnapshot>,
    #[serde(default)]
    pub preferences: Preferences,
}

impl Default for ChatContext {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            current_month: default_current_month(),
            conversation_history: Vec::new(),
            completed_phases: Vec::new(),
            current_tasks: Vec::new(),
            preferences: Preferences::default(),
        }
    }
}

/// Roadmap change the user asked for, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    #[default]
    None,
    AdjustProjects,
    AdjustPace,
    SkipTask,
}

impl ChatAction {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim() {
            "none" => Some(ChatAction::None),
            "adjust_projects" => Some(ChatAction::AdjustProjects),
            "adjust_pace" => Some(ChatAction::AdjustPace),
            "skip_task" => Some(ChatAction::SkipTask),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub action: ChatAction,
    pub action_details: HashMap<String, serde_json::Value>,
    /// 1–10.
    pub encouragement_score: u8,
}
