use serde::{Deserialize, Serialize};

/// A roadmap item the user just finished.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedItem {
    pub item_name: String,
    pub item_type: String,
}

/// Where the user stands in their roadmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressContext {
    #[serde(default)]
    pub completed_count: u32,
    #[serde(default = "default_phase")]
    pub current_phase: u32,
    #[serde(default)]
    pub career_goal: Option<String>,
}

fn default_phase() -> u32 {
    1
}

/// A completed item to turn into resume bullets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeItem {
    pub item_type: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub target_role: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BulletsEnvelope {
    pub bullets: Vec<String>,
}

/// Input for LinkedIn content generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkedInContext {
    pub recent_achievements: Vec<String>,
    pub new_skills: Vec<String>,
    pub career_goal: Option<String>,
    pub current_phase: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostIdea {
    pub topic: String,
    pub draft: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedInContent {
    pub post_ideas: Vec<PostIdea>,
    pub profile_summary: String,
    pub skills_to_add: Vec<String>,
}

/// A completed task to announce on LinkedIn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskPostRequest {
    pub item_name: String,
    pub item_type: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPost {
    pub post_content: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub suggested_image: String,
}
