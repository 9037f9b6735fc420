use serde::{Deserialize, Serialize};

/// A student's profile as supplied by the caller on every request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: Option<String>,
    pub major: Option<String>,
    pub university: Option<String>,
    pub gpa: Option<f32>,
    pub experience_level: Option<String>,
    pub career_aspirations: Option<String>,
    pub target_industries: Vec<String>,
    pub current_skills: Vec<String>,
    pub preferred_learning: Option<String>,
    pub preferred_content_types: Vec<String>,
    pub time_commitment: Option<String>,
    pub relocation_goal: Option<String>,
    pub extracurricular_interests: Vec<String>,
    pub planning_horizon_years: u32,
}

impl Profile {
    pub fn planning_horizon_years(&self) -> u32 {
        self.planning_horizon_years.max(1)
    }
}

/// Career analysis of a profile. Feeds roadmap generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    /// Ordered from most specific to broadest.
    pub career_paths: Vec<String>,
    pub learning_tips: Vec<String>,
}

impl Analysis {
    pub fn target_role(&self) -> &str {
        self.career_paths
            .first()
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("Professional")
    }
}
