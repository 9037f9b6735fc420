//! Profile Analyzer — strengths, gaps, career paths and learning tips for a profile.

use tracing::debug;

use crate::advisor::prompts::ANALYZE_PROFILE_TEMPLATE;
use crate::advisor::{fallback, CareerAdvisor, ANALYSIS_OPTIONS};
use crate::errors::{or_fallback, GenerationError};
use crate::llm_client::prompts::{
    join_list, or_not_specified, or_placeholder, render_template, JSON_ONLY_INSTRUCTION,
    PROFESSIONAL_TONE,
};
use crate::models::profile::{Analysis, Profile};

/// Profile placeholders shared by the analysis and roadmap templates.
/// Absent scalars render as "Not specified"; lists are comma-joined.
pub(crate) fn profile_fields(profile: &Profile) -> Vec<(&'static str, String)> {
    let gpa = profile.gpa.map(|g| g.to_string());
    vec![
        ("major", or_not_specified(profile.major.as_deref()).to_string()),
        ("university", or_not_specified(profile.university.as_deref()).to_string()),
        ("gpa", or_not_specified(gpa.as_deref()).to_string()),
        (
            "experience_level",
            or_not_specified(profile.experience_level.as_deref()).to_string(),
        ),
        (
            "career_aspirations",
            or_not_specified(profile.career_aspirations.as_deref()).to_string(),
        ),
        ("target_industries", join_list(&profile.target_industries)),
        ("current_skills", join_list(&profile.current_skills)),
        (
            "preferred_learning",
            or_not_specified(profile.preferred_learning.as_deref()).to_string(),
        ),
        (
            "preferred_content_types",
            join_list(&profile.preferred_content_types),
        ),
        (
            "time_commitment",
            or_not_specified(profile.time_commitment.as_deref()).to_string(),
        ),
        (
            "relocation_goal",
            or_placeholder(profile.relocation_goal.as_deref(), "None").to_string(),
        ),
        (
            "extracurricular_interests",
            join_list(&profile.extracurricular_interests),
        ),
        (
            "planning_horizon",
            profile.planning_horizon_years().to_string(),
        ),
    ]
}

pub fn build_analysis_prompt(profile: &Profile) -> String {
    let mut values = profile_fields(profile);
    values.push(("tone", PROFESSIONAL_TONE.to_string()));
    values.push(("json_only", JSON_ONLY_INSTRUCTION.to_string()));
    render_template(ANALYZE_PROFILE_TEMPLATE, &values)
}

impl CareerAdvisor {
    /// One LLM call; fails on oracle error or if any of the four keys is missing.
    pub async fn try_analyze_profile(&self, profile: &Profile) -> Result<Analysis, GenerationError> {
        let prompt = build_analysis_prompt(profile);
        let analysis: Analysis = self.llm().call_json(&prompt, &ANALYSIS_OPTIONS).await?;
        debug!(
            "Profile analysis: {} strengths, {} gaps, {} career paths",
            analysis.strengths.len(),
            analysis.gaps.len(),
            analysis.career_paths.len()
        );
        Ok(analysis)
    }

    /// Analyzes a profile, returning the generic analysis on any failure.
    pub async fn analyze_profile(&self, profile: &Profile) -> Analysis {
        or_fallback(
            "analyze_profile",
            self.try_analyze_profile(profile).await,
            fallback::analysis,
        )
    }
}
