//! Single-month task generation, sized by the user's pace and project ratio.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::assistant::chat::render_completed_phases;
use crate::assistant::prompts::{NO_PREVIOUS_MONTHS_PLACEHOLDER, SINGLE_MONTH_TEMPLATE};
use crate::assistant::{RoadmapAssistant, SINGLE_MONTH_OPTIONS};
use crate::errors::{or_fallback, GenerationError};
use crate::llm_client::prompts::{
    join_list, or_not_specified, render_template, JSON_ONLY_INSTRUCTION,
};
use crate::models::chat::{CompletedPhase, Pace, Preferences};
use crate::models::profile::Profile;
use crate::models::roadmap::{MonthPlan, MonthTask, TaskKind};

/// Completed months shown to the model for context.
const RECENT_MONTHS: usize = 3;

/// How many tasks a month gets and how many of them are projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskBudget {
    pub total: u32,
    pub projects: u32,
}

impl TaskBudget {
    /// Courses and certificates.
    pub fn others(&self) -> u32 {
        self.total - self.projects
    }
}

/// relaxed = 3, moderate = 4, intensive = 6 tasks;
/// projects = max(1, round(total × ratio / 100)), never above total.
pub fn task_budget(pace: Pace, project_ratio: u8) -> TaskBudget {
    let total = pace.total_tasks();
    let ratio = f64::from(project_ratio.min(100)) / 100.0;
    let projects = ((f64::from(total) * ratio).round() as u32).clamp(1, total);
    TaskBudget { total, projects }
}

pub fn build_single_month_prompt(
    profile: &Profile,
    month: u32,
    preferences: &Preferences,
    completed_phases: &[CompletedPhase],
) -> String {
    let budget = task_budget(preferences.pace, preferences.project_ratio());
    let recent = &completed_phases[completed_phases.len().saturating_sub(RECENT_MONTHS)..];
    let focus_areas = if preferences.focus_areas.is_empty() {
        "general skills".to_string()
    } else {
        join_list(&preferences.focus_areas)
    };
    let project_ratio = preferences.project_ratio();

    render_template(
        SINGLE_MONTH_TEMPLATE,
        &[
            ("major", or_not_specified(profile.major.as_deref()).to_string()),
            (
                "career_goal",
                or_not_specified(profile.career_aspirations.as_deref()).to_string(),
            ),
            ("skills", join_list(&profile.current_skills)),
            (
                "previous_months",
                render_completed_phases(recent, NO_PREVIOUS_MONTHS_PLACEHOLDER),
            ),
            ("project_ratio", project_ratio.to_string()),
            ("course_ratio", (100 - project_ratio).to_string()),
            ("pace", preferences.pace.as_str().to_string()),
            ("total_tasks", budget.total.to_string()),
            ("project_count", budget.projects.to_string()),
            ("other_count", budget.others().to_string()),
            ("focus_areas", focus_areas),
            ("month", month.to_string()),
            ("json_only", JSON_ONLY_INSTRUCTION.to_string()),
        ],
    )
}

/// Plan returned when the model cannot produce one.
pub fn fallback_month(month: u32) -> MonthPlan {
    MonthPlan {
        month,
        title: format!("Month {month}: Building Skills"),
        focus: "Continue your learning journey".to_string(),
        tasks: vec![MonthTask {
            id: format!("m{month}_t1"),
            kind: TaskKind::Course,
            name: "Continue Learning".to_string(),
            description: "Pick up where you left off".to_string(),
            duration: "4 weeks".to_string(),
            rationale: "Maintain momentum".to_string(),
        }],
        motivation: "Dedication is key to mastery.".to_string(),
    }
}

/// Pins the plan to the requested month, trims surplus tasks and makes
/// task ids `m{month}_`-prefixed and unique.
fn repair_month(mut plan: MonthPlan, month: u32, budget: TaskBudget) -> Result<MonthPlan, GenerationError> {
    if plan.month != month {
        warn!("Model labelled month {} as {}; correcting", month, plan.month);
        plan.month = month;
    }

    if plan.tasks.is_empty() {
        return Err(GenerationError::invalid(format!("no tasks generated for month {month}")));
    }
    let total = budget.total as usize;
    if plan.tasks.len() > total {
        warn!(
            "Model returned {} tasks for month {month}; keeping the first {total}",
            plan.tasks.len()
        );
        plan.tasks.truncate(total);
    } else if plan.tasks.len() < total {
        warn!(
            "Model returned {} of {total} requested tasks for month {month}",
            plan.tasks.len()
        );
    }

    let prefix = format!("m{month}_");
    let mut seen = HashSet::new();
    for (index, task) in plan.tasks.iter_mut().enumerate() {
        let well_formed = task.id.len() > prefix.len() && task.id.starts_with(&prefix);
        if !well_formed || seen.contains(&task.id) {
            let mut n = index + 1;
            let mut candidate = format!("{prefix}t{n}");
            while seen.contains(&candidate) {
                n += 1;
                candidate = format!("{prefix}t{n}");
            }
            task.id = candidate;
        }
        seen.insert(task.id.clone());
    }

    Ok(plan)
}

impl RoadmapAssistant {
    pub async fn try_generate_single_month(
        &self,
        profile: &Profile,
        month: u32,
        preferences: &Preferences,
        completed_phases: &[CompletedPhase],
    ) -> Result<MonthPlan, GenerationError> {
        let budget = task_budget(preferences.pace, preferences.project_ratio());
        let prompt = build_single_month_prompt(profile, month, preferences, completed_phases);
        let plan: MonthPlan = self.llm().call_json(&prompt, &SINGLE_MONTH_OPTIONS).await?;
        debug!("Month {} plan carried {} tasks", month, plan.tasks.len());
        repair_month(plan, month, budget)
    }

    /// Generates the tasks for one month. Falls back to a single
    /// "Continue Learning" course on any failure.
    pub async fn generate_single_month(
        &self,
        profile: &Profile,
        month: u32,
        preferences: &Preferences,
        completed_phases: &[CompletedPhase],
    ) -> MonthPlan {
        or_fallback(
            "generate_single_month",
            self.try_generate_single_month(profile, month, preferences, completed_phases)
                .await,
            || fallback_month(month),
        )
    }
}
