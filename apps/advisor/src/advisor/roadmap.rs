//! Roadmap Generator — a month-by-month growth plan for a profile.
//!
//! Model output is untrusted. After parsing, `repair_roadmap` enforces the
//! requested month range and id uniqueness before anything reaches the caller.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use crate::advisor::analyzer::profile_fields;
use crate::advisor::prompts::{INDUSTRY_TRENDS, ROADMAP_TEMPLATE};
use crate::advisor::{fallback, CareerAdvisor, ROADMAP_OPTIONS};
use crate::errors::{or_fallback, GenerationError};
use crate::llm_client::prompts::{join_list, render_template, JSON_ONLY_INSTRUCTION};
use crate::models::profile::{Analysis, Profile};
use crate::models::roadmap::{
    Certificate, Course, Internship, Project, RoadmapEnvelope, RoadmapPhase, Test,
};

/// Longest roadmap accepted in one request: ten years of monthly phases.
pub const MAX_TIMELINE_MONTHS: u32 = 120;

/// Builds the roadmap prompt for months `start_month ..= start_month + timeline_months - 1`.
pub fn build_roadmap_prompt(
    profile: &Profile,
    analysis: &Analysis,
    timeline_months: u32,
    start_month: u32,
) -> String {
    let end_month = start_month.saturating_add(timeline_months.saturating_sub(1));
    let month_list = (start_month..=end_month)
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let mut values = profile_fields(profile);
    values.extend([
        ("target_role", analysis.target_role().to_string()),
        ("skill_gaps", join_list(&analysis.gaps)),
        ("trends", INDUSTRY_TRENDS.to_string()),
        ("start_month", start_month.to_string()),
        ("end_month", end_month.to_string()),
        ("timeline_months", timeline_months.to_string()),
        ("month_list", month_list),
        ("json_only", JSON_ONLY_INSTRUCTION.to_string()),
    ]);
    render_template(ROADMAP_TEMPLATE, &values)
}

impl CareerAdvisor {
    pub async fn try_generate_roadmap(
        &self,
        profile: &Profile,
        analysis: &Analysis,
        timeline_months: u32,
        start_month: u32,
    ) -> Result<Vec<RoadmapPhase>, GenerationError> {
        if timeline_months == 0 {
            return Err(GenerationError::invalid("timeline_months must be at least 1"));
        }
        if timeline_months > MAX_TIMELINE_MONTHS {
            return Err(GenerationError::invalid(format!(
                "timeline_months {timeline_months} exceeds the limit of {MAX_TIMELINE_MONTHS}"
            )));
        }
        if start_month == 0 {
            return Err(GenerationError::invalid("start_month is 1-based"));
        }

        let prompt = build_roadmap_prompt(profile, analysis, timeline_months, start_month);
        let envelope: RoadmapEnvelope = self.llm().call_json(&prompt, &ROADMAP_OPTIONS).await?;
        debug!("Roadmap response carried {} phases", envelope.phases.len());

        repair_roadmap(envelope.phases, start_month, timeline_months)
    }

    /// Generates `timeline_months` monthly phases starting at `start_month`.
    /// Returns an empty roadmap on any failure.
    pub async fn generate_roadmap(
        &self,
        profile: &Profile,
        analysis: &Analysis,
        timeline_months: u32,
        start_month: u32,
    ) -> Vec<RoadmapPhase> {
        or_fallback(
            "generate_roadmap",
            self.try_generate_roadmap(profile, analysis, timeline_months, start_month)
                .await,
            fallback::roadmap,
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output repair
// ────────────────────────────────────────────────────────────────────────────

/// Forces the roadmap to exactly one phase per requested month:
/// out-of-range phases are dropped, repeated months keep their first phase,
/// missing months get an empty placeholder. Ids are then made unique and
/// month-suffixed. Fails when no phase falls inside the requested range.
pub fn repair_roadmap(
    phases: Vec<RoadmapPhase>,
    start_month: u32,
    timeline_months: u32,
) -> Result<Vec<RoadmapPhase>, GenerationError> {
    let end_month = start_month.saturating_add(timeline_months.saturating_sub(1));
    let mut by_month: BTreeMap<u32, RoadmapPhase> = BTreeMap::new();

    for phase in phases {
        if phase.phase < start_month || phase.phase > end_month {
            warn!(
                "Dropping phase for month {} outside requested range {}-{}",
                phase.phase, start_month, end_month
            );
            continue;
        }
        if by_month.contains_key(&phase.phase) {
            warn!("Dropping duplicate phase for month {}", phase.phase);
            continue;
        }
        by_month.insert(phase.phase, phase);
    }

    if by_month.is_empty() {
        return Err(GenerationError::invalid(format!(
            "no roadmap phases for months {start_month}-{end_month}"
        )));
    }

    let mut repaired: Vec<RoadmapPhase> = (start_month..=end_month)
        .map(|month| {
            by_month.remove(&month).unwrap_or_else(|| {
                warn!("Model omitted month {month}; inserting placeholder phase");
                RoadmapPhase::placeholder(month)
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for phase in &mut repaired {
        let month = phase.phase;
        let rewritten = repair_ids(&mut phase.courses, "c", month, &mut seen)
            + repair_ids(&mut phase.projects, "p", month, &mut seen)
            + repair_ids(&mut phase.tests, "t", month, &mut seen)
            + repair_ids(&mut phase.internships, "i", month, &mut seen)
            + repair_ids(&mut phase.certificates, "cert", month, &mut seen);
        if rewritten > 0 {
            warn!("Rewrote {rewritten} ids in month {month}");
        }
    }

    Ok(repaired)
}

/// Roadmap sub-records carrying a roadmap-unique id.
trait RoadmapItem {
    fn id_mut(&mut self) -> &mut String;
}

impl RoadmapItem for Course {
    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }
}

impl RoadmapItem for Project {
    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }
}

impl RoadmapItem for Test {
    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }
}

impl RoadmapItem for Internship {
    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }
}

impl RoadmapItem for Certificate {
    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }
}

/// Rewrites ids lacking the `_m{month}` suffix or already used elsewhere to
/// `{prefix}{n}_m{month}`. Returns how many ids changed.
fn repair_ids<T: RoadmapItem>(
    items: &mut [T],
    prefix: &str,
    month: u32,
    seen: &mut HashSet<String>,
) -> usize {
    let suffix = format!("_m{month}");
    let mut rewritten = 0;

    for (index, item) in items.iter_mut().enumerate() {
        let id = item.id_mut();
        let well_formed = id.len() > suffix.len() && id.ends_with(&suffix);
        if !well_formed || seen.contains(id.as_str()) {
            let mut n = index + 1;
            let mut candidate = format!("{prefix}{n}{suffix}");
            while seen.contains(&candidate) {
                n += 1;
                candidate = format!("{prefix}{n}{suffix}");
            }
            *id = candidate;
            rewritten += 1;
        }
        seen.insert(id.clone());
    }

    rewritten
}
