//! Fixed records returned when a generation fails.

use crate::models::content::{
    CompletedItem, LinkedInContent, LinkedInContext, PostIdea, ResumeItem, TaskPost,
    TaskPostRequest,
};
use crate::models::profile::Analysis;
use crate::models::roadmap::RoadmapPhase;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn analysis() -> Analysis {
    Analysis {
        strengths: strings(&["Motivated to learn", "Clear career direction"]),
        gaps: strings(&["Need more hands-on experience"]),
        career_paths: strings(&[
            "Technology Professional",
            "Industry Specialist",
            "General Professional",
        ]),
        learning_tips: strings(&[
            "Start with foundational courses",
            "Build portfolio projects",
        ]),
    }
}

/// No roadmap rather than a generic one.
pub fn roadmap() -> Vec<RoadmapPhase> {
    Vec::new()
}

pub fn encouragement(item: &CompletedItem) -> String {
    format!(
        "Great work completing {}! You're making excellent progress toward your goals.",
        item.item_name
    )
}

pub fn resume_bullets(item: &ResumeItem) -> Vec<String> {
    let skills = if item.skills.is_empty() {
        "various skills".to_string()
    } else {
        item.skills.join(", ")
    };
    vec![
        format!(
            "Completed {} demonstrating proficiency in {}",
            item.title, skills
        ),
        format!(
            "Applied technical knowledge to solve real-world problems in {} context",
            item.item_type
        ),
    ]
}

pub fn linkedin_content(ctx: &LinkedInContext) -> LinkedInContent {
    let goal = ctx.career_goal.as_deref().filter(|g| !g.trim().is_empty());
    let skills_to_add = if ctx.new_skills.is_empty() {
        strings(&["Problem Solving", "Project Management"])
    } else {
        ctx.new_skills.clone()
    };
    LinkedInContent {
        post_ideas: vec![PostIdea {
            topic: "Learning Journey".to_string(),
            draft: format!(
                "Excited to share my progress in {}!",
                goal.unwrap_or("my career development")
            ),
            hashtags: strings(&["learning", "growth", "career"]),
        }],
        profile_summary: format!(
            "Aspiring professional focused on {} with hands-on experience in recent projects.",
            goal.unwrap_or("continuous learning")
        ),
        skills_to_add,
    }
}

pub fn task_post(task: &TaskPostRequest, ctx: &LinkedInContext) -> TaskPost {
    let goal = ctx
        .career_goal
        .as_deref()
        .filter(|g| !g.trim().is_empty())
        .unwrap_or("my career goals");
    TaskPost {
        post_content: format!(
            "Excited to share that I've completed {}! This is another step forward in my journey toward {}. The learning never stops!",
            task.item_name, goal
        ),
        hashtags: strings(&["learning", "growth", "career", "milestone"]),
        suggested_image: "A professional achievement or learning-related image".to_string(),
    }
}
