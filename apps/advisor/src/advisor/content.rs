//! Encouragement, resume bullets and LinkedIn content for completed work.

use tracing::debug;

use crate::advisor::prompts::{
    ENCOURAGEMENT_TEMPLATE, LINKEDIN_CONTENT_TEMPLATE, RESUME_BULLETS_TEMPLATE,
    TASK_POST_TEMPLATE,
};
use crate::advisor::{
    fallback, CareerAdvisor, ENCOURAGEMENT_OPTIONS, LINKEDIN_CONTENT_OPTIONS,
    RESUME_BULLETS_OPTIONS, TASK_POST_OPTIONS,
};
use crate::errors::{or_fallback, GenerationError};
use crate::llm_client::prompts::{
    join_list, or_placeholder, render_template, JSON_ONLY_INSTRUCTION, PROFESSIONAL_TONE,
};
use crate::models::content::{
    BulletsEnvelope, CompletedItem, LinkedInContent, LinkedInContext, ProgressContext,
    ResumeItem, TaskPost, TaskPostRequest,
};

const DEFAULT_CAREER_GOAL: &str = "Professional development";

pub fn build_encouragement_prompt(item: &CompletedItem, progress: &ProgressContext) -> String {
    render_template(
        ENCOURAGEMENT_TEMPLATE,
        &[
            ("item_name", item.item_name.clone()),
            ("item_type", item.item_type.clone()),
            ("completed_count", progress.completed_count.to_string()),
            ("current_phase", progress.current_phase.to_string()),
            (
                "career_goal",
                or_placeholder(progress.career_goal.as_deref(), DEFAULT_CAREER_GOAL).to_string(),
            ),
        ],
    )
}

pub fn build_resume_bullets_prompt(item: &ResumeItem) -> String {
    render_template(
        RESUME_BULLETS_TEMPLATE,
        &[
            ("item_type", item.item_type.clone()),
            ("title", item.title.clone()),
            (
                "description",
                or_placeholder(item.description.as_deref(), "Not provided").to_string(),
            ),
            ("skills", join_list(&item.skills)),
            (
                "target_role",
                or_placeholder(item.target_role.as_deref(), "Professional").to_string(),
            ),
            ("tone", PROFESSIONAL_TONE.to_string()),
            ("json_only", JSON_ONLY_INSTRUCTION.to_string()),
        ],
    )
}

pub fn build_linkedin_content_prompt(ctx: &LinkedInContext) -> String {
    render_template(
        LINKEDIN_CONTENT_TEMPLATE,
        &[
            ("recent_achievements", join_list(&ctx.recent_achievements)),
            ("new_skills", join_list(&ctx.new_skills)),
            (
                "career_goal",
                or_placeholder(ctx.career_goal.as_deref(), DEFAULT_CAREER_GOAL).to_string(),
            ),
            (
                "current_phase",
                or_placeholder(ctx.current_phase.as_deref(), "Learning").to_string(),
            ),
            ("tone", PROFESSIONAL_TONE.to_string()),
            ("json_only", JSON_ONLY_INSTRUCTION.to_string()),
        ],
    )
}

pub fn build_task_post_prompt(task: &TaskPostRequest, ctx: &LinkedInContext) -> String {
    render_template(
        TASK_POST_TEMPLATE,
        &[
            ("item_name", task.item_name.clone()),
            ("item_type", task.item_type.clone()),
            ("notes", or_placeholder(task.notes.as_deref(), "N/A").to_string()),
            (
                "career_goal",
                or_placeholder(ctx.career_goal.as_deref(), DEFAULT_CAREER_GOAL).to_string(),
            ),
            ("skills", join_list(&ctx.new_skills)),
            ("recent_achievements", join_list(&ctx.recent_achievements)),
            ("tone", PROFESSIONAL_TONE.to_string()),
            ("json_only", JSON_ONLY_INSTRUCTION.to_string()),
        ],
    )
}

impl CareerAdvisor {
    /// Raw text reply, no JSON. Blank text is a failure.
    pub async fn try_generate_encouragement(
        &self,
        item: &CompletedItem,
        progress: &ProgressContext,
    ) -> Result<String, GenerationError> {
        let prompt = build_encouragement_prompt(item, progress);
        Ok(self.llm().call(&prompt, &ENCOURAGEMENT_OPTIONS).await?)
    }

    pub async fn generate_encouragement(
        &self,
        item: &CompletedItem,
        progress: &ProgressContext,
    ) -> String {
        or_fallback(
            "generate_encouragement",
            self.try_generate_encouragement(item, progress).await,
            || fallback::encouragement(item),
        )
    }

    pub async fn try_generate_resume_bullets(
        &self,
        item: &ResumeItem,
    ) -> Result<Vec<String>, GenerationError> {
        let prompt = build_resume_bullets_prompt(item);
        let envelope: BulletsEnvelope = self
            .llm()
            .call_json(&prompt, &RESUME_BULLETS_OPTIONS)
            .await?;

        let bullets: Vec<String> = envelope
            .bullets
            .into_iter()
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .collect();
        if bullets.is_empty() {
            return Err(GenerationError::invalid("model returned no resume bullets"));
        }
        debug!("Generated {} resume bullets for {}", bullets.len(), item.title);
        Ok(bullets)
    }

    pub async fn generate_resume_bullets(&self, item: &ResumeItem) -> Vec<String> {
        or_fallback(
            "generate_resume_bullets",
            self.try_generate_resume_bullets(item).await,
            || fallback::resume_bullets(item),
        )
    }

    pub async fn try_generate_linkedin_content(
        &self,
        ctx: &LinkedInContext,
    ) -> Result<LinkedInContent, GenerationError> {
        let prompt = build_linkedin_content_prompt(ctx);
        Ok(self
            .llm()
            .call_json(&prompt, &LINKEDIN_CONTENT_OPTIONS)
            .await?)
    }

    pub async fn generate_linkedin_content(&self, ctx: &LinkedInContext) -> LinkedInContent {
        or_fallback(
            "generate_linkedin_content",
            self.try_generate_linkedin_content(ctx).await,
            || fallback::linkedin_content(ctx),
        )
    }

    pub async fn try_generate_task_post(
        &self,
        task: &TaskPostRequest,
        ctx: &LinkedInContext,
    ) -> Result<TaskPost, GenerationError> {
        let prompt = build_task_post_prompt(task, ctx);
        let post: TaskPost = self.llm().call_json(&prompt, &TASK_POST_OPTIONS).await?;
        if post.post_content.trim().is_empty() {
            return Err(GenerationError::invalid("model returned an empty post"));
        }
        Ok(post)
    }

    pub async fn generate_task_post(&self, task: &TaskPostRequest, ctx: &LinkedInContext) -> TaskPost {
        or_fallback(
            "generate_task_post",
            self.try_generate_task_post(task, ctx).await,
            || fallback::task_post(task, ctx),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::llm_client::testing::ScriptedOracle;
    use crate::llm_client::LlmClient;

    fn advisor(oracle: &Arc<ScriptedOracle>) -> CareerAdvisor {
        CareerAdvisor::new(LlmClient::new(oracle.clone(), "test-model"))
    }

    fn completed() -> CompletedItem {
        CompletedItem {
            item_name: "Intro to Databases".to_string(),
            item_type: "course".to_string(),
        }
    }

    fn progress() -> ProgressContext {
        ProgressContext {
            completed_count: 4,
            current_phase: 2,
            career_goal: None,
        }
    }

    fn resume_item() -> ResumeItem {
        ResumeItem {
            item_type: "project".to_string(),
            title: "Expense Tracker".to_string(),
            description: None,
            skills: vec!["React".to_string(), "Node.js".to_string()],
            target_role: None,
        }
    }

    fn linkedin_ctx() -> LinkedInContext {
        LinkedInContext {
            recent_achievements: vec!["Finished SQL course".to_string()],
            new_skills: vec!["SQL".to_string()],
            career_goal: Some("Data Analyst".to_string()),
            current_phase: None,
        }
    }

    fn task() -> TaskPostRequest {
        TaskPostRequest {
            item_name: "Portfolio Site".to_string(),
            item_type: "project".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_encouragement_prompt_defaults_goal() {
        let prompt = build_encouragement_prompt(&completed(), &progress());
        assert!(prompt.contains("A student just completed: Intro to Databases (course)"));
        assert!(prompt.contains("- Completed items: 4"));
        assert!(prompt.contains("- Career goal: Professional development"));
    }

    #[test]
    fn test_resume_prompt_placeholders() {
        let prompt = build_resume_bullets_prompt(&resume_item());
        assert!(prompt.contains("Description: Not provided"));
        assert!(prompt.contains("Skills Used: React, Node.js"));
        assert!(prompt.contains("Target Role: Professional"));
        assert!(prompt.contains("Do NOT use emojis"));
    }

    #[test]
    fn test_task_post_prompt_notes_placeholder() {
        let prompt = build_task_post_prompt(&task(), &linkedin_ctx());
        assert!(prompt.contains("Description: N/A"));
        assert!(prompt.contains("- Career Goal: Data Analyst"));
    }

    #[tokio::test]
    async fn test_encouragement_returns_trimmed_text() {
        let oracle = Arc::new(ScriptedOracle::replying("\n  Nice work on databases.  \n"));
        let message = advisor(&oracle)
            .generate_encouragement(&completed(), &progress())
            .await;
        assert_eq!(message, "Nice work on databases.");
        assert_eq!(oracle.calls()[0].options, ENCOURAGEMENT_OPTIONS);
    }

    #[tokio::test]
    async fn test_encouragement_fallback() {
        let oracle = Arc::new(ScriptedOracle::failing(401, "bad key"));
        let message = advisor(&oracle)
            .generate_encouragement(&completed(), &progress())
            .await;
        assert_eq!(
            message,
            "Great work completing Intro to Databases! You're making excellent progress toward your goals."
        );
    }

    #[tokio::test]
    async fn test_resume_bullets_parsed_and_blank_dropped() {
        let oracle = Arc::new(ScriptedOracle::replying(
            r#"```{"bullets": ["Built an expense tracker with React", "  ", "Deployed on Render"]}```"#,
        ));
        let bullets = advisor(&oracle).generate_resume_bullets(&resume_item()).await;
        assert_eq!(
            bullets,
            vec![
                "Built an expense tracker with React".to_string(),
                "Deployed on Render".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_resume_bullets_empty_list_uses_fallback() {
        let oracle = Arc::new(ScriptedOracle::replying(r#"{"bullets": []}"#));
        let bullets = advisor(&oracle).generate_resume_bullets(&resume_item()).await;
        assert_eq!(bullets, fallback::resume_bullets(&resume_item()));
        assert!(bullets[0].contains("React, Node.js"));
    }

    #[tokio::test]
    async fn test_linkedin_content_parsed() {
        let body = r#"{
            "post_ideas": [{"topic": "SQL", "draft": "Learned SQL", "hashtags": ["sql"]}],
            "profile_summary": "Aspiring analyst.",
            "skills_to_add": ["SQL", "Excel"]
        }"#;
        let oracle = Arc::new(ScriptedOracle::replying(body));
        let content = advisor(&oracle).generate_linkedin_content(&linkedin_ctx()).await;
        assert_eq!(content.post_ideas[0].topic, "SQL");
        assert_eq!(content.skills_to_add.len(), 2);
    }

    #[tokio::test]
    async fn test_linkedin_content_fallback_on_prose() {
        let oracle = Arc::new(ScriptedOracle::replying("Here are some ideas: ..."));
        let content = advisor(&oracle).generate_linkedin_content(&linkedin_ctx()).await;
        assert_eq!(content, fallback::linkedin_content(&linkedin_ctx()));
    }

    #[tokio::test]
    async fn test_task_post_parsed() {
        let body = r#"{"post_content": "I just shipped my portfolio.", "hashtags": ["webdev"], "suggested_image": "Screenshot"}"#;
        let oracle = Arc::new(ScriptedOracle::replying(body));
        let post = advisor(&oracle).generate_task_post(&task(), &linkedin_ctx()).await;
        assert_eq!(post.post_content, "I just shipped my portfolio.");
        assert_eq!(oracle.calls()[0].options, TASK_POST_OPTIONS);
    }

    #[tokio::test]
    async fn test_task_post_fallback() {
        let oracle = Arc::new(ScriptedOracle::failing(500, "internal"));
        let post = advisor(&oracle).generate_task_post(&task(), &linkedin_ctx()).await;
        assert!(post.post_content.contains("completed Portfolio Site"));
        assert!(post.post_content.contains("toward Data Analyst"));
        assert_eq!(post.hashtags.len(), 4);
    }
}
