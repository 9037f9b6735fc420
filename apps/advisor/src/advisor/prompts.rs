// All LLM prompt templates for the generator role.
// Placeholders in `{braces}` are filled by `render_template` before sending.
// Reuses cross-cutting fragments from llm_client::prompts via {tone} and {json_only}.

/// Profile analysis prompt.
/// Replace: every profile field placeholder, {tone}, {json_only}
pub const ANALYZE_PROFILE_TEMPLATE: &str = r#"You are an expert career advisor analyzing a student's profile.

Student Information:
- Major: {major}
- University: {university}
- GPA: {gpa}
- Experience Level: {experience_level}
- Career Aspirations: {career_aspirations}
- Target Industries: {target_industries}
- Current Skills: {current_skills}
- Preferred Learning Style: {preferred_learning}
- Preferred Content Types: {preferred_content_types}
- Time Commitment: {time_commitment}
- Relocation Goal: {relocation_goal}
- Extracurricular Interests: {extracurricular_interests}
- Planning Horizon: {planning_horizon} Years

Task: Analyze this profile and provide:
1. Key strengths (2-3 points)
2. Skill gaps to address (2-3 points)
3. Recommended career paths (top 3, ordered from most specific to broad)
4. Learning approach optimization tips (2-3 actionable tips)
5. Advice on relocation and extracurricular balance, folded into the tips (if applicable)

{tone}

Format your response as JSON with keys: "strengths", "gaps", "career_paths", "learning_tips"
Each value should be an array of strings.

{json_only}"#;

/// Fixed industry context embedded in every roadmap prompt.
pub const INDUSTRY_TRENDS: &str = "Current Industry Trends (2025-2026):
- AI and Machine Learning integration across all sectors
- Cloud computing and distributed systems dominance
- Data privacy and cybersecurity critical importance
- Remote work and digital collaboration tools
- Sustainability and green technology focus
- API-first and microservices architectures
- Low-code/no-code platforms emergence";

/// Multi-month roadmap prompt.
/// Replace: profile placeholders, {target_role}, {skill_gaps}, {trends},
///          {start_month}, {end_month}, {timeline_months}, {month_list}, {json_only}
pub const ROADMAP_TEMPLATE: &str = r#"You are an expert educational and career strategist creating a personalized growth roadmap with MONTHLY phases.

Student Profile:
- Major: {major}
- University: {university}
- Target Role: {target_role}
- Target Industries: {target_industries}
- Experience Level: {experience_level}
- Current Skills: {current_skills}
- Skill Gaps: {skill_gaps}
- Time Commitment: {time_commitment}
- Content Preference: {preferred_content_types}
- Relocation Goal: {relocation_goal}
- Extracurricular Interests: {extracurricular_interests}

{trends}

Task: Generate a detailed, phased growth plan from Month {start_month} to Month {end_month}.

For each MONTH, provide 3-5 achievable tasks with a good mix of:
1. Courses: 1-2 specific online courses per month
2. Projects: 1 practical project per 2-3 months
3. Tests/Certifications: Spread across the timeline appropriately
4. Internships: Target application periods (usually 1-2 per year)

Guidelines:
- Professional Tone: Use concise, professional language. Do NOT use emojis.
- Monthly Granularity: Each phase represents exactly 1 MONTH.
- Progressive Difficulty: Start with fundamentals, build to advanced topics.
- Achievable Workload: 3-5 tasks per month max, considering time commitment.
- Long-term View: If relocation is a goal, include language/visa prep early.

Format as JSON with this EXACT structure:
{
  "phases": [
    {
      "phase": {start_month},
      "title": "Month {start_month}: [Theme Name]",
      "focus": "Main focus of this month",
      "courses": [
        {
          "id": "c1_m{start_month}",
          "name": "Course Name",
          "platform": "Platform Name",
          "duration": "X weeks",
          "rationale": "Why this course"
        }
      ],
      "projects": [
        {
          "id": "p1_m{start_month}",
          "name": "Project Name",
          "description": "Project description",
          "skills_demonstrated": ["skill1", "skill2"],
          "rationale": "Why this project"
        }
      ],
      "tests": [
        {"id": "t1_m{start_month}", "name": "Test Name", "provider": "Provider", "date": "Month {start_month}", "rationale": "Why this test"}
      ],
      "internships": [
        {"id": "i1_m{start_month}", "name": "Internship Name", "company": "Company", "application_window": "Dates", "rationale": "Why apply now"}
      ],
      "certificates": [
        {"id": "cert1_m{start_month}", "name": "Certificate Name", "issuer": "Issuer", "duration": "X weeks", "rationale": "Why this certificate"}
      ]
    }
  ]
}
Use empty arrays for tests, internships or certificates in months that have none.

IMPORTANT: Generate exactly {timeline_months} phases, starting from Month {start_month}.
The phase numbers MUST be exactly: {month_list}.
Each phase number MUST correspond to the actual month number.
Ensure IDs are unique by including the month number (e.g., _m{start_month}).

{json_only}"#;

/// Encouragement prompt. Output is plain text, not JSON.
/// Replace: {item_name}, {item_type}, {completed_count}, {current_phase}, {career_goal}
pub const ENCOURAGEMENT_TEMPLATE: &str = r#"A student just completed: {item_name} ({item_type})

Student's journey so far:
- Completed items: {completed_count}
- Current phase: {current_phase}
- Career goal: {career_goal}

Generate a brief, encouraging message (2-3 sentences) that:
1. Acknowledges their specific achievement
2. Connects it to their career goal
3. Motivates next steps

Keep it genuine, specific, and professional. Do NOT use emojis or markdown emphasis.
Return only the message text, nothing else."#;

/// Resume bullet prompt.
/// Replace: {item_type}, {title}, {description}, {skills}, {target_role}, {tone}, {json_only}
pub const RESUME_BULLETS_TEMPLATE: &str = r#"Generate professional resume bullet points for:

Type: {item_type}
Title: {title}
Description: {description}
Skills Used: {skills}
Target Role: {target_role}

Guidelines:
- Start with strong action verbs (Developed, Implemented, Designed, Led, etc.)
- Include quantifiable metrics where possible
- Highlight technical skills and tools
- Show impact and results
- 2-3 bullet points
- Each bullet: 1-2 lines maximum
- {tone}

Format as JSON:
{"bullets": ["bullet 1", "bullet 2", "bullet 3"]}

{json_only}"#;

/// LinkedIn content prompt.
/// Replace: {recent_achievements}, {new_skills}, {career_goal}, {current_phase}, {tone}, {json_only}
pub const LINKEDIN_CONTENT_TEMPLATE: &str = r#"Generate LinkedIn content suggestions for a student with:

Profile:
- Recent achievements: {recent_achievements}
- New skills: {new_skills}
- Career goal: {career_goal}
- Current phase: {current_phase}

Generate:
1. Post Ideas: 3 LinkedIn post ideas that showcase their learning journey and achievements
2. Profile Summary: A 2-3 sentence professional summary highlighting their skills and aspirations
3. Skills to Add: 5-7 skills they should add to their LinkedIn profile

Guidelines:
- Industry-appropriate language.
- {tone}

Format as JSON:
{
  "post_ideas": [
    {"topic": "...", "draft": "...", "hashtags": ["..."]}
  ],
  "profile_summary": "...",
  "skills_to_add": ["skill1", "skill2"]
}

{json_only}"#;

/// Single-task LinkedIn post prompt.
/// Replace: {item_name}, {item_type}, {notes}, {career_goal}, {skills}, {recent_achievements},
///          {tone}, {json_only}
pub const TASK_POST_TEMPLATE: &str = r#"Generate a professional LinkedIn post for someone who just completed:

Task: {item_name}
Type: {item_type}
Description: {notes}

About the person:
- Career Goal: {career_goal}
- Skills: {skills}
- Recent Achievements: {recent_achievements}

Generate a compelling, professional LinkedIn post that:
1. Celebrates the achievement authentically (not boastful)
2. Shares key learnings or insights
3. Connects it to their career journey
4. Ends with a call-to-action or question to encourage engagement
5. Is 150-250 words
6. Includes 3-5 relevant hashtags
7. {tone}

Format as JSON:
{
  "post_content": "The full post text...",
  "hashtags": ["hashtag1", "hashtag2"],
  "suggested_image": "Description of an image that would complement this post"
}

{json_only}"#;
