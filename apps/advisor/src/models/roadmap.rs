use serde::{Deserialize, Serialize};

/// One month of a roadmap. `phase` is the calendar month number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub phase: u32,
    pub title: String,
    #[serde(default)]
    pub focus: String,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tests: Vec<Test>,
    #[serde(default)]
    pub internships: Vec<Internship>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

impl RoadmapPhase {
    /// Empty phase used to fill a month the model left out.
    pub fn placeholder(month: u32) -> Self {
        Self {
            phase: month,
            title: format!("Month {month}: Review and Consolidate"),
            focus: "Review earlier material and catch up on unfinished tasks".to_string(),
            courses: Vec::new(),
            projects: Vec::new(),
            tests: Vec::new(),
            internships: Vec::new(),
            certificates: Vec::new(),
        }
    }

    pub fn task_count(&self) -> usize {
        self.courses.len()
            + self.projects.len()
            + self.tests.len()
            + self.internships.len()
            + self.certificates.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills_demonstrated: Vec<String>,
    #[serde(default)]
    pub rationale: String,
}

/// An exam or standardized test to sit during the month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Test {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internship {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub application_window: Option<String>,
    #[serde(default)]
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub rationale: String,
}

/// Oracle envelope for multi-month generation.
#[derive(Debug, Clone, Deserialize)]
pub struct RoadmapEnvelope {
    pub phases: Vec<RoadmapPhase>,
}

/// Kind of a single-month task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Course,
    Project,
    #[serde(alias = "certification")]
    Certificate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthTask {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub rationale: String,
}

/// Tasks for one month, generated on demand by the assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthPlan {
    pub month: u32,
    pub title: String,
    #[serde(default)]
    pub focus: String,
    pub tasks: Vec<MonthTask>,
    #[serde(default)]
    pub motivation: String,
}
