use serde::{Deserialize, Serialize};

/// One period of a learning roadmap, e.g. "March 2025" and the skills to pick up in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapEntry {
    /// Time period label.
    pub label: String,
    /// Ordered skills or steps for the period.
    pub items: Vec<String>,
}

/// A stage of an illustrative academic/career progression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPhase {
    pub label: String,
    /// Completion percentage, 0 to 100.
    pub progress: u8,
    pub milestones: Vec<String>,
}

/// A course placed in a recommended semester timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecommendation {
    pub semester: String,
    pub name: String,
    pub code: String,
    pub credits: u32,
}

/// A learning resource suggested alongside a roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Credit load for a single semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterLoad {
    pub semester: String,
    pub credits: u32,
    pub courses: u32,
    pub completed: u32,
}

/// Credits attributed to one course type (required, elective, practical).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseTypeShare {
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Everything shown once a career roadmap has been generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerGoalsResults {
    pub roadmap: Vec<RoadmapEntry>,
    pub career_path: Vec<CareerPhase>,
    pub resources: Vec<Resource>,
}

/// Everything shown once a course plan has been generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoursePlanResults {
    pub courses: Vec<CourseRecommendation>,
    pub semester_credits: Vec<SemesterLoad>,
    pub course_types: Vec<CourseTypeShare>,
}
