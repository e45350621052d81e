//! Embedded example datasets.
//!
//! Every "generated" roadmap and course plan is one of the fixed tracks
//! below. Tables are kept as static slices and converted to owned models on
//! demand so responses can be serialized and handed out freely.

use serde::{Deserialize, Serialize};

use crate::models::*;

type Table = &'static [(&'static str, &'static [&'static str])];

const ML_ENGINEER_ROADMAP: Table = &[
    (
        "March 2025",
        &[
            "Learn Python & NumPy (LinkedIn Learning)",
            "Start \"Machine Learning Foundations\" (Coursera)",
            "Implement a Linear Regression model (Kaggle project)",
        ],
    ),
    (
        "April 2025",
        &[
            "Learn TensorFlow/PyTorch (Udacity)",
            "Work on a Neural Network from scratch",
            "Participate in a Kaggle competition",
        ],
    ),
    (
        "May 2025",
        &[
            "Study MLOps & Model Deployment (AWS, GCP)",
            "Deploy a Flask-based ML API on AWS",
            "Join an AI-focused hackathon",
        ],
    ),
];

const DATA_SCIENTIST_ROADMAP: Table = &[
    (
        "March 2025",
        &[
            "Learn Python & Pandas (DataCamp)",
            "Start \"Data Science Specialization\" (Coursera)",
            "Practice data cleaning and visualization (Tableau)",
        ],
    ),
    (
        "April 2025",
        &[
            "Learn statistical analysis (edX)",
            "Work on exploratory data analysis projects",
            "Participate in a data visualization challenge",
        ],
    ),
    (
        "May 2025",
        &[
            "Study Big Data technologies (Hadoop, Spark)",
            "Build a data pipeline with Apache Airflow",
            "Join a data science hackathon",
        ],
    ),
];

const CAREER_PATH: &[(&str, u8, &[&str])] = &[
    (
        "Undergraduate Studies",
        75,
        &[
            "Complete core courses",
            "Participate in research projects",
            "Gain internship experience",
        ],
    ),
    (
        "Graduate School Application",
        30,
        &[
            "Prepare for GRE exam",
            "Write research proposal",
            "Contact potential advisors",
        ],
    ),
    (
        "Career Development",
        10,
        &[
            "Build professional network",
            "Attend industry conferences",
            "Obtain certifications",
        ],
    ),
];

const RESOURCES: &[(&str, &str, &str)] = &[
    (
        "LinkedIn Learning",
        "Professional skills online courses",
        "Online Learning",
    ),
    (
        "Industry Workshops",
        "Network with industry professionals",
        "Offline Events",
    ),
    (
        "Professional Certifications",
        "Enhance career competitiveness",
        "Career Development",
    ),
    (
        "Mentorship Program",
        "One-on-one career guidance",
        "Personal Growth",
    ),
];

type CourseTable = &'static [(&'static str, &'static str, &'static str, u32)];

const ML_ENGINEER_COURSES: CourseTable = &[
    ("Fall 2025", "Data Structures & Algorithms", "CS201", 4),
    ("Spring 2026", "Introduction to Machine Learning", "AI301", 3),
    ("Fall 2026", "Deep Learning & Neural Networks", "AI450", 4),
    ("Spring 2027", "Capstone Project in AI", "AI499", 6),
];

const SOFTWARE_DEVELOPER_COURSES: CourseTable = &[
    ("Fall 2025", "Data Structures & Algorithms", "CS201", 4),
    ("Spring 2026", "Software Engineering", "SE301", 3),
    ("Fall 2026", "Web Development", "WD401", 4),
    ("Spring 2027", "Software Development Capstone", "SE499", 6),
];

const SEMESTER_CREDITS: &[(&str, u32, u32, u32)] = &[
    ("Spring 2024", 15, 5, 3),
    ("Fall 2024", 18, 6, 0),
    ("Spring 2025", 12, 4, 0),
];

const COURSE_TYPES: &[(&str, u32)] = &[
    ("Required Courses", 45),
    ("Elective Courses", 30),
    ("Practical Courses", 15),
];

const FAQ: &[(&str, &str)] = &[
    (
        "How do I start using StudyPath.AI?",
        "After registering an account, enter your learning goals and current course information, and the system will generate a personalized learning plan for you.",
    ),
    (
        "How are course recommendations generated?",
        "We use advanced AI algorithms to recommend the most suitable courses based on your learning history, interests, and career goals.",
    ),
    (
        "How can I update my learning plan?",
        "You can update your goals and preferences in your profile at any time, and the system will adjust recommendations in real-time.",
    ),
];

/// Which example learning roadmap to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadmapTrack {
    MlEngineer,
    DataScientist,
}

impl RoadmapTrack {
    pub fn entries(self) -> Vec<RoadmapEntry> {
        let table = match self {
            Self::MlEngineer => ML_ENGINEER_ROADMAP,
            Self::DataScientist => DATA_SCIENTIST_ROADMAP,
        };

        table
            .iter()
            .map(|(label, items)| RoadmapEntry {
                label: label.to_string(),
                items: items.iter().map(|s| s.to_string()).collect(),
            })
            .collect()
    }
}

/// Which example course timeline to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoursePlanTrack {
    MlEngineer,
    SoftwareDeveloper,
}

impl CoursePlanTrack {
    pub fn courses(self) -> Vec<CourseRecommendation> {
        let table = match self {
            Self::MlEngineer => ML_ENGINEER_COURSES,
            Self::SoftwareDeveloper => SOFTWARE_DEVELOPER_COURSES,
        };

        table
            .iter()
            .map(|(semester, name, code, credits)| CourseRecommendation {
                semester: semester.to_string(),
                name: name.to_string(),
                code: code.to_string(),
                credits: *credits,
            })
            .collect()
    }
}

pub fn career_path() -> Vec<CareerPhase> {
    CAREER_PATH
        .iter()
        .map(|(label, progress, milestones)| CareerPhase {
            label: label.to_string(),
            progress: *progress,
            milestones: milestones.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

pub fn resources() -> Vec<Resource> {
    RESOURCES
        .iter()
        .map(|(title, description, kind)| Resource {
            title: title.to_string(),
            description: description.to_string(),
            kind: kind.to_string(),
        })
        .collect()
}

pub fn semester_credits() -> Vec<SemesterLoad> {
    SEMESTER_CREDITS
        .iter()
        .map(|(semester, credits, courses, completed)| SemesterLoad {
            semester: semester.to_string(),
            credits: *credits,
            courses: *courses,
            completed: *completed,
        })
        .collect()
}

pub fn course_types() -> Vec<CourseTypeShare> {
    COURSE_TYPES
        .iter()
        .map(|(name, value)| CourseTypeShare {
            name: name.to_string(),
            value: *value,
        })
        .collect()
}

pub fn faq() -> Vec<Faq> {
    FAQ.iter()
        .map(|(question, answer)| Faq {
            question: question.to_string(),
            answer: answer.to_string(),
        })
        .collect()
}
