//! Sample catalog, students and enrollments for local development.

use anyhow::Result;

use super::Database;
use crate::models::*;

/// Result of [`seed_database`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Courses already existed, nothing was written.
    AlreadySeeded,
    Seeded {
        courses: usize,
        students: usize,
        enrollments: usize,
    },
}

// (code, name, description, credits, difficulty, weekly hours)
const COURSES: &[(&str, &str, &str, u32, f64, f64)] = &[
    ("CS101", "Introduction to Programming", "Basic programming concepts using Python", 3, 2.5, 6.0),
    ("CS201", "Data Structures", "Fundamental data structures and algorithms", 4, 3.5, 8.0),
    ("CS301", "Database Systems", "Database design and SQL", 3, 3.0, 7.0),
    ("CS401", "Artificial Intelligence", "Introduction to AI concepts and algorithms", 4, 4.0, 10.0),
    ("MATH101", "Calculus I", "Limits, derivatives, and integrals", 4, 3.0, 8.0),
    ("MATH201", "Linear Algebra", "Vector spaces, matrices, and linear transformations", 3, 3.5, 7.0),
    ("STAT101", "Introduction to Statistics", "Basic statistical concepts and methods", 3, 2.5, 6.0),
    ("ENG101", "Composition", "Academic writing and rhetoric", 3, 2.0, 5.0),
    ("ENG201", "Technical Writing", "Writing for technical and professional contexts", 3, 2.5, 5.0),
    ("LIT101", "Introduction to Literature", "Analysis of literary texts", 3, 2.0, 4.0),
];

// (course, prerequisite)
const PREREQUISITES: &[(&str, &str)] = &[
    ("CS201", "CS101"),
    ("CS301", "CS101"),
    ("CS401", "CS201"),
    ("MATH201", "MATH101"),
];

// (username, major, gpa)
const STUDENTS: &[(&str, &str, f64)] = &[
    ("alice", "CS", 3.8),
    ("bob", "MATH", 3.5),
    ("charlie", "ENG", 3.9),
];

// (username, course code, semester, grade, status)
const ENROLLMENTS: &[(&str, &str, &str, Option<&str>, EnrollmentStatus)] = &[
    ("alice", "CS101", "Fall 2022", Some("A"), EnrollmentStatus::Completed),
    ("alice", "CS201", "Spring 2023", Some("B+"), EnrollmentStatus::Completed),
    ("alice", "MATH101", "Fall 2022", Some("A-"), EnrollmentStatus::Completed),
    ("alice", "CS301", "Fall 2023", None, EnrollmentStatus::InProgress),
    ("bob", "MATH101", "Fall 2022", Some("A"), EnrollmentStatus::Completed),
    ("bob", "MATH201", "Spring 2023", Some("A-"), EnrollmentStatus::Completed),
    ("bob", "STAT101", "Fall 2023", None, EnrollmentStatus::InProgress),
    ("charlie", "ENG101", "Fall 2022", Some("A"), EnrollmentStatus::Completed),
    ("charlie", "ENG201", "Spring 2023", Some("A"), EnrollmentStatus::Completed),
    ("charlie", "LIT101", "Fall 2023", None, EnrollmentStatus::InProgress),
];

/// Populate an empty database with sample data.
///
/// Does nothing if any course exists, so it is safe to run on every start.
pub fn seed_database(db: &Database) -> Result<SeedOutcome> {
    if db.count_courses()? > 0 {
        tracing::info!("Database already seeded");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let mut course_ids = std::collections::HashMap::new();
    for (code, name, description, credits, difficulty, hours) in COURSES {
        let course = db.create_course(CreateCourseInput {
            code: code.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
            credits: *credits,
            difficulty_level: Some(*difficulty),
            avg_study_hours: Some(*hours),
        })?;
        course_ids.insert(*code, course.id);
    }

    for (course, prerequisite) in PREREQUISITES {
        db.add_prerequisite(course_ids[course], course_ids[prerequisite])?;
    }

    let mut student_ids = std::collections::HashMap::new();
    for (username, major, gpa) in STUDENTS {
        let student = db.create_student(CreateStudentInput {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            major: Some(major.to_string()),
            gpa: Some(*gpa),
        })?;
        student_ids.insert(*username, student.id);
    }

    for (username, code, semester, grade, status) in ENROLLMENTS {
        db.create_enrollment(CreateEnrollmentInput {
            student_id: student_ids[username],
            course_id: course_ids[code],
            semester: semester.to_string(),
            grade: grade.map(str::to_string),
            status: *status,
        })?;
    }

    tracing::info!(
        courses = COURSES.len(),
        students = STUDENTS.len(),
        enrollments = ENROLLMENTS.len(),
        "Database seeded successfully"
    );

    Ok(SeedOutcome::Seeded {
        courses: COURSES.len(),
        students: STUDENTS.len(),
        enrollments: ENROLLMENTS.len(),
    })
}
