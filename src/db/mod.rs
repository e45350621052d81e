mod schema;
mod seed;

pub use seed::{seed_database, SeedOutcome};

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Row};

use crate::config::DatabaseLocation;
use crate::models::*;

const COURSE_COLUMNS: &str =
    "id, code, name, description, credits, difficulty_level, avg_study_hours";

pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Database path has no parent directory"))?;
        std::fs::create_dir_all(parent)?;
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Self::from_connection(conn)
    }

    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "studypath")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let db_path = dirs.data_dir().join("studypath.db");
        Self::open(db_path)
    }

    pub fn open_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    pub fn open_location(location: &DatabaseLocation) -> Result<Self> {
        match location {
            DatabaseLocation::Default => Self::open_default(),
            DatabaseLocation::Memory => Self::open_memory(),
            DatabaseLocation::File(path) => Self::open(path.clone()),
        }
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let applied = schema::run_migrations(&conn)?;
        if applied > 0 {
            tracing::info!(applied, "Database schema up to date");
        }
        Ok(())
    }

    // ============================================================
    // Course operations
    // ============================================================

    pub fn get_all_courses(&self) -> Result<Vec<Course>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses ORDER BY id"
        ))?;

        let courses = stmt
            .query_map([], course_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        with_prerequisites(&conn, courses)
    }

    pub fn get_course(&self, id: i64) -> Result<Option<Course>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let course = conn
            .query_row(
                &format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = ?"),
                [id],
                course_from_row,
            )
            .optional()?;

        match course {
            Some(course) => Ok(with_prerequisites(&conn, vec![course])?.pop()),
            None => Ok(None),
        }
    }

    pub fn get_course_by_code(&self, code: &str) -> Result<Option<Course>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let course = conn
            .query_row(
                &format!("SELECT {COURSE_COLUMNS} FROM courses WHERE code = ?"),
                [code],
                course_from_row,
            )
            .optional()?;

        match course {
            Some(course) => Ok(with_prerequisites(&conn, vec![course])?.pop()),
            None => Ok(None),
        }
    }

    /// Look up courses by code, returned in the order the codes were first
    /// given. Unknown and repeated codes are skipped.
    pub fn get_courses_by_codes(&self, codes: &[String]) -> Result<Vec<Course>> {
        let mut seen = HashSet::new();
        let mut courses = Vec::with_capacity(codes.len());
        for code in codes.iter().filter(|code| seen.insert(code.as_str())) {
            if let Some(course) = self.get_course_by_code(code)? {
                courses.push(course);
            }
        }
        Ok(courses)
    }

    pub fn create_course(&self, input: CreateCourseInput) -> Result<Course> {
        let conn = self.conn.lock().expect("database lock poisoned");

        conn.execute(
            "INSERT INTO courses (code, name, description, credits, difficulty_level, avg_study_hours)
             VALUES (?, ?, ?, ?, ?, ?)",
            (
                &input.code,
                &input.name,
                &input.description,
                input.credits,
                input.difficulty_level,
                input.avg_study_hours,
            ),
        )?;

        Ok(Course {
            id: conn.last_insert_rowid(),
            code: input.code,
            name: input.name,
            description: input.description,
            credits: input.credits,
            difficulty_level: input.difficulty_level,
            avg_study_hours: input.avg_study_hours,
            prerequisites: Vec::new(),
        })
    }

    /// Record that `course_id` requires `prerequisite_id`.
    pub fn add_prerequisite(&self, course_id: i64, prerequisite_id: i64) -> Result<()> {
        if course_id == prerequisite_id {
            anyhow::bail!("A course cannot be its own prerequisite");
        }
        for id in [course_id, prerequisite_id] {
            if self.get_course(id)?.is_none() {
                anyhow::bail!("Course {} not found", id);
            }
        }

        let conn = self.conn.lock().expect("database lock poisoned");
        conn.execute(
            "INSERT OR IGNORE INTO course_prerequisites (course_id, prerequisite_id) VALUES (?, ?)",
            (course_id, prerequisite_id),
        )?;
        Ok(())
    }

    pub fn count_courses(&self) -> Result<i64> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let count = conn.query_row("SELECT COUNT(*) FROM courses", [], |row| row.get(0))?;
        Ok(count)
    }

    // ============================================================
    // Student operations
    // ============================================================

    pub fn get_student(&self, id: i64) -> Result<Option<Student>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let student = conn
            .query_row(
                "SELECT id, username, email, major, gpa, created_at FROM students WHERE id = ?",
                [id],
                |row| {
                    Ok(Student {
                        id: row.get(0)?,
                        username: row.get(1)?,
                        email: row.get(2)?,
                        major: row.get(3)?,
                        gpa: row.get(4)?,
                        created_at: parse_datetime(row.get::<_, String>(5)?),
                    })
                },
            )
            .optional()?;
        Ok(student)
    }

    pub fn create_student(&self, input: CreateStudentInput) -> Result<Student> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let now = Utc::now();

        conn.execute(
            "INSERT INTO students (username, email, major, gpa, created_at) VALUES (?, ?, ?, ?, ?)",
            (
                &input.username,
                &input.email,
                &input.major,
                input.gpa,
                now.to_rfc3339(),
            ),
        )?;

        Ok(Student {
            id: conn.last_insert_rowid(),
            username: input.username,
            email: input.email,
            major: input.major,
            gpa: input.gpa,
            created_at: now,
        })
    }

    // ============================================================
    // Enrollment operations
    // ============================================================

    pub fn create_enrollment(&self, input: CreateEnrollmentInput) -> Result<Enrollment> {
        self.get_student(input.student_id)?
            .ok_or_else(|| anyhow::anyhow!("Student not found"))?;
        let course = self
            .get_course(input.course_id)?
            .ok_or_else(|| anyhow::anyhow!("Course not found"))?;

        let conn = self.conn.lock().expect("database lock poisoned");
        conn.execute(
            "INSERT INTO enrollments (student_id, course_id, semester, grade, status)
             VALUES (?, ?, ?, ?, ?)",
            (
                input.student_id,
                input.course_id,
                &input.semester,
                &input.grade,
                input.status.as_str(),
            ),
        )?;

        Ok(Enrollment {
            id: conn.last_insert_rowid(),
            student_id: input.student_id,
            course_id: input.course_id,
            course_code: course.code,
            semester: input.semester,
            grade: input.grade,
            status: input.status,
        })
    }

    pub fn get_student_enrollments(&self, student_id: i64) -> Result<Vec<Enrollment>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT e.id, e.student_id, e.course_id, c.code, e.semester, e.grade, e.status
             FROM enrollments e JOIN courses c ON c.id = e.course_id
             WHERE e.student_id = ? ORDER BY e.id",
        )?;

        let enrollments = stmt
            .query_map([student_id], |row| {
                Ok(Enrollment {
                    id: row.get(0)?,
                    student_id: row.get(1)?,
                    course_id: row.get(2)?,
                    course_code: row.get(3)?,
                    semester: row.get(4)?,
                    grade: row.get(5)?,
                    status: EnrollmentStatus::from_str(&row.get::<_, String>(6)?)
                        .unwrap_or_default(),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(enrollments)
    }

    pub fn get_completed_course_codes(&self, student_id: i64) -> Result<Vec<String>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT c.code FROM enrollments e JOIN courses c ON c.id = e.course_id
             WHERE e.student_id = ? AND e.status = ? ORDER BY e.id",
        )?;

        let codes = stmt
            .query_map(
                (student_id, EnrollmentStatus::Completed.as_str()),
                |row| row.get(0),
            )?
            .collect::<Result<Vec<String>, _>>()?;

        Ok(codes)
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
        }
    }
}

fn course_from_row(row: &Row<'_>) -> rusqlite::Result<Course> {
    Ok(Course {
        id: row.get(0)?,
        code: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        credits: row.get(4)?,
        difficulty_level: row.get(5)?,
        avg_study_hours: row.get(6)?,
        prerequisites: Vec::new(),
    })
}

/// Fill in prerequisite codes. Expects the caller to hold the connection lock.
fn with_prerequisites(conn: &Connection, mut courses: Vec<Course>) -> Result<Vec<Course>> {
    let mut stmt = conn.prepare(
        "SELECT c.code FROM course_prerequisites p JOIN courses c ON c.id = p.prerequisite_id
         WHERE p.course_id = ? ORDER BY c.code",
    )?;

    for course in &mut courses {
        course.prerequisites = stmt
            .query_map([course.id], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
    }

    Ok(courses)
}

fn parse_datetime(s: String) -> chrono::DateTime<Utc> {
    chrono::DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
