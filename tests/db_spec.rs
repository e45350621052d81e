use studypath::config::DatabaseLocation;
use studypath::db::{seed_database, Database, SeedOutcome};
use studypath::models::*;
use studypath::recommender::{recommend_for_student, CourseRecommender, RecommendationError};
use speculate2::speculate;

fn course_input(code: &str, name: &str, credits: u32) -> CreateCourseInput {
    CreateCourseInput {
        code: code.to_string(),
        name: name.to_string(),
        description: None,
        credits,
        difficulty_level: None,
        avg_study_hours: None,
    }
}

fn student_input(username: &str, major: Option<&str>) -> CreateStudentInput {
    CreateStudentInput {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        major: major.map(str::to_string),
        gpa: Some(3.2),
    }
}

speculate! {
    before {
        let db = Database::open_memory().expect("Failed to create in-memory database");
        db.migrate().expect("Failed to run migrations");
    }

    describe "courses" {
        describe "create_course" {
            it "creates a course with all fields" {
                let course = db.create_course(CreateCourseInput {
                    code: "CS101".to_string(),
                    name: "Introduction to Programming".to_string(),
                    description: Some("Basic programming concepts".to_string()),
                    credits: 3,
                    difficulty_level: Some(2.5),
                    avg_study_hours: Some(6.0),
                }).expect("Failed to create course");

                assert!(course.id > 0);
                assert_eq!(course.code, "CS101");
                assert_eq!(course.difficulty_level, Some(2.5));
                assert!(course.prerequisites.is_empty());
            }

            it "rejects duplicate course codes" {
                db.create_course(course_input("CS101", "Intro", 3)).expect("Failed to create");
                let result = db.create_course(course_input("CS101", "Intro again", 3));
                assert!(result.is_err());
            }
        }

        describe "get_course" {
            it "returns None for non-existent course" {
                assert!(db.get_course(999).expect("Query failed").is_none());
            }

            it "returns the course with prerequisite codes" {
                let intro = db.create_course(course_input("CS101", "Intro", 3)).unwrap();
                let calc = db.create_course(course_input("MATH101", "Calculus", 4)).unwrap();
                let ds = db.create_course(course_input("CS201", "Data Structures", 4)).unwrap();
                db.add_prerequisite(ds.id, intro.id).unwrap();
                db.add_prerequisite(ds.id, calc.id).unwrap();

                let found = db.get_course(ds.id).unwrap().expect("course exists");
                assert_eq!(found.prerequisites, vec!["CS101", "MATH101"]);
            }
        }

        describe "add_prerequisite" {
            it "is idempotent" {
                let a = db.create_course(course_input("A1", "A", 3)).unwrap();
                let b = db.create_course(course_input("B1", "B", 3)).unwrap();
                db.add_prerequisite(b.id, a.id).unwrap();
                db.add_prerequisite(b.id, a.id).unwrap();

                assert_eq!(db.get_course(b.id).unwrap().unwrap().prerequisites, vec!["A1"]);
            }

            it "rejects unknown courses and self references" {
                let a = db.create_course(course_input("A1", "A", 3)).unwrap();
                assert!(db.add_prerequisite(a.id, 42).is_err());
                assert!(db.add_prerequisite(a.id, a.id).is_err());
            }
        }

        describe "get_courses_by_codes" {
            it "preserves the requested order and skips unknown codes" {
                db.create_course(course_input("A1", "A", 3)).unwrap();
                db.create_course(course_input("B1", "B", 3)).unwrap();
                db.create_course(course_input("C1", "C", 3)).unwrap();

                let codes = vec!["C1".to_string(), "ZZ9".to_string(), "A1".to_string()];
                let courses = db.get_courses_by_codes(&codes).unwrap();
                let found: Vec<_> = courses.iter().map(|c| c.code.as_str()).collect();
                assert_eq!(found, vec!["C1", "A1"]);
            }

            it "returns each course once when a code repeats" {
                db.create_course(course_input("A1", "A", 3)).unwrap();
                db.create_course(course_input("B1", "B", 3)).unwrap();

                let codes = vec!["B1".to_string(), "A1".to_string(), "B1".to_string()];
                let courses = db.get_courses_by_codes(&codes).unwrap();
                let found: Vec<_> = courses.iter().map(|c| c.code.as_str()).collect();
                assert_eq!(found, vec!["B1", "A1"]);
            }
        }

        describe "get_all_courses" {
            it "returns courses in insertion order" {
                db.create_course(course_input("Z1", "Zoology", 3)).unwrap();
                db.create_course(course_input("A1", "Anatomy", 3)).unwrap();

                let codes: Vec<_> = db.get_all_courses().unwrap().into_iter().map(|c| c.code).collect();
                assert_eq!(codes, vec!["Z1", "A1"]);
            }
        }
    }

    describe "students" {
        it "creates and fetches a student" {
            let created = db.create_student(student_input("alice", Some("CS"))).unwrap();
            let found = db.get_student(created.id).unwrap().expect("student exists");

            assert_eq!(found.username, "alice");
            assert_eq!(found.email, "alice@example.com");
            assert_eq!(found.major.as_deref(), Some("CS"));
        }

        it "rejects duplicate usernames" {
            db.create_student(student_input("alice", None)).unwrap();
            assert!(db.create_student(student_input("alice", None)).is_err());
        }

        it "returns None for non-existent student" {
            assert!(db.get_student(7).unwrap().is_none());
        }
    }

    describe "enrollments" {
        it "joins the course code and defaults to planned" {
            let student = db.create_student(student_input("bob", Some("MATH"))).unwrap();
            let course = db.create_course(course_input("MATH101", "Calculus", 4)).unwrap();

            let enrollment = db.create_enrollment(CreateEnrollmentInput {
                student_id: student.id,
                course_id: course.id,
                semester: "Fall 2024".to_string(),
                grade: None,
                status: EnrollmentStatus::default(),
            }).unwrap();

            assert_eq!(enrollment.course_code, "MATH101");
            assert_eq!(enrollment.status, EnrollmentStatus::Planned);

            let listed = db.get_student_enrollments(student.id).unwrap();
            assert_eq!(listed, vec![enrollment]);
        }

        it "rejects enrollments for unknown students or courses" {
            let student = db.create_student(student_input("bob", None)).unwrap();
            let result = db.create_enrollment(CreateEnrollmentInput {
                student_id: student.id,
                course_id: 99,
                semester: "Fall 2024".to_string(),
                grade: None,
                status: EnrollmentStatus::Planned,
            });
            assert!(result.unwrap_err().to_string().contains("Course not found"));
        }

        it "lists only completed course codes" {
            let student = db.create_student(student_input("carol", Some("CS"))).unwrap();
            let done = db.create_course(course_input("CS101", "Intro", 3)).unwrap();
            let doing = db.create_course(course_input("CS201", "DS", 4)).unwrap();

            for (course_id, status) in [(done.id, EnrollmentStatus::Completed), (doing.id, EnrollmentStatus::InProgress)] {
                db.create_enrollment(CreateEnrollmentInput {
                    student_id: student.id,
                    course_id,
                    semester: "Spring 2024".to_string(),
                    grade: None,
                    status,
                }).unwrap();
            }

            assert_eq!(db.get_completed_course_codes(student.id).unwrap(), vec!["CS101"]);
        }
    }

    describe "seed_database" {
        it "seeds an empty database" {
            let outcome = seed_database(&db).unwrap();
            assert_eq!(outcome, SeedOutcome::Seeded { courses: 10, students: 3, enrollments: 10 });
            assert_eq!(db.count_courses().unwrap(), 10);

            let ai = db.get_courses_by_codes(&["CS401".to_string()]).unwrap();
            assert_eq!(ai[0].prerequisites, vec!["CS201"]);
        }

        it "is idempotent" {
            seed_database(&db).unwrap();
            assert_eq!(seed_database(&db).unwrap(), SeedOutcome::AlreadySeeded);
            assert_eq!(db.count_courses().unwrap(), 10);
        }
    }

    describe "recommend_for_student" {
        it "skips completed courses for seeded students" {
            seed_database(&db).unwrap();
            let recommender = CourseRecommender::default();

            // alice (CS) completed CS101 and CS201
            let alice: Vec<_> = recommend_for_student(&db, &recommender, 1).unwrap()
                .into_iter().map(|c| c.code).collect();
            assert_eq!(alice, vec!["CS301"]);

            // bob (MATH) has STAT101 in progress, which is still recommended
            let bob: Vec<_> = recommend_for_student(&db, &recommender, 2).unwrap()
                .into_iter().map(|c| c.code).collect();
            assert_eq!(bob, vec!["STAT101"]);
        }

        it "reports unknown students" {
            let result = recommend_for_student(&db, &CourseRecommender::default(), 404);
            assert!(matches!(result, Err(RecommendationError::StudentNotFound)));
        }

        it "returns nothing for a student without a major" {
            let student = db.create_student(student_input("dana", None)).unwrap();
            let courses = recommend_for_student(&db, &CourseRecommender::default(), student.id).unwrap();
            assert!(courses.is_empty());
        }
    }

    describe "open_location" {
        it "persists to a file across reopen" {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("nested").join("studypath.db");
            let location = DatabaseLocation::File(path.clone());

            let first = Database::open_location(&location).unwrap();
            first.migrate().unwrap();
            seed_database(&first).unwrap();
            drop(first);

            let second = Database::open_location(&location).unwrap();
            second.migrate().unwrap();
            assert!(path.exists());
            assert_eq!(second.count_courses().unwrap(), 10);
            assert_eq!(seed_database(&second).unwrap(), SeedOutcome::AlreadySeeded);
        }
    }
}
