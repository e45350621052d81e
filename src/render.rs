//! Plain-text rendering of generated results for the terminal.

use crate::models::*;

const PROGRESS_WIDTH: usize = 20;

/// Render a list of labelled groups as an ASCII tree.
///
/// ```text
/// March 2025
/// ├── Learn Python & NumPy (LinkedIn Learning)
/// └── Implement a Linear Regression model (Kaggle project)
/// ```
fn render_groups<'a, I>(output: &mut String, groups: I)
where
    I: IntoIterator<Item = (String, &'a [String])>,
{
    for (label, items) in groups {
        output.push_str(&label);
        output.push('\n');
        for (i, item) in items.iter().enumerate() {
            let branch = if i == items.len() - 1 { "└── " } else { "├── " };
            output.push_str(branch);
            output.push_str(item);
            output.push('\n');
        }
    }
}

/// A fixed-width bar such as `[#####---------------]  25%`.
pub fn progress_bar(progress: u8) -> String {
    let progress = progress.min(100) as usize;
    let filled = progress * PROGRESS_WIDTH / 100;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled),
        progress
    )
}

pub fn render_roadmap(results: &CareerGoalsResults) -> String {
    let mut output = String::from("Monthly Learning Roadmap\n\n");
    render_groups(
        &mut output,
        results
            .roadmap
            .iter()
            .map(|entry| (entry.label.clone(), entry.items.as_slice())),
    );

    output.push_str("\nDevelopment Path\n\n");
    render_groups(
        &mut output,
        results.career_path.iter().map(|phase| {
            (
                format!("{} {}", phase.label, progress_bar(phase.progress)),
                phase.milestones.as_slice(),
            )
        }),
    );

    output.push_str("\nRecommended Resources\n\n");
    for resource in &results.resources {
        output.push_str(&format!(
            "* {} ({}): {}\n",
            resource.title, resource.kind, resource.description
        ));
    }

    output
}

pub fn render_course_plan(results: &CoursePlanResults) -> String {
    let mut output = String::from("Recommended Course Timeline\n\n");
    for (i, course) in results.courses.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} - {}\n   Course Code: {} | Credits: {}\n",
            i + 1,
            course.semester,
            course.name,
            course.code,
            course.credits
        ));
    }

    output.push_str("\nSemester Credit Distribution\n\n");
    for load in &results.semester_credits {
        output.push_str(&format!(
            "{:<12} {:>3} credits ({} courses, {} completed)\n",
            load.semester, load.credits, load.courses, load.completed
        ));
    }

    output.push_str("\nCourse Type Distribution\n\n");
    for share in &results.course_types {
        output.push_str(&format!("{:<18} {:>3} credits\n", share.name, share.value));
    }

    output
}

pub fn render_courses(courses: &[Course]) -> String {
    if courses.is_empty() {
        return "No recommendations.\n".to_string();
    }

    courses
        .iter()
        .map(|c| {
            let prerequisites = if c.prerequisites.is_empty() {
                String::new()
            } else {
                format!(" [requires {}]", c.prerequisites.join(", "))
            };
            format!("{:<8} {} ({} credits){}\n", c.code, c.name, c.credits, prerequisites)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::{course_plan_results, roadmap_results};
    use crate::catalog::{CoursePlanTrack, RoadmapTrack};

    #[test]
    fn progress_bar_scales_to_width() {
        assert_eq!(progress_bar(0), "[--------------------]   0%");
        assert_eq!(progress_bar(75), "[###############-----]  75%");
        assert_eq!(progress_bar(100), "[####################] 100%");
        assert_eq!(progress_bar(250), progress_bar(100));
    }

    #[test]
    fn roadmap_renders_branches_per_month() {
        let output = render_roadmap(&roadmap_results(RoadmapTrack::MlEngineer));

        assert!(output.starts_with("Monthly Learning Roadmap\n\nMarch 2025\n├── Learn Python & NumPy"));
        assert!(output.contains("└── Join an AI-focused hackathon\n"));
        assert!(output.contains("Undergraduate Studies [###############-----]  75%\n"));
        assert!(output.contains("* Mentorship Program (Personal Growth): One-on-one career guidance\n"));
    }

    #[test]
    fn course_plan_numbers_courses() {
        let output = render_course_plan(&course_plan_results(CoursePlanTrack::SoftwareDeveloper));

        assert!(output.contains("1. Fall 2025 - Data Structures & Algorithms\n   Course Code: CS201 | Credits: 4\n"));
        assert!(output.contains("4. Spring 2027 - Software Development Capstone"));
        assert!(output.contains("Required Courses    45 credits"));
    }

    #[test]
    fn courses_list_prerequisites() {
        let course = Course {
            id: 2,
            code: "CS201".to_string(),
            name: "Data Structures".to_string(),
            description: None,
            credits: 4,
            difficulty_level: None,
            avg_study_hours: None,
            prerequisites: vec!["CS101".to_string()],
        };

        assert_eq!(
            render_courses(&[course]),
            "CS201    Data Structures (4 credits) [requires CS101]\n"
        );
        assert_eq!(render_courses(&[]), "No recommendations.\n");
    }
}
