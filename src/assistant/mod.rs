//! The "AI" behind roadmap and course plan generation.
//!
//! [`SimulatedAssistant`] makes no request at all: it waits a fixed delay
//! and then returns the keyword-selected example dataset. It cannot fail
//! and cannot be cancelled once the future is polled to completion.
//!
//! [`ChatService`] is the one real outbound integration, talking to a
//! hosted model when an API key is configured.

mod chat;

pub use chat::*;

use std::time::Duration;

use crate::catalog::{self, CoursePlanTrack, RoadmapTrack};
use crate::config::{Config, DEFAULT_SIMULATED_DELAY};
use crate::models::{CareerGoalsResults, CoursePlanResults};
use crate::selector;

#[derive(Debug, Clone, Copy)]
pub struct SimulatedAssistant {
    delay: Duration,
}

impl Default for SimulatedAssistant {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_DELAY)
    }
}

impl SimulatedAssistant {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.simulated_delay)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn generate_roadmap(&self, job_titles: &str) -> CareerGoalsResults {
        let track = selector::roadmap_track(job_titles);
        tracing::debug!(?track, "Generating learning roadmap");
        tokio::time::sleep(self.delay).await;
        roadmap_results(track)
    }

    pub async fn generate_course_plan(&self, career_path: &str) -> CoursePlanResults {
        let track = selector::course_plan_track(career_path);
        tracing::debug!(?track, "Generating course plan");
        tokio::time::sleep(self.delay).await;
        course_plan_results(track)
    }
}

pub fn roadmap_results(track: RoadmapTrack) -> CareerGoalsResults {
    CareerGoalsResults {
        roadmap: track.entries(),
        career_path: catalog::career_path(),
        resources: catalog::resources(),
    }
}

pub fn course_plan_results(track: CoursePlanTrack) -> CoursePlanResults {
    CoursePlanResults {
        courses: track.courses(),
        semester_credits: catalog::semester_credits(),
        course_types: catalog::course_types(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn roadmap_arrives_after_the_delay() {
        let assistant = SimulatedAssistant::new(Duration::from_millis(1500));
        let started = Instant::now();

        let results = assistant.generate_roadmap("Data Scientist").await;

        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(results.roadmap, RoadmapTrack::DataScientist.entries());
        assert_eq!(results.career_path.len(), 3);
        assert_eq!(results.resources.len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn course_plan_uses_selected_track() {
        let assistant = SimulatedAssistant::default();
        let started = Instant::now();

        let results = assistant.generate_course_plan("software developer").await;

        assert!(started.elapsed() >= DEFAULT_SIMULATED_DELAY);
        assert_eq!(results.courses, CoursePlanTrack::SoftwareDeveloper.courses());
        assert_eq!(results.semester_credits.len(), 3);
        assert_eq!(results.course_types.len(), 3);
    }
}
