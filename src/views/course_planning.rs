use crate::assistant::SimulatedAssistant;
use crate::models::CoursePlanResults;

use super::{require, FormError};

/// The course planning page: programme URL and career path in, course timeline out.
#[derive(Debug, Clone, PartialEq)]
pub enum CoursePlanningView {
    Input {
        program_url: String,
        career_path: String,
        loading: bool,
    },
    Results(CoursePlanResults),
}

impl Default for CoursePlanningView {
    fn default() -> Self {
        Self::Input {
            program_url: String::new(),
            career_path: String::new(),
            loading: false,
        }
    }
}

impl CoursePlanningView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_program_url(&mut self, value: impl Into<String>) {
        if let Self::Input { program_url, .. } = self {
            *program_url = value.into();
        }
    }

    pub fn set_career_path(&mut self, value: impl Into<String>) {
        if let Self::Input { career_path, .. } = self {
            *career_path = value.into();
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Input { loading: true, .. })
    }

    pub fn results(&self) -> Option<&CoursePlanResults> {
        match self {
            Self::Results(results) => Some(results),
            Self::Input { .. } => None,
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_loading() {
            "Analyzing courses..."
        } else {
            "Generate Course Plan"
        }
    }

    /// Validate both fields and mark the form loading. Returns the career path.
    pub fn begin_submit(&mut self) -> Result<String, FormError> {
        match self {
            Self::Input { loading: true, .. } => Err(FormError::Pending),
            Self::Input {
                program_url,
                career_path,
                loading,
            } => {
                require("Program URL", program_url)?;
                require("Career path", career_path)?;
                *loading = true;
                Ok(career_path.clone())
            }
            Self::Results(_) => Err(FormError::Closed),
        }
    }

    pub fn complete(&mut self, results: CoursePlanResults) {
        *self = Self::Results(results);
    }

    pub async fn submit(&mut self, assistant: &SimulatedAssistant) -> Result<(), FormError> {
        let career_path = self.begin_submit()?;
        tracing::info!(%career_path, "Course planning submitted");
        let results = assistant.generate_course_plan(&career_path).await;
        self.complete(results);
        Ok(())
    }

    pub fn start_over(&mut self) {
        *self = Self::default();
    }
}
