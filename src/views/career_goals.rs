use crate::assistant::SimulatedAssistant;
use crate::models::CareerGoalsResults;

use super::{require, FormError};

/// The career goals page: job titles in, learning roadmap out.
#[derive(Debug, Clone, PartialEq)]
pub enum CareerGoalsView {
    Input { job_titles: String, loading: bool },
    Results(CareerGoalsResults),
}

impl Default for CareerGoalsView {
    fn default() -> Self {
        Self::Input {
            job_titles: String::new(),
            loading: false,
        }
    }
}

impl CareerGoalsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit the job titles field. Ignored outside the input form.
    pub fn set_job_titles(&mut self, value: impl Into<String>) {
        if let Self::Input { job_titles, .. } = self {
            *job_titles = value.into();
        }
    }

    pub fn job_titles(&self) -> Option<&str> {
        match self {
            Self::Input { job_titles, .. } => Some(job_titles),
            Self::Results(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Input { loading: true, .. })
    }

    pub fn results(&self) -> Option<&CareerGoalsResults> {
        match self {
            Self::Results(results) => Some(results),
            Self::Input { .. } => None,
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_loading() {
            "Analyzing career path..."
        } else {
            "Generate Learning Roadmap"
        }
    }

    /// Validate the form and mark it loading. Returns the submitted job titles.
    pub fn begin_submit(&mut self) -> Result<String, FormError> {
        match self {
            Self::Input { loading: true, .. } => Err(FormError::Pending),
            Self::Input {
                job_titles,
                loading,
            } => {
                require("Job titles", job_titles)?;
                *loading = true;
                Ok(job_titles.clone())
            }
            Self::Results(_) => Err(FormError::Closed),
        }
    }

    /// Show the results panel.
    pub fn complete(&mut self, results: CareerGoalsResults) {
        *self = Self::Results(results);
    }

    /// Submit the form and wait for the assistant's roadmap.
    pub async fn submit(&mut self, assistant: &SimulatedAssistant) -> Result<(), FormError> {
        let job_titles = self.begin_submit()?;
        tracing::info!(%job_titles, "Career goals submitted");
        let results = assistant.generate_roadmap(&job_titles).await;
        self.complete(results);
        Ok(())
    }

    /// Back to an empty input form; any results are discarded.
    pub fn start_over(&mut self) {
        *self = Self::default();
    }
}
