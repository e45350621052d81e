//! Page state machines.
//!
//! Each page is a form that turns into a results (or confirmation) panel.
//! The types here hold exactly the state a page keeps between user actions
//! and nothing survives beyond the value itself.
//!
//! ```text
//! Input ──submit──▶ Input{loading} ──delay──▶ Results ──start_over──▶ Input
//! ```

mod career_goals;
mod course_planning;
mod feedback;

pub use career_goals::*;
pub use course_planning::*;
pub use feedback::*;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// The submit button is disabled while a response is pending.
    #[error("A request is already in progress")]
    Pending,

    #[error("The form has already been submitted")]
    Closed,
}

/// A required page field: only an empty value is missing.
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(())
    }
}

/// A required feedback field: whitespace alone does not count.
pub(crate) fn require_non_blank(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(())
    }
}

/// The header search box. Queries are logged; no search is performed.
#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    query: String,
}

impl SearchBox {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn submit(&self) {
        tracing::info!(query = %self.query, "Search submitted");
    }
}
