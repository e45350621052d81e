use uuid::Uuid;

use crate::models::FeedbackSubmission;

use super::{require_non_blank, FormError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackState {
    #[default]
    Editing,
    /// Confirmation panel. `receipt` identifies the submission in the logs.
    Submitted { receipt: Uuid },
}

/// The feedback page.
///
/// Submissions are validated, logged and dropped. Nothing is stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackForm {
    fields: FeedbackSubmission,
    state: FeedbackState,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FeedbackSubmission {
        &self.fields
    }

    pub fn state(&self) -> FeedbackState {
        self.state
    }

    /// Edit the form fields. Rejected once submitted until the form is cleared.
    pub fn edit(&mut self, f: impl FnOnce(&mut FeedbackSubmission)) -> Result<(), FormError> {
        match self.state {
            FeedbackState::Editing => {
                f(&mut self.fields);
                Ok(())
            }
            FeedbackState::Submitted { .. } => Err(FormError::Closed),
        }
    }

    pub fn submit(&mut self) -> Result<Uuid, FormError> {
        if let FeedbackState::Submitted { .. } = self.state {
            return Err(FormError::Closed);
        }

        let receipt = log_feedback(&self.fields)?;
        self.state = FeedbackState::Submitted { receipt };
        Ok(receipt)
    }

    /// Reset every field to its initial value and reopen the form.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub fn validate_feedback(fields: &FeedbackSubmission) -> Result<(), FormError> {
    require_non_blank("Name", &fields.name)?;
    require_non_blank("Email", &fields.email)?;
    require_non_blank("Message", &fields.message)?;

    match fields.email.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(FormError::InvalidEmail),
    }
}

/// Validate and log a submission, returning its receipt id.
pub fn log_feedback(fields: &FeedbackSubmission) -> Result<Uuid, FormError> {
    validate_feedback(fields)?;

    let receipt = Uuid::new_v4();
    tracing::info!(
        %receipt,
        name = %fields.name,
        email = %fields.email,
        category = fields.category.label(),
        consent = fields.consent,
        message = %fields.message,
        "Feedback received"
    );
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeedbackCategory;

    fn fill(form: &mut FeedbackForm) {
        form.edit(|f| {
            f.name = "Ada".to_string();
            f.email = "ada@example.com".to_string();
            f.category = FeedbackCategory::BugReport;
            f.message = "The roadmap page forgets my input.".to_string();
            f.consent = true;
        })
        .unwrap();
    }

    #[test]
    fn new_form_has_defaults() {
        let form = FeedbackForm::new();
        assert_eq!(form.fields(), &FeedbackSubmission::default());
        assert_eq!(form.fields().category, FeedbackCategory::FeatureSuggestion);
        assert!(!form.fields().consent);
        assert_eq!(form.state(), FeedbackState::Editing);
    }

    #[test]
    fn complete_form_moves_to_confirmation() {
        let mut form = FeedbackForm::new();
        fill(&mut form);

        let receipt = form.submit().unwrap();

        assert_eq!(form.state(), FeedbackState::Submitted { receipt });
    }

    #[test]
    fn clear_after_submit_restores_defaults() {
        let mut form = FeedbackForm::new();
        fill(&mut form);
        form.submit().unwrap();

        form.clear();

        assert_eq!(form, FeedbackForm::default());
        assert!(form.edit(|f| f.name = "Grace".to_string()).is_ok());
    }

    #[test]
    fn missing_required_fields_keep_form_editing() {
        let mut form = FeedbackForm::new();
        form.edit(|f| f.name = "Ada".to_string()).unwrap();

        assert_eq!(form.submit(), Err(FormError::MissingField("Email")));
        assert_eq!(form.state(), FeedbackState::Editing);
    }

    #[test]
    fn consent_is_optional() {
        let mut form = FeedbackForm::new();
        fill(&mut form);
        form.edit(|f| f.consent = false).unwrap();
        assert!(form.submit().is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        let mut form = FeedbackForm::new();
        fill(&mut form);
        for email in ["ada", "@example.com", "ada@"] {
            form.edit(|f| f.email = email.to_string()).unwrap();
            assert_eq!(form.submit(), Err(FormError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn submitted_form_is_closed_until_cleared() {
        let mut form = FeedbackForm::new();
        fill(&mut form);
        form.submit().unwrap();

        assert_eq!(form.submit(), Err(FormError::Closed));
        assert_eq!(form.edit(|f| f.message.clear()), Err(FormError::Closed));
    }
}
