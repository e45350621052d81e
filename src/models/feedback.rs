use serde::{Deserialize, Serialize};

/// Contents of the feedback form.
///
/// This is transient input: a submission is logged and then discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub category: FeedbackCategory,
    #[serde(default)]
    pub message: String,
    /// Agreement to use the feedback to improve the service.
    #[serde(default)]
    pub consent: bool,
}

/// The fixed set of feedback types offered by the form.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    #[default]
    FeatureSuggestion,
    BugReport,
    UserExperience,
    Other,
}

impl FeedbackCategory {
    pub const ALL: [Self; 4] = [
        Self::FeatureSuggestion,
        Self::BugReport,
        Self::UserExperience,
        Self::Other,
    ];

    /// Label as shown in the form's dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FeatureSuggestion => "Feature Suggestion",
            Self::BugReport => "Bug Report",
            Self::UserExperience => "User Experience",
            Self::Other => "Other",
        }
    }
}
