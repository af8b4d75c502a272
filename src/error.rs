use thiserror::Error;

/// Rejected form input. Raised before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Could not read date '{0}'. Use YYYY-MM-DD or MM/DD.")]
    InvalidDate(String),
    #[error("Team size must be a positive number, got '{0}'.")]
    InvalidTeamSize(String),
}

impl ValidationError {
    /// Short heading shown in front of the message in the status banner.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::MissingFields(_) => "Missing Information",
            Self::PasswordMismatch => "Password Mismatch",
            Self::InvalidDate(_) => "Invalid Date",
            Self::InvalidTeamSize(_) => "Invalid Team Size",
        }
    }
}
