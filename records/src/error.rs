/// Error returned when form values cannot become a request payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// One or more required inputs are empty.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    /// A numeric input holds something that is not a whole number.
    #[error("{label} must be a whole number, got `{value}`")]
    InvalidInteger { label: &'static str, value: String },
}

impl FormError {
    /// Message shown to the user under the form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingFields(_) => "Please fill in all required fields.".to_owned(),
            Self::InvalidInteger { label, .. } => format!("{label} must be a whole number."),
        }
    }
}
