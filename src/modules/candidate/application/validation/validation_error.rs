/// Which rule rejected the payload. The `Display` text is the
/// caller-facing message and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationErrorKind {
    #[error("Invalid name")]
    InvalidName,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid phone")]
    InvalidPhone,

    #[error("Invalid address")]
    InvalidAddress,

    #[error("Invalid date")]
    InvalidDate,

    /// Work-experience end dates only. Every other date failure is `InvalidDate`.
    #[error("Invalid end date")]
    InvalidEndDate,

    #[error("Invalid CV data")]
    InvalidCv,
}

/// First rule violation found in a candidate payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    /// JSON path of the offending value, e.g. `workExperiences[1].endDate`.
    pub field: String,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, field: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
        }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
