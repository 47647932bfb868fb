// src/modules/candidate/application/ports/outgoing/storage_error.rs

/// SQLSTATE codes the storage adapter reports in `StorageError::code`.
pub mod codes {
    pub const UNIQUE_VIOLATION: &str = "23505";
    pub const FOREIGN_KEY_VIOLATION: &str = "23503";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorKind {
    /// The connection could not be established or acquired.
    Connection,

    /// The row addressed by an update did not exist.
    RecordNotFound,

    /// The database rejected a statement. Look at `code`.
    Query,

    /// Anything else: (de)serialization, driver internals.
    Other,
}

/// Raw failure from the storage layer, in the shape the repository
/// port reports it. Carries enough to classify it and keeps the
/// original message for operators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct StorageError {
    pub kind: StorageErrorKind,
    pub code: Option<String>,
    /// Constraint or column names the database blamed, if any.
    pub target: Vec<String>,
    pub message: String,
}

impl StorageError {
    pub fn new(kind: StorageErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: None,
            target: Vec::new(),
            message: message.into(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_target<I, S>(mut self, target: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target = target.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.code.as_deref() == Some(code)
    }

    /// Exact match on a blamed column or constraint name.
    pub fn targets(&self, name: &str) -> bool {
        self.target.iter().any(|t| t == name)
    }
}
