use crate::candidate::application::ports::outgoing::storage_error::codes;
use crate::candidate::application::ports::outgoing::{StorageError, StorageErrorKind};

// Postgres default name for `UNIQUE (email)` on `candidates`.
const EMAIL_COLUMN: &str = "email";
const EMAIL_UNIQUE_CONSTRAINT: &str = "candidates_email_key";

/// Storage failures the caller can act on, plus a pass-through for the rest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistenceError {
    #[error("The email already exists in the database")]
    DuplicateEmail,

    #[error("No se encontró el registro del candidato con el ID proporcionado")]
    RecordNotFound,

    #[error(
        "No se pudo conectar con la base de datos. Asegúrese de que el servidor de base de datos esté en ejecución"
    )]
    ConnectionFailure,

    /// Unclassified; the original error is kept intact for operators.
    #[error(transparent)]
    Unknown(StorageError),
}

/// Classifies a raw storage error.
///
/// | signal                                   | result              |
/// |------------------------------------------|---------------------|
/// | unique violation (23505) on `email`      | `DuplicateEmail`    |
/// | record not found                         | `RecordNotFound`    |
/// | connection could not be established      | `ConnectionFailure` |
/// | anything else                            | `Unknown(err)`      |
pub fn translate_storage_error(err: StorageError) -> PersistenceError {
    match err.kind {
        StorageErrorKind::Connection => PersistenceError::ConnectionFailure,
        StorageErrorKind::RecordNotFound => PersistenceError::RecordNotFound,
        _ if err.has_code(codes::UNIQUE_VIOLATION) && blames_email(&err) => {
            PersistenceError::DuplicateEmail
        }
        _ => PersistenceError::Unknown(err),
    }
}

fn blames_email(err: &StorageError) -> bool {
    err.targets(EMAIL_COLUMN) || err.targets(EMAIL_UNIQUE_CONSTRAINT)
}

impl From<StorageError> for PersistenceError {
    fn from(err: StorageError) -> Self {
        translate_storage_error(err)
    }
}
