use sea_orm::{DbErr, SqlErr};

use crate::candidate::application::ports::outgoing::storage_error::codes;
use crate::candidate::application::ports::outgoing::{StorageError, StorageErrorKind};

impl From<DbErr> for StorageError {
    fn from(err: DbErr) -> Self {
        let message = err.to_string();

        match &err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
                return StorageError::new(StorageErrorKind::Connection, message)
            }
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => {
                return StorageError::new(StorageErrorKind::RecordNotFound, message)
            }
            _ => {}
        }

        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                StorageError::new(StorageErrorKind::Query, message)
                    .with_code(codes::UNIQUE_VIOLATION)
                    .with_target(constraint_target(&detail))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                StorageError::new(StorageErrorKind::Query, message)
                    .with_code(codes::FOREIGN_KEY_VIOLATION)
                    .with_target(constraint_target(&detail))
            }
            _ => from_message(&err, message),
        }
    }
}

// Fallback for errors the driver did not tag with a SQLSTATE we can reach,
// e.g. ones that arrive as `DbErr::Custom` text.
fn from_message(err: &DbErr, message: String) -> StorageError {
    let lower = message.to_lowercase();

    let code = if lower.contains(codes::UNIQUE_VIOLATION)
        || lower.contains("duplicate key")
        || lower.contains("unique constraint")
    {
        Some(codes::UNIQUE_VIOLATION)
    } else if lower.contains(codes::FOREIGN_KEY_VIOLATION) || lower.contains("foreign key") {
        Some(codes::FOREIGN_KEY_VIOLATION)
    } else {
        None
    };

    let kind = match err {
        DbErr::Exec(_) | DbErr::Query(_) => StorageErrorKind::Query,
        _ if code.is_some() => StorageErrorKind::Query,
        _ => StorageErrorKind::Other,
    };

    let target = constraint_target(&message);
    let mut storage_err = StorageError::new(kind, message).with_target(target);
    if let Some(code) = code {
        storage_err = storage_err.with_code(code);
    }
    storage_err
}

/// Pulls what Postgres blamed out of an error text:
/// the columns in `Key (a, b)=(...)` and the quoted constraint name.
fn constraint_target(detail: &str) -> Vec<String> {
    let mut target = Vec::new();

    if let Some(columns) = between(detail, "Key (", ")=") {
        target.extend(columns.split(',').map(|c| c.trim().to_string()));
    }
    if let Some(constraint) = between(detail, "constraint \"", "\"") {
        target.push(constraint.to_string());
    }

    target
}

fn between<'a>(s: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let start = s.find(open)? + open.len();
    let len = s[start..].find(close)?;
    Some(&s[start..start + len])
}
