use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("constraint violation: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

/// SQLite reports RESTRICT actions as a trigger constraint (code 1811), which
/// `sql_err` does not classify.
fn is_sqlite_fk_violation(e: &DbErr) -> bool {
    let msg = e.to_string();
    msg.contains("FOREIGN KEY constraint failed") || msg.contains("(code: 1811)")
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => ModelError::Conflict(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => ModelError::Conflict(msg),
            _ if is_sqlite_fk_violation(&e) => ModelError::Conflict(e.to_string()),
            _ => ModelError::Db(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restrict_trigger_failure_is_a_conflict() {
        let e = DbErr::Custom("Execution Error: error returned from database: (code: 1811) FOREIGN KEY constraint failed".into());
        assert!(matches!(ModelError::from(e), ModelError::Conflict(_)));
    }

    #[test]
    fn other_errors_stay_db_errors() {
        let e = DbErr::Custom("connection reset".into());
        assert!(matches!(ModelError::from(e), ModelError::Db(_)));
    }
}
