//! The module contains the errors the runner can throw.
//!
//! The errors are:
//!
//! - [`Database`] thrown when the storage backend fails.
//! - [`Query`] thrown when a statement cannot be built from a row.
//! - [`UnknownColumn`] thrown when a seeded row names a column the table
//!   does not declare.
//!
//!  [`Database`]: CatalogError::Database
//!  [`Query`]: CatalogError::Query
//!  [`UnknownColumn`]: CatalogError::UnknownColumn
use sea_orm::DbErr;
use thiserror::Error;

/// Runner custom errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid statement: {0}")]
    Query(String),
    #[error("\"{column}\" is not a column of \"{table}\"")]
    UnknownColumn { table: String, column: String },
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for CatalogError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Query(a), Self::Query(b)) => a == b,
            (
                Self::UnknownColumn {
                    table: ta,
                    column: ca,
                },
                Self::UnknownColumn {
                    table: tb,
                    column: cb,
                },
            ) => ta == tb && ca == cb,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

impl From<CatalogError> for DbErr {
    fn from(value: CatalogError) -> Self {
        match value {
            CatalogError::Database(err) => err,
            other => DbErr::Migration(other.to_string()),
        }
    }
}
