//! Catalog schema, seed data and the runner that applies them.
//!
//! A [`MigrationDefinition`] pairs an immutable [`TableSpec`] with an optional
//! [`SeedGenerator`]. The [`Runner`] applies definitions against an injected
//! [`Storage`]: `apply_up` creates the table when missing and inserts the
//! seed rows, `apply_down` empties the table and restarts its id counter.

pub use error::CatalogError;
pub use runner::{MigrationDefinition, Runner};
pub use schema::{ColumnSpec, ColumnType, TableSpec};
pub use seed::{CATEGORY_NAMES, CategorySeed, ProductSeed, Row, SeedGenerator};
pub use storage::Storage;
pub use tables::{categories, categories_table, products, products_table};

pub mod category;
mod error;
pub mod product;
mod runner;
pub mod schema;
pub mod seed;
mod storage;
mod tables;
