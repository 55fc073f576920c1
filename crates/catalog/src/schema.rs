//! Immutable table descriptions.
//!
//! A [`TableSpec`] is built once and handed to [`Storage::create_table`];
//! every table gets an implicit auto-increment integer `id` primary key in
//! front of the declared columns.
//!
//! [`Storage::create_table`]: crate::Storage::create_table

use sea_orm_migration::prelude::{Alias, ColumnDef, Table, TableCreateStatement};

/// Name of the implicit primary key column.
pub const ID_COLUMN: &str = "id";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    String { limit: u32 },
    Decimal { precision: u32, scale: u32 },
    Text,
    Integer,
    Boolean,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub column_type: ColumnType,
}

impl ColumnSpec {
    pub const fn new(name: &'static str, column_type: ColumnType) -> Self {
        Self { name, column_type }
    }

    fn to_column_def(&self) -> ColumnDef {
        let mut def = ColumnDef::new(Alias::new(self.name));
        match self.column_type {
            ColumnType::String { limit } => def.string_len(limit),
            ColumnType::Decimal { precision, scale } => def.decimal_len(precision, scale),
            ColumnType::Text => def.text(),
            ColumnType::Integer => def.integer(),
            ColumnType::Boolean => def.boolean(),
        };
        def.not_null();
        def
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSpec {
    name: &'static str,
    columns: Vec<ColumnSpec>,
}

impl TableSpec {
    pub fn new(name: &'static str, columns: Vec<ColumnSpec>) -> Self {
        Self { name, columns }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Whether `column` is the primary key or one of the declared columns.
    pub fn has_column(&self, column: &str) -> bool {
        column == ID_COLUMN || self.columns.iter().any(|c| c.name == column)
    }

    /// Build the `CREATE TABLE` statement for this spec.
    pub fn create_statement(&self) -> TableCreateStatement {
        let mut stmt = Table::create();
        stmt.table(Alias::new(self.name)).col(
            ColumnDef::new(Alias::new(ID_COLUMN))
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        );
        for column in &self.columns {
            stmt.col(column.to_column_def());
        }
        stmt
    }
}
