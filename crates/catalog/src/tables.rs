//! The catalog tables and their seeds.

use crate::{CategorySeed, ColumnSpec, ColumnType, MigrationDefinition, ProductSeed, TableSpec};

const NAME: ColumnSpec = ColumnSpec::new("name", ColumnType::String { limit: 255 });

pub fn categories_table() -> TableSpec {
    TableSpec::new("categories", vec![NAME])
}

pub fn products_table() -> TableSpec {
    TableSpec::new(
        "products",
        vec![
            NAME,
            ColumnSpec::new(
                "price",
                ColumnType::Decimal {
                    precision: 10,
                    scale: 2,
                },
            ),
            ColumnSpec::new("description", ColumnType::Text),
            ColumnSpec::new("category_id", ColumnType::Integer),
            ColumnSpec::new("used", ColumnType::Boolean),
        ],
    )
}

/// `categories`, seeded with the five fixed names.
pub fn categories() -> MigrationDefinition {
    MigrationDefinition::seeded(categories_table(), CategorySeed)
}

/// `products`, seeded with random rows pointing at categories 1 to 5.
pub fn products() -> MigrationDefinition {
    MigrationDefinition::seeded(products_table(), ProductSeed::default())
}
