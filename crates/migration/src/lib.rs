pub use sea_orm_migration::prelude::*;

mod m20241027_022619_categories;
mod m20241027_022714_products;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241027_022619_categories::Migration),
            Box::new(m20241027_022714_products::Migration),
        ]
    }
}
