use catalog::Runner;
use rand::{SeedableRng, rngs::StdRng};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut rng = StdRng::from_entropy();
        Runner::new(manager)
            .apply_up(&catalog::products(), &mut rng)
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        Runner::new(manager)
            .apply_down(&catalog::products())
            .await?;
        Ok(())
    }
}
