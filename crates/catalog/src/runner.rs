//! Apply and revert migration definitions against a [`Storage`].

use rand::RngCore;

use crate::{CatalogError, SeedGenerator, Storage, TableSpec};

type ResultRunner<T> = Result<T, CatalogError>;

/// A table plus the rows it is seeded with.
pub struct MigrationDefinition {
    table: TableSpec,
    seed: Option<Box<dyn SeedGenerator>>,
}

impl MigrationDefinition {
    /// A definition that only ensures the table exists.
    pub fn new(table: TableSpec) -> Self {
        Self { table, seed: None }
    }

    pub fn seeded(table: TableSpec, seed: impl SeedGenerator + 'static) -> Self {
        Self {
            table,
            seed: Some(Box::new(seed)),
        }
    }

    pub fn table(&self) -> &TableSpec {
        &self.table
    }
}

impl std::fmt::Debug for MigrationDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MigrationDefinition")
            .field("table", &self.table.name())
            .field("seeded", &self.seed.is_some())
            .finish()
    }
}

/// Runs definitions one at a time against a borrowed storage handle.
#[derive(Debug)]
pub struct Runner<'a, S: ?Sized> {
    storage: &'a S,
}

impl<'a, S: Storage + ?Sized> Runner<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Ensure the table exists, then insert the seed rows.
    ///
    /// Creating the table is skipped when it already exists. Seeding is not:
    /// every call inserts a fresh batch. Returns the number of rows inserted.
    pub async fn apply_up<R>(
        &self,
        definition: &MigrationDefinition,
        rng: &mut R,
    ) -> ResultRunner<usize>
    where
        R: RngCore + Send,
    {
        let table = definition.table();

        if self.storage.has_table(table.name()).await? {
            tracing::info!("table {} already exists, skipping create", table.name());
        } else {
            self.storage.create_table(table).await?;
            tracing::info!("created table {}", table.name());
        }

        let Some(seed) = &definition.seed else {
            return Ok(0);
        };

        let rows = seed.rows(rng);
        if let Some(column) = rows
            .iter()
            .flat_map(|row| row.columns())
            .find(|column| !table.has_column(column))
        {
            return Err(CatalogError::UnknownColumn {
                table: table.name().to_string(),
                column: column.to_string(),
            });
        }

        let inserted = rows.len();
        for row in rows {
            self.storage.insert(table.name(), row).await?;
        }
        tracing::info!("seeded {inserted} rows into {}", table.name());

        Ok(inserted)
    }

    /// Delete every row and restart the id counter. The table itself stays.
    pub async fn apply_down(&self, definition: &MigrationDefinition) -> ResultRunner<u64> {
        let table = definition.table().name();

        let deleted = self.storage.delete_all(table).await?;
        self.storage.reset_auto_increment(table).await?;
        tracing::info!("deleted {deleted} rows from {table} and reset its id counter");

        Ok(deleted)
    }

    /// Apply every definition in order, stopping at the first failure.
    pub async fn apply_all_up<R>(
        &self,
        definitions: &[MigrationDefinition],
        rng: &mut R,
    ) -> ResultRunner<()>
    where
        R: RngCore + Send,
    {
        for definition in definitions {
            self.apply_up(definition, rng).await?;
        }
        Ok(())
    }

    /// Revert every definition, last one first.
    pub async fn apply_all_down(&self, definitions: &[MigrationDefinition]) -> ResultRunner<()> {
        for definition in definitions.iter().rev() {
            self.apply_down(definition).await?;
        }
        Ok(())
    }
}
