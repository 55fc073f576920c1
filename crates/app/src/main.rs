use clap::{Parser, Subcommand};
use migration::{Migrator, MigratorTrait, SchemaManager};
use sea_orm::{Database, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};

mod settings;

#[derive(Parser, Debug)]
#[command(name = "catalogo")]
#[command(about = "Create, seed and roll back the catalog tables")]
struct Cli {
    /// Settings file, extension optional.
    #[arg(long, default_value = "settings")]
    config: String,

    /// Database connection string, overrides the settings (also read from `DATABASE_URL`).
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Apply pending migrations, all of them unless `--steps` is given.
    Migrate {
        #[arg(long)]
        steps: Option<u32>,
    },
    /// Revert applied migrations, newest first.
    Rollback {
        #[arg(long, default_value_t = 1)]
        steps: u32,
    },
    /// Drop every table and apply all migrations again.
    Fresh,
    /// Log applied and pending migrations and the catalog row counts.
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let settings = settings::Settings::new(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "catalogo={level},catalog={level},migration={level},sea_orm_migration={level}",
            level = settings.app.level
        ))
        .init();

    let url = cli
        .database_url
        .unwrap_or_else(|| settings.database_url());
    let db = Database::connect(&url).await?;

    if let Err(err) = run(&db, cli.command).await {
        tracing::error!("migration run failed: {err}");
        return Err(err.into());
    }

    Ok(())
}

async fn run(db: &DatabaseConnection, command: Command) -> Result<(), DbErr> {
    match command {
        Command::Migrate { steps } => Migrator::up(db, steps).await,
        Command::Rollback { steps } => Migrator::down(db, Some(steps)).await,
        Command::Fresh => Migrator::fresh(db).await,
        Command::Status => status(db).await,
    }
}

async fn status(db: &DatabaseConnection) -> Result<(), DbErr> {
    for migration in Migrator::get_applied_migrations(db).await? {
        tracing::info!("applied {}", migration.name());
    }
    for migration in Migrator::get_pending_migrations(db).await? {
        tracing::info!("pending {}", migration.name());
    }

    let manager = SchemaManager::new(db);
    let categories = catalog::categories_table();
    if manager.has_table(categories.name()).await? {
        let rows = catalog::category::Entity::find().count(db).await?;
        tracing::info!("{}: {rows} rows", categories.name());
    }
    let products = catalog::products_table();
    if manager.has_table(products.name()).await? {
        let rows = catalog::product::Entity::find().count(db).await?;
        tracing::info!("{}: {rows} rows", products.name());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rollback_defaults_to_one_step() {
        let cli = Cli::try_parse_from(["catalogo", "rollback"]).unwrap();
        assert_eq!(cli.command, Command::Rollback { steps: 1 });
        assert_eq!(cli.config, "settings");
    }

    #[test]
    fn migrate_applies_everything_by_default() {
        let cli = Cli::try_parse_from(["catalogo", "migrate"]).unwrap();
        assert_eq!(cli.command, Command::Migrate { steps: None });

        let cli = Cli::try_parse_from(["catalogo", "migrate", "--steps", "1"]).unwrap();
        assert_eq!(cli.command, Command::Migrate { steps: Some(1) });
    }

    #[tokio::test]
    async fn status_reports_on_migrated_database() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        status(&db).await.unwrap();

        run(&db, Command::Migrate { steps: Some(1) }).await.unwrap();
        assert_eq!(Migrator::get_pending_migrations(&db).await.unwrap().len(), 1);
        status(&db).await.unwrap();

        run(&db, Command::Rollback { steps: 1 }).await.unwrap();
        assert_eq!(Migrator::get_pending_migrations(&db).await.unwrap().len(), 2);
    }
}
