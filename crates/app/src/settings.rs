//! Handles settings for the application. Configuration is read from an
//! optional `settings.{toml,yaml,json}` file and `CATALOGO__*` environment
//! variables, e.g. `CATALOGO__DATABASE__URL`.
use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

const DEFAULT_SQLITE: &str = "./catalogo.db";

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
    Url(String),
}

impl Database {
    pub fn url(&self) -> String {
        match self {
            Database::Memory => String::from("sqlite::memory:"),
            Database::Sqlite(path) => format!("sqlite:{path}?mode=rwc"),
            Database::Url(url) => url.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub database: Option<Database>,
}

impl Settings {
    pub fn new(path: &str) -> Result<Self, ConfigError> {
        Self::build(
            Config::builder()
                .add_source(File::with_name(path).required(false))
                .add_source(Environment::with_prefix("CATALOGO").separator("__")),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .set_default("app.level", "info")?
            .build()?
            .try_deserialize()
    }

    /// Connection string of the configured database, a local SQLite file
    /// when none is configured.
    pub fn database_url(&self) -> String {
        match &self.database {
            Some(database) => database.url(),
            None => Database::Sqlite(DEFAULT_SQLITE.to_string()).url(),
        }
    }
}
