use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CatalogSource {
    Postgres,
    Sample,
}

impl CatalogSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Sample => "sample",
        }
    }
}

impl FromStr for CatalogSource {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(Self::Postgres),
            "sample" => Ok(Self::Sample),
            other => Err(format!("unknown catalog source: {other}")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub catalog_source: CatalogSource,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_database: String,
    pub table_list_query: String,
    pub column_list_query: String,
    pub output_path: String,
    pub seed_sample_data: bool,
}

pub const DEFAULT_TABLE_LIST_QUERY: &str = "SELECT table_name, pk FROM table_list";
pub const DEFAULT_COLUMN_LIST_QUERY: &str =
    "SELECT table_name, column_name, column_type FROM table_cols";
pub const DEFAULT_OUTPUT_PATH: &str = "result.log";

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; missing or unparseable values fall back
    /// to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            catalog_source: lookup("CATALOG_SOURCE")
                .map(|raw| {
                    raw.parse().unwrap_or_else(|error| {
                        log::warn!("{error}; falling back to postgres");
                        CatalogSource::Postgres
                    })
                })
                .unwrap_or(CatalogSource::Postgres),
            postgres_host: lookup("POSTGRES_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            postgres_port: lookup("POSTGRES_PORT")
                .unwrap_or_else(|| "5432".to_string())
                .parse()
                .unwrap_or(5432),
            postgres_user: lookup("POSTGRES_USER").unwrap_or_else(|| "postgres".to_string()),
            postgres_password: lookup("POSTGRES_PASSWORD").unwrap_or_else(|| "admin".to_string()),
            postgres_database: lookup("POSTGRES_DATABASE")
                .unwrap_or_else(|| "postgres".to_string()),
            table_list_query: lookup("CATALOG_TABLE_LIST_QUERY")
                .unwrap_or_else(|| DEFAULT_TABLE_LIST_QUERY.to_string()),
            column_list_query: lookup("CATALOG_COLUMN_LIST_QUERY")
                .unwrap_or_else(|| DEFAULT_COLUMN_LIST_QUERY.to_string()),
            output_path: lookup("REPORT_OUTPUT_PATH")
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()),
            seed_sample_data: lookup("CATALOG_SEED_SAMPLE_DATA")
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(false),
        }
    }

    pub fn catalog_database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_database
        )
    }
}
