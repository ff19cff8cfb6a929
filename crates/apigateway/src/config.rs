use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub run_migrations: bool,
    pub db_min_conn: u32,
    pub db_max_conn: u32,
    pub expose_internal_errors: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, `init` uses the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .context("Missing environment variable: DATABASE_URL")?;
        let port_str = lookup("PORT").context("Missing environment variable: PORT")?;

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let run_migrations = parse_flag("RUN_MIGRATIONS", lookup("RUN_MIGRATIONS"), true)?;
        let expose_internal_errors = parse_flag(
            "EXPOSE_INTERNAL_ERRORS",
            lookup("EXPOSE_INTERNAL_ERRORS"),
            false,
        )?;

        let db_min_conn = parse_u32("DB_MIN_CONN", lookup("DB_MIN_CONN"), 1)?;
        let db_max_conn = parse_u32("DB_MAX_CONN", lookup("DB_MAX_CONN"), 5)?;

        if db_min_conn > db_max_conn {
            return Err(anyhow!(
                "DB_MIN_CONN ({db_min_conn}) must not exceed DB_MAX_CONN ({db_max_conn})"
            ));
        }

        Ok(Self {
            database_url,
            port,
            run_migrations,
            db_min_conn,
            db_max_conn,
            expose_internal_errors,
        })
    }
}

fn parse_flag(key: &str, value: Option<String>, default: bool) -> Result<bool> {
    match value.as_deref() {
        None => Ok(default),
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(other) => Err(anyhow!("{key} must be 'true' or 'false', got '{other}'")),
    }
}

fn parse_u32(key: &str, value: Option<String>, default: u32) -> Result<u32> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse::<u32>()
            .with_context(|| format!("{key} must be a valid u32 integer")),
    }
}
