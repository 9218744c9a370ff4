use crate::errors::InspectError;

/// Closing hint printed when the report finishes.
pub const DEFAULT_API_HINT_URL: &str = "http://localhost:8000/api/local/restaurants/all";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub api_hint_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, InspectError> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;

        tracing::debug!("Database URL: {}", redact_database_url(&config.database_url));
        tracing::debug!("API hint URL: {}", config.api_hint_url);

        Ok(config)
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InspectError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::load(lookup).map_err(|e| InspectError::Config(format!("{:#}", e)))
    }

    fn load<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: lookup("DB_URL")
                .or_else(|| lookup("DATABASE_URL"))
                .ok_or_else(|| {
                    anyhow::anyhow!("DB_URL or DATABASE_URL environment variable required")
                })
                .and_then(validate_database_url)?,
            api_hint_url: lookup("API_HINT_URL")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_HINT_URL.to_string()),
        })
    }
}

/// Checks the connection string is non-empty and targets PostgreSQL.
pub fn validate_database_url(url: String) -> anyhow::Result<String> {
    if url.trim().is_empty() {
        anyhow::bail!("DB_URL cannot be empty");
    }
    if !url.starts_with("postgresql://") && !url.starts_with("postgres://") {
        anyhow::bail!("DB_URL must start with postgresql:// or postgres://");
    }
    Ok(url)
}

/// Returns the connection string with any password replaced by `***`.
///
/// Strings that do not parse as URLs are reduced to their scheme so nothing
/// secret leaks into the report header.
pub fn redact_database_url(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(mut parsed) => {
            if parsed.password().is_some() {
                // set_password only fails for cannot-be-a-base URLs, which postgres URLs are not
                let _ = parsed.set_password(Some("***"));
            }
            parsed.to_string()
        }
        Err(_) => raw
            .split_once("://")
            .map(|(scheme, _)| format!("{}://…", scheme))
            .unwrap_or_else(|| "<invalid url>".to_string()),
    }
}
