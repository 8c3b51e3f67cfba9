/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8080`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DbConfig {
    /// Load database settings from the environment.
    ///
    /// `DATABASE_URL` wins when set. Otherwise the URL is assembled from the
    /// individual parts:
    ///
    /// | Env Var              | Default     |
    /// |----------------------|-------------|
    /// | `DB_HOST`            | `localhost` |
    /// | `DB_PORT`            | `5432`      |
    /// | `DB_USER`            | `postgres`  |
    /// | `DB_PASSWORD`        | (empty)     |
    /// | `DB_NAME`            | `facility`  |
    /// | `DB_MAX_CONNECTIONS` | `20`        |
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            let var = |key: &str, default: &str| {
                std::env::var(key).unwrap_or_else(|_| default.to_string())
            };
            database_url(
                &var("DB_HOST", "localhost"),
                &var("DB_PORT", "5432"),
                &var("DB_USER", "postgres"),
                &var("DB_PASSWORD", ""),
                &var("DB_NAME", "facility"),
            )
        });

        let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        Self {
            url,
            max_connections,
        }
    }
}

/// Assemble a PostgreSQL URL from its parts. An empty password is omitted.
pub fn database_url(host: &str, port: &str, user: &str, password: &str, name: &str) -> String {
    if password.is_empty() {
        format!("postgres://{user}@{host}:{port}/{name}")
    } else {
        format!("postgres://{user}:{password}@{host}:{port}/{name}")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
