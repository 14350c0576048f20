use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host to bind to.
    pub host: String,
    /// Server port to bind to.
    pub port: u16,
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Maximum database connections in the pool.
    pub db_max_connections: u32,
    /// Minimum database connections in the pool.
    pub db_min_connections: u32,
    /// The one admin password; empty means login is unconfigured.
    pub admin_password: String,
    /// JWT signing secret.
    pub jwt_secret: String,
    /// Origins allowed by CORS in production.
    pub cors_origins: Vec<String>,
    /// Whether the deployment runs in production mode (enforces CORS).
    pub production: bool,
    /// Endpoint of the external mail relay.
    pub mail_service_url: String,
    /// API key sent to the mail relay.
    pub mail_service_api_key: String,
    /// Addresses notified about new registrations.
    pub admin_emails: Vec<String>,
    /// Public base URL for generated upload links; empty means infer from
    /// the request.
    pub public_url: String,
    /// Directory uploaded media is stored in and served from.
    pub uploads_dir: PathBuf,
    /// Log level (e.g., "info", "debug", "trace").
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self, env::VarError> {
        let mut cors_origins =
            vec![env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string())];
        cors_origins.extend(split_list(
            &env::var("CORS_ORIGIN_LIST").unwrap_or_default(),
        ));

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .expect("PORT must be a valid u16"),
            database_url: env::var("DATABASE_URL")?,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("DB_MAX_CONNECTIONS must be a valid u32"),
            db_min_connections: env::var("DB_MIN_CONNECTIONS")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .expect("DB_MIN_CONNECTIONS must be a valid u32"),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_default(),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "change-me-before-production".to_string()),
            cors_origins,
            production: env::var("APP_ENV").is_ok_and(|value| value == "production"),
            mail_service_url: env::var("MAIL_SERVICE_URL")
                .unwrap_or_else(|_| "https://mailservice-tau.vercel.app/api/email/send".to_string()),
            mail_service_api_key: env::var("MAIL_SERVICE_API_KEY").unwrap_or_default(),
            admin_emails: split_list(
                &env::var("ADMIN_EMAILS").unwrap_or_else(|_| "admin@mixmasters.club".to_string()),
            ),
            public_url: env::var("PUBLIC_URL")
                .unwrap_or_default()
                .trim_end_matches('/')
                .to_string(),
            uploads_dir: env::var("UPLOADS_DIR")
                .unwrap_or_else(|_| "uploads".to_string())
                .into(),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Build the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_trims_and_drops_empties() {
        assert_eq!(
            split_list(" a@x.com , ,b@x.com,"),
            vec!["a@x.com".to_string(), "b@x.com".to_string()]
        );
        assert!(split_list("").is_empty());
    }
}
