use crate::quiz::QuizSourceConfig;
use dotenv::dotenv;
use std::env;
use tracing::{info, warn};

const DEFAULT_JWT_SECRET: &str = "cambiami-prima-di-andare-in-produzione";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub app_env: String,
    pub quiz: QuizSourceConfig,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite::memory:".to_string());

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set, using default (not secure for production!)");
            DEFAULT_JWT_SECRET.to_string()
        });

        let server_host = env::var("SERVER_HOST")
            .unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let max_connections = env::var("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .map_err(|_| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())?;

        let app_env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string());

        let quiz = QuizSourceConfig::from_env()?;

        Ok(Config {
            database_url,
            jwt_secret,
            server_host,
            server_port,
            max_connections,
            app_env,
            quiz,
        })
    }

    /// Logga la configurazione (nascondendo i segreti)
    pub fn print_info(&self) {
        info!("Environment: {}", self.app_env);
        info!("Server Address: {}:{}", self.server_host, self.server_port);
        info!("Database: {}", Self::mask_url(&self.database_url));
        info!("Max DB Connections: {}", self.max_connections);
        info!(
            "JWT Secret: {}",
            if self.jwt_secret == DEFAULT_JWT_SECRET {
                "USING DEFAULT (INSECURE!)"
            } else {
                "custom secret configured"
            }
        );
        info!(
            "Quiz source: file={} question_tag={} answer_tag={} splitter={} skip_lines={}",
            self.quiz.test_file_name(),
            self.quiz.question_tag(),
            self.quiz.answer_tag(),
            self.quiz.answer_splitter(),
            self.quiz.skip_lines()
        );
    }

    /// Maschera le credenziali dell'URL del database per il logging
    fn mask_url(url: &str) -> String {
        if let Some(at_pos) = url.find('@') {
            if let Some(scheme_end) = url.find("://") {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        if url.starts_with("sqlite:") {
            return url.to_string();
        }
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_url_hides_credentials() {
        assert_eq!(
            Config::mask_url("postgres://user:pass@db:5432/app"),
            "postgres://***@db:5432/app"
        );
    }

    #[test]
    fn test_mask_url_keeps_sqlite_paths() {
        assert_eq!(Config::mask_url("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(Config::mask_url("sqlite://data/app.db"), "sqlite://data/app.db");
    }

    #[test]
    fn test_mask_url_unknown_format() {
        assert_eq!(Config::mask_url("whatever"), "***");
    }
}
