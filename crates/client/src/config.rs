use domain::session::AdminCredentials;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,

    #[serde(default)]
    pub store: StoreConfig,

    pub logging: LoggingConfig,

    /// The fixed demo credential pair guarding admin actions.
    #[serde(default = "default_admin")]
    pub admin: AdminCredentials,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_base_url() -> String {
    "http://localhost:5001".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_store_path() -> String {
    "citizen-connect.db".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_admin() -> AdminCredentials {
    AdminCredentials {
        username: "admin".to_string(),
        password: "admin123".to_string(),
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with CC__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("CC").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Configuration for tests pointing the client at `base_url`, without
    /// touching config files.
    pub fn for_base_url(base_url: &str) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.to_string(),
                request_timeout_secs: 5,
            },
            store: StoreConfig::default(),
            logging: LoggingConfig {
                level: "debug".to_string(),
                format: "pretty".to_string(),
            },
            admin: default_admin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_sections() {
        let raw = r#"
            [api]

            [logging]
        "#;
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.api.base_url, "http://localhost:5001");
        assert_eq!(cfg.api.request_timeout_secs, 30);
        assert_eq!(cfg.store.path, "citizen-connect.db");
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.admin.matches("admin", "admin123"));
    }

    #[test]
    fn test_explicit_values_win() {
        let raw = r#"
            [api]
            base_url = "http://10.0.0.2:9000"

            [logging]
            level = "warn"
            format = "json"

            [admin]
            username = "chief"
            password = "letmein-demo"
        "#;
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.api.base_url, "http://10.0.0.2:9000");
        assert_eq!(cfg.logging.format, "json");
        assert!(cfg.admin.matches("chief", "letmein-demo"));
        assert!(!cfg.admin.matches("admin", "admin123"));
    }
}
