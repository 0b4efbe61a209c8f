use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_title")]
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_site_title(),
        }
    }
}

fn default_site_title() -> String {
    "Portfolio".to_string()
}

/// How a second `submit` delivers the message.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Resolve after an artificial delay, no network involved.
    #[default]
    Simulated,
    /// Hand the message to an SMTP relay.
    Smtp,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    #[serde(default)]
    pub delivery: DeliveryMode,
    /// Artificial latency of the simulated sink, in milliseconds.
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
    /// When set, the simulated sink fails every submission with this reason.
    #[serde(default)]
    pub simulated_failure: Option<String>,
    #[serde(default)]
    pub smtp: SmtpConfig,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            delivery: DeliveryMode::default(),
            simulated_delay_ms: default_simulated_delay_ms(),
            simulated_failure: None,
            smtp: SmtpConfig::default(),
        }
    }
}

fn default_simulated_delay_ms() -> u64 {
    1000
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_from_email")]
    pub from_email: String,
    #[serde(default = "default_from_name")]
    pub from_name: String,
    /// Inbox that receives contact form messages.
    #[serde(default)]
    pub to_email: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            to_email: String::new(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_email() -> String {
    "noreply@folio.localhost".to_string()
}

fn default_from_name() -> String {
    "folio".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FOLIO__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional; ignore if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.contact.delivery == DeliveryMode::Smtp {
            if self.contact.smtp.host.is_empty() {
                return Err("SMTP delivery requires contact.smtp.host".to_string());
            }
            if self.contact.smtp.to_email.is_empty() {
                return Err("SMTP delivery requires contact.smtp.to_email".to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            site: SiteConfig::default(),
            contact: ContactConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = base_config();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_smtp_requires_recipient() {
        let mut config = base_config();
        config.contact.delivery = DeliveryMode::Smtp;
        config.contact.smtp.to_email = String::new();
        assert!(config.validate().is_err());

        config.contact.smtp.to_email = "owner@example.com".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_simulated_delivery_is_the_default() {
        let config = base_config();
        assert_eq!(config.contact.delivery, DeliveryMode::Simulated);
        assert_eq!(config.contact.simulated_delay_ms, 1000);
    }
}
