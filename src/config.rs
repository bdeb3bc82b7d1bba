use axum_extra::extract::cookie::Key;
use base64::Engine;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::AdrError;

pub const ENV_PREFIX: &str = "ADR_";
pub const MAX_PAGE_SIZE: u32 = 100;
pub const MAX_SESSION_HOURS: i64 = 24 * 365;

/// Keys read verbatim from the environment; `ADR_ADMIN_PASSWORD=1234` stays text.
const TEXT_KEYS: [&str; 6] = [
    "database_url",
    "listen_addr",
    "loglevel",
    "secret_key",
    "admin_username",
    "admin_password",
];

/// Runtime configuration, built from defaults overlaid with `ADR_*` env vars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    /// Standard base64 of at least 64 random bytes.
    pub secret_key: Option<String>,
    pub admin_username: String,
    pub admin_password: Option<String>,
    pub page_size: u32,
    pub insecure_cookie: bool,
    pub session_hours: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:adr.db".to_string(),
            listen_addr: "127.0.0.1:5001".to_string(),
            loglevel: "info".to_string(),
            secret_key: None,
            admin_username: "admin".to_string(),
            admin_password: None,
            page_size: 10,
            insecure_cookie: false,
            session_hours: 8,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        let base = Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&TEXT_KEYS));
        let text = Env::prefixed(ENV_PREFIX).only(&TEXT_KEYS);
        text.iter().fold(base, |figment, (key, value)| {
            figment.merge((key.as_str().to_owned(), value))
        })
    }

    pub fn load() -> Result<Self, AdrError> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, AdrError> {
        let cfg: Config = figment.extract()?;
        if cfg.database_url.trim().is_empty() {
            return Err(AdrError::InvalidConfig(
                "ADR_DATABASE_URL must not be empty".to_string(),
            ));
        }
        if !(1..=MAX_SESSION_HOURS).contains(&cfg.session_hours) {
            return Err(AdrError::InvalidConfig(format!(
                "ADR_SESSION_HOURS must be between 1 and {MAX_SESSION_HOURS}, got {}",
                cfg.session_hours
            )));
        }
        Ok(cfg)
    }

    /// Session encryption key. Falls back to a throwaway key when no secret is set.
    pub fn cookie_key(&self) -> Result<Key, AdrError> {
        let Some(secret) = self.secret_key.as_deref() else {
            warn!("ADR_SECRET_KEY not set; generated an ephemeral session key");
            return Ok(Key::generate());
        };
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(secret.trim())
            .map_err(|e| AdrError::InvalidSecretKey(e.to_string()))?;
        Key::try_from(bytes.as_slice()).map_err(|_| {
            AdrError::InvalidSecretKey(format!(
                "expected at least 64 bytes, got {}",
                bytes.len()
            ))
        })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }

    pub fn session_max_age(&self) -> time::Duration {
        time::Duration::hours(self.session_hours.clamp(1, MAX_SESSION_HOURS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        let cfg = Config::from_figment(Figment::from(Serialized::defaults(Config::default())))
            .expect("defaults extract");
        assert_eq!(cfg.database_url, "sqlite:adr.db");
        assert_eq!(cfg.admin_username, "admin");
        assert_eq!(cfg.page_size(), 10);
        assert!(cfg.secret_key.is_none());
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("ADR_DATABASE_URL", "sqlite:other.db");
            jail.set_env("ADR_PAGE_SIZE", "500");
            jail.set_env("ADR_INSECURE_COOKIE", "true");
            let cfg = Config::load().expect("load");
            assert_eq!(cfg.database_url, "sqlite:other.db");
            assert_eq!(cfg.page_size(), MAX_PAGE_SIZE);
            assert!(cfg.insecure_cookie);
            Ok(())
        });
    }

    #[test]
    fn numeric_looking_text_values_stay_text() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("ADR_ADMIN_PASSWORD", "1234");
            jail.set_env("ADR_ADMIN_USERNAME", "007");
            jail.set_env("ADR_LOGLEVEL", "1");
            let cfg = Config::load().expect("load");
            assert_eq!(cfg.admin_password.as_deref(), Some("1234"));
            assert_eq!(cfg.admin_username, "007");
            assert_eq!(cfg.loglevel, "1");
            Ok(())
        });
    }

    #[test]
    fn session_hours_out_of_range_is_rejected() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("ADR_SESSION_HOURS", i64::MAX);
            assert!(matches!(Config::load(), Err(AdrError::InvalidConfig(_))));
            jail.set_env("ADR_SESSION_HOURS", 0);
            assert!(matches!(Config::load(), Err(AdrError::InvalidConfig(_))));
            jail.set_env("ADR_SESSION_HOURS", 12);
            assert_eq!(Config::load().expect("load").session_hours, 12);
            Ok(())
        });
    }

    #[test]
    fn session_max_age_is_bounded() {
        let cfg = Config {
            session_hours: i64::MAX,
            ..Config::default()
        };
        assert_eq!(cfg.session_max_age(), time::Duration::hours(MAX_SESSION_HOURS));
    }

    #[test]
    fn empty_database_url_is_rejected() {
        let figment =
            Figment::from(Serialized::defaults(Config::default())).merge(("database_url", "  "));
        assert!(matches!(
            Config::from_figment(figment),
            Err(AdrError::InvalidConfig(_))
        ));
    }

    #[test]
    fn short_secret_is_rejected() {
        let cfg = Config {
            secret_key: Some(base64::engine::general_purpose::STANDARD.encode([7u8; 16])),
            ..Config::default()
        };
        assert!(matches!(
            cfg.cookie_key(),
            Err(AdrError::InvalidSecretKey(_))
        ));
    }

    #[test]
    fn full_length_secret_is_accepted() {
        let cfg = Config {
            secret_key: Some(base64::engine::general_purpose::STANDARD.encode([7u8; 64])),
            ..Config::default()
        };
        assert!(cfg.cookie_key().is_ok());
    }
}
