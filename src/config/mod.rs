use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub authz: AuthzConfig,
    pub log_filter: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthzConfig {
    /// Emit a debug event for every policy and resolver decision
    pub trace_decisions: bool,
    /// Warn on every request the middleware turns away
    pub log_denials: bool,
    /// Name the denied feature or route in 403 messages
    pub denial_detail: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("AUTHZ_TRACE_DECISIONS") {
            self.authz.trace_decisions = v.parse().unwrap_or(self.authz.trace_decisions);
        }
        if let Ok(v) = env::var("AUTHZ_LOG_DENIALS") {
            self.authz.log_denials = v.parse().unwrap_or(self.authz.log_denials);
        }
        if let Ok(v) = env::var("AUTHZ_DENIAL_DETAIL") {
            self.authz.denial_detail = v.parse().unwrap_or(self.authz.denial_detail);
        }
        if let Ok(v) = env::var("LOG_FILTER") {
            if !v.trim().is_empty() {
                self.log_filter = v;
            }
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            authz: AuthzConfig {
                trace_decisions: true,
                log_denials: true,
                denial_detail: true,
            },
            log_filter: "panel_authz=debug,info".to_string(),
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            authz: AuthzConfig {
                trace_decisions: false,
                log_denials: true,
                denial_detail: true,
            },
            log_filter: "info".to_string(),
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            authz: AuthzConfig {
                trace_decisions: false,
                log_denials: true,
                denial_detail: false,
            },
            log_filter: "warn".to_string(),
        }
    }
}

// Global singleton config - initialized once at first use
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

pub fn config() -> &'static AppConfig {
    &CONFIG
}
