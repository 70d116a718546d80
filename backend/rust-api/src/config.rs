use serde::Deserialize;
use std::{env, str::FromStr};

const DEV_SESSION_SECRET: &str = "dev-session-secret-only-for-local-testing";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub bind_addr: String,
    pub session: SessionConfig,
    pub auth: AuthConfig,
    pub runner: RunnerConfig,
    /// `username:password` pair guarding `/metrics`
    pub metrics_auth: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    pub ttl_seconds: i64,
    pub cookie_secure: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// JSON file with the user directory seed; demo users are used when unset
    pub users_file: Option<String>,
    pub bcrypt_cost: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunnerConfig {
    pub run_all_delay_ms: u64,
    pub custom_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: DEV_SESSION_SECRET.to_string(),
            ttl_seconds: 30 * 24 * 60 * 60,
            cookie_secure: false,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            users_file: None,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            run_all_delay_ms: 2000,
            custom_delay_ms: 1000,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        // Root .env first (two levels up), then the crate-local one
        let skip_root_env = env::var("SKIP_ROOT_ENV").is_ok();
        if skip_root_env {
            dotenvy::dotenv().ok();
        } else if dotenvy::from_path("../../.env").is_err() {
            dotenvy::dotenv().ok();
        }

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // config/*.toml, overridden by APP_* variables
        let settings = config::Config::builder()
            .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        let secret = match lookup::<String>(&settings, "session.secret", "SESSION_SECRET") {
            Some(secret) if !secret.is_empty() => secret,
            _ if app_env == "prod" => {
                return Err(config::ConfigError::Message(
                    "SESSION_SECRET must be set in production".to_string(),
                ));
            }
            _ => {
                eprintln!("WARNING: Using default SESSION_SECRET (dev mode only!)");
                DEV_SESSION_SECRET.to_string()
            }
        };

        let session_defaults = SessionConfig::default();
        let session = SessionConfig {
            secret,
            ttl_seconds: lookup(&settings, "session.ttl_seconds", "SESSION_TTL_SECONDS")
                .filter(|ttl: &i64| *ttl > 0)
                .unwrap_or(session_defaults.ttl_seconds),
            cookie_secure: lookup(&settings, "session.cookie_secure", "COOKIE_SECURE")
                .unwrap_or(session_defaults.cookie_secure),
        };

        let auth = AuthConfig {
            users_file: lookup::<String>(&settings, "auth.users_file", "USERS_FILE")
                .filter(|path| !path.is_empty()),
            bcrypt_cost: lookup(&settings, "auth.bcrypt_cost", "BCRYPT_COST")
                .unwrap_or(bcrypt::DEFAULT_COST),
        };

        let runner_defaults = RunnerConfig::default();
        let runner = RunnerConfig {
            run_all_delay_ms: lookup(&settings, "runner.run_all_delay_ms", "RUN_ALL_DELAY_MS")
                .unwrap_or(runner_defaults.run_all_delay_ms),
            custom_delay_ms: lookup(&settings, "runner.custom_delay_ms", "CUSTOM_RUN_DELAY_MS")
                .unwrap_or(runner_defaults.custom_delay_ms),
        };

        let bind_addr = lookup(&settings, "server.bind_addr", "BIND_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8081".to_string());

        let metrics_auth = lookup(&settings, "metrics.auth", "METRICS_AUTH")
            .unwrap_or_else(|| "admin:changeme".to_string());

        Ok(Config {
            bind_addr,
            session,
            auth,
            runner,
            metrics_auth,
        })
    }
}

/// Reads `key` from the layered settings, falling back to the plain `env_key` variable.
/// A value that is present but does not parse is reported and treated as absent.
fn lookup<T: FromStr>(settings: &config::Config, key: &str, env_key: &str) -> Option<T> {
    let raw = settings
        .get_string(key)
        .ok()
        .or_else(|| env::var(env_key).ok())?;

    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(
                "Ignoring unparsable value {:?} for {} ({}), using the default",
                raw,
                key,
                env_key
            );
            None
        }
    }
}
