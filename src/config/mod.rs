mod types;

pub use types::*;

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_ENV_FILE: &str = ".env";

/// Outcome of seeding the process environment from a dotenv file.
#[derive(Debug)]
pub enum EnvFile {
    Loaded(PathBuf),
    Missing(PathBuf),
    Invalid { path: PathBuf, reason: String },
}

impl EnvFile {
    /// Reports the outcome once logging is up. Never fatal.
    pub fn log(&self) {
        match self {
            EnvFile::Loaded(path) => debug!("Loaded environment from {}", path.display()),
            EnvFile::Missing(path) => warn!("No {} file found", path.display()),
            EnvFile::Invalid { path, reason } => {
                warn!("Ignoring unreadable env file {}: {}", path.display(), reason)
            }
        }
    }
}

/// Seeds the process environment from `path`. Variables that are already set
/// are left untouched.
pub fn load_env_file(path: impl AsRef<Path>) -> EnvFile {
    let path = path.as_ref().to_path_buf();
    match dotenvy::from_path(&path) {
        Ok(()) => EnvFile::Loaded(path),
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            EnvFile::Missing(path)
        }
        Err(e) => EnvFile::Invalid {
            path,
            reason: e.to_string(),
        },
    }
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup. Empty values count
    /// as absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", raw)))?,
            None => types::default_port(),
        };

        Ok(Config {
            aws: AwsConfig {
                region: get("AWS_REGION").unwrap_or_default(),
                access_key_id: get("AWS_ACCESS_KEY_ID").unwrap_or_default(),
                secret_access_key: get("AWS_SECRET_ACCESS_KEY").unwrap_or_default(),
                session_token: get("AWS_SESSION_TOKEN"),
            },
            server: ServerConfig {
                host: get("HOST").unwrap_or_else(types::default_host),
                port,
                logs: LogsConfig {
                    level: get("LOG_LEVEL").unwrap_or_else(types::default_log_level),
                },
            },
        })
    }
}

/// Loads the optional env file named by `ENV_FILE` (default `.env`), then
/// reads the environment.
pub fn load() -> Result<(Config, EnvFile)> {
    let env_path = std::env::var("ENV_FILE").unwrap_or_else(|_| DEFAULT_ENV_FILE.to_string());
    let env_file = load_env_file(&env_path);
    let config = Config::from_env()?;
    Ok((config, env_file))
}
