//! # Server configuration
//!
//! All settings come from environment variables. A `.env` file in the working directory is read
//! first, without overriding variables that are already set.

use std::{
    env::VarError,
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use tracing::warn;

mod vars {
    pub const PORT: &str = "PORT";
    pub const DB_PATH: &str = "DB_PATH";
    pub const STATIC_DIR: &str = "STATIC_DIR";
}

mod defaults {
    pub const PORT: u16 = 3001;
    pub const STATIC_DIR: &str = "./build";
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("required environment variable not set: {0}")]
    MissingEnv(&'static str),

    #[error("environment variable {0} is not valid UTF-8")]
    EnvNotUtf8(&'static str),

    #[error("environment variable {var} is not a valid port number: {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub db_path: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                warn!("failed to read .env file: {err}");
            }
        }
        Self::from_lookup(std::env::var)
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, VarError>,
    {
        let optional = |var: &'static str| match lookup(var) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::EnvNotUtf8(var)),
        };

        let port = match optional(vars::PORT)? {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: vars::PORT,
                value,
            })?,
            None => defaults::PORT,
        };

        let db_path = optional(vars::DB_PATH)?
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingEnv(vars::DB_PATH))?;

        let static_dir = if let Some(dir) = optional(vars::STATIC_DIR)? {
            PathBuf::from(dir)
        } else {
            let path = PathBuf::from(defaults::STATIC_DIR);
            warn!("STATIC_DIR not set; using default of {}", path.display());
            path
        };

        Ok(Self {
            port,
            db_path,
            static_dir,
        })
    }

    /// Address to listen on: the configured port on all interfaces.
    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, ffi::OsString};

    use super::*;

    fn lookup(
        vars: &[(&'static str, &str)],
    ) -> impl Fn(&'static str) -> Result<String, VarError> {
        let vars: HashMap<_, _> = vars.iter().map(|(k, v)| (*k, (*v).to_string())).collect();
        move |var| vars.get(var).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn defaults_apply() {
        let config = Config::from_lookup(lookup(&[("DB_PATH", "notes.db")])).unwrap();
        assert_eq!(
            config,
            Config {
                port: 3001,
                db_path: PathBuf::from("notes.db"),
                static_dir: PathBuf::from("./build"),
            }
        );
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:3001");
    }

    #[test]
    fn everything_can_be_set() {
        let config = Config::from_lookup(lookup(&[
            ("DB_PATH", "/var/lib/notes.db"),
            ("PORT", "8080"),
            ("STATIC_DIR", "/srv/www"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
    }

    #[test]
    fn db_path_is_required() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv("DB_PATH")));
    }

    #[test]
    fn bad_port_is_rejected() {
        let err =
            Config::from_lookup(lookup(&[("DB_PATH", "x.db"), ("PORT", "70000")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn non_utf8_is_reported() {
        let err = Config::from_lookup(|var| match var {
            "DB_PATH" => Err(VarError::NotUnicode(OsString::from("x"))),
            _ => Err(VarError::NotPresent),
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::EnvNotUtf8("DB_PATH")));
    }
}
