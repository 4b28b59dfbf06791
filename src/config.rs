//! Runtime configuration read from the environment.
//!
//! | Variable              | Default           |
//! |-----------------------|-------------------|
//! | `NOTES_BIND`          | `127.0.0.1:3000`  |
//! | `NOTES_DB_PATH`       | `.notes_db`       |
//! | `NOTES_UPLOAD_DIR`    | `uploads`         |
//! | `NOTES_PASSWORD`      | unset (open mode) |
//! | `NOTES_PUBLIC_ORIGIN` | unset (use Host)  |

use std::env;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_DB_PATH: &str = ".notes_db";
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// URL prefix under which uploaded images are served.
pub const UPLOAD_URL_PREFIX: &str = "/uploads";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: String,
    pub db_path: PathBuf,
    pub upload_dir: PathBuf,
    /// When set, mutating routes require a login session.
    pub password: Option<String>,
    /// Origin used to build public share links when no Host header is present.
    pub public_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            bind: var("NOTES_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string()),
            db_path: var("NOTES_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
            upload_dir: var("NOTES_UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            password: var("NOTES_PASSWORD"),
            public_origin: var("NOTES_PUBLIC_ORIGIN").map(|o| o.trim_end_matches('/').to_string()),
        }
    }

    pub fn auth_enabled(&self) -> bool {
        self.password.is_some()
    }

    /// Key used to sign session cookies.
    pub fn secret(&self) -> Option<&[u8]> {
        self.password.as_deref().map(str::as_bytes)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bind, DEFAULT_BIND);
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_PATH));
        assert_eq!(config.upload_dir, PathBuf::from(DEFAULT_UPLOAD_DIR));
        assert!(!config.auth_enabled());
        assert!(config.secret().is_none());
    }

    #[test]
    fn test_lookup_overrides() {
        let vars: HashMap<&str, &str> = [
            ("NOTES_BIND", "0.0.0.0:8080"),
            ("NOTES_PASSWORD", "hunter2"),
            ("NOTES_PUBLIC_ORIGIN", "https://notes.example.com/"),
        ]
        .into_iter()
        .collect();
        let config = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.bind, "0.0.0.0:8080");
        assert!(config.auth_enabled());
        assert_eq!(config.secret(), Some("hunter2".as_bytes()));
        assert_eq!(config.public_origin.as_deref(), Some("https://notes.example.com"));
    }

    #[test]
    fn test_empty_password_disables_auth() {
        let config = Config::from_lookup(|k| (k == "NOTES_PASSWORD").then(|| "  ".to_string()));
        assert!(!config.auth_enabled());
    }
}
