//! Process settings from environment variables (optionally seeded from `.env`).

use crate::error::ConfigError;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/petstore";
pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BIND: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 5000));
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

/// Which `PetStore` implementation backs the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(ConfigError::InvalidValue {
                key: "PETSTORE_STORE",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub store: StoreKind,
    pub database_url: String,
    /// Schema holding the `pet` table. Must be a valid PostgreSQL identifier.
    pub schema: String,
    pub max_connections: u32,
    /// Create the target database on startup when it does not exist.
    pub create_database: bool,
    pub bind: SocketAddr,
    pub body_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            store: StoreKind::Postgres,
            database_url: DEFAULT_DATABASE_URL.into(),
            schema: DEFAULT_SCHEMA.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            create_database: true,
            bind: DEFAULT_BIND,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let store = match get("PETSTORE_STORE") {
            Some(v) => v.parse()?,
            None => StoreKind::Postgres,
        };
        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let schema = get("PETSTORE_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.into());
        if !is_valid_identifier(&schema) {
            return Err(ConfigError::InvalidSchema(schema));
        }
        let max_connections = parse_or("PETSTORE_MAX_CONNECTIONS", get("PETSTORE_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "PETSTORE_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }
        let create_database = match get("PETSTORE_CREATE_DATABASE") {
            Some(v) => parse_bool("PETSTORE_CREATE_DATABASE", &v)?,
            None => true,
        };
        let bind = parse_or("PETSTORE_BIND", get("PETSTORE_BIND"), DEFAULT_BIND)?;
        let body_limit = parse_or("PETSTORE_BODY_LIMIT", get("PETSTORE_BODY_LIMIT"), DEFAULT_BODY_LIMIT)?;

        Ok(Settings {
            store,
            database_url,
            schema,
            max_connections,
            create_database,
            bind,
            body_limit,
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidValue { key, value: v }),
        None => Ok(default),
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        }),
    }
}

/// Unquoted PostgreSQL identifier: letter or underscore first, then letters, digits, underscores; at most 63 bytes.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    s.len() <= 63 && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let env: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.store, StoreKind::Postgres);
        assert_eq!(s.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(s.schema, "public");
        assert_eq!(s.max_connections, 5);
        assert!(s.create_database);
        assert_eq!(s.bind, DEFAULT_BIND);
        assert_eq!(s.bind.to_string(), "127.0.0.1:5000");
        assert_eq!(Settings::default().bind, s.bind);
        assert_eq!(s.body_limit, DEFAULT_BODY_LIMIT);
    }

    #[test]
    fn reads_overrides() {
        let s = settings(&[
            ("PETSTORE_STORE", "memory"),
            ("DATABASE_URL", "postgres://db:5432/pets"),
            ("PETSTORE_SCHEMA", "petstore"),
            ("PETSTORE_MAX_CONNECTIONS", "12"),
            ("PETSTORE_CREATE_DATABASE", "off"),
            ("PETSTORE_BIND", "0.0.0.0:8080"),
            ("PETSTORE_BODY_LIMIT", "1024"),
        ])
        .unwrap();
        assert_eq!(s.store, StoreKind::Memory);
        assert_eq!(s.database_url, "postgres://db:5432/pets");
        assert_eq!(s.schema, "petstore");
        assert_eq!(s.max_connections, 12);
        assert!(!s.create_database);
        assert_eq!(s.bind.port(), 8080);
        assert_eq!(s.body_limit, 1024);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let s = settings(&[("PETSTORE_SCHEMA", "  "), ("PETSTORE_BIND", "")]).unwrap();
        assert_eq!(s.schema, "public");
        assert_eq!(s.bind, DEFAULT_BIND);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            settings(&[("PETSTORE_MAX_CONNECTIONS", "many")]),
            Err(ConfigError::InvalidValue { key: "PETSTORE_MAX_CONNECTIONS", .. })
        ));
        assert!(settings(&[("PETSTORE_MAX_CONNECTIONS", "0")]).is_err());
        assert!(settings(&[("PETSTORE_CREATE_DATABASE", "maybe")]).is_err());
        assert!(settings(&[("PETSTORE_BIND", "localhost")]).is_err());
        assert!(settings(&[("PETSTORE_STORE", "mysql")]).is_err());
    }

    #[test]
    fn schema_must_be_an_identifier() {
        assert!(matches!(
            settings(&[("PETSTORE_SCHEMA", "pet\"; drop")]),
            Err(ConfigError::InvalidSchema(_))
        ));
        assert!(is_valid_identifier("_pets2"));
        assert!(!is_valid_identifier("2pets"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier(&"a".repeat(64)));
    }
}
