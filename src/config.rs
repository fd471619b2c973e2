//! Service configuration from the environment.
//! Used by: main.

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_DB_PATH: &str = "nodetron.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub db_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            db_path: DEFAULT_DB_PATH.into(),
        }
    }
}

impl ServerConfig {
    /// Reads `BIND_ADDR` and `NODETRON_DB_PATH`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            db_path: lookup("NODETRON_DB_PATH").unwrap_or(defaults.db_path),
        }
    }
}
