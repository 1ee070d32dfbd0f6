use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// The set of database profiles known to an installation, loaded from a JSON
/// config file.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub profiles: Vec<Profile>,
}

/// How to reach one database: where the file lives, how its tables are
/// qualified in SQL, and which environment marker a fresh database gets.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub path: PathBuf,
    /// Prefix prepended to table names (`prefix.table`), for databases
    /// reached through an attached alias. None means unqualified names.
    #[serde(default)]
    pub schema_prefix: Option<String>,
    /// Marker stamped into the which_db table when the database is first
    /// created under this profile, e.g. "TEST" or "PROD".
    #[serde(default)]
    pub which_db: Option<String>,
}

impl DatabaseConfig {
    pub fn load(path: &Path) -> anyhow::Result<DatabaseConfig> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading database config {}", path.display()))?;
        let cfg: DatabaseConfig = serde_json::from_str(&raw)
            .with_context(|| format!("parsing database config {}", path.display()))?;
        Ok(cfg)
    }

    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }
}
