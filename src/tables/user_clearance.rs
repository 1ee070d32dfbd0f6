use rusqlite::types::Value;
use rusqlite::Row;

use crate::cache::Cache;
use crate::record::{self, Record};

/// Grants a login permission to perform one administrative function.
#[derive(Debug, Clone, PartialEq)]
pub struct UserClearance {
    pub login: String,
    pub clear_function: String,
    pub clear_type: Option<i32>,
    pub clear_passwd: Option<String>,
}

impl Record for UserClearance {
    const TABLE: &'static str = "user_clearance";
    const COLUMNS: &'static [&'static str] =
        &["login", "clear_function", "clear_type", "clear_passwd"];
    const KEY: &'static [&'static str] = &["login", "clear_function"];

    fn from_row(row: &Row<'_>) -> anyhow::Result<Self> {
        Ok(UserClearance {
            login: row.get("login")?,
            clear_function: row.get("clear_function")?,
            clear_type: row.get("clear_type")?,
            clear_passwd: row.get("clear_passwd")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.login.clone()),
            Value::from(self.clear_function.clone()),
            Value::from(self.clear_type),
            Value::from(self.clear_passwd.clone()),
        ]
    }

    fn key_values(&self) -> Vec<Value> {
        vec![
            Value::from(self.login.clone()),
            Value::from(self.clear_function.clone()),
        ]
    }
}

pub fn insert(cache: &Cache, rec: &UserClearance) -> anyhow::Result<bool> {
    record::insert(cache, rec)
}

pub fn delete(cache: &Cache, rec: &UserClearance) -> anyhow::Result<bool> {
    record::delete(cache, rec)
}

pub fn query_all(cache: &Cache) -> anyhow::Result<Vec<UserClearance>> {
    record::query_all(cache)
}

pub fn query_all_for_login(cache: &Cache, login: &str) -> anyhow::Result<Vec<UserClearance>> {
    record::query_clause(cache, "login = ?", [login])
}
