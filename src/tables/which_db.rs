use rusqlite::types::Value;
use rusqlite::Row;

use crate::cache::Cache;
use crate::record::{self, Record};

pub const DESCR_TEST: &str = "TEST";
pub const DESCR_PROD: &str = "PROD";

/// Single-row marker naming the environment a database serves.
#[derive(Debug, Clone, PartialEq)]
pub struct WhichDb {
    pub descr: String,
}

impl Record for WhichDb {
    const TABLE: &'static str = "which_db";
    const COLUMNS: &'static [&'static str] = &["descr"];
    const KEY: &'static [&'static str] = &["descr"];

    fn from_row(row: &Row<'_>) -> anyhow::Result<Self> {
        Ok(WhichDb {
            descr: row.get("descr")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![Value::from(self.descr.clone())]
    }

    fn key_values(&self) -> Vec<Value> {
        vec![Value::from(self.descr.clone())]
    }
}

pub fn query(cache: &Cache) -> anyhow::Result<Option<WhichDb>> {
    let rows: Vec<WhichDb> = record::query_all(cache)?;
    Ok(rows.into_iter().next())
}

pub fn is_test(cache: &Cache) -> anyhow::Result<bool> {
    Ok(query(cache)?.map_or(false, |row| row.descr == DESCR_TEST))
}
