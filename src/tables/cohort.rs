use rusqlite::types::Value;
use rusqlite::Row;

use crate::cache::Cache;
use crate::record::{self, Record};

/// A named student cohort with its planned size and instructor.
#[derive(Debug, Clone, PartialEq)]
pub struct Cohort {
    pub cohort: String,
    pub size: Option<i32>,
    pub instructor: Option<String>,
}

impl Record for Cohort {
    const TABLE: &'static str = "cohort";
    const COLUMNS: &'static [&'static str] = &["cohort", "size", "instructor"];
    const KEY: &'static [&'static str] = &["cohort"];

    fn from_row(row: &Row<'_>) -> anyhow::Result<Self> {
        Ok(Cohort {
            cohort: row.get("cohort")?,
            size: row.get("size")?,
            instructor: row.get("instructor")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.cohort.clone()),
            Value::from(self.size),
            Value::from(self.instructor.clone()),
        ]
    }

    fn key_values(&self) -> Vec<Value> {
        vec![Value::from(self.cohort.clone())]
    }
}

pub fn insert(cache: &Cache, rec: &Cohort) -> anyhow::Result<bool> {
    record::insert(cache, rec)
}

pub fn delete(cache: &Cache, rec: &Cohort) -> anyhow::Result<bool> {
    record::delete(cache, rec)
}

pub fn query_all(cache: &Cache) -> anyhow::Result<Vec<Cohort>> {
    record::query_all(cache)
}

pub fn query(cache: &Cache, cohort: &str) -> anyhow::Result<Option<Cohort>> {
    record::query_first(cache, "cohort = ?", [cohort])
}

/// Rewrites the size column only; instructor and key are untouched.
pub fn update_cohort_size(cache: &Cache, cohort: &str, size: i32) -> anyhow::Result<bool> {
    let sql = format!(
        "UPDATE {} SET size = ? WHERE cohort = ?",
        record::table_name::<Cohort>(cache),
    );
    let changed = cache.conn().execute(&sql, rusqlite::params![size, cohort])?;
    Ok(changed == 1)
}
