use rusqlite::types::Value;
use rusqlite::Row;

use crate::cache::Cache;
use crate::record::{self, Record};

/// Catalog row describing one hold code: its severity and the office codes
/// allowed to add or clear it.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldType {
    pub hold_id: String,
    pub sev_admin_hold: String,
    pub hold_type: String,
    pub add_hold: Option<String>,
    pub delete_hold: Option<String>,
}

impl Record for HoldType {
    const TABLE: &'static str = "hold_type";
    const COLUMNS: &'static [&'static str] = &[
        "hold_id",
        "sev_admin_hold",
        "hold_type",
        "add_hold",
        "delete_hold",
    ];
    const KEY: &'static [&'static str] = &["hold_id"];

    fn from_row(row: &Row<'_>) -> anyhow::Result<Self> {
        Ok(HoldType {
            hold_id: row.get("hold_id")?,
            sev_admin_hold: row.get("sev_admin_hold")?,
            hold_type: row.get("hold_type")?,
            add_hold: row.get("add_hold")?,
            delete_hold: row.get("delete_hold")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.hold_id.clone()),
            Value::from(self.sev_admin_hold.clone()),
            Value::from(self.hold_type.clone()),
            Value::from(self.add_hold.clone()),
            Value::from(self.delete_hold.clone()),
        ]
    }

    fn key_values(&self) -> Vec<Value> {
        vec![Value::from(self.hold_id.clone())]
    }
}

pub fn insert(cache: &Cache, rec: &HoldType) -> anyhow::Result<bool> {
    record::insert(cache, rec)
}

pub fn delete(cache: &Cache, rec: &HoldType) -> anyhow::Result<bool> {
    record::delete(cache, rec)
}

pub fn query_all(cache: &Cache) -> anyhow::Result<Vec<HoldType>> {
    record::query_all(cache)
}

pub fn query(cache: &Cache, hold_id: &str) -> anyhow::Result<Option<HoldType>> {
    record::query_first(cache, "hold_id = ?", [hold_id])
}
