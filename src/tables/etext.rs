use rusqlite::types::Value;
use rusqlite::Row;

use crate::cache::Cache;
use crate::record::{self, Record};

/// A catalog e-text offering. key_entry says whether activation keys are
/// typed in by staff; active gates whether it can still be issued.
#[derive(Debug, Clone, PartialEq)]
pub struct Etext {
    pub etext_id: String,
    pub retention: Option<String>,
    pub purchase_url: Option<String>,
    pub refund_period: Option<i32>,
    pub key_entry: String,
    pub active: String,
    pub button_label: Option<String>,
}

impl Record for Etext {
    const TABLE: &'static str = "etext";
    const COLUMNS: &'static [&'static str] = &[
        "etext_id",
        "retention",
        "purchase_url",
        "refund_period",
        "key_entry",
        "active",
        "button_label",
    ];
    const KEY: &'static [&'static str] = &["etext_id"];

    fn from_row(row: &Row<'_>) -> anyhow::Result<Self> {
        Ok(Etext {
            etext_id: row.get("etext_id")?,
            retention: row.get("retention")?,
            purchase_url: row.get("purchase_url")?,
            refund_period: row.get("refund_period")?,
            key_entry: row.get("key_entry")?,
            active: row.get("active")?,
            button_label: row.get("button_label")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.etext_id.clone()),
            Value::from(self.retention.clone()),
            Value::from(self.purchase_url.clone()),
            Value::from(self.refund_period),
            Value::from(self.key_entry.clone()),
            Value::from(self.active.clone()),
            Value::from(self.button_label.clone()),
        ]
    }

    fn key_values(&self) -> Vec<Value> {
        vec![Value::from(self.etext_id.clone())]
    }
}

pub fn insert(cache: &Cache, rec: &Etext) -> anyhow::Result<bool> {
    record::insert(cache, rec)
}

pub fn delete(cache: &Cache, rec: &Etext) -> anyhow::Result<bool> {
    record::delete(cache, rec)
}

pub fn query_all(cache: &Cache) -> anyhow::Result<Vec<Etext>> {
    record::query_all(cache)
}

pub fn query(cache: &Cache, etext_id: &str) -> anyhow::Result<Option<Etext>> {
    record::query_first(cache, "etext_id = ?", [etext_id])
}
