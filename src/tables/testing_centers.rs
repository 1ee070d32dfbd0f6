use chrono::NaiveDateTime;
use rusqlite::types::Value;
use rusqlite::Row;

use crate::cache::Cache;
use crate::record::{self, Record};

/// A proctored testing site. The dtime columns trace its approval
/// lifecycle; active is the current "Y"/"N" state.
#[derive(Debug, Clone, PartialEq)]
pub struct TestingCenter {
    pub testing_center_id: String,
    pub tc_name: String,
    pub address_1: Option<String>,
    pub address_2: Option<String>,
    pub address_3: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub active: String,
    pub dtime_created: NaiveDateTime,
    pub dtime_approved: Option<NaiveDateTime>,
    pub dtime_denied: Option<NaiveDateTime>,
    pub dtime_revoked: Option<NaiveDateTime>,
    pub is_remote: String,
    pub is_proctored: String,
}

impl Record for TestingCenter {
    const TABLE: &'static str = "testing_centers";
    const COLUMNS: &'static [&'static str] = &[
        "testing_center_id",
        "tc_name",
        "address_1",
        "address_2",
        "address_3",
        "city",
        "state",
        "zip_code",
        "active",
        "dtime_created",
        "dtime_approved",
        "dtime_denied",
        "dtime_revoked",
        "is_remote",
        "is_proctored",
    ];
    const KEY: &'static [&'static str] = &["testing_center_id"];

    fn from_row(row: &Row<'_>) -> anyhow::Result<Self> {
        Ok(TestingCenter {
            testing_center_id: row.get("testing_center_id")?,
            tc_name: row.get("tc_name")?,
            address_1: row.get("address_1")?,
            address_2: row.get("address_2")?,
            address_3: row.get("address_3")?,
            city: row.get("city")?,
            state: row.get("state")?,
            zip_code: row.get("zip_code")?,
            active: row.get("active")?,
            dtime_created: row.get("dtime_created")?,
            dtime_approved: row.get("dtime_approved")?,
            dtime_denied: row.get("dtime_denied")?,
            dtime_revoked: row.get("dtime_revoked")?,
            is_remote: row.get("is_remote")?,
            is_proctored: row.get("is_proctored")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.testing_center_id.clone()),
            Value::from(self.tc_name.clone()),
            Value::from(self.address_1.clone()),
            Value::from(self.address_2.clone()),
            Value::from(self.address_3.clone()),
            Value::from(self.city.clone()),
            Value::from(self.state.clone()),
            Value::from(self.zip_code.clone()),
            Value::from(self.active.clone()),
            record::datetime_value(Some(self.dtime_created)),
            record::datetime_value(self.dtime_approved),
            record::datetime_value(self.dtime_denied),
            record::datetime_value(self.dtime_revoked),
            Value::from(self.is_remote.clone()),
            Value::from(self.is_proctored.clone()),
        ]
    }

    fn key_values(&self) -> Vec<Value> {
        vec![Value::from(self.testing_center_id.clone())]
    }
}

pub fn insert(cache: &Cache, rec: &TestingCenter) -> anyhow::Result<bool> {
    record::insert(cache, rec)
}

pub fn delete(cache: &Cache, rec: &TestingCenter) -> anyhow::Result<bool> {
    record::delete(cache, rec)
}

pub fn query_all(cache: &Cache) -> anyhow::Result<Vec<TestingCenter>> {
    record::query_all(cache)
}

pub fn query(cache: &Cache, testing_center_id: &str) -> anyhow::Result<Option<TestingCenter>> {
    record::query_first(cache, "testing_center_id = ?", [testing_center_id])
}
