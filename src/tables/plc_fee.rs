use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::Row;

use crate::cache::Cache;
use crate::record::{self, Record};

/// A placement-exam fee. In practice a student owes at most one, so the
/// by-student query returns a single record.
#[derive(Debug, Clone, PartialEq)]
pub struct PlcFee {
    pub stu_id: String,
    pub course: String,
    pub exam_dt: NaiveDate,
    pub bill_dt: Option<NaiveDate>,
}

impl Record for PlcFee {
    const TABLE: &'static str = "plc_fee";
    const COLUMNS: &'static [&'static str] = &["stu_id", "course", "exam_dt", "bill_dt"];
    const KEY: &'static [&'static str] = &["stu_id", "course"];

    fn from_row(row: &Row<'_>) -> anyhow::Result<Self> {
        Ok(PlcFee {
            stu_id: row.get("stu_id")?,
            course: row.get("course")?,
            exam_dt: row.get("exam_dt")?,
            bill_dt: row.get("bill_dt")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.stu_id.clone()),
            Value::from(self.course.clone()),
            record::date_value(Some(self.exam_dt)),
            record::date_value(self.bill_dt),
        ]
    }

    fn key_values(&self) -> Vec<Value> {
        vec![
            Value::from(self.stu_id.clone()),
            Value::from(self.course.clone()),
        ]
    }
}

pub fn insert(cache: &Cache, rec: &PlcFee) -> anyhow::Result<bool> {
    if record::is_reserved_student_id(&rec.stu_id) {
        log::warn!("skipping plc_fee insert for test student {}", rec.stu_id);
        return Ok(false);
    }
    record::insert(cache, rec)
}

pub fn delete(cache: &Cache, rec: &PlcFee) -> anyhow::Result<bool> {
    record::delete(cache, rec)
}

pub fn query_all(cache: &Cache) -> anyhow::Result<Vec<PlcFee>> {
    record::query_all(cache)
}

pub fn query_by_student(cache: &Cache, stu_id: &str) -> anyhow::Result<Option<PlcFee>> {
    record::query_first(cache, "stu_id = ?", [stu_id])
}

/// Latest bill date across all fees; None when nothing has been billed.
pub fn query_most_recent_bill_date(cache: &Cache) -> anyhow::Result<Option<NaiveDate>> {
    let sql = format!(
        "SELECT MAX(bill_dt) FROM {}",
        record::table_name::<PlcFee>(cache),
    );
    let latest = cache.conn().query_row(&sql, [], |row| row.get(0))?;
    Ok(latest)
}
