use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::Row;

use crate::cache::Cache;
use crate::record::{self, Record};

/// A calculator loaned to a student. return_nbr, serial_nbr and exam_dt stay
/// empty while the loan is open.
#[derive(Debug, Clone, PartialEq)]
pub struct Calcs {
    pub stu_id: String,
    pub issued_nbr: String,
    pub return_nbr: Option<String>,
    pub serial_nbr: Option<i64>,
    pub exam_dt: Option<NaiveDate>,
}

impl Record for Calcs {
    const TABLE: &'static str = "calcs";
    const COLUMNS: &'static [&'static str] = &[
        "stu_id",
        "issued_nbr",
        "return_nbr",
        "serial_nbr",
        "exam_dt",
    ];
    const KEY: &'static [&'static str] = &["stu_id", "issued_nbr"];

    fn from_row(row: &Row<'_>) -> anyhow::Result<Self> {
        Ok(Calcs {
            stu_id: row.get("stu_id")?,
            issued_nbr: row.get("issued_nbr")?,
            return_nbr: row.get("return_nbr")?,
            serial_nbr: row.get("serial_nbr")?,
            exam_dt: row.get("exam_dt")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.stu_id.clone()),
            Value::from(self.issued_nbr.clone()),
            Value::from(self.return_nbr.clone()),
            Value::from(self.serial_nbr),
            record::date_value(self.exam_dt),
        ]
    }

    fn key_values(&self) -> Vec<Value> {
        vec![
            Value::from(self.stu_id.clone()),
            Value::from(self.issued_nbr.clone()),
        ]
    }
}

pub fn insert(cache: &Cache, rec: &Calcs) -> anyhow::Result<bool> {
    if record::is_reserved_student_id(&rec.stu_id) {
        log::warn!("skipping calcs insert for test student {}", rec.stu_id);
        return Ok(false);
    }
    record::insert(cache, rec)
}

pub fn delete(cache: &Cache, rec: &Calcs) -> anyhow::Result<bool> {
    record::delete(cache, rec)
}

pub fn query_all(cache: &Cache) -> anyhow::Result<Vec<Calcs>> {
    record::query_all(cache)
}

pub fn query_by_student(cache: &Cache, stu_id: &str) -> anyhow::Result<Vec<Calcs>> {
    record::query_clause(cache, "stu_id = ?", [stu_id])
}

/// Looks up the loan row for one issued calculator number.
pub fn query_by_calculator_id(cache: &Cache, issued_nbr: &str) -> anyhow::Result<Option<Calcs>> {
    record::query_first(cache, "issued_nbr = ?", [issued_nbr])
}
