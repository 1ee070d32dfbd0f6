use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::Row;

use crate::cache::Cache;
use crate::record::{self, Record};

/// Membership of a student in a special category (tutor, athlete, pilot
/// group, ...), optionally bounded by a date window. An open end means the
/// membership does not expire.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialStus {
    pub stu_id: String,
    pub stu_type: String,
    pub start_dt: Option<NaiveDate>,
    pub end_dt: Option<NaiveDate>,
}

impl SpecialStus {
    /// Whether the membership window covers the given date. Open bounds
    /// count as covered; both boundary dates are inclusive.
    pub fn is_active(&self, today: NaiveDate) -> bool {
        let started = self.start_dt.map_or(true, |start| start <= today);
        started && self.end_dt.map_or(true, |end| end >= today)
    }
}

impl Record for SpecialStus {
    const TABLE: &'static str = "special_stus";
    const COLUMNS: &'static [&'static str] = &["stu_id", "stu_type", "start_dt", "end_dt"];
    const KEY: &'static [&'static str] = &["stu_id", "stu_type"];

    fn from_row(row: &Row<'_>) -> anyhow::Result<Self> {
        Ok(SpecialStus {
            stu_id: row.get("stu_id")?,
            stu_type: row.get("stu_type")?,
            start_dt: row.get("start_dt")?,
            end_dt: row.get("end_dt")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.stu_id.clone()),
            Value::from(self.stu_type.clone()),
            record::date_value(self.start_dt),
            record::date_value(self.end_dt),
        ]
    }

    fn key_values(&self) -> Vec<Value> {
        vec![
            Value::from(self.stu_id.clone()),
            Value::from(self.stu_type.clone()),
        ]
    }
}

pub fn insert(cache: &Cache, rec: &SpecialStus) -> anyhow::Result<bool> {
    if record::is_reserved_student_id(&rec.stu_id) {
        log::warn!(
            "skipping special_stus insert for test student {}",
            rec.stu_id
        );
        return Ok(false);
    }
    record::insert(cache, rec)
}

pub fn delete(cache: &Cache, rec: &SpecialStus) -> anyhow::Result<bool> {
    record::delete(cache, rec)
}

pub fn query_all(cache: &Cache) -> anyhow::Result<Vec<SpecialStus>> {
    record::query_all(cache)
}

pub fn query_by_student(cache: &Cache, stu_id: &str) -> anyhow::Result<Vec<SpecialStus>> {
    record::query_clause(cache, "stu_id = ?", [stu_id])
}

pub fn query_by_type(cache: &Cache, stu_type: &str) -> anyhow::Result<Vec<SpecialStus>> {
    record::query_clause(cache, "stu_type = ?", [stu_type])
}

pub fn query_active_by_student(
    cache: &Cache,
    stu_id: &str,
    today: NaiveDate,
) -> anyhow::Result<Vec<SpecialStus>> {
    let mut rows = query_by_student(cache, stu_id)?;
    rows.retain(|rec| rec.is_active(today));
    Ok(rows)
}

pub fn query_active_by_type(
    cache: &Cache,
    stu_type: &str,
    today: NaiveDate,
) -> anyhow::Result<Vec<SpecialStus>> {
    let mut rows = query_by_type(cache, stu_type)?;
    rows.retain(|rec| rec.is_active(today));
    Ok(rows)
}

/// True when the student holds an active membership in any of the given
/// types on the given date.
pub fn is_special_type(
    cache: &Cache,
    stu_id: &str,
    today: NaiveDate,
    stu_types: &[&str],
) -> anyhow::Result<bool> {
    let rows = query_by_student(cache, stu_id)?;
    Ok(rows
        .iter()
        .any(|rec| stu_types.contains(&rec.stu_type.as_str()) && rec.is_active(today)))
}
