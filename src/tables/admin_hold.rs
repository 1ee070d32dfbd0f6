use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::Row;

use crate::cache::Cache;
use crate::record::{self, Record};

/// Severity code for a hold that blocks all activity on the account.
pub const SEV_FATAL: &str = "F";

/// An administrative hold on a student account.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminHold {
    pub stu_id: String,
    pub hold_id: String,
    pub sev_admin_hold: String,
    pub times_display: Option<i32>,
    pub create_dt: NaiveDate,
}

impl Record for AdminHold {
    const TABLE: &'static str = "admin_hold";
    const COLUMNS: &'static [&'static str] = &[
        "stu_id",
        "hold_id",
        "sev_admin_hold",
        "times_display",
        "create_dt",
    ];
    const KEY: &'static [&'static str] = &["stu_id", "hold_id"];

    fn from_row(row: &Row<'_>) -> anyhow::Result<Self> {
        Ok(AdminHold {
            stu_id: row.get("stu_id")?,
            hold_id: row.get("hold_id")?,
            sev_admin_hold: row.get("sev_admin_hold")?,
            times_display: row.get("times_display")?,
            create_dt: row.get("create_dt")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.stu_id.clone()),
            Value::from(self.hold_id.clone()),
            Value::from(self.sev_admin_hold.clone()),
            Value::from(self.times_display),
            record::date_value(Some(self.create_dt)),
        ]
    }

    fn key_values(&self) -> Vec<Value> {
        vec![
            Value::from(self.stu_id.clone()),
            Value::from(self.hold_id.clone()),
        ]
    }
}

pub fn insert(cache: &Cache, rec: &AdminHold) -> anyhow::Result<bool> {
    if record::is_reserved_student_id(&rec.stu_id) {
        log::warn!("skipping admin_hold insert for test student {}", rec.stu_id);
        return Ok(false);
    }
    record::insert(cache, rec)
}

pub fn delete(cache: &Cache, rec: &AdminHold) -> anyhow::Result<bool> {
    record::delete(cache, rec)
}

pub fn query_all(cache: &Cache) -> anyhow::Result<Vec<AdminHold>> {
    record::query_all(cache)
}

pub fn query_by_student(cache: &Cache, stu_id: &str) -> anyhow::Result<Vec<AdminHold>> {
    record::query_clause(cache, "stu_id = ?", [stu_id])
}

pub fn query(cache: &Cache, stu_id: &str, hold_id: &str) -> anyhow::Result<Option<AdminHold>> {
    record::query_first(cache, "stu_id = ? AND hold_id = ?", [stu_id, hold_id])
}

/// True when the student carries any hold with the fatal severity code.
pub fn has_fatal_hold(cache: &Cache, stu_id: &str) -> anyhow::Result<bool> {
    let sql = format!(
        "SELECT COUNT(*) FROM {} WHERE stu_id = ? AND sev_admin_hold = ?",
        record::table_name::<AdminHold>(cache),
    );
    let n: i64 = cache
        .conn()
        .query_row(&sql, [stu_id, SEV_FATAL], |row| row.get(0))?;
    Ok(n > 0)
}

/// Removes every row carrying a hold code, e.g. when a hold type is retired.
/// Returns the number of rows removed.
pub fn delete_all_by_hold_id(cache: &Cache, hold_id: &str) -> anyhow::Result<usize> {
    let sql = format!(
        "DELETE FROM {} WHERE hold_id = ?",
        record::table_name::<AdminHold>(cache),
    );
    let removed = cache.conn().execute(&sql, [hold_id])?;
    Ok(removed)
}

/// Rewrites create_dt to the record's value for the row matching its key.
pub fn update_hold_date(cache: &Cache, rec: &AdminHold) -> anyhow::Result<bool> {
    if record::is_reserved_student_id(&rec.stu_id) {
        log::warn!("skipping admin_hold update for test student {}", rec.stu_id);
        return Ok(false);
    }
    let sql = format!(
        "UPDATE {} SET create_dt = ? WHERE stu_id = ? AND hold_id = ?",
        record::table_name::<AdminHold>(cache),
    );
    let changed = cache.conn().execute(
        &sql,
        rusqlite::params![rec.create_dt, rec.stu_id, rec.hold_id],
    )?;
    Ok(changed == 1)
}
