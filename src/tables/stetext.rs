use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::types::Value;
use rusqlite::Row;

use crate::cache::Cache;
use crate::record::{self, Record};

/// One e-text activation for a student. A row stays active until it is
/// refunded (refund_dt set) or its expiration date passes.
#[derive(Debug, Clone, PartialEq)]
pub struct Stetext {
    pub stu_id: String,
    pub etext_id: String,
    pub active_dt: NaiveDate,
    pub etext_key: Option<String>,
    pub expiration_dt: Option<NaiveDate>,
    pub refund_deadline_dt: Option<NaiveDate>,
    pub refund_dt: Option<NaiveDate>,
    pub refund_reason: Option<String>,
}

impl Record for Stetext {
    const TABLE: &'static str = "stetext";
    const COLUMNS: &'static [&'static str] = &[
        "stu_id",
        "etext_id",
        "active_dt",
        "etext_key",
        "expiration_dt",
        "refund_deadline_dt",
        "refund_dt",
        "refund_reason",
    ];
    const KEY: &'static [&'static str] = &["stu_id", "etext_id", "active_dt"];

    fn from_row(row: &Row<'_>) -> anyhow::Result<Self> {
        Ok(Stetext {
            stu_id: row.get("stu_id")?,
            etext_id: row.get("etext_id")?,
            active_dt: row.get("active_dt")?,
            etext_key: row.get("etext_key")?,
            expiration_dt: row.get("expiration_dt")?,
            refund_deadline_dt: row.get("refund_deadline_dt")?,
            refund_dt: row.get("refund_dt")?,
            refund_reason: row.get("refund_reason")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.stu_id.clone()),
            Value::from(self.etext_id.clone()),
            record::date_value(Some(self.active_dt)),
            Value::from(self.etext_key.clone()),
            record::date_value(self.expiration_dt),
            record::date_value(self.refund_deadline_dt),
            record::date_value(self.refund_dt),
            Value::from(self.refund_reason.clone()),
        ]
    }

    fn key_values(&self) -> Vec<Value> {
        vec![
            Value::from(self.stu_id.clone()),
            Value::from(self.etext_id.clone()),
            record::date_value(Some(self.active_dt)),
        ]
    }
}

pub fn insert(cache: &Cache, rec: &Stetext) -> anyhow::Result<bool> {
    if record::is_reserved_student_id(&rec.stu_id) {
        log::warn!("skipping stetext insert for test student {}", rec.stu_id);
        return Ok(false);
    }
    record::insert(cache, rec)
}

pub fn delete(cache: &Cache, rec: &Stetext) -> anyhow::Result<bool> {
    record::delete(cache, rec)
}

pub fn query_all(cache: &Cache) -> anyhow::Result<Vec<Stetext>> {
    record::query_all(cache)
}

/// Every activation for the student, refunded and expired ones included.
pub fn query_by_student(cache: &Cache, stu_id: &str) -> anyhow::Result<Vec<Stetext>> {
    record::query_clause(cache, "stu_id = ? ORDER BY etext_id", [stu_id])
}

/// Activations of one e-text still usable as of `now`: not refunded, and
/// either without an expiration date or not yet past it.
pub fn query_by_student_etext(
    cache: &Cache,
    now: NaiveDateTime,
    stu_id: &str,
    etext_id: &str,
) -> anyhow::Result<Vec<Stetext>> {
    record::query_clause(
        cache,
        "stu_id = ? AND etext_id = ? AND refund_dt IS NULL \
         AND (expiration_dt IS NULL OR expiration_dt >= ?)",
        rusqlite::params![stu_id, etext_id, now.date()],
    )
}

/// Non-refunded activations under one activation key, expired or not.
pub fn query_unrefunded_by_key(cache: &Cache, etext_key: &str) -> anyhow::Result<Vec<Stetext>> {
    record::query_clause(
        cache,
        "etext_key = ? AND refund_dt IS NULL",
        [etext_key],
    )
}

/// Marks the activation refunded as of `now`, recording the reason.
pub fn deactivate(
    cache: &Cache,
    now: NaiveDateTime,
    rec: &Stetext,
    refund_reason: &str,
) -> anyhow::Result<bool> {
    if record::is_reserved_student_id(&rec.stu_id) {
        log::warn!("skipping stetext deactivate for test student {}", rec.stu_id);
        return Ok(false);
    }
    let sql = format!(
        "UPDATE {} SET refund_dt = ?, refund_reason = ? \
         WHERE stu_id = ? AND etext_id = ? AND active_dt = ?",
        record::table_name::<Stetext>(cache),
    );
    let changed = cache.conn().execute(
        &sql,
        rusqlite::params![
            now.date(),
            refund_reason,
            rec.stu_id,
            rec.etext_id,
            rec.active_dt
        ],
    )?;
    Ok(changed == 1)
}

/// Rewrites the refund deadline on one activation.
pub fn update_refund_deadline(
    cache: &Cache,
    stu_id: &str,
    etext_id: &str,
    active_dt: NaiveDate,
    refund_deadline: NaiveDate,
) -> anyhow::Result<bool> {
    if record::is_reserved_student_id(stu_id) {
        log::warn!("skipping stetext update for test student {}", stu_id);
        return Ok(false);
    }
    let sql = format!(
        "UPDATE {} SET refund_deadline_dt = ? \
         WHERE stu_id = ? AND etext_id = ? AND active_dt = ?",
        record::table_name::<Stetext>(cache),
    );
    let changed = cache.conn().execute(
        &sql,
        rusqlite::params![refund_deadline, stu_id, etext_id, active_dt],
    )?;
    Ok(changed > 0)
}

/// Rewrites the refund date and reason on one activation.
pub fn update_refund(
    cache: &Cache,
    stu_id: &str,
    etext_id: &str,
    active_dt: NaiveDate,
    refund_dt: NaiveDate,
    refund_reason: &str,
) -> anyhow::Result<bool> {
    if record::is_reserved_student_id(stu_id) {
        log::warn!("skipping stetext update for test student {}", stu_id);
        return Ok(false);
    }
    let sql = format!(
        "UPDATE {} SET refund_dt = ?, refund_reason = ? \
         WHERE stu_id = ? AND etext_id = ? AND active_dt = ?",
        record::table_name::<Stetext>(cache),
    );
    let changed = cache.conn().execute(
        &sql,
        rusqlite::params![refund_dt, refund_reason, stu_id, etext_id, active_dt],
    )?;
    Ok(changed > 0)
}
