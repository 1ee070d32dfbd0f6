use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::Row;

use crate::cache::Cache;
use crate::record::{self, Record};

/// One outreach message sent to a student: when, at which touch point, and
/// under which message code.
#[derive(Debug, Clone, PartialEq)]
pub struct Stmsg {
    pub stu_id: String,
    pub msg_dt: NaiveDate,
    pub pace: Option<i32>,
    pub course_index: Option<i32>,
    pub touch_point: String,
    pub msg_code: String,
    pub sender: Option<String>,
}

impl Record for Stmsg {
    const TABLE: &'static str = "stmsg";
    const COLUMNS: &'static [&'static str] = &[
        "stu_id",
        "msg_dt",
        "pace",
        "course_index",
        "touch_point",
        "msg_code",
        "sender",
    ];
    const KEY: &'static [&'static str] = &["stu_id", "msg_dt", "touch_point", "msg_code"];

    fn from_row(row: &Row<'_>) -> anyhow::Result<Self> {
        Ok(Stmsg {
            stu_id: row.get("stu_id")?,
            msg_dt: row.get("msg_dt")?,
            pace: row.get("pace")?,
            course_index: row.get("course_index")?,
            touch_point: row.get("touch_point")?,
            msg_code: row.get("msg_code")?,
            sender: row.get("sender")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.stu_id.clone()),
            record::date_value(Some(self.msg_dt)),
            Value::from(self.pace),
            Value::from(self.course_index),
            Value::from(self.touch_point.clone()),
            Value::from(self.msg_code.clone()),
            Value::from(self.sender.clone()),
        ]
    }

    fn key_values(&self) -> Vec<Value> {
        vec![
            Value::from(self.stu_id.clone()),
            record::date_value(Some(self.msg_dt)),
            Value::from(self.touch_point.clone()),
            Value::from(self.msg_code.clone()),
        ]
    }
}

pub fn insert(cache: &Cache, rec: &Stmsg) -> anyhow::Result<bool> {
    if record::is_reserved_student_id(&rec.stu_id) {
        log::warn!("skipping stmsg insert for test student {}", rec.stu_id);
        return Ok(false);
    }
    record::insert(cache, rec)
}

pub fn delete(cache: &Cache, rec: &Stmsg) -> anyhow::Result<bool> {
    record::delete(cache, rec)
}

pub fn query_all(cache: &Cache) -> anyhow::Result<Vec<Stmsg>> {
    record::query_all(cache)
}

pub fn query_by_student(cache: &Cache, stu_id: &str) -> anyhow::Result<Vec<Stmsg>> {
    record::query_clause(cache, "stu_id = ?", [stu_id])
}

/// Total number of messages ever sent.
pub fn count(cache: &Cache) -> anyhow::Result<i64> {
    record::count::<Stmsg>(cache)
}

/// Date of the most recent message; None when the table is empty.
pub fn get_latest(cache: &Cache) -> anyhow::Result<Option<NaiveDate>> {
    let sql = format!(
        "SELECT MAX(msg_dt) FROM {}",
        record::table_name::<Stmsg>(cache),
    );
    let latest = cache.conn().query_row(&sql, [], |row| row.get(0))?;
    Ok(latest)
}
