use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::Row;

use crate::cache::Cache;
use crate::record::{self, Record};

/// A challenge-exam fee owed by a student for one course. bill_dt stays
/// empty until the fee has been billed.
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeFee {
    pub stu_id: String,
    pub course: String,
    pub exam_dt: NaiveDate,
    pub bill_dt: Option<NaiveDate>,
}

impl Record for ChallengeFee {
    const TABLE: &'static str = "challenge_fee";
    const COLUMNS: &'static [&'static str] = &["stu_id", "course", "exam_dt", "bill_dt"];
    const KEY: &'static [&'static str] = &["stu_id", "course"];

    fn from_row(row: &Row<'_>) -> anyhow::Result<Self> {
        Ok(ChallengeFee {
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

pub fn insert(cache: &Cache, rec: &ChallengeFee) -> anyhow::Result<bool> {
    if record::is_reserved_student_id(&rec.stu_id) {
        log::warn!(
            "skipping challenge_fee insert for test student {}",
            rec.stu_id
        );
        return Ok(false);
    }
    record::insert(cache, rec)
}

pub fn delete(cache: &Cache, rec: &ChallengeFee) -> anyhow::Result<bool> {
    record::delete(cache, rec)
}

pub fn query_all(cache: &Cache) -> anyhow::Result<Vec<ChallengeFee>> {
    record::query_all(cache)
}

pub fn query_by_student(cache: &Cache, stu_id: &str) -> anyhow::Result<Vec<ChallengeFee>> {
    record::query_clause(cache, "stu_id = ?", [stu_id])
}

pub fn query_by_student_course(
    cache: &Cache,
    stu_id: &str,
    course: &str,
) -> anyhow::Result<Option<ChallengeFee>> {
    record::query_first(cache, "stu_id = ? AND course = ?", [stu_id, course])
}
