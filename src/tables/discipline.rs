use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::Row;

use crate::cache::Cache;
use crate::record::{self, Record};

/// An academic-integrity incident. The five-column key allows several
/// incidents per student, even on the same day in the same course.
#[derive(Debug, Clone, PartialEq)]
pub struct Discipline {
    pub stu_id: String,
    pub dt_incident: NaiveDate,
    pub incident_type: String,
    pub course: String,
    pub unit: i32,
    pub cheat_desc: Option<String>,
    pub action_type: Option<String>,
    pub action_comment: Option<String>,
    pub interviewer: Option<String>,
    pub proctor: Option<String>,
}

impl Record for Discipline {
    const TABLE: &'static str = "discipline";
    const COLUMNS: &'static [&'static str] = &[
        "stu_id",
        "dt_incident",
        "incident_type",
        "course",
        "unit",
        "cheat_desc",
        "action_type",
        "action_comment",
        "interviewer",
        "proctor",
    ];
    const KEY: &'static [&'static str] =
        &["stu_id", "dt_incident", "incident_type", "course", "unit"];

    fn from_row(row: &Row<'_>) -> anyhow::Result<Self> {
        Ok(Discipline {
            stu_id: row.get("stu_id")?,
            dt_incident: row.get("dt_incident")?,
            incident_type: row.get("incident_type")?,
            course: row.get("course")?,
            unit: row.get("unit")?,
            cheat_desc: row.get("cheat_desc")?,
            action_type: row.get("action_type")?,
            action_comment: row.get("action_comment")?,
            interviewer: row.get("interviewer")?,
            proctor: row.get("proctor")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.stu_id.clone()),
            record::date_value(Some(self.dt_incident)),
            Value::from(self.incident_type.clone()),
            Value::from(self.course.clone()),
            Value::from(self.unit),
            Value::from(self.cheat_desc.clone()),
            Value::from(self.action_type.clone()),
            Value::from(self.action_comment.clone()),
            Value::from(self.interviewer.clone()),
            Value::from(self.proctor.clone()),
        ]
    }

    fn key_values(&self) -> Vec<Value> {
        vec![
            Value::from(self.stu_id.clone()),
            record::date_value(Some(self.dt_incident)),
            Value::from(self.incident_type.clone()),
            Value::from(self.course.clone()),
            Value::from(self.unit),
        ]
    }
}

pub fn insert(cache: &Cache, rec: &Discipline) -> anyhow::Result<bool> {
    if record::is_reserved_student_id(&rec.stu_id) {
        log::warn!("skipping discipline insert for test student {}", rec.stu_id);
        return Ok(false);
    }
    record::insert(cache, rec)
}

pub fn delete(cache: &Cache, rec: &Discipline) -> anyhow::Result<bool> {
    record::delete(cache, rec)
}

pub fn query_all(cache: &Cache) -> anyhow::Result<Vec<Discipline>> {
    record::query_all(cache)
}

pub fn query_by_student(cache: &Cache, stu_id: &str) -> anyhow::Result<Vec<Discipline>> {
    record::query_clause(cache, "stu_id = ?", [stu_id])
}
