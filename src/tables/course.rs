use rusqlite::types::Value;
use rusqlite::Row;

use crate::cache::Cache;
use crate::record::{self, Record};

/// One catalog course. Flag columns hold the legacy "Y"/"N" codes.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub course: String,
    pub nbr_units: Option<i32>,
    pub course_name: Option<String>,
    pub nbr_credits: Option<i32>,
    pub calc_ok: Option<String>,
    pub course_label: Option<String>,
    pub inline_prefix: Option<String>,
    pub is_tutorial: String,
    pub require_etext: Option<String>,
}

impl Record for Course {
    const TABLE: &'static str = "course";
    const COLUMNS: &'static [&'static str] = &[
        "course",
        "nbr_units",
        "course_name",
        "nbr_credits",
        "calc_ok",
        "course_label",
        "inline_prefix",
        "is_tutorial",
        "require_etext",
    ];
    const KEY: &'static [&'static str] = &["course"];

    fn from_row(row: &Row<'_>) -> anyhow::Result<Self> {
        Ok(Course {
            course: row.get("course")?,
            nbr_units: row.get("nbr_units")?,
            course_name: row.get("course_name")?,
            nbr_credits: row.get("nbr_credits")?,
            calc_ok: row.get("calc_ok")?,
            course_label: row.get("course_label")?,
            inline_prefix: row.get("inline_prefix")?,
            is_tutorial: row.get("is_tutorial")?,
            require_etext: row.get("require_etext")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.course.clone()),
            Value::from(self.nbr_units),
            Value::from(self.course_name.clone()),
            Value::from(self.nbr_credits),
            Value::from(self.calc_ok.clone()),
            Value::from(self.course_label.clone()),
            Value::from(self.inline_prefix.clone()),
            Value::from(self.is_tutorial.clone()),
            Value::from(self.require_etext.clone()),
        ]
    }

    fn key_values(&self) -> Vec<Value> {
        vec![Value::from(self.course.clone())]
    }
}

pub fn insert(cache: &Cache, rec: &Course) -> anyhow::Result<bool> {
    record::insert(cache, rec)
}

pub fn delete(cache: &Cache, rec: &Course) -> anyhow::Result<bool> {
    record::delete(cache, rec)
}

pub fn query_all(cache: &Cache) -> anyhow::Result<Vec<Course>> {
    record::query_all(cache)
}

pub fn query(cache: &Cache, course: &str) -> anyhow::Result<Option<Course>> {
    record::query_first(cache, "course = ?", [course])
}
