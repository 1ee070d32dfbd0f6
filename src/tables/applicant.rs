use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::Row;

use crate::cache::Cache;
use crate::record::{self, Record};
use crate::term::TermKey;

/// Admissions data captured for one applicant. Most columns arrive from the
/// upstream feed and may be blank.
#[derive(Debug, Clone, PartialEq)]
pub struct Applicant {
    pub stu_id: String,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: Option<NaiveDate>,
    pub ethnicity: Option<String>,
    pub gender: Option<String>,
    pub college: Option<String>,
    pub prog_study: Option<String>,
    pub hs_code: Option<String>,
    pub tr_credits: Option<String>,
    pub resident: Option<String>,
    pub resident_state: Option<String>,
    pub resident_county: Option<String>,
    pub hs_gpa: Option<String>,
    pub hs_class_rank: Option<i32>,
    pub hs_size_class: Option<i32>,
    pub act_score: Option<i32>,
    pub sat_score: Option<i32>,
    pub pidm: Option<i32>,
    pub apln_term: Option<TermKey>,
}

impl Record for Applicant {
    const TABLE: &'static str = "applicant";
    const COLUMNS: &'static [&'static str] = &[
        "stu_id",
        "first_name",
        "last_name",
        "birthdate",
        "ethnicity",
        "gender",
        "college",
        "prog_study",
        "hs_code",
        "tr_credits",
        "resident",
        "resident_state",
        "resident_county",
        "hs_gpa",
        "hs_class_rank",
        "hs_size_class",
        "act_score",
        "sat_score",
        "pidm",
        "apln_term",
    ];
    const KEY: &'static [&'static str] = &["stu_id"];

    fn from_row(row: &Row<'_>) -> anyhow::Result<Self> {
        let apln_term = match row.get::<_, Option<String>>("apln_term")? {
            Some(text) => Some(TermKey::parse_short(&text)?),
            None => None,
        };
        Ok(Applicant {
            stu_id: row.get("stu_id")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            birthdate: row.get("birthdate")?,
            ethnicity: row.get("ethnicity")?,
            gender: row.get("gender")?,
            college: row.get("college")?,
            prog_study: row.get("prog_study")?,
            hs_code: row.get("hs_code")?,
            tr_credits: row.get("tr_credits")?,
            resident: row.get("resident")?,
            resident_state: row.get("resident_state")?,
            resident_county: row.get("resident_county")?,
            hs_gpa: row.get("hs_gpa")?,
            hs_class_rank: row.get("hs_class_rank")?,
            hs_size_class: row.get("hs_size_class")?,
            act_score: row.get("act_score")?,
            sat_score: row.get("sat_score")?,
            pidm: row.get("pidm")?,
            apln_term,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.stu_id.clone()),
            Value::from(self.first_name.clone()),
            Value::from(self.last_name.clone()),
            record::date_value(self.birthdate),
            Value::from(self.ethnicity.clone()),
            Value::from(self.gender.clone()),
            Value::from(self.college.clone()),
            Value::from(self.prog_study.clone()),
            Value::from(self.hs_code.clone()),
            Value::from(self.tr_credits.clone()),
            Value::from(self.resident.clone()),
            Value::from(self.resident_state.clone()),
            Value::from(self.resident_county.clone()),
            Value::from(self.hs_gpa.clone()),
            Value::from(self.hs_class_rank),
            Value::from(self.hs_size_class),
            Value::from(self.act_score),
            Value::from(self.sat_score),
            Value::from(self.pidm),
            Value::from(self.apln_term.map(TermKey::short_string)),
        ]
    }

    fn key_values(&self) -> Vec<Value> {
        vec![Value::from(self.stu_id.clone())]
    }
}

pub fn insert(cache: &Cache, rec: &Applicant) -> anyhow::Result<bool> {
    if record::is_reserved_student_id(&rec.stu_id) {
        log::warn!("skipping applicant insert for test student {}", rec.stu_id);
        return Ok(false);
    }
    record::insert(cache, rec)
}

pub fn delete(cache: &Cache, rec: &Applicant) -> anyhow::Result<bool> {
    record::delete(cache, rec)
}

pub fn query_all(cache: &Cache) -> anyhow::Result<Vec<Applicant>> {
    record::query_all(cache)
}

pub fn query_by_student(cache: &Cache, stu_id: &str) -> anyhow::Result<Vec<Applicant>> {
    record::query_clause(cache, "stu_id = ?", [stu_id])
}
