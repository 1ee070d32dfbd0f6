use rusqlite::types::Value;
use rusqlite::Row;

use crate::cache::Cache;
use crate::record::{self, Record};
use crate::term::TermKey;

// Activity codes.
pub const ACTIVITY_HOMEWORK: &str = "HW";
pub const ACTIVITY_SR_EXAM: &str = "SR";
pub const ACTIVITY_UNIT_REV_EXAM: &str = "RE";
pub const ACTIVITY_UNIT_EXAM: &str = "UE";
pub const ACTIVITY_FINAL_EXAM: &str = "FE";

// Requirement codes: what must be done before the activity is allowed.
pub const LECT_VIEWED: &str = "LECT";
pub const HW_PASS: &str = "HW_P";
pub const HW_MSTR: &str = "HW_M";
pub const UR_PASS: &str = "RE_P";
pub const UR_MSTR: &str = "RE_M";
pub const UE_PASS: &str = "UE_P";
pub const UE_MSTR: &str = "UE_M";
pub const TE_PASS: &str = "TE_P";
pub const TE_MSTR: &str = "TE_M";

/// One pacing rule: in a given term and pacing structure, the requirement
/// that gates an activity. The whole row is the key.
#[derive(Debug, Clone, PartialEq)]
pub struct PacingRules {
    pub term: TermKey,
    pub pacing_structure: String,
    pub activity_type: String,
    pub requirement: String,
}

impl Record for PacingRules {
    const TABLE: &'static str = "pacing_rules";
    const COLUMNS: &'static [&'static str] = &[
        "term",
        "term_yr",
        "pacing_structure",
        "activity_type",
        "requirement",
    ];
    const KEY: &'static [&'static str] = &[
        "term",
        "term_yr",
        "pacing_structure",
        "activity_type",
        "requirement",
    ];

    fn from_row(row: &Row<'_>) -> anyhow::Result<Self> {
        let code: String = row.get("term")?;
        let short_year: i32 = row.get("term_yr")?;
        Ok(PacingRules {
            term: TermKey::from_columns(&code, short_year)?,
            pacing_structure: row.get("pacing_structure")?,
            activity_type: row.get("activity_type")?,
            requirement: row.get("requirement")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.term.name.code().to_string()),
            Value::from(self.term.short_year()),
            Value::from(self.pacing_structure.clone()),
            Value::from(self.activity_type.clone()),
            Value::from(self.requirement.clone()),
        ]
    }

    fn key_values(&self) -> Vec<Value> {
        self.values()
    }
}

pub fn insert(cache: &Cache, rec: &PacingRules) -> anyhow::Result<bool> {
    record::insert(cache, rec)
}

pub fn delete(cache: &Cache, rec: &PacingRules) -> anyhow::Result<bool> {
    record::delete(cache, rec)
}

pub fn query_all(cache: &Cache) -> anyhow::Result<Vec<PacingRules>> {
    record::query_all(cache)
}

pub fn query_by_term(cache: &Cache, term: TermKey) -> anyhow::Result<Vec<PacingRules>> {
    record::query_clause(
        cache,
        "term = ? AND term_yr = ?",
        rusqlite::params![term.name.code(), term.short_year()],
    )
}

pub fn query_by_term_and_pacing_structure(
    cache: &Cache,
    term: TermKey,
    pacing_structure: &str,
) -> anyhow::Result<Vec<PacingRules>> {
    record::query_clause(
        cache,
        "term = ? AND term_yr = ? AND pacing_structure = ?",
        rusqlite::params![term.name.code(), term.short_year(), pacing_structure],
    )
}

/// True when the rule row exists, i.e. the requirement gates the activity in
/// that term and pacing structure.
pub fn is_required(
    cache: &Cache,
    term: TermKey,
    pacing_structure: &str,
    activity_type: &str,
    requirement: &str,
) -> anyhow::Result<bool> {
    let sql = format!(
        "SELECT COUNT(*) FROM {} WHERE term = ? AND term_yr = ? \
         AND pacing_structure = ? AND activity_type = ? AND requirement = ?",
        record::table_name::<PacingRules>(cache),
    );
    let n: i64 = cache.conn().query_row(
        &sql,
        rusqlite::params![
            term.name.code(),
            term.short_year(),
            pacing_structure,
            activity_type,
            requirement
        ],
        |row| row.get(0),
    )?;
    Ok(n > 0)
}
