use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::Row;

use crate::cache::Cache;
use crate::record::{self, Record};

// Well-known dt_desc values. The calendar is keyed by (date, description),
// so one date can carry several of these.
pub const DT_DESC_START_DATE_1: &str = "start_dt1";
pub const DT_DESC_END_DATE_1: &str = "end_dt1";
pub const DT_DESC_START_DATE_2: &str = "start_dt2";
pub const DT_DESC_END_DATE_2: &str = "end_dt2";
pub const DT_DESC_HOLIDAY: &str = "holiday";
pub const DT_DESC_BOOKSTORE: &str = "bookstore";
pub const DT_DESC_TUT_START: &str = "tut_start";
pub const DT_DESC_TUT_END: &str = "tut_end";
pub const DT_DESC_WALKIN_PLACEMENT: &str = "walk_in";

/// One campus calendar entry: a dated event with optional open/close hours.
#[derive(Debug, Clone, PartialEq)]
pub struct CampusCalendar {
    pub campus_dt: NaiveDate,
    pub dt_desc: String,
    pub open_time1: Option<String>,
    pub open_time2: Option<String>,
    pub open_time3: Option<String>,
    pub close_time1: Option<String>,
    pub close_time2: Option<String>,
    pub close_time3: Option<String>,
    pub weekdays_1: Option<String>,
    pub weekdays_2: Option<String>,
    pub weekdays_3: Option<String>,
}

impl Record for CampusCalendar {
    const TABLE: &'static str = "campus_calendar";
    const COLUMNS: &'static [&'static str] = &[
        "campus_dt",
        "dt_desc",
        "open_time1",
        "open_time2",
        "open_time3",
        "close_time1",
        "close_time2",
        "close_time3",
        "weekdays_1",
        "weekdays_2",
        "weekdays_3",
    ];
    const KEY: &'static [&'static str] = &["campus_dt", "dt_desc"];

    fn from_row(row: &Row<'_>) -> anyhow::Result<Self> {
        Ok(CampusCalendar {
            campus_dt: row.get("campus_dt")?,
            dt_desc: row.get("dt_desc")?,
            open_time1: row.get("open_time1")?,
            open_time2: row.get("open_time2")?,
            open_time3: row.get("open_time3")?,
            close_time1: row.get("close_time1")?,
            close_time2: row.get("close_time2")?,
            close_time3: row.get("close_time3")?,
            weekdays_1: row.get("weekdays_1")?,
            weekdays_2: row.get("weekdays_2")?,
            weekdays_3: row.get("weekdays_3")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            record::date_value(Some(self.campus_dt)),
            Value::from(self.dt_desc.clone()),
            Value::from(self.open_time1.clone()),
            Value::from(self.open_time2.clone()),
            Value::from(self.open_time3.clone()),
            Value::from(self.close_time1.clone()),
            Value::from(self.close_time2.clone()),
            Value::from(self.close_time3.clone()),
            Value::from(self.weekdays_1.clone()),
            Value::from(self.weekdays_2.clone()),
            Value::from(self.weekdays_3.clone()),
        ]
    }

    fn key_values(&self) -> Vec<Value> {
        vec![
            record::date_value(Some(self.campus_dt)),
            Value::from(self.dt_desc.clone()),
        ]
    }
}

pub fn insert(cache: &Cache, rec: &CampusCalendar) -> anyhow::Result<bool> {
    record::insert(cache, rec)
}

pub fn delete(cache: &Cache, rec: &CampusCalendar) -> anyhow::Result<bool> {
    record::delete(cache, rec)
}

pub fn query_all(cache: &Cache) -> anyhow::Result<Vec<CampusCalendar>> {
    record::query_all(cache)
}

/// All entries carrying one dt_desc code, e.g. every holiday.
pub fn query_by_desc(cache: &Cache, dt_desc: &str) -> anyhow::Result<Vec<CampusCalendar>> {
    record::query_clause(cache, "dt_desc = ?", [dt_desc])
}
