use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Params, Row};

use crate::cache::Cache;

/// Describes one legacy table and how its rows marshal to and from a record
/// struct. The table modules implement this once each; the CRUD that never
/// varies between tables lives in the free functions below.
pub trait Record: Sized {
    /// Unqualified table name.
    const TABLE: &'static str;
    /// Every column, in schema order. `values` must produce this order.
    const COLUMNS: &'static [&'static str];
    /// The primary-key columns. `key_values` must produce this order.
    const KEY: &'static [&'static str];

    /// Marshals one result row, fetched by column name.
    fn from_row(row: &Row<'_>) -> anyhow::Result<Self>;

    /// The full column values, in `COLUMNS` order.
    fn values(&self) -> Vec<Value>;

    /// The primary-key values, in `KEY` order.
    fn key_values(&self) -> Vec<Value>;
}

/// Table name as it appears in SQL for this cache, qualified by the
/// profile's schema prefix when one is configured.
pub fn table_name<R: Record>(cache: &Cache) -> String {
    match cache.schema_prefix() {
        Some(prefix) => format!("{}.{}", prefix, R::TABLE),
        None => R::TABLE.to_string(),
    }
}

/// Inserts one record. Ok(true) when exactly one row was stored; constraint
/// violations and connectivity failures propagate as errors.
pub fn insert<R: Record>(cache: &Cache, rec: &R) -> anyhow::Result<bool> {
    let sql = format!(
        "INSERT INTO {}({}) VALUES({})",
        table_name::<R>(cache),
        R::COLUMNS.join(", "),
        placeholders(R::COLUMNS.len()),
    );
    let changed = cache.conn().execute(&sql, params_from_iter(rec.values()))?;
    Ok(changed == 1)
}

/// Deletes the row matching the record's primary key. Ok(true) iff exactly
/// one row was removed.
pub fn delete<R: Record>(cache: &Cache, rec: &R) -> anyhow::Result<bool> {
    let sql = format!(
        "DELETE FROM {} WHERE {}",
        table_name::<R>(cache),
        key_clause::<R>(),
    );
    let changed = cache
        .conn()
        .execute(&sql, params_from_iter(rec.key_values()))?;
    Ok(changed == 1)
}

/// All rows of the table, in no guaranteed order.
pub fn query_all<R: Record>(cache: &Cache) -> anyhow::Result<Vec<R>> {
    let sql = format!("SELECT * FROM {}", table_name::<R>(cache));
    let conn = cache.conn();
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_and_then([], |row| R::from_row(row))?;
    rows.collect()
}

/// Total row count for the table.
pub fn count<R: Record>(cache: &Cache) -> anyhow::Result<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", table_name::<R>(cache));
    let n = cache.conn().query_row(&sql, [], |row| row.get(0))?;
    Ok(n)
}

/// Rows matching a clause written against the table's own columns. The
/// clause is everything after WHERE, so it may carry ORDER BY etc.
pub(crate) fn query_clause<R: Record, P: Params>(
    cache: &Cache,
    clause: &str,
    params: P,
) -> anyhow::Result<Vec<R>> {
    let sql = format!("SELECT * FROM {} WHERE {}", table_name::<R>(cache), clause);
    let conn = cache.conn();
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_and_then(params, |row| R::from_row(row))?;
    rows.collect()
}

/// First row matching a clause, if any.
pub(crate) fn query_first<R: Record, P: Params>(
    cache: &Cache,
    clause: &str,
    params: P,
) -> anyhow::Result<Option<R>> {
    let sql = format!("SELECT * FROM {} WHERE {}", table_name::<R>(cache), clause);
    let conn = cache.conn();
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query_and_then(params, |row| R::from_row(row))?;
    rows.next().transpose()
}

/// Student IDs beginning "99" belong to synthetic test students served from
/// fixtures elsewhere in the system; they must never reach the database.
pub fn is_reserved_student_id(stu_id: &str) -> bool {
    stu_id.starts_with("99")
}

pub(crate) fn date_value(d: Option<NaiveDate>) -> Value {
    match d {
        Some(d) => Value::Text(d.to_string()),
        None => Value::Null,
    }
}

pub(crate) fn datetime_value(dt: Option<NaiveDateTime>) -> Value {
    match dt {
        Some(dt) => Value::Text(dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
        None => Value::Null,
    }
}

fn placeholders(n: usize) -> String {
    let mut out = String::with_capacity(n * 3);
    for i in 0..n {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('?');
    }
    out
}

fn key_clause<R: Record>() -> String {
    R::KEY
        .iter()
        .map(|col| format!("{} = ?", col))
        .collect::<Vec<_>>()
        .join(" AND ")
}
