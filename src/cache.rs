use rusqlite::Connection;

use crate::cfg::Profile;
use crate::db;

/// Owns the open connection for one database profile. Every table operation
/// takes a `&Cache` and checks the connection out as a borrow; the borrow is
/// returned when it goes out of scope.
///
/// Statements run in the connection's autocommit scope. Callers grouping a
/// sequence of writes take a transaction on the checked-out connection
/// (`cache.conn().unchecked_transaction()`) and commit it themselves.
pub struct Cache {
    conn: Connection,
    schema_prefix: Option<String>,
}

impl Cache {
    /// Opens the profile's database, creating the file and schema on first
    /// use.
    pub fn open(profile: &Profile) -> anyhow::Result<Cache> {
        let conn = db::open_db(profile)?;
        Ok(Cache {
            conn,
            schema_prefix: profile.schema_prefix.clone(),
        })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn schema_prefix(&self) -> Option<&str> {
        self.schema_prefix.as_deref()
    }
}
