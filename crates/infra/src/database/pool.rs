//! SQLite connection pool helpers
//!
//! Builds the `r2d2` pool and applies per-connection pragmas.

use std::path::Path;
use std::time::Duration;

use linkfolio_domain::Result as DomainResult;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use tracing::warn;

use crate::errors::InfraError;

/// Pool of SQLite connections.
pub type SqlitePool = Pool<SqliteConnectionManager>;

/// Connection checked out of a [`SqlitePool`].
pub type SqliteConnection = PooledConnection<SqliteConnectionManager>;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Build a pool for the database file at `path`.
///
/// Every connection runs in WAL mode with a busy timeout. Writers that take
/// the lock up front (`BEGIN IMMEDIATE` or a single statement) wait for it;
/// a deferred transaction that reads before writing can still fail with
/// `SQLITE_BUSY`.
pub fn create_sqlite_pool<P: AsRef<Path>>(path: P, max_size: u32) -> DomainResult<SqlitePool> {
    let manager =
        SqliteConnectionManager::file(path.as_ref()).with_init(apply_connection_pragmas);

    Pool::builder()
        .max_size(max_size.max(1))
        .connection_timeout(CONNECTION_TIMEOUT)
        .build(manager)
        .map_err(|e| {
            warn!(error = %e, "Failed to create connection pool");
            InfraError::from(e).into()
        })
}

/// Apply connection-level pragmas
///
/// - WAL journal with periodic autocheckpoint
/// - NORMAL synchronous mode
/// - Busy timeout for lock contention
fn apply_connection_pragmas(conn: &mut Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "PRAGMA journal_mode=WAL;
         PRAGMA wal_autocheckpoint=1000;
         PRAGMA synchronous=NORMAL;",
    )?;
    conn.busy_timeout(BUSY_TIMEOUT)
}
