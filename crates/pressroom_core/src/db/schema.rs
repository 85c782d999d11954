//! Table definitions and idempotent DDL.
//!
//! # Responsibility
//! - Own the DDL for every entity table.
//! - Create tables lazily with `CREATE TABLE IF NOT EXISTS`.
//!
//! # Invariants
//! - Running `ensure_table` any number of times leaves one table per kind.
//! - Article foreign keys are plain integer columns without constraints.

use crate::db::DbResult;
use log::debug;
use rusqlite::Connection;

const AUTHORS_DDL: &str = "CREATE TABLE IF NOT EXISTS authors (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);";

const MAGAZINES_DDL: &str = "CREATE TABLE IF NOT EXISTS magazines (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    category TEXT
);";

const ARTICLES_DDL: &str = "CREATE TABLE IF NOT EXISTS articles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT,
    author_id INTEGER,
    magazine_id INTEGER
);";

/// Which entity table a schema operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Authors,
    Magazines,
    Articles,
}

impl EntityKind {
    /// All kinds in creation order.
    pub const ALL: [EntityKind; 3] = [Self::Authors, Self::Magazines, Self::Articles];

    pub fn table_name(self) -> &'static str {
        match self {
            Self::Authors => "authors",
            Self::Magazines => "magazines",
            Self::Articles => "articles",
        }
    }

    fn ddl(self) -> &'static str {
        match self {
            Self::Authors => AUTHORS_DDL,
            Self::Magazines => MAGAZINES_DDL,
            Self::Articles => ARTICLES_DDL,
        }
    }
}

/// Creates the table for `kind` if it does not exist yet.
///
/// # Side effects
/// - Commits immediately (autocommit DDL).
pub fn ensure_table(conn: &Connection, kind: EntityKind) -> DbResult<()> {
    conn.execute_batch(kind.ddl())?;
    debug!(
        "event=ensure_table module=db status=ok table={}",
        kind.table_name()
    );
    Ok(())
}

/// Creates every entity table that is still missing.
pub fn ensure_all_tables(conn: &Connection) -> DbResult<()> {
    for kind in EntityKind::ALL {
        ensure_table(conn, kind)?;
    }
    Ok(())
}

/// Returns whether the table for `kind` is present.
pub fn table_exists(conn: &Connection, kind: EntityKind) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [kind.table_name()],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
