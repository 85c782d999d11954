//! Repository layer: every SQL statement the crate runs outside `db`.
//!
//! # Responsibility
//! - Persist validated entity mutations immediately, one statement each.
//! - Answer relationship queries with parameterized joins.
//!
//! # Invariants
//! - Validation runs before any statement is prepared.
//! - Repositories borrow the caller's connection and never open their own.
//! - Relationship listings follow `articles.id ASC` (insertion order).

pub mod article_repo;
pub mod author_repo;
pub mod error;
pub mod magazine_repo;

use rusqlite::types::ToSql;
use rusqlite::Connection;

pub use error::{RepoError, RepoResult};

/// Runs a single-column text query and collects every row.
pub(crate) fn query_text_column(
    conn: &Connection,
    sql: &str,
    params: &[&dyn ToSql],
) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut values = Vec::new();
    while let Some(row) = rows.next()? {
        values.push(row.get(0)?);
    }
    Ok(values)
}
