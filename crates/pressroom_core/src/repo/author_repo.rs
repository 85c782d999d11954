//! Author repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Insert author rows and persist the once-only name assignment.
//! - Answer author-side relationship queries (articles, magazines).
//!
//! # Invariants
//! - A rename is rejected in memory before any `UPDATE` is issued.
//! - `magazines` keeps one entry per article; duplicates are intentional.

use crate::db::schema::{ensure_table, EntityKind};
use crate::model::author::{Author, AuthorId};
use crate::model::validation::ModelValidationError;
use crate::repo::{query_text_column, RepoError, RepoResult};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};

const AUTHOR_ARTICLES_SQL: &str = "SELECT a.title
FROM authors
JOIN articles a ON authors.id = a.author_id
WHERE authors.id = ?1
ORDER BY a.id ASC;";

const AUTHOR_MAGAZINES_SQL: &str = "SELECT m.name
FROM authors
JOIN articles a ON authors.id = a.author_id
JOIN magazines m ON a.magazine_id = m.id
WHERE authors.id = ?1
ORDER BY a.id ASC;";

/// Repository interface for author persistence and queries.
pub trait AuthorRepository {
    /// Creates the `authors` table if missing.
    fn ensure_table(&self) -> RepoResult<()>;
    /// Writes a new row for `author` and stores the generated id on it.
    fn insert_author(&self, author: &mut Author, name: &str) -> RepoResult<AuthorId>;
    /// Assigns the author's first name and persists it when a row exists.
    fn set_author_name(&self, author: &mut Author, name: &str) -> RepoResult<()>;
    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>>;
    /// Titles of the author's articles in insertion order.
    fn articles(&self, author: &Author) -> RepoResult<Vec<String>>;
    /// Magazine names reached through the author's articles, one per article.
    fn magazines(&self, author: &Author) -> RepoResult<Vec<String>>;
}

/// SQLite-backed author repository.
pub struct SqliteAuthorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAuthorRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AuthorRepository for SqliteAuthorRepository<'_> {
    fn ensure_table(&self) -> RepoResult<()> {
        ensure_table(self.conn, EntityKind::Authors)?;
        Ok(())
    }

    /// # Errors
    /// - `Validation(ImmutableField)` when the author already carries a
    ///   different name.
    /// - `Db` when the insert fails, e.g. the author's preset id is taken.
    fn insert_author(&self, author: &mut Author, name: &str) -> RepoResult<AuthorId> {
        if !author.has_name() {
            author.assign_name(name)?;
        } else if author.name() != Some(name) {
            return Err(ModelValidationError::ImmutableField { field: "name" }.into());
        }

        self.conn.execute(
            "INSERT INTO authors (id, name) VALUES (?1, ?2);",
            params![author.id(), name],
        )?;

        let id = author.id().unwrap_or_else(|| self.conn.last_insert_rowid());
        author.set_id(id);
        debug!("event=author_insert module=repo status=ok id={id}");
        Ok(id)
    }

    /// # Errors
    /// - `Validation(ImmutableField)` whenever the author already has a name.
    /// - `NotFound` when the author has an id but no matching row.
    fn set_author_name(&self, author: &mut Author, name: &str) -> RepoResult<()> {
        author.assign_name(name)?;

        let Some(id) = author.id() else {
            return Ok(());
        };
        let changed = self.conn.execute(
            "UPDATE authors SET name = ?1 WHERE id = ?2;",
            params![name, id],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                table: "authors",
                id,
            });
        }

        debug!("event=author_rename module=repo status=ok id={id}");
        Ok(())
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        find_author(self.conn, id)
    }

    fn articles(&self, author: &Author) -> RepoResult<Vec<String>> {
        query_text_column(self.conn, AUTHOR_ARTICLES_SQL, params![author.id()])
    }

    fn magazines(&self, author: &Author) -> RepoResult<Vec<String>> {
        query_text_column(self.conn, AUTHOR_MAGAZINES_SQL, params![author.id()])
    }
}

/// Loads one author row by id.
pub(crate) fn find_author(conn: &Connection, id: AuthorId) -> RepoResult<Option<Author>> {
    let author = conn
        .query_row(
            "SELECT id, name FROM authors WHERE id = ?1;",
            [id],
            parse_author_row,
        )
        .optional()?;
    Ok(author)
}

pub(crate) fn parse_author_row(row: &Row<'_>) -> rusqlite::Result<Author> {
    Ok(Author::from_row(row.get("id")?, row.get::<_, String>("name")?))
}
