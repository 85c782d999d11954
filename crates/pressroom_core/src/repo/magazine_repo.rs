//! Magazine repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist validated name/category assignments immediately.
//! - Answer magazine-side relationship queries, including the
//!   contributing-author aggregation.
//!
//! # Invariants
//! - Saves are keyed on the primary id: one magazine value maps to one row no
//!   matter how many fields are set.
//! - A rejected name or category never produces a statement, and leaves the
//!   magazine value as it was.
//! - Every save validates the whole magazine, not just the field being set.
//! - `article_titles` and `contributing_authors` return `None`, not an empty
//!   list, when nothing matches.

use crate::db::schema::{ensure_table, EntityKind};
use crate::model::author::Author;
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::author_repo::parse_author_row;
use crate::repo::{query_text_column, RepoResult};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// An author qualifies as contributing with strictly more articles than this.
pub const CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE: i64 = 2;

const MAGAZINE_ARTICLES_SQL: &str = "SELECT a.title
FROM magazines
JOIN articles a ON magazines.id = a.magazine_id
WHERE magazines.id = ?1
ORDER BY a.id ASC;";

const MAGAZINE_CONTRIBUTORS_SQL: &str = "SELECT a.name
FROM magazines
JOIN articles art ON magazines.id = art.magazine_id
JOIN authors a ON art.author_id = a.id
WHERE magazines.id = ?1
ORDER BY art.id ASC;";

const CONTRIBUTING_AUTHORS_SQL: &str = "SELECT a.id, a.name
FROM magazines
JOIN articles art ON magazines.id = art.magazine_id
JOIN authors a ON art.author_id = a.id
WHERE magazines.id = ?1
GROUP BY a.id, a.name
HAVING COUNT(art.id) > ?2
ORDER BY a.id ASC;";

/// Repository interface for magazine persistence and queries.
pub trait MagazineRepository {
    /// Creates the `magazines` table if missing.
    fn ensure_table(&self) -> RepoResult<()>;
    /// Validates and assigns `name`, then saves the magazine.
    fn set_magazine_name(&self, magazine: &mut Magazine, name: &str) -> RepoResult<MagazineId>;
    /// Validates and assigns `category`, then saves the magazine.
    fn set_magazine_category(
        &self,
        magazine: &mut Magazine,
        category: Option<&str>,
    ) -> RepoResult<MagazineId>;
    /// Validates, then update-or-insert keyed on the magazine's id.
    fn save_magazine(&self, magazine: &mut Magazine) -> RepoResult<MagazineId>;
    fn get_magazine(&self, id: MagazineId) -> RepoResult<Option<Magazine>>;
    fn articles(&self, magazine: &Magazine) -> RepoResult<Vec<String>>;
    /// Author names, one per article in this magazine.
    fn contributors(&self, magazine: &Magazine) -> RepoResult<Vec<String>>;
    /// Same rows as `articles`, but `None` when there are none.
    fn article_titles(&self, magazine: &Magazine) -> RepoResult<Option<Vec<String>>>;
    /// Authors with more than two articles in this magazine, by author id.
    fn contributing_authors(&self, magazine: &Magazine) -> RepoResult<Option<Vec<Author>>>;
}

/// SQLite-backed magazine repository.
pub struct SqliteMagazineRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMagazineRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl MagazineRepository for SqliteMagazineRepository<'_> {
    fn ensure_table(&self) -> RepoResult<()> {
        ensure_table(self.conn, EntityKind::Magazines)?;
        Ok(())
    }

    fn set_magazine_name(&self, magazine: &mut Magazine, name: &str) -> RepoResult<MagazineId> {
        let mut candidate = magazine.clone();
        candidate.set_name(name)?;
        candidate.validate()?;
        *magazine = candidate;
        self.save_magazine(magazine)
    }

    fn set_magazine_category(
        &self,
        magazine: &mut Magazine,
        category: Option<&str>,
    ) -> RepoResult<MagazineId> {
        let mut candidate = magazine.clone();
        candidate.set_category(category.map(str::to_owned))?;
        candidate.validate()?;
        *magazine = candidate;
        self.save_magazine(magazine)
    }

    fn save_magazine(&self, magazine: &mut Magazine) -> RepoResult<MagazineId> {
        magazine.validate()?;

        self.conn.execute(
            "INSERT INTO magazines (id, name, category) VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                category = excluded.category;",
            params![magazine.id(), magazine.name(), magazine.category()],
        )?;

        // last_insert_rowid is only meaningful on the insert path.
        let id = magazine
            .id()
            .unwrap_or_else(|| self.conn.last_insert_rowid());
        magazine.set_id(id);
        debug!("event=magazine_save module=repo status=ok id={id}");
        Ok(id)
    }

    fn get_magazine(&self, id: MagazineId) -> RepoResult<Option<Magazine>> {
        find_magazine(self.conn, id)
    }

    fn articles(&self, magazine: &Magazine) -> RepoResult<Vec<String>> {
        query_text_column(self.conn, MAGAZINE_ARTICLES_SQL, params![magazine.id()])
    }

    fn contributors(&self, magazine: &Magazine) -> RepoResult<Vec<String>> {
        query_text_column(self.conn, MAGAZINE_CONTRIBUTORS_SQL, params![magazine.id()])
    }

    fn article_titles(&self, magazine: &Magazine) -> RepoResult<Option<Vec<String>>> {
        let titles = self.articles(magazine)?;
        Ok((!titles.is_empty()).then_some(titles))
    }

    fn contributing_authors(&self, magazine: &Magazine) -> RepoResult<Option<Vec<Author>>> {
        let mut stmt = self.conn.prepare(CONTRIBUTING_AUTHORS_SQL)?;
        let mut rows = stmt.query(params![
            magazine.id(),
            CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE
        ])?;
        let mut authors = Vec::new();
        while let Some(row) = rows.next()? {
            authors.push(parse_author_row(row)?);
        }

        if authors.is_empty() {
            return Ok(None);
        }
        Ok(Some(authors))
    }
}

/// Loads one magazine row by id.
pub(crate) fn find_magazine(conn: &Connection, id: MagazineId) -> RepoResult<Option<Magazine>> {
    let magazine = conn
        .query_row(
            "SELECT id, name, category FROM magazines WHERE id = ?1;",
            [id],
            parse_magazine_row,
        )
        .optional()?;
    Ok(magazine)
}

fn parse_magazine_row(row: &Row<'_>) -> rusqlite::Result<Magazine> {
    Ok(Magazine::new(
        Some(row.get("id")?),
        row.get::<_, String>("name")?,
        row.get("category")?,
    ))
}
