//! Article repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Insert articles and persist validated title changes.
//! - Resolve an article's owning author and magazine.
//!
//! # Invariants
//! - Titles are validated before any statement is prepared.
//! - Owner lookups return `None` for dangling foreign keys instead of failing.

use crate::db::schema::{ensure_table, EntityKind};
use crate::model::article::{Article, ArticleId};
use crate::model::author::Author;
use crate::model::magazine::Magazine;
use crate::repo::author_repo::find_author;
use crate::repo::magazine_repo::find_magazine;
use crate::repo::{RepoError, RepoResult};
use log::debug;
use rusqlite::{params, Connection, Row};

/// Repository interface for article persistence and owner lookups.
pub trait ArticleRepository {
    /// Creates the `articles` table if missing.
    fn ensure_table(&self) -> RepoResult<()>;
    /// Writes a new row; uses the article's own id when it has one.
    fn insert_article(&self, article: &mut Article) -> RepoResult<ArticleId>;
    /// Validates and assigns `title`, persisting it when a row exists.
    fn set_article_title(&self, article: &mut Article, title: &str) -> RepoResult<()>;
    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>>;
    /// Author row referenced by `article.author_id`.
    fn get_author(&self, article: &Article) -> RepoResult<Option<Author>>;
    /// Magazine row referenced by `article.magazine_id`.
    fn get_magazine(&self, article: &Article) -> RepoResult<Option<Magazine>>;
}

/// SQLite-backed article repository.
pub struct SqliteArticleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteArticleRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ArticleRepository for SqliteArticleRepository<'_> {
    fn ensure_table(&self) -> RepoResult<()> {
        ensure_table(self.conn, EntityKind::Articles)?;
        Ok(())
    }

    fn insert_article(&self, article: &mut Article) -> RepoResult<ArticleId> {
        article.validate()?;

        self.conn.execute(
            "INSERT INTO articles (id, title, content, author_id, magazine_id)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                article.id(),
                article.title(),
                article.content(),
                article.author_id(),
                article.magazine_id(),
            ],
        )?;

        let id = article
            .id()
            .unwrap_or_else(|| self.conn.last_insert_rowid());
        article.set_id(id);
        debug!("event=article_insert module=repo status=ok id={id}");
        Ok(id)
    }

    fn set_article_title(&self, article: &mut Article, title: &str) -> RepoResult<()> {
        article.set_title(title)?;

        let Some(id) = article.id() else {
            return Ok(());
        };
        let changed = self.conn.execute(
            "UPDATE articles SET title = ?1 WHERE id = ?2;",
            params![title, id],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                table: "articles",
                id,
            });
        }

        debug!("event=article_retitle module=repo status=ok id={id}");
        Ok(())
    }

    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, content, author_id, magazine_id
             FROM articles
             WHERE id = ?1;",
        )?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_article_row(row)?));
        }
        Ok(None)
    }

    fn get_author(&self, article: &Article) -> RepoResult<Option<Author>> {
        find_author(self.conn, article.author_id())
    }

    fn get_magazine(&self, article: &Article) -> RepoResult<Option<Magazine>> {
        find_magazine(self.conn, article.magazine_id())
    }
}

fn parse_article_row(row: &Row<'_>) -> RepoResult<Article> {
    let id: ArticleId = row.get("id")?;
    let author_id = row
        .get::<_, Option<i64>>("author_id")?
        .ok_or_else(|| RepoError::InvalidData(format!("articles.author_id is NULL for id {id}")))?;
    let magazine_id = row
        .get::<_, Option<i64>>("magazine_id")?
        .ok_or_else(|| {
            RepoError::InvalidData(format!("articles.magazine_id is NULL for id {id}"))
        })?;

    Ok(Article::new(
        Some(id),
        row.get::<_, String>("title")?,
        row.get::<_, Option<String>>("content")?.unwrap_or_default(),
        author_id,
        magazine_id,
    ))
}
