//! Core storage and domain rules for pressroom.
//! Authors write articles; magazines publish them. This crate owns the
//! SQLite schema, the field rules, and every relationship query.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use db::schema::{ensure_all_tables, ensure_table, EntityKind};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::magazine::{Magazine, MagazineId};
pub use model::validation::ModelValidationError;
pub use repo::article_repo::{ArticleRepository, SqliteArticleRepository};
pub use repo::author_repo::{AuthorRepository, SqliteAuthorRepository};
pub use repo::magazine_repo::{
    MagazineRepository, SqliteMagazineRepository, CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE,
};
pub use repo::{RepoError, RepoResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
