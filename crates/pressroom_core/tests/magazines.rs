use pressroom_core::{
    open_db_in_memory, Magazine, MagazineRepository, ModelValidationError, RepoError,
    SqliteMagazineRepository,
};
use rusqlite::{params, Connection};

fn insert_author(conn: &Connection, name: &str) -> i64 {
    conn.execute("INSERT INTO authors (name) VALUES (?1);", [name])
        .unwrap();
    conn.last_insert_rowid()
}

fn insert_article(conn: &Connection, title: &str, author_id: i64, magazine_id: i64) {
    conn.execute(
        "INSERT INTO articles (title, content, author_id, magazine_id) VALUES (?1, 'Content', ?2, ?3);",
        params![title, author_id, magazine_id],
    )
    .unwrap();
}

fn magazine_rows(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM magazines;", [], |row| row.get(0))
        .unwrap()
}

fn saved_magazine(repo: &SqliteMagazineRepository<'_>, name: &str) -> Magazine {
    let mut magazine = Magazine::default();
    repo.set_magazine_name(&mut magazine, name).unwrap();
    magazine
}

#[test]
fn create_magazine_persists_name_and_category() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMagazineRepository::new(&conn);
    repo.ensure_table().unwrap();

    let mut magazine = Magazine::new(None, "Tech Monthly", Some("Technology".to_string()));
    repo.set_magazine_name(&mut magazine, "Tech Monthly").unwrap();

    let id = magazine.id().expect("saved magazine has an id");
    assert_eq!(magazine.name(), "Tech Monthly");
    assert_eq!(magazine.category(), Some("Technology"));
    assert_eq!(repo.get_magazine(id).unwrap(), Some(magazine));
}

#[test]
fn valid_names_from_two_to_sixteen_chars_are_accepted() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMagazineRepository::new(&conn);

    for len in 2..=16 {
        let name = "M".repeat(len);
        let mut magazine = Magazine::default();
        repo.set_magazine_name(&mut magazine, &name).unwrap();
        assert_eq!(magazine.name(), name);
    }
}

#[test]
fn invalid_name_length_fails_without_writing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMagazineRepository::new(&conn);
    let mut magazine = Magazine::default();

    let too_short = repo.set_magazine_name(&mut magazine, "A").unwrap_err();
    assert!(matches!(
        too_short,
        RepoError::Validation(ModelValidationError::MagazineNameLength { len: 1 })
    ));
    let too_long = repo
        .set_magazine_name(&mut magazine, &"A".repeat(17))
        .unwrap_err();
    assert!(matches!(
        too_long,
        RepoError::Validation(ModelValidationError::MagazineNameLength { len: 17 })
    ));

    assert_eq!(magazine.name(), "");
    assert_eq!(magazine.id(), None);
    assert_eq!(magazine_rows(&conn), 0);
}

#[test]
fn renaming_updates_the_same_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMagazineRepository::new(&conn);

    let mut magazine = Magazine::new(None, "Old Name", Some("Category".to_string()));
    let first_id = repo.set_magazine_name(&mut magazine, "Old Name").unwrap();
    let second_id = repo.set_magazine_name(&mut magazine, "New Name").unwrap();

    assert_eq!(first_id, second_id);
    assert_eq!(magazine.name(), "New Name");
    assert_eq!(magazine_rows(&conn), 1);
}

#[test]
fn setting_name_then_category_leaves_one_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMagazineRepository::new(&conn);

    let mut magazine = saved_magazine(&repo, "Byte");
    repo.set_magazine_category(&mut magazine, Some("Computing"))
        .unwrap();

    assert_eq!(magazine_rows(&conn), 1);
    let stored = repo.get_magazine(magazine.id().unwrap()).unwrap().unwrap();
    assert_eq!(stored.name(), "Byte");
    assert_eq!(stored.category(), Some("Computing"));
}

#[test]
fn empty_category_is_rejected_and_none_clears_it() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMagazineRepository::new(&conn);
    let mut magazine = Magazine::new(None, "Byte", Some("Computing".to_string()));
    repo.save_magazine(&mut magazine).unwrap();

    let err = repo
        .set_magazine_category(&mut magazine, Some(""))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ModelValidationError::EmptyCategory)
    ));
    assert_eq!(magazine.category(), Some("Computing"));

    repo.set_magazine_category(&mut magazine, None).unwrap();
    let stored = repo.get_magazine(magazine.id().unwrap()).unwrap().unwrap();
    assert_eq!(stored.category(), None);
}

#[test]
fn save_with_preset_id_inserts_then_updates_that_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMagazineRepository::new(&conn);

    let mut magazine = Magazine::new(Some(7), "Tech Weekly", None);
    assert_eq!(repo.save_magazine(&mut magazine).unwrap(), 7);
    repo.set_magazine_category(&mut magazine, Some("Tech"))
        .unwrap();

    assert_eq!(magazine_rows(&conn), 1);
    let stored = repo.get_magazine(7).unwrap().unwrap();
    assert_eq!(stored.category(), Some("Tech"));
}

#[test]
fn articles_and_contributors_follow_article_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMagazineRepository::new(&conn);
    let magazine = saved_magazine(&repo, "Weekly");
    let magazine_id = magazine.id().unwrap();
    let ada = insert_author(&conn, "Ada");
    let grace = insert_author(&conn, "Grace");

    insert_article(&conn, "First", grace, magazine_id);
    insert_article(&conn, "Second", ada, magazine_id);
    insert_article(&conn, "Third", grace, magazine_id);
    insert_article(&conn, "Elsewhere", ada, magazine_id + 1);

    assert_eq!(repo.articles(&magazine).unwrap(), ["First", "Second", "Third"]);
    assert_eq!(
        repo.contributors(&magazine).unwrap(),
        ["Grace", "Ada", "Grace"]
    );
    assert_eq!(
        repo.article_titles(&magazine).unwrap(),
        Some(vec![
            "First".to_string(),
            "Second".to_string(),
            "Third".to_string()
        ])
    );
}

#[test]
fn article_titles_is_none_without_articles() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMagazineRepository::new(&conn);
    let magazine = saved_magazine(&repo, "Empty");

    assert!(repo.articles(&magazine).unwrap().is_empty());
    assert_eq!(repo.article_titles(&magazine).unwrap(), None);
}

#[test]
fn contributing_authors_requires_more_than_two_articles() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMagazineRepository::new(&conn);
    let magazine = saved_magazine(&repo, "Monthly");
    let magazine_id = magazine.id().unwrap();

    let prolific = insert_author(&conn, "Prolific");
    let twice = insert_author(&conn, "Twice");
    let once = insert_author(&conn, "Once");
    for title in ["P1", "P2", "P3"] {
        insert_article(&conn, title, prolific, magazine_id);
    }
    insert_article(&conn, "T1", twice, magazine_id);
    insert_article(&conn, "T2", twice, magazine_id);
    insert_article(&conn, "O1", once, magazine_id);

    let authors = repo.contributing_authors(&magazine).unwrap().unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].id(), Some(prolific));
    assert_eq!(authors[0].name(), Some("Prolific"));
}

#[test]
fn contributing_authors_counts_only_this_magazine() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMagazineRepository::new(&conn);
    let magazine = saved_magazine(&repo, "Monthly");
    let other = saved_magazine(&repo, "Other");
    let author = insert_author(&conn, "Split");

    insert_article(&conn, "A1", author, magazine.id().unwrap());
    insert_article(&conn, "A2", author, magazine.id().unwrap());
    insert_article(&conn, "B1", author, other.id().unwrap());

    assert!(repo.contributing_authors(&magazine).unwrap().is_none());
}

#[test]
fn contributing_authors_are_ordered_by_author_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMagazineRepository::new(&conn);
    let magazine = saved_magazine(&repo, "Monthly");
    let magazine_id = magazine.id().unwrap();
    let first = insert_author(&conn, "First");
    let second = insert_author(&conn, "Second");

    for n in 0..3 {
        insert_article(&conn, &format!("S{n}"), second, magazine_id);
        insert_article(&conn, &format!("F{n}"), first, magazine_id);
    }

    let ids: Vec<_> = repo
        .contributing_authors(&magazine)
        .unwrap()
        .unwrap()
        .iter()
        .map(|author| author.id())
        .collect();
    assert_eq!(ids, [Some(first), Some(second)]);
}

#[test]
fn unsaved_magazine_matches_nothing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMagazineRepository::new(&conn);
    insert_article(&conn, "Orphan", 1, 1);

    let magazine = Magazine::named("Draft");
    assert!(repo.articles(&magazine).unwrap().is_empty());
    assert!(repo.contributors(&magazine).unwrap().is_empty());
    assert_eq!(repo.article_titles(&magazine).unwrap(), None);
    assert!(repo.contributing_authors(&magazine).unwrap().is_none());
}

#[test]
fn magazine_constructor_does_not_validate() {
    let magazine = Magazine::new(Some(1), "Tech Weekly", None);
    assert_eq!(magazine.name(), "Tech Weekly");
    assert_eq!(Magazine::named("X").to_string(), "<Magazine X>");
}

#[test]
fn save_magazine_rejects_values_built_without_setters() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMagazineRepository::new(&conn);

    let mut empty_category = Magazine::new(None, "Wired", Some(String::new()));
    let err = repo.save_magazine(&mut empty_category).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ModelValidationError::EmptyCategory)
    ));

    let mut short_name = Magazine::new(None, "X", None);
    let err = repo.save_magazine(&mut short_name).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ModelValidationError::MagazineNameLength { len: 1 })
    ));

    assert_eq!(short_name.id(), None);
    assert_eq!(magazine_rows(&conn), 0);
}

#[test]
fn category_on_unnamed_magazine_is_rejected_and_not_applied() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMagazineRepository::new(&conn);
    let mut magazine = Magazine::default();

    let err = repo
        .set_magazine_category(&mut magazine, Some("Tech"))
        .unwrap_err();

    assert!(matches!(
        err,
        RepoError::Validation(ModelValidationError::MagazineNameLength { len: 0 })
    ));
    assert_eq!(magazine.category(), None);
    assert_eq!(magazine_rows(&conn), 0);
}

#[test]
fn validate_checks_name_and_category_together() {
    assert!(Magazine::new(None, "Wired", Some("Tech".to_string()))
        .validate()
        .is_ok());
    assert_eq!(
        Magazine::new(None, "Wired", Some(String::new())).validate(),
        Err(ModelValidationError::EmptyCategory)
    );
    assert_eq!(
        Magazine::named("W").validate(),
        Err(ModelValidationError::MagazineNameLength { len: 1 })
    );
}
