use pressroom_core::{Article, Author, Magazine};

#[test]
fn author_serializes_with_column_names() {
    let author = Author::from_row(3, "Jane Doe");

    let json = serde_json::to_value(&author).unwrap();
    assert_eq!(json, serde_json::json!({ "id": 3, "name": "Jane Doe" }));

    let decoded: Author = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, author);
}

#[test]
fn unnamed_author_serializes_null_name() {
    let json = serde_json::to_value(Author::unnamed()).unwrap();
    assert_eq!(json["name"], serde_json::Value::Null);
    assert_eq!(json["id"], serde_json::Value::Null);
}

#[test]
fn magazine_and_article_use_column_names() {
    let magazine = Magazine::new(Some(1), "Wired", Some("Tech".to_string()));
    let json = serde_json::to_value(&magazine).unwrap();
    assert_eq!(json["name"], "Wired");
    assert_eq!(json["category"], "Tech");

    let article = Article::new(Some(5), "Hello world", "Body", 2, 1);
    let json = serde_json::to_value(&article).unwrap();
    assert_eq!(json["author_id"], 2);
    assert_eq!(json["magazine_id"], 1);
    assert_eq!(json["title"], "Hello world");
}
