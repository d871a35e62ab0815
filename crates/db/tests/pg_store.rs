//! Integration tests for the PostgreSQL document store.
//!
//! Exercises JSONB matching and write semantics against a real database:
//! - numeric filters match by value, never by text
//! - update merges into one document; no match or no change reports false
//! - delete removes one document
//! - bulk insert is all-or-nothing in key order
//! - user lookup decodes the stored account

use serde_json::{json, Value};
use showtime_core::types::Document;
use showtime_db::models::user::NewUser;
use showtime_db::repositories::{MovieRepo, TheatreRepo, UserRepo};
use showtime_db::{Collection, DocumentStore, PgDocumentStore};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn numeric_filter_ignores_string_values(pool: PgPool) {
    let store = PgDocumentStore::new(pool);
    for movie in [
        json!({ "name": "Dune", "rating": 8 }),
        json!({ "name": "Heat", "rating": "8" }),
        json!({ "name": "Up", "rating": 8.0 }),
    ] {
        MovieRepo::create(&store, doc(movie)).await.unwrap();
    }

    let found = MovieRepo::list(&store, &doc(json!({ "rating": 8 })))
        .await
        .unwrap();

    let names: Vec<_> = found.iter().map(|m| m["name"].clone()).collect();
    assert_eq!(names, vec![json!("Dune"), json!("Up")]);
    assert!(found.iter().all(|m| m["_id"].is_i64()));
}

#[sqlx::test(migrations = "./migrations")]
async fn client_storage_key_is_not_persisted(pool: PgPool) {
    let store = PgDocumentStore::new(pool);
    let outcome = MovieRepo::create(&store, doc(json!({ "_id": -5, "id": "m1" })))
        .await
        .unwrap();
    assert!(outcome.acknowledged);

    let found = MovieRepo::list(&store, &doc(json!({ "id": "m1" })))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["_id"], json!(outcome.inserted_ids[0]));
}

#[sqlx::test(migrations = "./migrations")]
async fn update_merges_and_reports_missing(pool: PgPool) {
    let store = PgDocumentStore::new(pool);
    MovieRepo::create(&store, doc(json!({ "id": "m1", "name": "Dune", "rating": 7 })))
        .await
        .unwrap();

    let updated = MovieRepo::update_by_id(&store, "m1", &doc(json!({ "rating": 9 })))
        .await
        .unwrap();
    assert!(updated);

    let missing = MovieRepo::update_by_id(&store, "nope", &doc(json!({ "rating": 1 })))
        .await
        .unwrap();
    assert!(!missing);

    let unchanged = MovieRepo::update_by_id(&store, "m1", &doc(json!({ "rating": 9.0 })))
        .await
        .unwrap();
    assert!(!unchanged, "9.0 equals the stored 9, so nothing is modified");

    let found = MovieRepo::list(&store, &doc(json!({ "id": "m1" })))
        .await
        .unwrap();
    assert_eq!(found[0]["rating"], json!(9));
    assert_eq!(found[0]["name"], json!("Dune"));
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_removes_once(pool: PgPool) {
    let store = PgDocumentStore::new(pool);
    MovieRepo::create(&store, doc(json!({ "id": "m1" })))
        .await
        .unwrap();

    assert!(MovieRepo::delete_by_id(&store, "m1").await.unwrap());
    assert!(!MovieRepo::delete_by_id(&store, "m1").await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn bulk_insert_assigns_keys_in_order(pool: PgPool) {
    let store = PgDocumentStore::new(pool);
    let seats = vec![
        doc(json!({ "id": 1, "seat": "A1" })),
        doc(json!({ "id": 2, "seat": "A2" })),
        doc(json!({ "id": 3, "seat": "A3" })),
    ];

    let outcome = TheatreRepo::create_many(&store, seats).await.unwrap();
    assert!(outcome.acknowledged);
    assert_eq!(outcome.inserted_ids.len(), 3);
    assert!(outcome.inserted_ids.windows(2).all(|w| w[0] < w[1]));

    let patch = doc(json!({ "booked": true }));
    let updated = TheatreRepo::update_by_id(&store, serde_json::Number::from(2), &patch)
        .await
        .unwrap();
    assert!(updated);

    let booked = TheatreRepo::list(&store, &doc(json!({ "booked": true })))
        .await
        .unwrap();
    assert_eq!(booked.len(), 1);
    assert_eq!(booked[0]["seat"], json!("A2"));
}

#[sqlx::test(migrations = "./migrations")]
async fn user_lookup_decodes_account(pool: PgPool) {
    let store = PgDocumentStore::new(pool);
    let input = NewUser {
        username: "alice1".to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
    };
    UserRepo::create(&store, &input).await.unwrap();

    let user = UserRepo::find_by_username(&store, "alice1")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(user.username, "alice1");
    assert_eq!(user.password_hash, "$argon2id$placeholder");

    assert!(UserRepo::find_by_username(&store, "ALICE1")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn ping_succeeds(pool: PgPool) {
    let store = PgDocumentStore::new(pool);
    store.ping().await.unwrap();
    assert_eq!(
        store.find(Collection::Users, &Document::new()).await.unwrap().len(),
        0
    );
}
