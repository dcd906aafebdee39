use uuid::Uuid;

use super::SqliteClient;
use crate::{
    db::interface::{DatabaseClient, DatabaseError},
    models::{NewNote, NewUser, NoteUpdate},
};

struct Tools {
    client: SqliteClient,
}

/// Create a new set of tools/clients for a test.
async fn tools() -> Tools {
    // Enable debug logging
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    Tools {
        client: SqliteClient::new_memory()
            .await
            .expect("expected client creation to succeed"),
    }
}

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        name: Some("Test User".to_string()),
        password_hash: "$argon2id$not-a-real-hash".to_string(),
    }
}

#[tokio::test]
async fn test_create_note() {
    let Tools { client } = tools().await;
    let id = Uuid::new_v4();
    let new_note = NewNote::new("HTML is easy".to_string(), true);
    let note = client
        .create_note(&id, &new_note)
        .await
        .expect("expected note creation to succeed");
    assert_eq!(note.id, id);
    assert_eq!(note.content, "HTML is easy");
    assert!(note.important);
    assert_eq!(note.date, new_note.date);
}

#[tokio::test]
async fn test_get_note_by_id() {
    let Tools { client } = tools().await;
    let id = Uuid::new_v4();
    let created = client
        .create_note(&id, &NewNote::new("HTML is easy".to_string(), false))
        .await
        .unwrap();

    let fetched = client.get_note_by_id(&id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_missing_note_is_not_found() {
    let Tools { client } = tools().await;
    let result = client.get_note_by_id(&Uuid::new_v4()).await;
    assert!(matches!(result, Err(DatabaseError::NotFound)));
}

#[tokio::test]
async fn test_get_notes_in_insertion_order() {
    let Tools { client } = tools().await;
    for content in ["first", "second", "third"] {
        client
            .create_note(&Uuid::new_v4(), &NewNote::new(content.to_string(), false))
            .await
            .unwrap();
    }

    let notes = client.get_notes().await.unwrap();
    let contents: Vec<_> = notes.iter().map(|n| n.content.as_str()).collect();
    assert_eq!(contents, ["first", "second", "third"]);
}

#[tokio::test]
async fn test_update_note_only_touches_given_fields() {
    let Tools { client } = tools().await;
    let id = Uuid::new_v4();
    let created = client
        .create_note(&id, &NewNote::new("original".to_string(), false))
        .await
        .unwrap();

    let updated = client
        .update_note(&id, &NoteUpdate::new().with_important(true))
        .await
        .unwrap();
    assert_eq!(updated.content, "original");
    assert!(updated.important);
    assert_eq!(updated.date, created.date);

    let updated = client
        .update_note(&id, &NoteUpdate::new().with_content("changed"))
        .await
        .unwrap();
    assert_eq!(updated.content, "changed");
    assert!(updated.important);
}

#[tokio::test]
async fn test_update_missing_note_is_not_found() {
    let Tools { client } = tools().await;
    let result = client
        .update_note(&Uuid::new_v4(), &NoteUpdate::new().with_content("x"))
        .await;
    assert!(matches!(result, Err(DatabaseError::NotFound)));
}

#[tokio::test]
async fn test_empty_update_is_rejected() {
    let Tools { client } = tools().await;
    let id = Uuid::new_v4();
    client
        .create_note(&id, &NewNote::new("original".to_string(), false))
        .await
        .unwrap();
    let result = client.update_note(&id, &NoteUpdate::new()).await;
    assert!(matches!(result, Err(DatabaseError::EmptyUpdate)));
}

#[tokio::test]
async fn test_delete_note_is_idempotent() {
    let Tools { client } = tools().await;
    let id = Uuid::new_v4();
    client
        .create_note(&id, &NewNote::new("doomed".to_string(), false))
        .await
        .unwrap();

    client.delete_note_by_id(&id).await.unwrap();
    client.delete_note_by_id(&id).await.unwrap();
    assert!(client.get_notes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_user() {
    let Tools { client } = tools().await;
    let id = Uuid::new_v4();
    let user = client
        .create_user(&id, &new_user("mluukkai"))
        .await
        .expect("expected user creation to succeed");
    assert_eq!(user.id, id);
    assert_eq!(user.username, "mluukkai");
    assert_eq!(user.name.as_deref(), Some("Test User"));
    assert!(user.notes.is_empty());
}

#[tokio::test]
async fn test_create_user_without_name() {
    let Tools { client } = tools().await;
    let user = client
        .create_user(
            &Uuid::new_v4(),
            &NewUser {
                name: None,
                ..new_user("root")
            },
        )
        .await
        .unwrap();
    assert_eq!(user.name, None);
}

#[tokio::test]
async fn test_duplicate_username_is_uniqueness_violation() {
    let Tools { client } = tools().await;
    client
        .create_user(&Uuid::new_v4(), &new_user("root"))
        .await
        .unwrap();
    let result = client.create_user(&Uuid::new_v4(), &new_user("root")).await;
    assert!(matches!(
        result,
        Err(DatabaseError::UniquenessViolation { .. })
    ));
    assert_eq!(client.get_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_note_summaries_follow_user_links() {
    let Tools { client } = tools().await;
    let user_id = Uuid::new_v4();
    client
        .create_user(&user_id, &new_user("root"))
        .await
        .unwrap();

    for content in ["linked one", "linked two"] {
        client
            .create_note(
                &Uuid::new_v4(),
                &NewNote::new(content.to_string(), true).with_user_id(user_id),
            )
            .await
            .unwrap();
    }
    client
        .create_note(&Uuid::new_v4(), &NewNote::new("unlinked".to_string(), false))
        .await
        .unwrap();

    let mut user = client.get_user_by_id(&user_id).await.unwrap();
    user.fetch_notes(&client).await.unwrap();
    let contents: Vec<_> = user.notes.iter().map(|n| n.content.as_str()).collect();
    assert_eq!(contents, ["linked one", "linked two"]);
}

#[tokio::test]
async fn test_deleted_note_drops_out_of_user_notes() {
    let Tools { client } = tools().await;
    let user_id = Uuid::new_v4();
    client
        .create_user(&user_id, &new_user("root"))
        .await
        .unwrap();
    let note_id = Uuid::new_v4();
    client
        .create_note(
            &note_id,
            &NewNote::new("short lived".to_string(), false).with_user_id(user_id),
        )
        .await
        .unwrap();

    client.delete_note_by_id(&note_id).await.unwrap();

    let summaries = client
        .get_note_summaries_by_user_id(&user_id)
        .await
        .unwrap();
    assert!(summaries.is_empty());
}

#[tokio::test]
async fn test_note_for_unknown_user_is_not_stored() {
    let Tools { client } = tools().await;
    let result = client
        .create_note(
            &Uuid::new_v4(),
            &NewNote::new("orphan".to_string(), false).with_user_id(Uuid::new_v4()),
        )
        .await;
    assert!(matches!(result, Err(DatabaseError::ForeignKeyViolation)));
    assert!(client.get_notes().await.unwrap().is_empty());
}
