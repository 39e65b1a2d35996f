use axum::http::StatusCode;

use crate::tests::helper;

#[tokio::test]
async fn test_delete_missing_note() {
    let mut app = helper::setup_test_app().await;

    let (status_code, _, error) = helper::maybe_delete_note(&mut app, 37).await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
    assert_eq!(Some("Note not found.".to_string()), error);
}

#[tokio::test]
async fn test_delete_note_only_once() {
    let mut app = helper::setup_test_app().await;

    let (status_code, note, _) = helper::maybe_create_note(&mut app, "Feed the cat", None).await;
    assert_eq!(StatusCode::CREATED, status_code);
    let note = note.unwrap();

    let (status_code, ok, _) = helper::maybe_delete_note(&mut app, note.id).await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(Some(true), ok);

    // a second delete finds nothing
    let (status_code, _, error) = helper::maybe_delete_note(&mut app, note.id).await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
    assert_eq!(Some("Note not found.".to_string()), error);
}

#[tokio::test]
async fn test_delete_note_leaves_others() {
    let mut app = helper::setup_test_app().await;

    let (_, kept, _) = helper::maybe_create_note(&mut app, "Feed the cat", None).await;
    let kept = kept.unwrap();

    let (_, deleted, _) = helper::maybe_create_note(&mut app, "Feed the dog", None).await;
    let deleted = deleted.unwrap();

    let (status_code, ok, _) = helper::maybe_delete_note(&mut app, deleted.id).await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(Some(true), ok);

    let (status_code, notes) = helper::list_notes(&mut app).await;
    assert_eq!(StatusCode::OK, status_code);
    let notes = notes.unwrap();
    assert_eq!(1, notes.len());
    assert_eq!(kept.id, notes[0].id);
}
