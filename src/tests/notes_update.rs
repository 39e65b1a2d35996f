use axum::http::StatusCode;

use crate::tests::helper;

#[tokio::test]
async fn test_update_missing_note() {
    let mut app = helper::setup_test_app().await;

    let (status_code, _, error) =
        helper::maybe_update_note(&mut app, 37, "Water the plants", None).await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
    assert_eq!(Some("Note not found.".to_string()), error);

    // no note was created on the side
    let (status_code, notes) = helper::list_notes(&mut app).await;
    assert_eq!(StatusCode::OK, status_code);
    assert!(notes.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_note_requires_text() {
    let mut app = helper::setup_test_app().await;

    let (status_code, note, _) = helper::maybe_create_note(&mut app, "Water the plants", None).await;
    assert_eq!(StatusCode::CREATED, status_code);
    let note = note.unwrap();

    let (status_code, _, error) = helper::maybe_update_note(&mut app, note.id, "   ", None).await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert_eq!(Some("Note text is required.".to_string()), error);

    // the note is untouched
    let (status_code, notes) = helper::list_notes(&mut app).await;
    assert_eq!(StatusCode::OK, status_code);
    let notes = notes.unwrap();
    assert_eq!(1, notes.len());
    assert_eq!("Water the plants".to_string(), notes[0].text);
}

#[tokio::test]
async fn test_update_note_sets_deadline() {
    let mut app = helper::setup_test_app().await;

    let (status_code, note, _) = helper::maybe_create_note(&mut app, "Water the plants", None).await;
    assert_eq!(StatusCode::CREATED, status_code);
    let note = note.unwrap();
    assert_eq!(None, note.deadline);

    let (status_code, updated, _) = helper::maybe_update_note(
        &mut app,
        note.id,
        "Water the plants",
        Some("2025-06-01T10:00"),
    )
    .await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(
        Some("2025-06-01T10:00:00".to_string()),
        updated.unwrap().deadline
    );
}

#[tokio::test]
async fn test_update_note_clears_deadline() {
    let mut app = helper::setup_test_app().await;

    let (status_code, note, _) =
        helper::maybe_create_note(&mut app, "Water the plants", Some("2025-06-01T10:00")).await;
    assert_eq!(StatusCode::CREATED, status_code);
    let note = note.unwrap();
    assert!(note.deadline.is_some());

    // leaving out the deadline clears it
    let (status_code, updated, _) =
        helper::maybe_update_note(&mut app, note.id, "Water the plants", None).await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(None, updated.unwrap().deadline);
}

#[tokio::test]
async fn test_update_note_keeps_id_and_created_at() {
    let mut app = helper::setup_test_app().await;

    let (status_code, note, _) = helper::maybe_create_note(&mut app, "Water the plants", None).await;
    assert_eq!(StatusCode::CREATED, status_code);
    let note = note.unwrap();

    let (status_code, updated, _) =
        helper::maybe_update_note(&mut app, note.id, "Repot the plants", None).await;
    assert_eq!(StatusCode::OK, status_code);
    let updated = updated.unwrap();

    assert_eq!(note.id, updated.id);
    assert_eq!(note.created_at, updated.created_at);
    assert!(updated.updated_at >= note.updated_at);
}
