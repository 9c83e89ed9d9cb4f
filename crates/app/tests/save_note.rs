//! Integration tests for the save/edit note assembler.

mod common;

use notemaker_app::features::SaveNoteAssembler;
use notemaker_app::view_data::SaveNoteViewData;
use notemaker_core::notes::INVALID_NOTE_ID;
use notemaker_db::models::color::Color;
use notemaker_db::models::note::SaveNote;
use notemaker_db::Repository;
use notemaker_events::ScreenEventKind;

use common::{drain_events, CountingRepository};

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[tokio::test]
async fn new_note_gets_default_view_data_without_storage_access() {
    let repository = CountingRepository::new().await;
    let mut screen = SaveNoteAssembler::new(repository.clone());

    screen.fetch_view_data(INVALID_NOTE_ID);

    assert_eq!(screen.view_data(), Some(SaveNoteViewData::default()));
    assert_eq!(screen.note_id(), None);
    assert_eq!(screen.scope().pending(), 0);
    assert_eq!(repository.reads(), 0);
}

#[tokio::test]
async fn existing_note_is_loaded_with_its_color() {
    let repository = CountingRepository::new().await;
    let id = repository
        .inner()
        .insert_note(&SaveNote::new("Trip", "pack bags", 7))
        .await
        .unwrap();

    let mut screen = SaveNoteAssembler::new(repository.clone());
    screen.fetch_view_data(id);
    screen.scope().settled().await;

    assert_eq!(
        screen.view_data(),
        Some(SaveNoteViewData {
            title: "Trip".into(),
            content: "pack bags".into(),
            color: Color::new(7, "#26A69A"),
        })
    );
}

#[tokio::test]
async fn existing_note_with_dangling_color_uses_default() {
    let repository = CountingRepository::new().await;
    let id = repository
        .inner()
        .insert_note(&SaveNote::new("Old", "", 40))
        .await
        .unwrap();

    let mut screen = SaveNoteAssembler::new(repository.clone());
    screen.fetch_view_data(id);
    screen.scope().settled().await;

    let data = screen.view_data().expect("record published");
    assert_eq!(data.color, Color::default_color());
}

#[tokio::test]
async fn missing_note_leaves_view_data_stale_and_reports() {
    let repository = CountingRepository::new().await;
    let mut screen = SaveNoteAssembler::new(repository.clone());
    let mut events = screen.subscribe_events();

    screen.fetch_view_data(77);
    screen.scope().settled().await;

    assert_eq!(screen.view_data(), None);
    let events = drain_events(&mut events);
    assert_eq!(events.len(), 1);
    match &events[0].kind {
        ScreenEventKind::OperationFailed { operation, message } => {
            assert_eq!(*operation, "fetch_note");
            assert!(message.contains("not found"), "{message}");
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn fetch_colors_publishes_catalog() {
    let repository = CountingRepository::new().await;
    let screen = SaveNoteAssembler::new(repository.clone());

    screen.fetch_colors();
    screen.scope().settled().await;

    let colors = screen.colors().expect("catalog published");
    assert_eq!(colors.len(), 14);
    assert_eq!(colors[0], Color::new(1, "#FFFFFF"));
}

#[tokio::test]
async fn select_color_republishes_without_persisting() {
    let repository = CountingRepository::new().await;
    let mut screen = SaveNoteAssembler::new(repository.clone());
    screen.fetch_view_data(INVALID_NOTE_ID);

    screen.select_color("Draft", "body", Color::new(4, "#CE93D8"));

    let data = screen.view_data().expect("record published");
    assert_eq!(data.title, "Draft");
    assert_eq!(data.color.id, 4);
    assert_eq!(repository.inserts(), 0);
    assert_eq!(screen.scope().pending(), 0);
}

// ---------------------------------------------------------------------------
// Saving
// ---------------------------------------------------------------------------

#[tokio::test]
async fn save_new_note_uses_default_color_and_closes() {
    let repository = CountingRepository::new().await;
    let screen = SaveNoteAssembler::new(repository.clone());
    let mut events = screen.subscribe_events();

    screen.save("Title", "Body");
    screen.scope().settled().await;

    let notes = repository.inner().get_all_notes().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Title");
    assert_eq!(notes[0].content, "Body");
    assert_eq!(notes[0].color_id, 1);

    let events = drain_events(&mut events);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, ScreenEventKind::CloseScreen);
}

#[tokio::test]
async fn save_uses_selected_color() {
    let repository = CountingRepository::new().await;
    let mut screen = SaveNoteAssembler::new(repository.clone());
    screen.fetch_view_data(INVALID_NOTE_ID);
    screen.select_color("Pink", "", Color::new(3, "#F06292"));

    screen.save("Pink", "");
    screen.scope().settled().await;

    let notes = repository.inner().get_all_notes().await.unwrap();
    assert_eq!(notes[0].color_id, 3);
}

#[tokio::test]
async fn save_existing_note_replaces_it() {
    let repository = CountingRepository::new().await;
    let id = repository
        .inner()
        .insert_note(&SaveNote::new("v1", "", 2))
        .await
        .unwrap();

    let mut screen = SaveNoteAssembler::new(repository.clone());
    screen.fetch_view_data(id);
    screen.scope().settled().await;

    screen.save("v2", "edited");
    screen.scope().settled().await;

    let notes = repository.inner().get_all_notes().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, id);
    assert_eq!(notes[0].title, "v2");
    assert_eq!(notes[0].content, "edited");
    assert_eq!(notes[0].color_id, 2);
}

#[tokio::test]
async fn close_signal_is_visible_to_late_subscriber() {
    let repository = CountingRepository::new().await;
    let screen = SaveNoteAssembler::new(repository.clone());

    screen.save("Title", "Body");
    screen.scope().settled().await;

    assert_eq!(repository.inserts(), 1);
    let rx = screen.subscribe_close_screen();
    let event = rx.borrow().clone().expect("close signal retained");
    assert_eq!(event.kind, ScreenEventKind::CloseScreen);
    assert_eq!(
        screen.close_screen_event().map(|e| e.kind),
        Some(ScreenEventKind::CloseScreen)
    );
}

#[tokio::test]
async fn save_before_note_loads_writes_default_color() {
    let repository = CountingRepository::new().await;
    let id = repository
        .inner()
        .insert_note(&SaveNote::new("Teal", "", 7))
        .await
        .unwrap();

    let mut screen = SaveNoteAssembler::new(repository.clone());
    screen.fetch_view_data(id);
    screen.save("Teal", "rushed");
    screen.scope().settled().await;

    let note = repository.inner().find_note_by_id(id).await.unwrap();
    assert_eq!(note.content, "rushed");
    assert_eq!(note.color_id, 1);
}

#[tokio::test]
async fn empty_title_is_silently_ignored() {
    let repository = CountingRepository::new().await;
    let mut screen = SaveNoteAssembler::new(repository.clone());
    let mut events = screen.subscribe_events();
    screen.fetch_view_data(INVALID_NOTE_ID);

    screen.save("", "content without a title");
    screen.scope().settled().await;

    assert_eq!(repository.inserts(), 0);
    assert!(drain_events(&mut events).is_empty());
    assert!(screen.close_screen_event().is_none());
    assert!(repository.inner().get_all_notes().await.unwrap().is_empty());
}

#[tokio::test]
async fn save_failure_reports_instead_of_closing() {
    let repository = CountingRepository::new().await;
    let screen = SaveNoteAssembler::new(repository.clone());
    let mut events = screen.subscribe_events();
    repository.fail_all();

    screen.save("Doomed", "");
    screen.scope().settled().await;

    assert_eq!(repository.inserts(), 1);
    let events = drain_events(&mut events);
    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0].kind,
        ScreenEventKind::OperationFailed { operation: "save_note", .. }
    ));
    assert!(screen.close_screen_event().is_none());
}

// ---------------------------------------------------------------------------
// Deleting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_on_new_note_does_nothing() {
    let repository = CountingRepository::new().await;
    let mut screen = SaveNoteAssembler::new(repository.clone());
    let mut events = screen.subscribe_events();
    screen.fetch_view_data(INVALID_NOTE_ID);

    screen.delete();
    screen.scope().settled().await;

    assert_eq!(repository.deletes(), 0);
    assert!(drain_events(&mut events).is_empty());
    assert!(screen.close_screen_event().is_none());
}

#[tokio::test]
async fn delete_existing_note_removes_it_and_closes() {
    let repository = CountingRepository::new().await;
    let id = repository
        .inner()
        .insert_note(&SaveNote::new("Bye", "", 1))
        .await
        .unwrap();

    let mut screen = SaveNoteAssembler::new(repository.clone());
    let mut events = screen.subscribe_events();
    screen.fetch_view_data(id);
    screen.scope().settled().await;

    screen.delete();
    screen.scope().settled().await;

    assert_eq!(repository.deletes(), 1);
    assert!(screen.subscribe_close_screen().borrow().is_some());
    assert!(repository.inner().find_note_by_id(id).await.unwrap_err().is_not_found());
    let events = drain_events(&mut events);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, ScreenEventKind::CloseScreen);
}

#[tokio::test]
async fn disposed_screen_ignores_further_work() {
    let repository = CountingRepository::new().await;
    let screen = SaveNoteAssembler::new(repository.clone());
    screen.dispose();

    screen.save("After teardown", "");
    screen.scope().settled().await;

    assert_eq!(repository.inserts(), 0);
}
