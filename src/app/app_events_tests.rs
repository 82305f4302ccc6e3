//! Tests for keyboard and terminal event handling

use ratatui::crossterm::event::KeyEventState;

use super::*;
use crate::test_utils::test_helpers::{
    APP_WORDS, DEBOUNCE, FakeSource, key, key_with_mods, settle_app, test_app, type_text,
};

fn app_with_results(source: &FakeSource) -> App<FakeSource> {
    source.respond("app", &APP_WORDS);
    test_app(source)
}

#[test]
fn test_nav_key_mapping() {
    assert_eq!(nav_key(&key(KeyCode::Down)), Some(NavKey::ArrowDown));
    assert_eq!(nav_key(&key(KeyCode::Up)), Some(NavKey::ArrowUp));
    assert_eq!(nav_key(&key(KeyCode::Enter)), Some(NavKey::Enter));
    assert_eq!(nav_key(&key(KeyCode::Esc)), Some(NavKey::Escape));
    assert_eq!(nav_key(&key(KeyCode::Char('a'))), None);
    assert_eq!(nav_key(&key(KeyCode::Tab)), None);
}

#[tokio::test(start_paused = true)]
async fn test_typing_updates_controller_query() {
    let source = FakeSource::new();
    let mut app = test_app(&source);

    type_text(&mut app, "app");

    assert_eq!(app.query(), "app");
    assert_eq!(app.suggest.query(), "app");
    assert!(app.suggest.is_loading());
}

#[tokio::test(start_paused = true)]
async fn test_backspace_updates_controller_query() {
    let source = FakeSource::new();
    let mut app = test_app(&source);
    type_text(&mut app, "app");

    app.handle_key_event(key(KeyCode::Backspace));

    assert_eq!(app.suggest.query(), "ap");
}

#[tokio::test(start_paused = true)]
async fn test_cursor_movement_does_not_requery() {
    let source = FakeSource::new();
    let mut app = test_app(&source);
    type_text(&mut app, "app");
    settle_app(&mut app, DEBOUNCE).await;
    let calls = source.call_count();

    app.handle_key_event(key(KeyCode::Left));
    app.handle_key_event(key(KeyCode::Home));
    settle_app(&mut app, DEBOUNCE).await;

    assert_eq!(source.call_count(), calls);
}

#[tokio::test(start_paused = true)]
async fn test_arrow_keys_then_enter_commit_suggestion() {
    let source = FakeSource::new();
    let mut app = app_with_results(&source);
    type_text(&mut app, "app");
    settle_app(&mut app, DEBOUNCE).await;

    for _ in 0..3 {
        app.handle_key_event(key(KeyCode::Down));
    }
    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.query(), "appetite");
    assert_eq!(app.suggest.query(), "appetite");
    assert_eq!(app.last_selected.as_deref(), Some("appetite"));
    assert!(!app.suggest.is_open());
    assert!(!app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn test_commit_does_not_trigger_new_fetch() {
    let source = FakeSource::new();
    let mut app = app_with_results(&source);
    type_text(&mut app, "app");
    settle_app(&mut app, DEBOUNCE).await;

    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Enter));
    settle_app(&mut app, DEBOUNCE * 2).await;

    assert_eq!(source.call_count(), 1);
    assert!(!app.suggest.is_open());
}

#[tokio::test(start_paused = true)]
async fn test_escape_closes_panel_then_quits() {
    let source = FakeSource::new();
    let mut app = app_with_results(&source);
    type_text(&mut app, "app");
    settle_app(&mut app, DEBOUNCE).await;

    app.handle_key_event(key(KeyCode::Esc));
    assert!(!app.suggest.is_open());
    assert!(!app.should_quit());
    assert_eq!(app.query(), "app");

    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn test_ctrl_c_quits() {
    let source = FakeSource::new();
    let mut app = test_app(&source);

    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));

    assert!(app.should_quit());
    assert_eq!(app.query(), "");
}

#[tokio::test(start_paused = true)]
async fn test_ctrl_u_clears_field_and_suggestions() {
    let source = FakeSource::new();
    let mut app = app_with_results(&source);
    type_text(&mut app, "app");
    settle_app(&mut app, DEBOUNCE).await;

    app.handle_key_event(key_with_mods(KeyCode::Char('u'), KeyModifiers::CONTROL));

    assert_eq!(app.query(), "");
    assert_eq!(app.suggest.query(), "");
    assert!(app.suggest.suggestions().is_empty());
    assert!(!app.suggest.is_open());
}

#[tokio::test(start_paused = true)]
async fn test_enter_never_breaks_line() {
    let source = FakeSource::new();
    let mut app = test_app(&source);
    type_text(&mut app, "app");

    app.handle_key_event(key(KeyCode::Enter));
    app.handle_key_event(key_with_mods(KeyCode::Char('m'), KeyModifiers::CONTROL));
    app.handle_key_event(key_with_mods(KeyCode::Char('j'), KeyModifiers::CONTROL));

    assert_eq!(app.textarea.lines().len(), 1);
    assert_eq!(app.query(), "app");
}

#[tokio::test(start_paused = true)]
async fn test_arrows_with_closed_panel_select_nothing() {
    let source = FakeSource::new();
    let mut app = test_app(&source);
    type_text(&mut app, "app");

    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Up));

    assert_eq!(app.suggest.selected_index(), None);
    assert_eq!(app.query(), "app");
}

#[tokio::test(start_paused = true)]
async fn test_handle_event_ignores_key_release() {
    let source = FakeSource::new();
    let mut app = test_app(&source);
    let release = KeyEvent {
        code: KeyCode::Char('a'),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Release,
        state: KeyEventState::empty(),
    };

    assert!(!app.handle_event(Event::Key(release)));
    assert_eq!(app.query(), "");

    assert!(app.handle_event(Event::Key(key(KeyCode::Char('a')))));
    assert_eq!(app.query(), "a");
}

#[tokio::test(start_paused = true)]
async fn test_handle_event_redraws_on_resize() {
    let source = FakeSource::new();
    let mut app = test_app(&source);

    assert!(app.handle_event(Event::Resize(80, 24)));
    assert!(!app.handle_event(Event::FocusGained));
}

#[tokio::test(start_paused = true)]
async fn test_mouse_move_is_ignored() {
    let source = FakeSource::new();
    let mut app = test_app(&source);
    let moved = MouseEvent {
        kind: MouseEventKind::Moved,
        column: 1,
        row: 1,
        modifiers: KeyModifiers::NONE,
    };

    assert!(!app.handle_event(Event::Mouse(moved)));
}
