//! Tests for App event handling

use std::time::{Duration, Instant};

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::test_utils::test_helpers::{
    app_with_channels, app_with_suggestions, key, key_with_mods, results, test_app,
};

fn press(code: KeyCode) -> Event {
    Event::Key(key(code))
}

#[test]
fn test_ctrl_c_quits_without_output() {
    let mut app = app_with_suggestions("Par", &["Paris"]);
    app.handle_event(
        Event::Key(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Instant::now(),
    );

    assert!(app.should_quit());
    assert!(app.output().is_none());
}

#[test]
fn test_esc_closes_open_dropdown_first() {
    let mut app = app_with_suggestions("Par", &["Paris", "Parma"]);
    app.handle_event(press(KeyCode::Esc), Instant::now());

    assert!(!app.widget.is_open());
    assert!(!app.should_quit());
    assert_eq!(app.widget.query(), "Par");

    app.handle_event(press(KeyCode::Esc), Instant::now());
    assert!(app.should_quit());
    assert!(app.output().is_none());
}

#[test]
fn test_typing_updates_input() {
    let mut app = test_app();
    let now = Instant::now();
    for c in "Ber".chars() {
        app.handle_event(press(KeyCode::Char(c)), now);
    }

    assert_eq!(app.widget.query(), "Ber");
    assert!(app.widget.next_deadline().is_some());
}

#[test]
fn test_key_release_is_ignored() {
    let mut app = test_app();
    let mut release = key(KeyCode::Char('x'));
    release.kind = KeyEventKind::Release;
    app.handle_event(Event::Key(release), Instant::now());

    assert_eq!(app.widget.query(), "");
}

#[test]
fn test_arrows_navigate_open_dropdown() {
    let mut app = app_with_suggestions("Par", &["Paris", "Parma"]);
    let now = Instant::now();

    app.handle_event(press(KeyCode::Down), now);
    app.handle_event(press(KeyCode::Down), now);
    assert_eq!(app.widget.suggestions.focus(), Some(1));

    app.handle_event(press(KeyCode::Up), now);
    assert_eq!(app.widget.suggestions.focus(), Some(0));
}

#[test]
fn test_enter_commits_focused_suggestion_without_quitting() {
    let mut app = app_with_suggestions("Par", &["Paris", "Parma"]);
    let now = Instant::now();

    app.handle_event(press(KeyCode::Down), now);
    app.handle_event(press(KeyCode::Down), now);
    app.handle_event(press(KeyCode::Enter), now);

    assert_eq!(app.widget.query(), "Parma");
    assert!(!app.widget.is_open());
    assert!(!app.should_quit());
}

#[test]
fn test_enter_without_focus_keeps_dropdown_open() {
    let mut app = app_with_suggestions("Par", &["Paris"]);
    app.handle_event(press(KeyCode::Enter), Instant::now());

    assert!(app.widget.is_open());
    assert_eq!(app.widget.query(), "Par");
    assert!(!app.should_quit());
}

#[test]
fn test_enter_with_dropdown_closed_accepts_text() {
    let mut app = test_app();
    app.widget.input.set_text("  Lyon ");
    app.handle_event(press(KeyCode::Enter), Instant::now());

    assert!(app.should_quit());
    assert_eq!(app.output(), Some("Lyon"));
}

#[test]
fn test_enter_with_empty_input_quits_without_output() {
    let mut app = test_app();
    app.handle_event(press(KeyCode::Enter), Instant::now());

    assert!(app.should_quit());
    assert!(app.output().is_none());
}

#[test]
fn test_full_flow_type_search_select_accept() {
    let (mut app, mut request_rx, response_tx) = app_with_channels();
    let now = Instant::now();

    for c in "Par".chars() {
        app.handle_event(press(KeyCode::Char(c)), now);
    }
    app.tick(now + Duration::from_millis(10));
    let request = request_rx.try_recv().unwrap();
    assert_eq!(request.query, "Par");

    response_tx.send(results(&request, &["Paris", "Parma"])).unwrap();
    app.tick(now + Duration::from_millis(20));
    assert!(app.widget.is_open());

    app.handle_event(press(KeyCode::Down), now);
    app.handle_event(press(KeyCode::Enter), now);
    assert_eq!(app.widget.query(), "Paris");
    assert_eq!(app.widget.selection().map(|c| c.name.as_str()), Some("Paris"));

    // Committing does not trigger another search
    app.tick(now + Duration::from_secs(1));
    assert!(request_rx.try_recv().is_err());

    app.handle_event(press(KeyCode::Enter), now);
    assert!(app.should_quit());
    assert_eq!(app.output(), Some("Paris"));
}

#[test]
fn test_left_click_routes_to_mouse_handler() {
    let mut app = app_with_suggestions("Par", &["Paris"]);
    app.handle_event(
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 50,
            row: 50,
            modifiers: KeyModifiers::NONE,
        }),
        Instant::now(),
    );

    assert!(!app.widget.is_open());
}

#[test]
fn test_mouse_move_is_ignored() {
    let mut app = app_with_suggestions("Par", &["Paris"]);
    app.handle_event(
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 50,
            row: 50,
            modifiers: KeyModifiers::NONE,
        }),
        Instant::now(),
    );

    assert!(app.widget.is_open());
}

#[test]
fn test_tab_does_not_schedule_search() {
    let mut app = test_app();
    app.widget.input.set_text("Par");
    app.handle_event(press(KeyCode::Tab), Instant::now());

    assert_eq!(app.widget.query(), "Par");
    assert!(app.widget.next_deadline().is_none());
}
