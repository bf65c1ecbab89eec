use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio_util::sync::CancellationToken;
use tui_textarea::{Input, Key};

use super::*;

fn build_app<'a>(
    events: &'a mut EventService,
    session: Option<Session>,
) -> (App<'a>, UnboundedReceiver<Action>) {
    let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();
    let app = App::new(action_tx, events, session, CancellationToken::new());
    (app, action_rx)
}

fn char_event(c: char) -> Event {
    Event::KeyboardCharInput(Input {
        key: Key::Char(c),
        ctrl: false,
        alt: false,
        shift: false,
    })
}

#[test]
fn test_delete_rejects_non_numeric_id() {
    let mut events = EventService::default();
    let (mut app, mut action_rx) = build_app(&mut events, Some(Session::new("token")));

    app.open_delete_box();
    assert!(app.delete_box.showing());

    for c in "abc".chars() {
        app.handle_delete_event(&char_event(c));
    }
    app.handle_delete_event(&Event::KeyboardEnter);

    // The input stays open for a correction and nothing was requested
    assert!(app.delete_box.showing());
    assert!(action_rx.try_recv().is_err());
}

#[test]
fn test_delete_sends_action_for_valid_id() {
    let mut events = EventService::default();
    let (mut app, mut action_rx) = build_app(&mut events, Some(Session::new("token")));

    app.open_delete_box();
    for c in "42".chars() {
        app.handle_delete_event(&char_event(c));
    }
    app.handle_delete_event(&Event::KeyboardEnter);

    assert!(!app.delete_box.showing());
    assert!(matches!(action_rx.try_recv(), Ok(Action::DeleteTask(42))));
}

#[test]
fn test_delete_requires_session() {
    let mut events = EventService::default();
    let (mut app, mut action_rx) = build_app(&mut events, None);

    app.open_delete_box();
    assert!(!app.delete_box.showing());
    assert!(action_rx.try_recv().is_err());
}

#[test]
fn test_form_requires_session() {
    let mut events = EventService::default();
    let (mut app, _action_rx) = build_app(&mut events, None);

    app.open_form();
    assert!(!app.app_state.show_form_modal);
}

#[test]
fn test_form_submit_sends_create() {
    let mut events = EventService::default();
    let (mut app, mut action_rx) = build_app(&mut events, Some(Session::new("token")));

    app.open_form();
    assert!(app.app_state.show_form_modal);

    for c in "Buy milk".chars() {
        app.handle_form_event(&char_event(c));
    }
    app.handle_form_event(&Event::KeyboardEnter);

    assert!(!app.app_state.show_form_modal);
    match action_rx.try_recv() {
        Ok(Action::CreateTask(draft)) => assert_eq!(draft.title, "Buy milk"),
        _ => panic!("expected a create action"),
    }
}

#[test]
fn test_form_rejects_empty_title() {
    let mut events = EventService::default();
    let (mut app, mut action_rx) = build_app(&mut events, Some(Session::new("token")));

    app.open_form();
    app.handle_form_event(&Event::KeyboardEnter);

    assert!(app.app_state.show_form_modal);
    assert!(action_rx.try_recv().is_err());
}

#[test]
fn test_form_cancel_keeps_draft() {
    let mut events = EventService::default();
    let (mut app, _action_rx) = build_app(&mut events, Some(Session::new("token")));

    app.open_form();
    for c in "Gym".chars() {
        app.handle_form_event(&char_event(c));
    }
    app.handle_form_event(&Event::KeyboardEsc);

    assert!(!app.app_state.show_form_modal);
    assert_eq!(app.app_state.draft.title, "Gym");
}
