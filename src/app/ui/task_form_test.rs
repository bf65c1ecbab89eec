use tui_textarea::{Input, Key};

use super::*;

fn char_event(c: char) -> Event {
    Event::KeyboardCharInput(Input {
        key: Key::Char(c),
        ctrl: false,
        alt: false,
        shift: false,
    })
}

#[test]
fn test_default_draft() {
    let form = TaskForm::default();
    assert_eq!(form.draft(), DraftTask::default());
}

#[test]
fn test_typing_flows_into_draft() {
    let mut form = TaskForm::default();
    for c in "Buy milk".chars() {
        form.handle_key_event(&char_event(c));
    }
    form.handle_key_event(&Event::KeyboardTab);
    for c in "2%".chars() {
        form.handle_key_event(&char_event(c));
    }

    let draft = form.draft();
    assert_eq!(draft.title, "Buy milk");
    assert_eq!(draft.text, "2%");
    assert_eq!(draft.due_date, "2025-01-01");
    assert_eq!(draft.due_time, "12:00");
}

#[test]
fn test_focus_cycles() {
    let mut form = TaskForm::default();
    form.handle_key_event(&Event::KeyboardBackTab);
    // wrapped around to the last field
    for c in "09".chars() {
        form.handle_key_event(&char_event(c));
    }
    assert_eq!(form.draft().due_time, "12:0009");

    form.handle_key_event(&Event::KeyboardTab);
    for c in "!".chars() {
        form.handle_key_event(&char_event(c));
    }
    assert_eq!(form.draft().title, "!");
}

#[test]
fn test_priority_parse_and_clamp() {
    let mut form = TaskForm::default();
    form.handle_key_event(&Event::KeyboardTab);
    form.handle_key_event(&Event::KeyboardTab);
    form.handle_key_event(&char_event('9'));
    // "09" clamps to the top of the scale
    assert_eq!(form.draft().priority, 5);

    form.handle_key_event(&char_event('x'));
    // "09x" does not parse, falls back to 0
    assert_eq!(form.draft().priority, 0);
}

#[test]
fn test_reopen_restores_draft() {
    let mut form = TaskForm::default();
    let draft = DraftTask {
        title: "Read notes".to_string(),
        text: "chapter 3".to_string(),
        priority: 2,
        due_date: "2025-03-10".to_string(),
        due_time: "09:30".to_string(),
    };
    form.open(&draft);
    assert_eq!(form.draft(), draft);
}
