use crate::models::{DraftTask, Session, Task};

/// Everything the render pass reads. Mutated only on the event loop thread,
/// one event at a time, so every keystroke and server response flows through
/// a single explicit state transition.
pub struct AppState {
    pub tasks: Vec<Task>,
    pub draft: DraftTask,
    pub session: Option<Session>,
    pub show_form_modal: bool,
    /// True until the first list response arrives, failed or not.
    pub waiting_first_load: bool,
}

impl AppState {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            tasks: vec![],
            draft: DraftTask::default(),
            session,
            show_form_modal: false,
            waiting_first_load: true,
        }
    }

    pub fn logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// Replace the whole list. A failed load lands here as an empty vector,
    /// clearing whatever was on screen.
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.waiting_first_load = false;
    }
}
