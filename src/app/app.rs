#[cfg(test)]
#[path = "app_test.rs"]
mod tests;

use std::io;

use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use eyre::Result;
use ratatui::crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::{Backend, CrosstermBackend},
    widgets::Paragraph,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tui_textarea::Key;

use crate::config::constants::NOTICE_DURATION;
use crate::models::{Action, DraftTask, Event, Session};
use crate::{
    app::app_state::AppState,
    app::ui::{InputBox, Loading, Notice, TaskForm, TaskTable, WeatherPane, input_box, utils},
};

use super::services::EventService;

const MIN_WIDTH: u16 = 80;
const WEATHER_HEIGHT: u16 = 11;
const LOG_IN_FIRST: &str = "Please log in first";

pub struct App<'a> {
    action_tx: mpsc::UnboundedSender<Action>,
    event_tx: mpsc::UnboundedSender<Event>,

    events: &'a mut EventService,

    app_state: AppState,
    task_table: TaskTable,
    task_form: TaskForm<'a>,
    delete_box: InputBox<'a>,
    weather: WeatherPane,

    notice: Notice,
    loading: Loading<'a>,

    cancel_token: CancellationToken,
}

impl<'a> App<'a> {
    pub fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        events: &'a mut EventService,
        session: Option<Session>,
        cancel_token: CancellationToken,
    ) -> App<'a> {
        let event_tx = events.event_tx();
        App {
            action_tx,
            event_tx,
            events,
            app_state: AppState::new(session),
            task_table: TaskTable::default(),
            task_form: TaskForm::default(),
            delete_box: InputBox::default()
                .with_title(" Delete a task ")
                .with_placeholder("Task id..."),
            weather: WeatherPane::default(),
            notice: Notice::new(NOTICE_DURATION),
            loading: Loading::new("Loading your tasks..."),
            cancel_token,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();

        enable_raw_mode()?;
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;

        let term_backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(term_backend)?;
        let result = self.start_loop(&mut terminal).await;

        self.cancel_token.cancel();

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        )?;

        terminal.show_cursor()?;
        result
    }

    async fn start_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.render(terminal)?;
            if self.handle_key_event().await {
                return Ok(());
            }
        }
    }

    async fn handle_key_event(&mut self) -> bool {
        let event = self.events.next().await;

        if let Some(stop) = self.handle_global_event(&event) {
            return stop;
        }

        if self.app_state.show_form_modal {
            self.handle_form_event(&event);
            return false;
        }

        if self.delete_box.showing() {
            self.handle_delete_event(&event);
            return false;
        }

        if self.weather.showing_hourly() {
            self.handle_hourly_event(&event);
            return false;
        }

        self.handle_main_event(&event);
        false
    }

    /// Events every screen reacts to the same way, mostly the sync engine
    /// reporting back.
    fn handle_global_event(&mut self, event: &Event) -> Option<bool> {
        match event {
            Event::Quit => Some(true),

            Event::Notice(msg) => {
                self.notice.add_message(msg.clone());
                Some(false)
            }

            Event::TasksLoaded(tasks) => {
                self.app_state.replace_tasks(tasks.clone());
                Some(false)
            }

            Event::TaskCreated => {
                // The draft served its purpose, the next form opens clean.
                self.app_state.draft = DraftTask::default();
                self.notice.info("Task created");
                Some(false)
            }

            Event::TaskDeleted(id) => {
                self.notice.info(format!("Task {id} deleted"));
                Some(false)
            }

            Event::WeatherLoaded(snapshot) => {
                self.weather.set_snapshot(*snapshot.clone());
                Some(false)
            }

            _ => None,
        }
    }

    fn handle_form_event(&mut self, event: &Event) {
        match event {
            Event::KeyboardEsc | Event::KeyboardCtrlC => {
                // Cancel keeps the draft for the next open.
                self.app_state.draft = self.task_form.draft();
                self.app_state.show_form_modal = false;
            }

            Event::KeyboardEnter => {
                let draft = self.task_form.draft();
                if draft.title.trim().is_empty() {
                    self.notice.warning("A task needs a title");
                    return;
                }

                self.app_state.draft = draft.clone();
                self.app_state.show_form_modal = false;
                let _ = self.action_tx.send(Action::CreateTask(draft));
            }

            _ => self.task_form.handle_key_event(event),
        }
    }

    fn handle_delete_event(&mut self, event: &Event) {
        match event {
            Event::KeyboardEsc | Event::KeyboardCtrlC => {
                self.delete_box.close();
            }

            Event::KeyboardEnter => {
                let id = match self.delete_box.value().trim().parse::<i64>() {
                    Ok(id) => id,
                    Err(_) => {
                        self.notice.warning("Enter a valid ID");
                        return;
                    }
                };

                self.delete_box.close();
                if !self.app_state.logged_in() {
                    self.notice.warning(LOG_IN_FIRST);
                    return;
                }
                let _ = self.action_tx.send(Action::DeleteTask(id));
            }

            _ => self.delete_box.handle_key_event(event),
        }
    }

    fn handle_hourly_event(&mut self, event: &Event) {
        match event {
            Event::KeyboardEsc | Event::KeyboardCtrlC => self.weather.close_hourly(),
            Event::KeyboardCharInput(input) => match input.key {
                Key::Char('w') | Key::Char('q') => self.weather.close_hourly(),
                Key::Char('j') => self.weather.next_day(),
                Key::Char('k') => self.weather.prev_day(),
                _ => {}
            },
            Event::UiScrollDown => self.weather.next_day(),
            Event::UiScrollUp => self.weather.prev_day(),
            _ => {}
        }
    }

    fn handle_main_event(&mut self, event: &Event) {
        match event {
            Event::KeyboardCtrlC => {
                let _ = self.event_tx.send(Event::Quit);
            }

            Event::KeyboardCharInput(input) => match input.key {
                Key::Char('q') => {
                    let _ = self.event_tx.send(Event::Quit);
                }
                Key::Char('a') => self.open_form(),
                Key::Char('d') => self.open_delete_box(),
                Key::Char('r') => {
                    let _ = self.action_tx.send(Action::LoadTasks);
                }
                Key::Char('w') => self.weather.open_hourly(),
                _ => {}
            },

            Event::UiScrollDown => self.task_table.scroll_down(self.app_state.tasks.len()),
            Event::UiScrollUp => self.task_table.scroll_up(),

            _ => {}
        }
    }

    fn open_form(&mut self) {
        if !self.app_state.logged_in() {
            self.notice.warning(LOG_IN_FIRST);
            return;
        }
        self.task_form.open(&self.app_state.draft);
        self.app_state.show_form_modal = true;
    }

    fn open_delete_box(&mut self) {
        if !self.app_state.logged_in() {
            self.notice.warning(LOG_IN_FIRST);
            return;
        }
        self.delete_box.open("");
    }

    fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|f| {
            let current_width = f.area().width;
            if current_width < MIN_WIDTH {
                f.render_widget(
                    Paragraph::new(utils::split_to_lines(
                        format!(
                            "I'm too small, make me bigger! I need at least {} cells (current: {})",
                            MIN_WIDTH, current_width
                        ),
                        (current_width.max(3) - 2) as usize,
                    ))
                    .alignment(Alignment::Left),
                    f.area(),
                );
                return;
            }

            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Fill(1),
                    Constraint::Length(WEATHER_HEIGHT),
                ])
                .split(f.area());

            if self.app_state.logged_in() && self.app_state.waiting_first_load {
                self.loading.render(f, layout[0]);
            } else {
                self.task_table.render(
                    f,
                    layout[0],
                    &self.app_state.tasks,
                    self.app_state.logged_in(),
                );
            }

            self.weather.render(f, layout[1]);

            if self.app_state.show_form_modal {
                self.task_form.render(f, f.area());
            }

            self.delete_box
                .render(f, input_box::build_area(f.area(), 30));

            self.notice.render(f, utils::notice_area(f.area(), 30));
        })?;
        Ok(())
    }
}
