#[cfg(test)]
#[path = "task_form_test.rs"]
mod tests;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Padding, Widget},
};
use tui_textarea::{CursorMove, TextArea};

use crate::models::{DraftTask, Event};

const FIELD_COUNT: usize = 5;
const FIELD_TITLES: [&str; FIELD_COUNT] = [
    " Title ",
    " Description ",
    " Priority (0-5) ",
    " Due Date (YYYY-MM-DD) ",
    " Due Time (HH:MM) ",
];

const MAX_PRIORITY: u8 = 5;

/// The add-task popup. Five single-line fields with Tab/Shift+Tab focus
/// cycling. The form never talks to the server itself; the caller reads the
/// composed [`DraftTask`] back out on submit.
pub struct TaskForm<'a> {
    inputs: [TextArea<'a>; FIELD_COUNT],
    focus: usize,
}

impl TaskForm<'_> {
    /// Rebuild every field from the given draft and reset focus to the
    /// first one. Called each time the popup opens so an earlier cancel
    /// leaves its values behind.
    pub fn open(&mut self, draft: &DraftTask) {
        let values = [
            draft.title.clone(),
            draft.text.clone(),
            draft.priority.to_string(),
            draft.due_date.clone(),
            draft.due_time.clone(),
        ];
        self.inputs = values.map(|value| {
            let mut input = TextArea::new(vec![value]);
            input.move_cursor(CursorMove::End);
            input
        });
        self.focus = 0;
    }

    pub fn handle_key_event(&mut self, event: &Event) {
        match event {
            Event::KeyboardCharInput(input) => {
                self.inputs[self.focus].input(input.clone());
            }
            Event::KeyboardTab => self.focus = (self.focus + 1) % FIELD_COUNT,
            Event::KeyboardBackTab => self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT,
            _ => {}
        }
    }

    /// Current field values as a draft. An unparseable priority falls back
    /// to 0; values above the scale are clamped.
    pub fn draft(&self) -> DraftTask {
        let priority = field_value(&self.inputs[2])
            .parse::<u8>()
            .unwrap_or(0)
            .min(MAX_PRIORITY);
        DraftTask {
            title: field_value(&self.inputs[0]),
            text: field_value(&self.inputs[1]),
            priority,
            due_date: field_value(&self.inputs[3]),
            due_time: field_value(&self.inputs[4]),
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let area = build_area(area);
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::LightMagenta))
            .title(Line::from(" Create a new task ").bold())
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(" Enter create, Esc cancel, Tab next field "));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::vertical([Constraint::Length(3); FIELD_COUNT]).split(inner);
        for (i, input) in self.inputs.iter_mut().enumerate() {
            let border_color = if i == self.focus {
                Color::LightMagenta
            } else {
                Color::DarkGray
            };
            input.set_block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border_color))
                    .padding(Padding::symmetric(1, 0))
                    .title(FIELD_TITLES[i]),
            );
            input.set_cursor_style(if i == self.focus {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            });
            input.render(rows[i], f.buffer_mut());
        }
    }
}

impl Default for TaskForm<'_> {
    fn default() -> Self {
        let mut form = Self {
            inputs: std::array::from_fn(|_| TextArea::default()),
            focus: 0,
        };
        form.open(&DraftTask::default());
        form
    }
}

fn field_value(input: &TextArea) -> String {
    input.lines().join("")
}

fn build_area(area: Rect) -> Rect {
    let width = area.width.min(60);
    let height = (FIELD_COUNT as u16 * 3 + 2).min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
