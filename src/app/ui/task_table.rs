#[cfg(test)]
#[path = "task_table_test.rs"]
mod tests;

use std::cmp::{max, min};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Cell, Padding, Paragraph, Row, Table, TableState},
};
use ratatui_macros::span;

use crate::models::Task;

/// The task list panel. Renders one of two branches: a log-in notice when no
/// session exists, or the table of tasks with its key hints.
#[derive(Default)]
pub struct TaskTable {
    state: TableState,
}

impl TaskTable {
    pub fn scroll_down(&mut self, len: usize) {
        let i = match self.state.selected() {
            Some(i) => max(min(len as i32 - 1, i as i32 + 1), 0),
            None => 0,
        } as usize;
        self.state.select(Some(i));
    }

    pub fn scroll_up(&mut self) {
        let i = match self.state.selected() {
            Some(i) => max(0, (i as i32) - 1),
            None => 0,
        } as usize;
        self.state.select(Some(i));
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, tasks: &[Task], logged_in: bool) {
        if !logged_in {
            render_logged_out(f, area);
            return;
        }

        let instructions = vec![
            span!(" "),
            span!("a").green().bold(),
            span!(" add, ").white(),
            span!("d").green().bold(),
            span!(" delete by id, ").white(),
            span!("r").green().bold(),
            span!(" reload ").white(),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::LightBlue))
            .padding(Padding::symmetric(1, 0))
            .title(Line::from(" TODO list ").bold())
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(instructions));

        let header = Row::new(vec!["Title", "Due Date", "Details"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .height(1);

        let selected_row_style = Style::default()
            .add_modifier(Modifier::REVERSED)
            .add_modifier(Modifier::BOLD);

        let table = Table::new(
            build_rows(tasks),
            [
                Constraint::Fill(2),
                Constraint::Length(21),
                Constraint::Fill(3),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(selected_row_style);

        f.render_stateful_widget(table, area, &mut self.state);
    }
}

fn render_logged_out(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Yellow))
        .padding(Padding::symmetric(1, 0))
        .title(Line::from(" Warning: Please log in ").bold())
        .title_alignment(Alignment::Center);

    f.render_widget(
        Paragraph::new("Log in to use this widget.").block(block),
        area,
    );
}

fn build_rows<'a>(tasks: &'a [Task]) -> Vec<Row<'a>> {
    tasks
        .iter()
        .map(|task| {
            Row::new(vec![
                Cell::from(Line::from(vec![
                    span!("{}", task.summary.to_uppercase()).bold(),
                    span!(" (id: {})", task.id),
                ])),
                Cell::from(task.due_label.as_deref().unwrap_or("")),
                Cell::from(task.text.as_str()),
            ])
            .height(1)
        })
        .collect()
}
