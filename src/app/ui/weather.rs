#[cfg(test)]
#[path = "weather_test.rs"]
mod tests;

use std::cmp::{max, min};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Cell, Clear, Padding, Row, Table, TableState},
};
use ratatui_macros::span;

use crate::app::ui::{Loading, popup_area};
use crate::models::{
    HourlyWeather, WeatherSnapshot, day_label, weather_code_label, wind_direction_label,
};

/// The forecast panel plus its hour-by-hour popup. Holds the latest snapshot
/// and which day the popup is looking at.
#[derive(Default)]
pub struct WeatherPane {
    snapshot: Option<WeatherSnapshot>,
    show_hourly: bool,
    selected_day: usize,
    daily_state: TableState,
    hourly_state: TableState,
}

impl WeatherPane {
    pub fn set_snapshot(&mut self, snapshot: WeatherSnapshot) {
        self.selected_day = min(
            self.selected_day,
            snapshot.daily.days.len().saturating_sub(1),
        );
        self.snapshot = Some(snapshot);
    }

    pub fn showing_hourly(&self) -> bool {
        self.show_hourly
    }

    /// Open the hourly popup. No-op until a snapshot has arrived.
    pub fn open_hourly(&mut self) {
        if self.snapshot.is_some() {
            self.show_hourly = true;
        }
    }

    pub fn close_hourly(&mut self) {
        self.show_hourly = false;
    }

    pub fn next_day(&mut self) {
        let last = self
            .snapshot
            .as_ref()
            .map(|s| s.daily.days.len().saturating_sub(1))
            .unwrap_or(0);
        self.selected_day = min(self.selected_day + 1, last);
        self.hourly_state = TableState::default();
    }

    pub fn prev_day(&mut self) {
        self.selected_day = max(self.selected_day as i32 - 1, 0) as usize;
        self.hourly_state = TableState::default();
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(snapshot) = self.snapshot.clone() else {
            Loading::new("Fetching the forecast...").render(f, area);
            return;
        };

        self.render_daily(f, area, &snapshot);
        if self.show_hourly {
            self.render_hourly(f, popup_area(area, 80, 80), &snapshot);
        }
    }

    fn render_daily(&mut self, f: &mut Frame, area: Rect, snapshot: &WeatherSnapshot) {
        let daily = &snapshot.daily;

        let instructions = vec![
            span!(" "),
            span!("w").green().bold(),
            span!(" hourly detail ").white(),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::LightBlue))
            .padding(Padding::symmetric(1, 0))
            .title(Line::from(" Weather ").bold())
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(instructions));

        let header = Row::new(vec![
            "Day", "Sky", "Temp", "Min", "Max", "Rain", "Humidity", "Wind",
        ])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .height(1);

        let rows = (0..daily.days.len()).map(|i| {
            Row::new(vec![
                Cell::from(day_label(&daily.days[i])),
                Cell::from(label_at(&daily.weather_code, i)),
                Cell::from(temp_at(&daily.temps, i)),
                Cell::from(temp_at(&daily.min_temp, i)),
                Cell::from(temp_at(&daily.max_temp, i)),
                Cell::from(percent_at(&daily.precipitation_probability, i)),
                Cell::from(percent_at(&daily.humidity, i)),
                Cell::from(wind_at(&daily.wind_speed, &daily.wind_direction, i)),
            ])
            .height(1)
        });

        self.daily_state.select(Some(self.selected_day));
        let table = Table::new(
            rows,
            [
                Constraint::Length(9),
                Constraint::Fill(2),
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Length(5),
                Constraint::Length(8),
                Constraint::Fill(2),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        f.render_stateful_widget(table, area, &mut self.daily_state);
    }

    fn render_hourly(&mut self, f: &mut Frame, area: Rect, snapshot: &WeatherSnapshot) {
        f.render_widget(Clear, area);

        let daily = &snapshot.daily;
        let hourly = &snapshot.hourly;
        let day = daily
            .days
            .get(self.selected_day)
            .map(String::as_str)
            .unwrap_or("");

        let instructions = vec![
            span!(" "),
            span!("j").green().bold(),
            span!("/").white(),
            span!("k").green().bold(),
            span!(" day, ").white(),
            span!("Esc").green().bold(),
            span!(" close ").white(),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::LightMagenta))
            .padding(Padding::symmetric(1, 0))
            .title(Line::from(format!(" Hour by hour, {} ", day_label(day))).bold())
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(instructions));

        let header = Row::new(vec!["Time", "Sky", "Temp", "Humidity", "Rain", "Wind"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .height(1);

        let rows = hours_of_day(hourly, day).into_iter().map(|i| {
            Row::new(vec![
                Cell::from(hour_label(&hourly.time[i])),
                Cell::from(label_at(&hourly.weather_code, i)),
                Cell::from(temp_at(&hourly.temp, i)),
                Cell::from(percent_at(&hourly.humidity, i)),
                Cell::from(percent_at(&hourly.rain_prob, i)),
                Cell::from(wind_at(&hourly.wind_speed, &hourly.wind_dir, i)),
            ])
            .height(1)
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(5),
                Constraint::Fill(2),
                Constraint::Length(7),
                Constraint::Length(8),
                Constraint::Length(5),
                Constraint::Fill(2),
            ],
        )
        .header(header)
        .block(block);

        f.render_stateful_widget(table, area, &mut self.hourly_state);
    }
}

/// Indexes into the hourly series that fall on the given ISO date.
fn hours_of_day(hourly: &HourlyWeather, day: &str) -> Vec<usize> {
    let prefix = day.get(..10).unwrap_or("");
    if prefix.is_empty() {
        return vec![];
    }
    (0..hourly.time.len())
        .filter(|&i| hourly.time[i].starts_with(prefix))
        .collect()
}

/// "2025-01-21T13:00" -> "13:00".
fn hour_label(iso_time: &str) -> String {
    iso_time.get(11..16).unwrap_or(iso_time).to_string()
}

fn label_at(codes: &[u16], i: usize) -> &'static str {
    codes.get(i).map(|&c| weather_code_label(c)).unwrap_or("")
}

fn temp_at(temps: &[f64], i: usize) -> String {
    temps.get(i).map(|t| format!("{t:.1}°C")).unwrap_or_default()
}

fn percent_at(values: &[f64], i: usize) -> String {
    values.get(i).map(|v| format!("{v:.0}%")).unwrap_or_default()
}

fn wind_at(speeds: &[f64], directions: &[f64], i: usize) -> String {
    let speed = speeds.get(i).copied().unwrap_or_default();
    let direction = directions
        .get(i)
        .map(|&d| wind_direction_label(d))
        .unwrap_or("Unknown");
    format!("{speed:.0} km/h {direction}")
}
