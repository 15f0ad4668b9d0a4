//! Screens of the question author.

mod confirm;
mod form;
mod raw;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::author::{AuthorApp, AuthorView, Notice};
use crate::storage::Storage;

pub fn render<S: Storage>(frame: &mut Frame, app: &AuthorApp<S>) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Main content
        Constraint::Length(1), // Notice
        Constraint::Length(1), // Controls
    ])
    .split(area);

    render_header(frame, chunks[0], app);
    match app.view {
        AuthorView::Form => form::render(frame, chunks[1], app),
        AuthorView::Raw => raw::render(frame, chunks[1], app),
        AuthorView::ConfirmClear => {
            form::render(frame, chunks[1], app);
            confirm::render(frame, chunks[1], &app.storage().location());
        }
    }
    render_notice(frame, chunks[2], app.notice());
    render_controls(frame, chunks[3], app.view);
}

fn render_header<S: Storage>(frame: &mut Frame, area: Rect, app: &AuthorApp<S>) {
    let header_text = format!(
        " File: {}  |  Questions saved: {}",
        app.storage().location(),
        app.record_count()
    );

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(Color::Yellow).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Quiz Creator ")
                .title_style(Style::default().fg(Color::Cyan).bold()),
        );

    frame.render_widget(header, area);
}

fn render_notice(frame: &mut Frame, area: Rect, notice: Option<&Notice>) {
    let Some(notice) = notice else {
        return;
    };
    let (text, color) = match notice {
        Notice::Info(text) => (text.as_str(), Color::Green),
        Notice::Error(text) => (text.as_str(), Color::Red),
    };
    let widget = Paragraph::new(format!(" {}", text)).fg(color);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, view: AuthorView) {
    let controls = match view {
        AuthorView::Form => {
            "tab/↑↓ field  ·  ←→ or a-d answer  ·  ctrl+s save  ·  ctrl+r raw file  ·  ctrl+d delete all  ·  esc quit"
        }
        AuthorView::Raw => "arrows move  ·  ctrl+s save file  ·  esc back",
        AuthorView::ConfirmClear => "y delete  ·  n/esc cancel",
    };
    let widget = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
