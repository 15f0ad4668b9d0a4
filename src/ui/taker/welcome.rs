use rand::Rng;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::storage::Storage;

pub fn render<S: Storage, R: Rng>(frame: &mut Frame, area: Rect, app: &App<S, R>) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(10),
        Constraint::Fill(1),
    ])
    .split(area);

    let skipped = app.skipped_blocks();
    let skipped_line = if skipped > 0 {
        Line::from(Span::styled(
            format!("{} malformed blocks skipped", skipped),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from("")
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ TIME",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Questions · Random Order", app.total_questions()),
            Style::default().fg(Color::DarkGray),
        )),
        skipped_line,
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}
