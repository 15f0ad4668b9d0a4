use rand::Rng;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, RESULT_LINES_PER_MISS};
use crate::session::Report;
use crate::storage::Storage;

pub fn render<S: Storage, R: Rng>(frame: &mut Frame, area: Rect, app: &App<S, R>) {
    let report = app.report();
    let grade_color = get_grade_color(report.percentage());

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], &report, grade_color);
    render_misses(frame, chunks[2], &report, app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, report: &Report, grade_color: Color) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "YOUR SCORE",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({:.0}%)",
                report.score,
                report.total,
                report.percentage()
            ),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_misses(frame: &mut Frame, area: Rect, report: &Report, scroll: usize) {
    if report.is_perfect() {
        let widget = Paragraph::new(Line::from(Span::styled(
            "Perfect score!",
            Style::default().fg(Color::Green).bold(),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(widget, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::with_capacity(report.misses.len() * RESULT_LINES_PER_MISS);
    for miss in &report.misses {
        lines.push(Line::from(vec![
            Span::styled(" - ", Style::default().fg(Color::Red)),
            Span::styled(miss.prompt.as_str(), Style::default().fg(Color::White).bold()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("   Your answer:    ", Style::default().fg(Color::DarkGray)),
            Span::styled(miss.chosen.as_str(), Style::default().fg(Color::Red)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("   Correct answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(miss.correct.as_str(), Style::default().fg(Color::Green)),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r try again  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
