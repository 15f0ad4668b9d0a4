use rand::Rng;
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{OptionKey, Question};
use crate::storage::Storage;

pub fn render<S: Storage, R: Rng>(frame: &mut Frame, area: Rect, app: &App<S, R>) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_question_text(frame, chunks[1], question.prompt());
    render_options(frame, chunks[2], question, app.selected_option());
    render_warning(frame, chunks[3], app.warning());
    render_controls(frame, chunks[4]);
}

fn render_progress<S: Storage, R: Rng>(frame: &mut Frame, area: Rect, app: &App<S, R>) {
    let progress = format!(
        "{}/{}",
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, question: &Question, selected: Option<OptionKey>) {
    let mut lines: Vec<Line> = Vec::with_capacity(OptionKey::ALL.len() * 2);

    for key in OptionKey::ALL {
        let is_selected = selected == Some(key);
        let style = if is_selected {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", key.label()), style),
            Span::styled(question.option(key), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_warning(frame: &mut Frame, area: Rect, warning: Option<&str>) {
    if let Some(warning) = warning {
        let widget = Paragraph::new(warning)
            .alignment(Alignment::Center)
            .fg(Color::Red);
        frame.render_widget(widget, area);
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  a-d pick  ·  enter submit  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
