use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::author::{AuthorApp, FormFocus};
use crate::models::OptionKey;
use crate::storage::Storage;

pub fn render<S: Storage>(frame: &mut Frame, area: Rect, app: &AuthorApp<S>) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .margin(1)
    .split(area);

    let draft = app.draft();
    let focus = app.focus();

    render_input(frame, chunks[0], " Question ", &draft.prompt, focus == FormFocus::Prompt);
    for key in OptionKey::ALL {
        let title = format!(" Option {} ", key.label());
        render_input(
            frame,
            chunks[1 + key.index()],
            &title,
            &draft.options[key.index()],
            focus == FormFocus::Option(key),
        );
    }
    render_answer_selector(frame, chunks[5], draft.correct, focus == FormFocus::Correct);
}

fn border_color(focused: bool) -> Color {
    if focused { Color::Yellow } else { Color::DarkGray }
}

fn render_input(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let widget = Paragraph::new(value).fg(Color::White).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color(focused)))
            .title(title),
    );
    frame.render_widget(widget, area);

    if focused {
        let width = value.chars().count() as u16;
        let x = (area.x + 1 + width).min(area.right().saturating_sub(2));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn render_answer_selector(frame: &mut Frame, area: Rect, correct: Option<OptionKey>, focused: bool) {
    let mut spans = Vec::with_capacity(OptionKey::ALL.len());
    for key in OptionKey::ALL {
        let style = if correct == Some(key) {
            Style::default().fg(Color::Black).bg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", key.label()), style));
        spans.push(Span::raw("  "));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color(focused)))
            .title(" Correct Answer "),
    );
    frame.render_widget(widget, area);
}
