use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, location: &str) {
    let rows = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(7),
        Constraint::Fill(1),
    ])
    .split(area);
    let columns = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Percentage(60),
        Constraint::Fill(1),
    ])
    .split(rows[1]);
    let popup = columns[1];

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Delete ALL questions?",
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(format!("This empties {}", location)),
        Line::from(""),
        Line::from("y / n".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}
