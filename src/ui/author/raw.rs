use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::author::AuthorApp;
use crate::storage::Storage;

/// Raw file text with a cursor; the view follows the cursor row.
pub fn render<S: Storage>(frame: &mut Frame, area: Rect, app: &AuthorApp<S>) {
    let Some(editor) = app.editor() else {
        return;
    };

    let title = if editor.is_dirty() {
        " Raw File (modified) "
    } else {
        " Raw File "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(title);
    let inner = block.inner(area);

    let (row, col) = editor.cursor();
    let height = inner.height.max(1) as usize;
    let top = row.saturating_sub(height - 1);

    let lines: Vec<Line> = editor
        .lines()
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect();

    let widget = Paragraph::new(lines)
        .fg(Color::White)
        .block(block)
        .scroll((top.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(widget, area);

    let x = inner.x + (col as u16).min(inner.width.saturating_sub(1));
    let y = inner.y + (row - top) as u16;
    frame.set_cursor_position((x, y));
}
