mod quiz;
mod result;
mod welcome;

use rand::Rng;
use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;
use crate::storage::Storage;

pub fn render<S: Storage, R: Rng>(frame: &mut Frame, app: &App<S, R>) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Welcome => welcome::render(frame, area, app),
        AppState::Quiz => quiz::render(frame, area, app),
        AppState::Result => result::render(frame, area, app),
    }
}
