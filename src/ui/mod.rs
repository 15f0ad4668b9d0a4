mod author;
mod taker;

pub use author::render as render_author;
pub use taker::render as render_taker;
