mod pane;
mod state;
mod style;
mod ui;

pub use state::{new, settings, subscription, theme, update, view};
