mod app;
pub use app::{App, AppView};

pub mod glyphs;
pub mod preferences;
pub mod theme;
pub mod views;
pub use views::*;
