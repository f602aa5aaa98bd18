pub mod help;
pub mod theme_select;
pub mod timers;
