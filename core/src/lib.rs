pub mod deck;
pub mod stopwatch;

pub use deck::{Deck, DeckError, RowId, TimerRow};
pub use stopwatch::{format_hms, Stopwatch, StopwatchError};
