use crate::Stopwatch;
use thiserror::Error;

/// Error type for deck operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    #[error("no row with id {0:?}")]
    NotFound(RowId),
    #[error("deck is empty")]
    Empty,
}

/// Stable handle for a [`TimerRow`], independent of its position.
///
/// Ids come from a monotonic counter and are never reused, so a handle
/// held across removals either still refers to the same row or to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(u64);

/// One stopwatch row.
#[derive(Debug, Clone)]
pub struct TimerRow {
    id: RowId,
    label: String,
    pub stopwatch: Stopwatch,
}

impl TimerRow {
    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// An ordered collection of timer rows with a single selection.
///
/// Invariants: whenever the deck is non-empty, exactly one row is selected
/// and the selected index is in bounds; an empty deck has no selection.
/// Only the deck mutates the row list and the selection; rows never store
/// their own position.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    rows: Vec<TimerRow>,
    selected: Option<usize>,
    next_id: u64,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[TimerRow] {
        &self.rows
    }

    /// Position of the selected row, `None` when the deck is empty.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_row(&self) -> Option<&TimerRow> {
        self.rows.get(self.selected?)
    }

    pub fn selected_row_mut(&mut self) -> Option<&mut TimerRow> {
        let sel = self.selected?;
        self.rows.get_mut(sel)
    }

    pub fn row(&self, id: RowId) -> Option<&TimerRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn row_mut(&mut self, id: RowId) -> Option<&mut TimerRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    /// Whether any stopwatch in the deck is currently running.
    pub fn any_running(&self) -> bool {
        self.rows.iter().any(|row| row.stopwatch.is_running())
    }

    /// Append a fresh stopped, zeroed row and return its handle.
    ///
    /// If the deck was empty the new row becomes selected; otherwise the
    /// selection is unchanged.
    pub fn add_row(&mut self) -> RowId {
        self.next_id += 1;
        let id = RowId(self.next_id);
        self.rows.push(TimerRow {
            id,
            label: format!("Timer {}", self.next_id),
            stopwatch: Stopwatch::new(),
        });
        if self.selected.is_none() {
            self.selected = Some(0);
        }
        id
    }

    /// Remove the row with the given handle.
    ///
    /// Selection follows the same logical row: removals below the selected
    /// position shift the selected index down, removing the selected row
    /// keeps its position clamped to the new last index, and removing the
    /// final row empties the selection.
    pub fn remove_row(&mut self, id: RowId) -> Result<TimerRow, DeckError> {
        let pos = self
            .rows
            .iter()
            .position(|row| row.id == id)
            .ok_or(DeckError::NotFound(id))?;
        let row = self.rows.remove(pos);

        self.selected = match self.selected {
            _ if self.rows.is_empty() => None,
            Some(sel) if pos < sel => Some(sel - 1),
            Some(sel) => Some(sel.min(self.rows.len() - 1)),
            None => None,
        };

        Ok(row)
    }

    /// Remove the row at the highest index.
    pub fn remove_last(&mut self) -> Result<TimerRow, DeckError> {
        let last = self.rows.last().ok_or(DeckError::Empty)?;
        self.remove_row(last.id())
    }

    /// Move the selection one row down, clamping at the last row.
    pub fn select_next(&mut self) -> Result<(), DeckError> {
        let sel = self.selected.ok_or(DeckError::Empty)?;
        if sel + 1 < self.rows.len() {
            self.selected = Some(sel + 1);
        }
        Ok(())
    }

    /// Move the selection one row up, clamping at the first row.
    pub fn select_previous(&mut self) -> Result<(), DeckError> {
        let sel = self.selected.ok_or(DeckError::Empty)?;
        if sel > 0 {
            self.selected = Some(sel - 1);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_sequential() {
        let mut deck = Deck::new();
        deck.add_row();
        deck.add_row();
        assert_eq!(deck.rows()[0].label(), "Timer 1");
        assert_eq!(deck.rows()[1].label(), "Timer 2");
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut deck = Deck::new();
        let a = deck.add_row();
        deck.remove_row(a).unwrap();
        let b = deck.add_row();
        assert_ne!(a, b);
        assert_eq!(deck.remove_row(a).unwrap_err(), DeckError::NotFound(a));
    }

    #[test]
    fn test_remove_last_on_empty() {
        let mut deck = Deck::new();
        assert_eq!(deck.remove_last().unwrap_err(), DeckError::Empty);
    }
}
