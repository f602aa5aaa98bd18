use lapwatch_core::{Deck, DeckError};
use std::time::{Duration, Instant};

#[test]
fn test_first_row_becomes_selected() {
    let mut deck = Deck::new();
    assert_eq!(deck.selected_index(), None);

    deck.add_row();
    deck.add_row();
    deck.add_row();

    // only the transition out of "empty" touches the selection
    assert_eq!(deck.len(), 3);
    assert_eq!(deck.selected_index(), Some(0));
}

#[test]
fn test_navigation_clamps_at_both_ends() {
    let mut deck = Deck::new();
    deck.add_row();
    deck.add_row();
    deck.add_row();

    deck.select_previous().unwrap();
    assert_eq!(deck.selected_index(), Some(0));

    deck.select_next().unwrap();
    deck.select_next().unwrap();
    assert_eq!(deck.selected_index(), Some(2));

    // clamped, not wrapped
    deck.select_next().unwrap();
    assert_eq!(deck.selected_index(), Some(2));
}

#[test]
fn test_navigation_on_empty_deck_errors() {
    let mut deck = Deck::new();
    assert_eq!(deck.select_next().unwrap_err(), DeckError::Empty);
    assert_eq!(deck.select_previous().unwrap_err(), DeckError::Empty);
}

#[test]
fn test_removing_only_row_empties_selection() {
    let mut deck = Deck::new();
    let id = deck.add_row();

    deck.remove_row(id).unwrap();
    assert!(deck.is_empty());
    assert_eq!(deck.selected_index(), None);
    assert_eq!(deck.select_next().unwrap_err(), DeckError::Empty);
}

#[test]
fn test_removing_selected_last_row_clamps_selection() {
    let mut deck = Deck::new();
    deck.add_row();
    deck.add_row();
    let last = deck.add_row();

    deck.select_next().unwrap();
    deck.select_next().unwrap();
    assert_eq!(deck.selected_index(), Some(2));

    deck.remove_row(last).unwrap();
    assert_eq!(deck.selected_index(), Some(1));
}

#[test]
fn test_selection_follows_logical_row_across_removals() {
    let mut deck = Deck::new();
    let first = deck.add_row();
    deck.add_row();
    let third = deck.add_row();

    // select the middle row, then remove the row above it
    deck.select_next().unwrap();
    let selected = deck.selected_row().unwrap().id();
    deck.remove_row(first).unwrap();

    // same logical row, new numeric index
    assert_eq!(deck.selected_index(), Some(0));
    assert_eq!(deck.selected_row().unwrap().id(), selected);

    // removals below the selected position leave it alone entirely
    deck.remove_row(third).unwrap();
    assert_eq!(deck.selected_row().unwrap().id(), selected);
}

#[test]
fn test_removing_unselected_row_keeps_selection() {
    let mut deck = Deck::new();
    deck.add_row();
    let second = deck.add_row();
    deck.add_row();

    deck.remove_row(second).unwrap();
    assert_eq!(deck.selected_index(), Some(0));
}

#[test]
fn test_remove_by_stale_handle_errors() {
    let mut deck = Deck::new();
    let id = deck.add_row();
    deck.add_row();

    deck.remove_row(id).unwrap();
    assert_eq!(deck.remove_row(id).unwrap_err(), DeckError::NotFound(id));
}

#[test]
fn test_remove_last_convenience() {
    let mut deck = Deck::new();
    let first = deck.add_row();
    deck.add_row();

    let removed = deck.remove_last().unwrap();
    assert_ne!(removed.id(), first);
    assert_eq!(deck.len(), 1);
    assert_eq!(deck.selected_index(), Some(0));
}

#[test]
fn test_rows_own_independent_stopwatches() {
    let mut deck = Deck::new();
    let a = deck.add_row();
    let b = deck.add_row();
    let t0 = Instant::now();

    deck.row_mut(a).unwrap().stopwatch.toggle(t0);
    assert!(deck.any_running());

    let later = t0 + Duration::from_secs(5);
    assert_eq!(deck.row(a).unwrap().stopwatch.elapsed(later), Duration::from_secs(5));
    assert_eq!(deck.row(b).unwrap().stopwatch.elapsed(later), Duration::ZERO);

    deck.row_mut(a).unwrap().stopwatch.toggle(later);
    assert!(!deck.any_running());
}
