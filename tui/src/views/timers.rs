//! The stopwatch list view.

use crate::{App, AppView, glyphs::MUSIC_LABEL, preferences};
use crossterm::event::{KeyCode, KeyEvent};
use lapwatch_core::{Deck, format_hms};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::time::Instant;

/// The companion music indicator.
///
/// A label and a mute flag only; actual playback lives outside the app.
#[derive(Debug, Clone, Copy, Default)]
pub struct MusicState {
    pub muted: bool,
}

impl MusicState {
    pub fn toggle(&mut self) {
        self.muted = !self.muted;
    }
}

/// State for the stopwatch list screen.
#[derive(Debug, Default)]
pub struct TimersState {
    /// The stopwatch rows and their selection.
    pub deck: Deck,
    /// The music mute indicator.
    pub music: MusicState,
}

impl App {
    pub fn draw_timers(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let theme = self.state.theme;
        let glyphs = self.state.glyphs;
        let deck = &self.state.timers.deck;
        let now = Instant::now();

        // Content dimensions
        let content_width: u16 = 36;
        let row_count = deck.len().max(1) as u16;
        // Title (1) + blank (1) + rows + blank (1) + music (1) + blank (1) + footer (2)
        let content_height: u16 = 1 + 1 + row_count + 1 + 1 + 1 + 2;

        // Center the content
        let [centered_area] = Layout::horizontal([Constraint::Length(content_width)])
            .flex(Flex::Center)
            .areas(area);

        let [centered_area] = Layout::vertical([Constraint::Length(content_height)])
            .flex(Flex::Center)
            .areas(centered_area);

        // Build the screen content
        let mut lines: Vec<Line> = Vec::new();

        // Title
        lines.push(Line::from(Span::styled(
            "━━━ lapwatch ━━━",
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        // Stopwatch rows
        if deck.is_empty() {
            lines.push(Line::from(Span::styled(
                "no timers — press a to add one",
                Style::default().fg(theme.dimmed),
            )));
        }
        for (i, row) in deck.rows().iter().enumerate() {
            let is_selected = deck.selected_index() == Some(i);

            let prefix = if is_selected { "▸ " } else { "  " };
            let label_style = if is_selected {
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.dimmed)
            };

            let running = row.stopwatch.is_running();
            let status = if running { glyphs.running } else { glyphs.paused };
            let time_style = if running {
                Style::default().fg(theme.running)
            } else {
                Style::default().fg(theme.paused)
            };

            lines.push(Line::from(vec![
                Span::styled(prefix, label_style),
                Span::styled(format!("{}  ", status), Style::default().fg(theme.text)),
                Span::styled(
                    format_hms(row.stopwatch.elapsed(now).as_secs()),
                    time_style,
                ),
                Span::styled(format!("  {}", row.label()), label_style),
            ]));
        }
        lines.push(Line::from(""));

        // Music bar
        let music = if self.state.timers.music.muted {
            glyphs.music_off
        } else {
            glyphs.music_on
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}  ", music), Style::default().fg(theme.text)),
            Span::styled(MUSIC_LABEL, Style::default().fg(theme.secondary)),
        ]));
        lines.push(Line::from(""));

        // Footer
        lines.push(Line::from(vec![
            Span::styled("space", Style::default().fg(theme.primary)),
            Span::styled(" pause · ", Style::default().fg(theme.dimmed)),
            Span::styled("r", Style::default().fg(theme.primary)),
            Span::styled(" reset · ", Style::default().fg(theme.dimmed)),
            Span::styled("a", Style::default().fg(theme.primary)),
            Span::styled("/", Style::default().fg(theme.dimmed)),
            Span::styled("d", Style::default().fg(theme.primary)),
            Span::styled(" add/del", Style::default().fg(theme.dimmed)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("m", Style::default().fg(theme.primary)),
            Span::styled(" mute · ", Style::default().fg(theme.dimmed)),
            Span::styled("?", Style::default().fg(theme.primary)),
            Span::styled(" help · ", Style::default().fg(theme.dimmed)),
            Span::styled("q", Style::default().fg(theme.primary)),
            Span::styled(" quit", Style::default().fg(theme.dimmed)),
        ]));

        frame.render_widget(Paragraph::new(lines).centered(), centered_area);
    }

    pub fn handle_timers_input(&mut self, key: KeyEvent) {
        let now = Instant::now();
        let deck = &mut self.state.timers.deck;

        // Deck errors here are user actions whose precondition did not
        // hold (navigating an empty deck, resetting a running stopwatch);
        // the dispatcher drops them and the next paint shows the truth.
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Up | KeyCode::Char('k') => {
                let _ = deck.select_previous();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let _ = deck.select_next();
            }
            KeyCode::Char(' ') => {
                if let Some(row) = deck.selected_row_mut() {
                    row.stopwatch.toggle(now);
                }
            }
            KeyCode::Char('r') => {
                if let Some(row) = deck.selected_row_mut() {
                    let _ = row.stopwatch.reset();
                }
            }
            KeyCode::Char('a') => {
                deck.add_row();
            }
            KeyCode::Char('d') => {
                if let Some(id) = deck.selected_row().map(|row| row.id()) {
                    let _ = deck.remove_row(id);
                }
            }
            KeyCode::Char('m') => {
                self.state.timers.music.toggle();
            }
            KeyCode::Char('g') => {
                self.state.glyphs = self.state.glyphs.next();
                self.save_preferences();
            }
            KeyCode::Char('t') => {
                self.open_theme_select();
            }
            KeyCode::Char('?') => {
                self.set_view(AppView::Help);
            }
            _ => {}
        }
    }

    /// Persist the current cosmetic choices.
    pub(crate) fn save_preferences(&self) {
        let prefs = preferences::Preferences {
            theme_id: self.state.theme.id.to_string(),
            glyphs_id: self.state.glyphs.id.to_string(),
        };
        let _ = preferences::save_preferences(&prefs);
    }
}
