//! Help view listing the keyboard controls.

use crate::{App, AppView};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Help content sections with their keyboard shortcuts.
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Stopwatch",
        &[
            ("Space", "Pause/resume the selected timer"),
            ("R", "Reset the selected timer (while paused)"),
            ("A", "Add a timer"),
            ("D", "Delete the selected timer"),
        ],
    ),
    (
        "Navigation",
        &[("↑ / K", "Select one row up"), ("↓ / J", "Select one row down")],
    ),
    (
        "General",
        &[
            ("M", "Mute/unmute the music"),
            ("G", "Cycle glyph set"),
            ("T", "Choose a theme"),
            ("Q / Ctrl+C", "Quit"),
        ],
    ),
];

impl App {
    pub fn draw_help(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let theme = self.state.theme;

        // Calculate content height: title (1) + blank (1) + sections
        let mut content_height: u16 = 2; // title + blank line
        for (_section_name, items) in HELP_SECTIONS {
            content_height += 1; // section header
            content_height += items.len() as u16; // items
            content_height += 1; // blank line after section
        }
        content_height += 1; // footer

        let content_width: u16 = 40;

        // Center the content
        let [centered_area] = Layout::horizontal([Constraint::Length(content_width)])
            .flex(Flex::Center)
            .areas(area);

        let [centered_area] = Layout::vertical([Constraint::Length(content_height)])
            .flex(Flex::Center)
            .areas(centered_area);

        // Build help content
        let mut lines: Vec<Line> = Vec::new();

        // Title
        lines.push(Line::from(Span::styled(
            "━━━ Keyboard Controls ━━━",
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        // Sections
        for (section_name, items) in HELP_SECTIONS {
            lines.push(Line::from(Span::styled(
                *section_name,
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            )));
            for (keys, description) in *items {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<14}", keys), Style::default().fg(theme.primary)),
                    Span::styled(*description, Style::default().fg(theme.dimmed)),
                ]));
            }
            lines.push(Line::from(""));
        }

        // Footer
        lines.push(Line::from(vec![
            Span::styled("ESC", Style::default().fg(theme.primary)),
            Span::styled(" back", Style::default().fg(theme.dimmed)),
        ]));

        frame.render_widget(Paragraph::new(lines), centered_area);
    }

    pub fn handle_help_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                self.set_view(AppView::Timers);
            }
            _ => {}
        }
    }
}
