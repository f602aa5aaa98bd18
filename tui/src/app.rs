use crate::{
    glyphs::GlyphSet,
    preferences,
    theme::Theme,
    views::{theme_select::ThemeSelectState, timers::TimersState},
};
use color_eyre::eyre::Result;
use crossterm::event::EventStream;
use std::time::Duration;

#[derive(Default, Clone, Debug, PartialEq)]
pub enum AppView {
    /// The stopwatch list, the main (and initial) view.
    #[default]
    Timers,
    Help,
    ThemeSelect,
}

#[derive(Debug)]
pub struct AppState {
    pub timers: TimersState,
    pub theme_select: ThemeSelectState,
    /// Active color theme.
    pub theme: &'static Theme,
    /// Active glyph set (emoji or ascii).
    pub glyphs: &'static GlyphSet,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            timers: TimersState::default(),
            theme_select: ThemeSelectState::default(),
            theme: &crate::theme::DEFAULT,
            glyphs: &crate::glyphs::EMOJI,
        }
    }
}

/// Refresh rate for the elapsed-time display while a stopwatch runs.
const TICK_RATE: Duration = Duration::from_millis(250);

pub struct App {
    /// Active application view.
    pub view: AppView,
    /// Application state.
    ///
    /// This is shared among all views.
    pub state: AppState,
    /// Is the application running?
    pub is_running: bool,
    /// Event stream.
    pub event_stream: EventStream,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Construct a new instance of [`App`], restoring saved preferences.
    pub fn new() -> Self {
        let prefs = preferences::load_preferences();

        let mut state = AppState {
            theme: Theme::by_id(&prefs.theme_id),
            glyphs: GlyphSet::by_id(&prefs.glyphs_id),
            ..AppState::default()
        };
        // start with one row, like a stopwatch should
        state.timers.deck.add_row();

        Self {
            is_running: false,
            event_stream: EventStream::new(),
            view: AppView::Timers,
            state,
        }
    }

    /// Set the active view.
    pub fn set_view(&mut self, view: AppView) {
        self.view = view;
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: ratatui::DefaultTerminal) -> Result<()> {
        self.is_running = true;

        // ticker for the elapsed-time refresh
        let mut interval = tokio::time::interval(TICK_RATE);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        while self.is_running {
            terminal.draw(|frame| self.draw(frame))?;

            // The tick arm is only armed while a stopwatch is running; a
            // fully stopped deck draws nothing new, so the loop sleeps on
            // input alone until the next key press.
            tokio::select! {
                _ = interval.tick(), if self.state.timers.deck.any_running() => {
                    // trigger a redraw by looping
                    continue;
                }
                result = self.handle_crossterm_events() => {
                    result?;
                }
            }
        }

        Ok(())
    }

    /// Renders the user interface.
    fn draw(&mut self, frame: &mut ratatui::Frame) {
        match self.view {
            AppView::Timers => self.draw_timers(frame),
            AppView::Help => self.draw_help(frame),
            AppView::ThemeSelect => self.draw_theme_select(frame),
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    async fn handle_crossterm_events(&mut self) -> Result<()> {
        use crossterm::event::{Event, KeyEventKind, KeyModifiers};
        use futures::{FutureExt, StreamExt};

        let event = self.event_stream.next().fuse().await;
        if let Some(Ok(evt)) = event {
            match evt {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    use crossterm::event::KeyCode;

                    // application-wide CTRL+C handler
                    if matches!(
                        (key.modifiers, key.code),
                        (
                            KeyModifiers::CONTROL,
                            KeyCode::Char('c') | KeyCode::Char('C')
                        )
                    ) {
                        self.quit();
                        return Ok(());
                    };

                    match self.view {
                        AppView::Timers => self.handle_timers_input(key),
                        AppView::Help => self.handle_help_input(key),
                        AppView::ThemeSelect => self.handle_theme_select_input(key),
                    }
                }
                Event::Mouse(_) => {} // no mouse events
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.is_running = false;
    }
}
