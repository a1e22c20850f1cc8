//! Core application state and main loop for the puzzle.

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{events, game::Game, types::Screen, ui};

/// Application state container for the 2048 puzzle.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the board and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// quits from the game-over screen or closes the game, but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    pub(crate) screen: Screen,
    /// Board, score and flags of the round being played.
    pub(crate) game: Game,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new instance of the App structure with a freshly dealt board.
    ///
    /// The board starts with two random tiles and the playing screen is shown first.
    pub fn new() -> Self {
        Self {
            exit: false,
            screen: Screen::Playing,
            game: Game::new(),
        }
    }

    /// Runs the main loop of the application.
    ///
    /// Each iteration redraws the current screen and then waits at most one tick for user input.
    /// The loop continues until the exit condition is `true`, after which the function returns to
    /// the call site so the terminal can be restored.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        tracing::info!("starting game");

        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
        }

        tracing::info!(score = self.game.score, "leaving game");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_app_starts_playing() {
        let app = App::new();

        assert!(!app.exit);
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.game.score, 0);
        assert!(!app.game.over);
        assert_eq!(
            app.game
                .grid
                .iter()
                .flatten()
                .filter(|cell| **cell != 0)
                .count(),
            2
        );
    }
}
