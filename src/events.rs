//! Event handling functions for user input and game state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    types::{Direction, Screen},
    App,
};

/// Interval between two iterations of the main loop.
///
/// This constant bounds how long the loop waits for input before redrawing, giving ten ticks per
/// second.
pub(crate) const TICK_RATE: Duration = Duration::from_millis(100);

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches key presses to [`handle_key_event`]. It
/// uses a timeout of one [`TICK_RATE`] to avoid blocking the UI. Key repeats and releases are
/// ignored.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(TICK_RATE)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key_event(app, key);
            }
        }
    }

    Ok(())
}

/// Dispatches a single key press.
///
/// The quit keys are honoured on every screen; everything else is interpreted by the handler of
/// the current screen.
pub(crate) fn handle_key_event(app: &mut App, key: KeyEvent) {
    if is_quit_key(key) {
        app.exit = true;
        return;
    }

    match app.screen {
        Screen::Playing => handle_playing_events(app, key.code),
        Screen::GameOver => handle_game_over_events(app, key.code),
    }
}

/// Reports whether the key closes the game regardless of the current screen.
fn is_quit_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Handles key presses on the board screen.
///
/// Arrow keys slide the tiles. An accepted move spawns a new tile and, when the resulting board
/// admits no further move, ends the round and switches to the game-over screen. Other keys are
/// ignored.
fn handle_playing_events(app: &mut App, code: KeyCode) {
    let direction = match code {
        KeyCode::Left => Direction::Left,
        KeyCode::Right => Direction::Right,
        KeyCode::Up => Direction::Up,
        KeyCode::Down => Direction::Down,
        _ => return,
    };

    if !app.game.shift(direction) {
        return;
    }

    app.game.add_new_tile();

    if !app.game.can_move() {
        app.game.over = true;
        app.screen = Screen::GameOver;
        tracing::info!(score = app.game.score, "game over");
    }
}

/// Handles key presses on the game-over screen.
///
/// 'r' starts a new round and 'q' quits, in either case.
fn handle_game_over_events(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('r' | 'R') => {
            app.game.reset();
            app.screen = Screen::Playing;
            tracing::info!("restarting game");
        }
        KeyCode::Char('q' | 'Q') => app.exit = true,
        _ => {}
    }
}
