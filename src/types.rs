//! Type definitions and enums for the application state and input mapping.

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Board screen where tiles are being moved.
    ///
    /// This variant represents the screen on which the grid and the score are displayed and arrow
    /// keys slide the tiles.
    Playing,
    /// Terminal screen shown once no move remains.
    ///
    /// This variant represents the screen offering to restart or quit the game.
    GameOver,
}

/// Direction in which the tiles of the board slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Tiles slide towards the first column.
    Left,
    /// Tiles slide towards the last column.
    Right,
    /// Tiles slide towards the first row.
    Up,
    /// Tiles slide towards the last row.
    Down,
}

impl Direction {
    /// Returns the lowercase name of the direction, for use in log records.
    pub(crate) const fn repr(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_variants() {
        let playing = Screen::Playing;
        let game_over = Screen::GameOver;

        assert_eq!(playing, Screen::Playing);
        assert_eq!(game_over, Screen::GameOver);
        assert_ne!(playing, game_over);
    }

    #[test]
    fn test_direction_repr() {
        assert_eq!(Direction::Left.repr(), "left");
        assert_eq!(Direction::Right.repr(), "right");
        assert_eq!(Direction::Up.repr(), "up");
        assert_eq!(Direction::Down.repr(), "down");
    }

    #[test]
    fn test_debug_implementations() {
        assert_eq!(format!("{:?}", Screen::GameOver), "GameOver");
        assert_eq!(format!("{:?}", Direction::Down), "Down");
    }
}
