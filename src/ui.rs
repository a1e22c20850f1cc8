//! User interface rendering functions for the board and game-over screens.

use color_eyre::eyre::Result;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear},
    Frame,
};

use crate::{
    game::{Game, SIZE, WINNING_TILE},
    types::Screen,
    App,
};

/// Width of a single tile, in terminal cells.
const TILE_WIDTH: u16 = 10;

/// Height of a single tile, in terminal cells.
const TILE_HEIGHT: u16 = 5;

/// Gap between two tiles and between the outer tiles and the board edge.
const TILE_MARGIN: u16 = 1;

/// Width of the game-over box.
const GAME_OVER_WIDTH: u16 = 40;

/// Board background, visible through the gaps between tiles.
const BACKGROUND_COLOR: Color = Color::Rgb(187, 173, 160);

/// Colour of the tile values.
const FONT_COLOR: Color = Color::Rgb(119, 110, 101);

/// Colour of the text drawn outside of the board.
const CHROME_COLOR: Color = Color::Rgb(238, 228, 218);

/// Returns the background colour of a tile.
///
/// Empty cells have their own colour; values beyond the winning tile reuse its colour.
pub(crate) const fn tile_color(value: u32) -> Color {
    match value {
        0 => Color::Rgb(204, 192, 179),
        2 => Color::Rgb(238, 228, 218),
        4 => Color::Rgb(237, 224, 200),
        8 => Color::Rgb(242, 177, 121),
        16 => Color::Rgb(245, 149, 99),
        32 => Color::Rgb(246, 124, 95),
        64 => Color::Rgb(246, 94, 59),
        128 => Color::Rgb(237, 207, 114),
        256 => Color::Rgb(237, 204, 97),
        512 => Color::Rgb(237, 200, 80),
        1024 => Color::Rgb(237, 197, 63),
        _ => Color::Rgb(237, 194, 46),
    }
}

/// Updates the application UI based on the persistent state.
///
/// This function renders the screen stored in the [`App`] structure, dispatching to the
/// appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from the conversion of the board dimensions into terminal
/// coordinates.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::Playing => in_game(&app.game, frame)?,
        Screen::GameOver => game_over(&app.game, frame),
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the board screen.
///
/// The score sits above the board and a key legend beneath it, all three centred in the frame.
/// Once the winning tile has been reached, a notice is appended to the score line.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn in_game(game: &Game, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let cells = u16::try_from(SIZE)?;
    let board_width = cells * (TILE_WIDTH + TILE_MARGIN) + TILE_MARGIN;
    let board_height = cells * (TILE_HEIGHT + TILE_MARGIN) + TILE_MARGIN;

    let [column] = Layout::horizontal([Constraint::Length(board_width)])
        .flex(Flex::Center)
        .areas(frame.area());
    let [score_area, board_area, legend_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(board_height),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(column);

    let chrome_style = Style::default().fg(CHROME_COLOR);

    let mut score_line = Line::from(vec![
        Span::styled("Score: ", chrome_style),
        Span::styled(game.score.to_string(), chrome_style.add_modifier(Modifier::BOLD)),
    ]);
    if game.won {
        score_line.push_span(Span::styled(
            format!("  {WINNING_TILE} reached!"),
            Style::default().fg(tile_color(WINNING_TILE)),
        ));
    }
    frame.render_widget(score_line, score_area);

    board(game, frame, board_area)?;

    let legend = Line::styled("(arrows) move / (esc) quit", chrome_style).centered();
    frame.render_widget(legend, legend_area);

    Ok(())
}

/// Renders the grid of tiles into the given area.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
fn board(game: &Game, frame: &mut Frame, area: Rect) -> Result<()> {
    frame.render_widget(
        Block::new().style(Style::default().bg(BACKGROUND_COLOR)),
        area,
    );

    let inner = area.inner(Margin::new(TILE_MARGIN, TILE_MARGIN));
    let rows = Layout::vertical(vec![Constraint::Length(TILE_HEIGHT); SIZE])
        .spacing(TILE_MARGIN)
        .split(inner);

    for (row, row_area) in game.grid.iter().zip(rows.iter()) {
        let cells = Layout::horizontal(vec![Constraint::Length(TILE_WIDTH); SIZE])
            .spacing(TILE_MARGIN)
            .split(*row_area);

        for (value, cell_area) in row.iter().zip(cells.iter()) {
            tile(frame, *value, *cell_area)?;
        }
    }

    Ok(())
}

/// Renders a single tile with its value centred on the middle line.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
fn tile(frame: &mut Frame, value: u32, area: Rect) -> Result<()> {
    let style = Style::default().bg(tile_color(value));
    frame.render_widget(Block::new().style(style), area);

    if value == 0 || area.height == 0 {
        return Ok(());
    }

    let offset = u16::try_from(rounded_div::i32(
        i32::from(area.height.saturating_sub(1)),
        2,
    ))?;
    let text_area = Rect {
        y: area.y + offset,
        height: 1,
        ..area
    };
    let text = Line::styled(
        value.to_string(),
        style.fg(FONT_COLOR).add_modifier(Modifier::BOLD),
    )
    .centered();
    frame.render_widget(text, text_area);

    Ok(())
}

/// Renders the game-over screen with the final score and the available choices.
pub(crate) fn game_over(game: &Game, frame: &mut Frame) {
    clear(frame);

    let [column] = Layout::horizontal([Constraint::Length(GAME_OVER_WIDTH)])
        .flex(Flex::Center)
        .areas(frame.area());
    let [area] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(column);

    let block = Block::bordered()
        .title("2048")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(CHROME_COLOR))
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(area);

    frame.render_widget(block, area);

    let [headline_area, score_area, hint_area] =
        Layout::vertical([Constraint::Max(1); 3]).areas(inner_space);

    let content_style = Style::default().fg(CHROME_COLOR);

    let headline =
        Line::styled("Game Over!", content_style.add_modifier(Modifier::BOLD)).centered();
    let score = Line::styled(format!("Score: {}", game.score), content_style).centered();
    let hint = Line::styled("Press 'R' to Restart, 'Q' to Quit", content_style).centered();

    frame.render_widget(headline, headline_area);
    frame.render_widget(score, score_area);
    frame.render_widget(hint, hint_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Grid;
    use ratatui::{backend::TestBackend, Terminal};

    /// Creates a test terminal large enough to hold the whole board.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 30);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Creates a test app whose board holds the given grid.
    fn create_test_app(grid: Grid) -> App {
        let mut app = App::new();
        app.game = Game::from_grid(grid);
        app
    }

    /// Flattens the rendered buffer into a single string.
    fn rendered(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_tile_color_palette() {
        assert_eq!(tile_color(0), Color::Rgb(204, 192, 179));
        assert_eq!(tile_color(2), Color::Rgb(238, 228, 218));
        assert_eq!(tile_color(2048), Color::Rgb(237, 194, 46));
        assert_eq!(tile_color(4096), tile_color(2048));
    }

    #[test]
    fn test_draw_in_game() {
        let mut app = create_test_app([[2, 4, 0, 0], [0; SIZE], [0, 0, 2048, 0], [0; SIZE]]);
        app.game.score = 36;
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing the board should succeed");
        let content = rendered(&terminal);
        assert!(content.contains("Score: 36"));
        assert!(content.contains("2048"));
        assert!(!content.contains("reached!"));
        assert!(content.contains("(arrows) move / (esc) quit"));
    }

    #[test]
    fn test_draw_in_game_after_win() {
        let mut app = create_test_app([[2048, 0, 0, 0], [0; SIZE], [0; SIZE], [0; SIZE]]);
        app.game.won = true;
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing the board should succeed");
        assert!(rendered(&terminal).contains("2048 reached!"));
    }

    #[test]
    fn test_draw_game_over() {
        let mut app = create_test_app([[0; SIZE]; SIZE]);
        app.game.score = 1234;
        app.screen = Screen::GameOver;
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing the game-over screen should succeed");
        let content = rendered(&terminal);
        assert!(content.contains("Game Over!"));
        assert!(content.contains("Score: 1234"));
        assert!(content.contains("Press 'R' to Restart, 'Q' to Quit"));
    }

    #[test]
    fn test_in_game_on_tiny_terminal() {
        let app = create_test_app([[2, 2, 2, 2]; SIZE]);
        let mut terminal =
            Terminal::new(TestBackend::new(12, 4)).expect("failed to create test terminal");

        let result = terminal.draw(|frame| {
            in_game(&app.game, frame).expect("a cramped board should still render");
        });

        assert!(result.is_ok(), "drawing into a tiny terminal should succeed");
    }

    #[test]
    fn test_clear_function() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            clear(frame);
        });

        assert!(result.is_ok(), "clearing screen should succeed");
    }
}
