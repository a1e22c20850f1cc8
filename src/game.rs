//! Grid engine module.
//!
//! This module contains the [`Game`] struct holding the board, the score and the terminal flags, as
//! well as the row operations every move is built from. Only leftward movement is implemented
//! directly; the other three directions reverse or transpose the grid, slide it left and undo the
//! transformation.

use std::array;

use rand::{rngs::StdRng, seq::SliceRandom as _, Rng as _, SeedableRng as _};

use crate::types::Direction;

/// Number of cells along each side of the square grid.
pub(crate) const SIZE: usize = 4;

/// Tile value whose creation marks the game as won.
///
/// Reaching it is informational only; the game continues until no move remains.
pub(crate) const WINNING_TILE: u32 = 2048;

/// Probability that a freshly spawned tile holds a 4 instead of a 2.
const FOUR_PROBABILITY: f64 = 0.1;

/// A single row (or transposed column) of the grid.
pub(crate) type Row = [u32; SIZE];

/// The full board, stored row-major. Zero marks an empty cell.
pub(crate) type Grid = [Row; SIZE];

/// Outcome of merging a single compressed row.
#[derive(Debug, PartialEq, Eq)]
struct Merged {
    /// Row after merging, still containing the gaps left by merged tiles.
    row: Row,
    /// Sum of the tiles created by the merge.
    gained: u32,
    /// Whether one of the created tiles is the [`WINNING_TILE`].
    reached_winning_tile: bool,
}

/// Game state container for the sliding-tile puzzle.
///
/// This structure holds everything a round needs: the grid of tiles, the running score, the flags
/// reporting whether the round ended or reached the winning tile, and the random source used to
/// spawn new tiles.
pub(crate) struct Game {
    /// Current board.
    pub(crate) grid: Grid,
    /// Running score, increased by the value of every tile created through a merge.
    pub(crate) score: u32,
    /// Terminal flag.
    ///
    /// This field is set by the input loop once an accepted move leaves the board without any
    /// possible follow-up move.
    pub(crate) over: bool,
    /// Informational flag set once a merge produces the [`WINNING_TILE`]. It stays set until the
    /// next [`reset`](Game::reset).
    pub(crate) won: bool,
    /// Random source for tile placement.
    rng: StdRng,
}

impl Game {
    /// Creates a new game seeded from the operating system's entropy source.
    ///
    /// The returned game already holds its two starting tiles.
    pub(crate) fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a new game with a deterministic random source.
    #[cfg(test)]
    pub(crate) fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a game holding exactly the given grid, with no score and cleared flags.
    #[cfg(test)]
    pub(crate) fn from_grid(grid: Grid) -> Self {
        let mut game = Self::with_seed(0);
        game.grid = grid;
        game
    }

    /// Builds a game around the given random source and spawns the starting tiles.
    fn with_rng(rng: StdRng) -> Self {
        let mut game = Self {
            grid: [[0; SIZE]; SIZE],
            score: 0,
            over: false,
            won: false,
            rng,
        };
        game.reset();

        game
    }

    /// Resets the game to start over.
    ///
    /// The grid is cleared, the score and both flags are reset and two new tiles are placed on the
    /// board.
    pub(crate) fn reset(&mut self) {
        self.grid = [[0; SIZE]; SIZE];
        self.score = 0;
        self.over = false;
        self.won = false;
        self.add_new_tile();
        self.add_new_tile();

        tracing::debug!(grid = ?self.grid, "new board");
    }

    /// Places a new tile in a uniformly chosen empty cell.
    ///
    /// The tile holds a 2 with probability 0.9 and a 4 otherwise. Nothing happens if the grid is
    /// full.
    pub(crate) fn add_new_tile(&mut self) {
        let mut empty_cells: Vec<&mut u32> = self
            .grid
            .iter_mut()
            .flatten()
            .filter(|cell| **cell == 0)
            .collect();

        if let Some(cell) = empty_cells.choose_mut(&mut self.rng) {
            **cell = if self.rng.gen_bool(FOUR_PROBABILITY) {
                4
            } else {
                2
            };
        }
    }

    /// Slides the board in the given direction.
    ///
    /// Returns whether any cell changed. A move that changes nothing leaves the score untouched and
    /// must not be followed by a tile spawn.
    pub(crate) fn shift(&mut self, direction: Direction) -> bool {
        let previous_score = self.score;
        let previously_won = self.won;

        let moved = match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        };

        if moved {
            tracing::debug!(
                direction = direction.repr(),
                gained = self.score - previous_score,
                score = self.score,
                "accepted move"
            );
        }
        if self.won && !previously_won {
            tracing::info!(score = self.score, "reached {WINNING_TILE}");
        }

        moved
    }

    /// Slides every row towards its first column.
    ///
    /// Each row is compressed, merged and compressed again. Returns whether any row changed.
    pub(crate) fn move_left(&mut self) -> bool {
        let mut moved = false;

        for row in &mut self.grid {
            let merged = merge(compress(*row));
            let new_row = compress(merged.row);

            self.score += merged.gained;
            self.won |= merged.reached_winning_tile;

            if new_row != *row {
                moved = true;
                *row = new_row;
            }
        }

        moved
    }

    /// Slides every row towards its last column.
    pub(crate) fn move_right(&mut self) -> bool {
        reverse_rows(&mut self.grid);
        let moved = self.move_left();
        reverse_rows(&mut self.grid);

        moved
    }

    /// Slides every column towards the first row.
    pub(crate) fn move_up(&mut self) -> bool {
        transpose(&mut self.grid);
        let moved = self.move_left();
        transpose(&mut self.grid);

        moved
    }

    /// Slides every column towards the last row.
    pub(crate) fn move_down(&mut self) -> bool {
        transpose(&mut self.grid);
        let moved = self.move_right();
        transpose(&mut self.grid);

        moved
    }

    /// Reports whether at least one move would change the board.
    ///
    /// This is the case when an empty cell remains or when two equal tiles are adjacent along
    /// either axis.
    pub(crate) fn can_move(&self) -> bool {
        if self.grid.iter().flatten().any(|cell| *cell == 0) {
            return true;
        }

        let mut columns = self.grid;
        transpose(&mut columns);

        self.grid.iter().any(has_adjacent_pair) || columns.iter().any(has_adjacent_pair)
    }
}

/// Removes the zeros from a row and packs the remaining tiles towards its start.
fn compress(row: Row) -> Row {
    let mut packed = [0; SIZE];

    for (slot, value) in packed
        .iter_mut()
        .zip(row.into_iter().filter(|value| *value != 0))
    {
        *slot = value;
    }

    packed
}

/// Combines equal neighbouring tiles, scanning left to right.
///
/// The right tile of a merged pair is zeroed, so a tile created here cannot take part in a second
/// merge during the same pass.
#[expect(
    clippy::indexing_slicing,
    reason = "Indices stay below the fixed row length."
)]
fn merge(mut row: Row) -> Merged {
    let mut gained = 0;
    let mut reached_winning_tile = false;

    for idx in 0..SIZE - 1 {
        if row[idx] != 0 && row[idx] == row[idx + 1] {
            row[idx] *= 2;
            row[idx + 1] = 0;
            gained += row[idx];
            reached_winning_tile |= row[idx] == WINNING_TILE;
        }
    }

    Merged {
        row,
        gained,
        reached_winning_tile,
    }
}

/// Mirrors the grid horizontally.
fn reverse_rows(grid: &mut Grid) {
    for row in grid {
        row.reverse();
    }
}

/// Swaps the rows and columns of the grid.
#[expect(
    clippy::indexing_slicing,
    reason = "Indices are produced by `array::from_fn` over the fixed grid size."
)]
fn transpose(grid: &mut Grid) {
    let transposed: Grid =
        array::from_fn(|row_idx| array::from_fn(|col_idx| grid[col_idx][row_idx]));
    *grid = transposed;
}

/// Reports whether two equal tiles sit next to each other in the row.
fn has_adjacent_pair(row: &Row) -> bool {
    row.windows(2)
        .any(|pair| matches!(pair, [left, right] if left == right))
}
