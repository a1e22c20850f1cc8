//! This crate contains the library behind twenty48, a terminal rendition of the 2048 sliding-tile
//! puzzle.
//!
//! Arrow keys slide every tile of a 4x4 board as far as it goes, merging equal neighbours into a
//! tile of double value. Each move that changes the board spawns a new tile, and the round ends
//! once no move remains.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod events;
mod game;
mod logging;
mod types;
mod ui;

pub use app::App;
pub use logging::init_logging;
