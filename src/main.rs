//! This crate contains the source code for the binary for the game twenty48.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use color_eyre::{eyre::Result, install};
use twenty48::{init_logging, App};

fn main() -> Result<()> {
    install()?;
    let _log_guard = init_logging()?;

    let mut terminal = ratatui::init();
    let result = App::new().run(&mut terminal);
    ratatui::restore();

    result
}
