//! Main entry point for the demo binary.
//!
//! Initializes logging and runs the interactive grid-board demo loop.

use grid_board::demo::run_demo;

fn main() {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    run_demo();
}
