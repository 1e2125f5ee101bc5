//! Grid rendering (terminal).
//!
//! This module prints snapshots and usage help for the demo. It consumes
//! only `GridSnapshot` and registry queries; the board core itself does no
//! output formatting.

use crate::board::registry::TileRegistry;
use crate::board::snapshot::GridSnapshot;

/// Print the grid to the terminal, rows top to bottom in decreasing y.
///
/// Icons are left-justified and padded to the widest icon among all
/// registered types, so columns stay aligned whatever types are in use.
pub fn print_grid(snapshot: &GridSnapshot) {
    let icon_width = snapshot.icon_width();
    let separator = "-".repeat((icon_width + 2) * snapshot.width() + 1);

    println!("{}", separator);
    for row in snapshot.rows_top_down() {
        let mut line = String::from("|");
        for cell in row {
            line.push_str(&format!(" {:<width$} |", cell.icon, width = icon_width));
        }
        println!("{}", line);
        println!("{}", separator);
    }
}

/// Print the available operations and the currently registered tile types.
pub fn print_help(registry: &TileRegistry) {
    println!("Available commands: help, grid W H, fill TYPE, place X Y TYPE, register NAME ICON [occupied] [moveable], show, quit");
    println!(
        "Registered tile types: {}",
        registry.names().collect::<Vec<_>>().join(", ")
    );
    println!("Use register to add custom tiles, then place them on the grid.");
}
