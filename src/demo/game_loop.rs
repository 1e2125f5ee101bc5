//! Standalone demo loop for exercising the board locally.
//!
//! This module provides an interactive terminal loop that wires a registry
//! and a board together and surfaces board errors to the user. The core has
//! no user-facing failure UI; this collaborator is where messages land.

use std::io::{self, Write};

use crate::board::error::BoardError;
use crate::board::grid::GridBoard;
use crate::board::registry::TileRegistry;
use crate::board::types::TileType;
use crate::config::board::{DEMO_GRID_HEIGHT, DEMO_GRID_WIDTH};
use crate::demo::render::{print_grid, print_help};

/// Prompt the user for the next command line.
fn read_command() -> String {
    print!("> ");
    io::stdout().flush().unwrap();

    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();
    input.trim().to_string()
}

fn parse_coord(token: &str) -> Result<usize, String> {
    token
        .parse::<usize>()
        .map_err(|_| format!("\"{}\" is not a non-negative integer", token))
}

/// Apply one parsed command to the registry/board pair.
fn apply_command(
    registry: &mut TileRegistry,
    board: &mut GridBoard,
    tokens: &[&str],
) -> Result<(), String> {
    match tokens {
        ["help"] => {
            print_help(registry);
            Ok(())
        }
        ["show"] => {
            let snapshot = board.snapshot(registry).map_err(|e| e.to_string())?;
            print_grid(&snapshot);
            Ok(())
        }
        ["grid", w, h] => {
            let width = parse_coord(w)?;
            let height = parse_coord(h)?;
            board
                .create_grid(registry, width, height)
                .map_err(|e| e.to_string())
        }
        ["fill", type_name] => board.fill(registry, type_name).map_err(|e| e.to_string()),
        ["place", x, y, type_name] => {
            let x = parse_coord(x)?;
            let y = parse_coord(y)?;
            board
                .place(registry, x, y, type_name)
                .map_err(|e| e.to_string())
        }
        ["register", name, icon, flags @ ..] => {
            let mut tile_type = TileType::new(*name, *icon);
            for flag in flags {
                match *flag {
                    "occupied" => tile_type.is_occupied = true,
                    "moveable" => tile_type.is_moveable = true,
                    other => return Err(format!("unknown flag \"{}\"", other)),
                }
            }
            registry
                .register(tile_type)
                .map(|_| ())
                .map_err(|e| e.to_string())
        }
        _ => Err("unrecognized command, type \"help\" for usage".to_string()),
    }
}

/// Run the interactive demo loop.
pub fn run_demo() {
    let mut registry = TileRegistry::new();
    let mut board = GridBoard::new();

    print_help(&registry);

    // Start with the default demo grid so there is something to look at.
    board
        .create_grid(&registry, DEMO_GRID_WIDTH, DEMO_GRID_HEIGHT)
        .expect("demo grid dimensions are positive");
    match board.snapshot(&registry) {
        Ok(snapshot) => print_grid(&snapshot),
        Err(err) => println!("Error: {}", err),
    }

    loop {
        let line = read_command();
        if line == "quit" {
            break;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if let Err(message) = apply_command(&mut registry, &mut board, &tokens) {
            println!("Error: {}", message);
        }
    }
}
