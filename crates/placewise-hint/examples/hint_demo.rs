//! Example demonstrating hint generation from board text.
//!
//! This example shows how to:
//! - Parse a current board, its solution, and optional notes from text
//! - Configure the detector chain
//! - Inspect the structured hint result
//!
//! # Usage
//!
//! ```sh
//! cargo run --example hint_demo -- \
//!     --board 530070000600195000098000060800060003400803001700020006060000280000419005000080079 \
//!     --solved 534678912672195348198342567859761423426853791713924856961537284287419635345286179
//! ```
//!
//! Boards use one character per cell in row-major order; `0`, `.`, and `_`
//! denote empty cells, and values above 9 use the letters `a` through `g`.
//! Notes are `row,col,value` triples separated by `;`, with 0-based
//! coordinates and 1-based values, e.g. `0,2,5;4,4,1`.
//!
//! Non-9×9 geometries are selected explicitly:
//!
//! ```sh
//! cargo run --example hint_demo -- --size 6 --section-width 3 --section-height 2 ...
//! ```
//!
//! Individual detectors can be disabled:
//!
//! ```sh
//! cargo run --example hint_demo -- --no-full-house --board ... --solved ...
//! ```

use std::process;

use clap::Parser;
use placewise_core::{Board, GameType, parse_notes};
use placewise_hint::{HintEngine, HintSettings};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Current board as one character per cell, row-major.
    #[arg(long, value_name = "BOARD")]
    board: String,

    /// Solved board in the same format, fully filled.
    #[arg(long, value_name = "BOARD")]
    solved: String,

    /// Notes as `row,col,value` triples separated by `;`. When omitted,
    /// candidates are derived from the current board.
    #[arg(long, value_name = "NOTES")]
    notes: Option<String>,

    /// Grid size (cells per row).
    #[arg(long, value_name = "N", default_value_t = 9)]
    size: u8,

    /// Box width in cells.
    #[arg(long, value_name = "N", default_value_t = 3)]
    section_width: u8,

    /// Box height in cells.
    #[arg(long, value_name = "N", default_value_t = 3)]
    section_height: u8,

    /// Disable the wrong-value check.
    #[arg(long)]
    no_wrong_value: bool,

    /// Disable the full-house detector.
    #[arg(long)]
    no_full_house: bool,

    /// Disable the hidden-single detector.
    #[arg(long)]
    no_hidden_single: bool,

    /// Disable the naked-single detector.
    #[arg(long)]
    no_naked_single: bool,

    /// Disable locked-candidate escalation.
    #[arg(long)]
    no_locked_candidates: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let game_type = match GameType::new(args.size, args.section_width, args.section_height) {
        Ok(game_type) => game_type,
        Err(err) => {
            eprintln!("Invalid geometry: {err}");
            process::exit(2);
        }
    };

    let board = parse_board(game_type, &args.board, "--board");
    let solved = parse_board(game_type, &args.solved, "--solved");

    let settings = HintSettings {
        check_wrong_value: !args.no_wrong_value,
        full_house: !args.no_full_house,
        hidden_single: !args.no_hidden_single,
        naked_single: !args.no_naked_single,
        locked_candidates: !args.no_locked_candidates,
    };

    let mut engine = match HintEngine::new(board, solved) {
        Ok(engine) => engine.with_settings(settings),
        Err(err) => {
            eprintln!("Invalid boards: {err}");
            process::exit(2);
        }
    };

    if let Some(notes) = &args.notes {
        match parse_notes(game_type, notes) {
            Ok(notes) => engine = engine.with_notes(notes),
            Err(err) => {
                eprintln!("Invalid --notes: {err}");
                process::exit(2);
            }
        }
    }

    match engine.find_hint() {
        Some(hint) => {
            println!("Kind:     {:?}", hint.kind);
            println!("Template: {:?}", hint.message.template);
            println!("Args:     {}", hint.message.args.join(", "));
            if hint.via_locked_candidates {
                println!("Found after locked-candidate filtering.");
            }
            if let Some(target) = hint.target_cell {
                println!("Target:   {target} = {}", target.value);
            }
            if !hint.help_cells.is_empty() {
                let cells = hint
                    .help_cells
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>();
                println!("Support:  {}", cells.join(" "));
            }
        }
        None => println!("No hint available with the current settings."),
    }
}

fn parse_board(game_type: GameType, text: &str, flag: &str) -> Board {
    match Board::parse(game_type, text) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("Invalid {flag}: {err}");
            process::exit(2);
        }
    }
}
