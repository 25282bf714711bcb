use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::style::{Color, Stylize};

use mc_connect_four::ai::AlphaBetaSearch;
use mc_connect_four::game::{Board, Cell, Player};

/// Play Connect Four on a configurable board, with optional alpha-beta AI
/// players using Monte-Carlo leaf evaluation.
#[derive(Parser)]
#[command(name = "mc_connect_four", about = "Connect Four with an alpha-beta AI")]
struct Cli {
    /// Number of board columns
    #[arg(long, default_value_t = 7)]
    cols: usize,

    /// Height of each column
    #[arg(long, default_value_t = 6)]
    height: usize,

    /// Player 1 (X) is AI controlled, searching DEPTH plies ahead
    #[arg(long, value_name = "DEPTH")]
    ai1: Option<usize>,

    /// Player 2 (O) is AI controlled, searching DEPTH plies ahead
    #[arg(long, value_name = "DEPTH")]
    ai2: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.ai1 == Some(0) || cli.ai2 == Some(0) {
        bail!("AI search depth must be at least 1");
    }
    let mut board = Board::new(cli.cols, cli.height)
        .with_context(|| format!("cannot build a {}x{} board", cli.cols, cli.height))?;

    let mut search = AlphaBetaSearch::new();
    let mut current = Player::One;

    render(&board);

    loop {
        let depth = match current {
            Player::One => cli.ai1,
            Player::Two => cli.ai2,
        };
        let col = match depth {
            Some(depth) => ai_input(&mut search, &mut board, current, depth),
            None => human_input(current)?,
        };

        // out-of-range and full columns just re-prompt, like any other
        // invalid input
        let Some(col) = col else { continue };
        if col >= board.cols() || board.is_column_full(col) {
            continue;
        }
        board.apply_move(current, col)?;

        if let Some(winner) = board.winner() {
            println!("Player {} won!", winner.symbol());
            render(&board);
            break;
        }
        if board.is_full() {
            println!("It's a draw!");
            render(&board);
            break;
        }

        current = current.other();
        render(&board);
    }

    Ok(())
}

/// Prompt the player for a column, re-prompting until a number parses.
/// Range and fullness are validated by the game loop afterwards.
fn human_input(player: Player) -> Result<Option<usize>> {
    let stdin = io::stdin();
    loop {
        print!("Player {} input:\n> ", player.symbol());
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        stdin
            .read_line(&mut line)
            .context("failed to read from stdin")?;

        match line.trim().parse::<usize>() {
            Ok(col) => return Ok(Some(col)),
            Err(_) => println!("Invalid column: {}", line.trim()),
        }
    }
}

/// Run the search for the current position and report its diagnostics:
/// the explored value of each candidate column, then the chosen move.
fn ai_input(
    search: &mut AlphaBetaSearch,
    board: &mut Board,
    player: Player,
    depth: usize,
) -> Option<usize> {
    println!("AI {}: thinking...", player.symbol());

    let result = search.choose_move(board, depth, player);

    let scores: Vec<String> = result
        .root_scores
        .iter()
        .map(|(col, value)| format!("{col}: {value}"))
        .collect();
    println!("AI {}: move: value, {}", player.symbol(), scores.join(", "));
    if let Some(col) = result.column {
        println!(
            "AI {}: MOVE {}, VALUE {}",
            player.symbol(),
            col,
            result.value
        );
    }

    result.column
}

/// Print the board, top row first, with a column-index footer.
fn render(board: &Board) {
    for row in (0..board.height()).rev() {
        print!("{row} ");
        for col in 0..board.cols() {
            let disc = match board.cell(col, row) {
                Cell::One => "X".with(Color::Red),
                Cell::Two => "O".with(Color::Yellow),
                Cell::Empty => " ".with(Color::Reset),
            };
            print!("|{disc}");
        }
        println!("|");
    }

    print!("  ");
    for col in 0..board.cols() {
        print!(" {col}");
    }
    println!();
}
