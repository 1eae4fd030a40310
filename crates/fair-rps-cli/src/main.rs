//! Terminal front end for the fair RPS protocol.
//!
//! Thin glue around `fair-rps-core`: argument parsing, the interactive
//! menu loop, and rendering. The commitment is printed before the prompt
//! so the player can hold the computer to its move.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use fair_rps_core::{CommittedRound, FairRound, MoveSet, OutcomeTable};
use rand::rngs::OsRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Provably fair generalized rock-paper-scissors.
///
/// Pass an odd number (at least 3) of distinct move names in beat order:
/// each move beats the half of the list that follows it cyclically.
#[derive(Parser, Debug)]
#[command(name = "fair-rps")]
struct Args {
    /// Move names, e.g. Rock Paper Scissors
    #[arg(required = true, num_args = 1..)]
    moves: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let moves = MoveSet::new(args.moves).context(
        "please provide an odd number of non-repeating moves,\n\
         for example: fair-rps Rock Paper Scissors",
    )?;
    debug!(%moves, "starting round");

    let round = FairRound::new(moves)
        .commit(&mut OsRng)
        .context("failed to commit the computer's move")?;
    println!("HMAC: {}", round.commitment());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print_menu(round.moves());

    loop {
        print!("Enter your choice: ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                println!("\nExiting the game.");
                return Ok(());
            }
        };

        match parse_choice(line.trim(), round.moves().len()) {
            Choice::Exit => {
                println!("Exiting the game.");
                return Ok(());
            }
            Choice::Help => {
                println!("\nHelp Table:");
                print!("{}", OutcomeTable::build(round.moves()));
                print_menu(round.moves());
            }
            Choice::Move(index) => {
                settle(round, index);
                return Ok(());
            }
            Choice::Invalid(message) => println!("{message}"),
        }
    }
}

enum Choice {
    Move(usize),
    Exit,
    Help,
    Invalid(&'static str),
}

/// Map one input line to a menu action. Anything invalid re-prompts
/// without ever reaching the core.
fn parse_choice(input: &str, n: usize) -> Choice {
    if input == "?" {
        return Choice::Help;
    }
    match input.parse::<usize>() {
        Ok(0) => Choice::Exit,
        Ok(choice) if choice <= n => Choice::Move(choice - 1),
        Ok(_) => Choice::Invalid("Invalid choice. Please enter a valid number."),
        Err(_) => Choice::Invalid("Invalid input. Please enter a number."),
    }
}

fn print_menu(moves: &MoveSet) {
    println!("Menu:");
    for (i, name) in moves.iter().enumerate() {
        println!("{} - {}", i + 1, name);
    }
    println!("0 - Exit");
    println!("? - Help");
}

fn settle(round: CommittedRound, player_index: usize) {
    let result = round.reveal(player_index);
    debug!(verified = result.verified(), "round revealed");

    println!("Your move: {}", result.player_move);
    println!("Computer's move: {}", result.computer_move);
    println!("Key: {}", result.key.to_hex());
    println!("Result: {}", result.verdict);
}
