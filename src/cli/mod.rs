//! Command-line surface: arguments, the game menu and the session loop.

pub mod terminal;

use std::io::Write;

use clap::Parser;
use rand::Rng;
use tracing::info;

use crate::{Difficulty, Game, Result};
use terminal::{LineSource, TerminalFrontend};

/// Play tic-tac-toe in the terminal against an easy, normal or unbeatable AI.
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe", version, about, long_about = None)]
pub struct Cli {
    /// Play a single game at this difficulty instead of showing the menu
    #[arg(short, long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Seed for the normal AI's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the greeting and the farewell
    #[arg(short, long)]
    pub quiet: bool,
}

/// A selection from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play(Difficulty),
    Exit,
}

pub const INTRO: &str = "\nGreetings, Professor Falken.\n\nShall we play a game?\n";

pub const GOODBYE: &str = "\nStrange game. The only winning move is not to play.\n";

const MENU: &str = "Choose a game mode
  1) New easy game
  2) New normal game
  3) New hard game
  4) Exit the game";

/// Reads a menu entry by number or by name.
pub fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    match input.trim().to_ascii_lowercase().as_str() {
        "1" | "easy" => Some(MenuChoice::Play(Difficulty::Easy)),
        "2" | "normal" => Some(MenuChoice::Play(Difficulty::Normal)),
        "3" | "hard" => Some(MenuChoice::Play(Difficulty::Hard)),
        "4" | "exit" | "quit" | "q" => Some(MenuChoice::Exit),
        _ => None,
    }
}

fn select_menu_choice<L, W>(lines: &mut L, out: &mut W) -> Result<MenuChoice>
where
    L: LineSource + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "{MENU}")?;
    loop {
        let Some(line) = lines.read_line("> ")? else {
            return Ok(MenuChoice::Exit);
        };
        match parse_menu_choice(&line) {
            Some(choice) => return Ok(choice),
            None => writeln!(out, "Pick 1-4.")?,
        }
    }
}

/// Plays one game. Returns false if the human walked away mid-game.
fn play_game<L, W, R>(
    difficulty: Difficulty,
    lines: &mut L,
    out: &mut W,
    rng: &mut R,
) -> Result<bool>
where
    L: LineSource + ?Sized,
    W: Write + ?Sized,
    R: Rng,
{
    let mut game = Game::new(difficulty);
    let mut frontend = TerminalFrontend::new(lines, out);
    frontend.show_tutorial()?;
    let conclusion = game.run(&mut frontend, rng)?;
    Ok(conclusion.is_some())
}

/// Runs the menu loop, or a single game when a difficulty was given.
pub fn run<L, W, R>(cli: &Cli, lines: &mut L, out: &mut W, rng: &mut R) -> Result<()>
where
    L: LineSource + ?Sized,
    W: Write + ?Sized,
    R: Rng,
{
    if !cli.quiet {
        writeln!(out, "{INTRO}")?;
    }

    if let Some(difficulty) = cli.difficulty {
        play_game(difficulty, lines, out, rng)?;
    } else {
        while let MenuChoice::Play(difficulty) = select_menu_choice(lines, out)? {
            if !play_game(difficulty, lines, out, rng)? {
                break;
            }
        }
    }

    info!("session finished");
    if !cli.quiet {
        writeln!(out, "{GOODBYE}")?;
    }
    Ok(())
}
