mod input;
mod render;

use clap::{Parser, Subcommand};
use hangman::*;
use input::Input;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_WORDS: &str = include_str!("../../data/words.txt");

/// Play Hangman in the terminal: guess the letters of a hidden word before the drawing is
/// complete.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line. If
    /// omitted, a built-in word list is used.
    #[arg(short = 'f', long)]
    words_file: Option<PathBuf>,

    /// Seed for choosing words, to make games reproducible.
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter to use when `RUST_LOG` is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play an interactive game. This is the default.
    Play,
    /// Replay a single game with the given word and guesses, and print the outcome.
    Single { word: String, guesses: String },
}

fn main() -> Result<(), HangmanError> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let result = run(args);
    if let Err(err) = &result {
        error!(%err, "hangman failed");
    }
    result
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), HangmanError> {
    match args.command.unwrap_or(Command::Play) {
        Command::Play => {
            let word_bank = load_word_bank(args.words_file.as_deref())?;
            info!(num_words = word_bank.len(), "loaded word bank");
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            play_interactive_game(&word_bank, &mut rng)?;
        }
        Command::Single { word, guesses } => play_single_game(&word, &guesses)?,
    }
    Ok(())
}

fn load_word_bank(words_file: Option<&Path>) -> Result<WordBank, HangmanError> {
    match words_file {
        Some(path) => {
            info!(path = %path.display(), "reading word list");
            WordBank::from_reader(io::BufReader::new(File::open(path)?))
        }
        None => WordBank::from_reader(DEFAULT_WORDS.as_bytes()),
    }
}

fn play_interactive_game(word_bank: &WordBank, rng: &mut StdRng) -> io::Result<()> {
    let mut state = GameState::initialize(word_bank, rng);
    println!("{}\n\n{}\n", render::HINT, render::render_game(&state));

    for line in io::stdin().lock().lines() {
        let event = match input::parse_line(&line?) {
            Input::Event(event) => event,
            Input::Quit => break,
            Input::Ignored => {
                println!("{}", render::HINT);
                continue;
            }
        };
        state = state.apply(event, word_bank, rng);
        println!("{}\n", render::render_game(&state));
    }

    Ok(())
}

fn play_single_game(word: &str, guesses: &str) -> Result<(), HangmanError> {
    let word = Word::from_str(word)?;
    let state = guesses
        .chars()
        .filter_map(input::parse_key)
        .fold(GameState::new(word), GameState::guess_letter);

    println!("{}\n", render::render_game(&state));
    match state.status() {
        GameStatus::Won => println!(
            "Solved it with {} incorrect guesses.",
            state.incorrect_letters().len()
        ),
        GameStatus::Lost => println!(
            "Lost after {} guesses.",
            state.guessed_letters().len()
        ),
        GameStatus::InProgress => println!(
            "Still playing: {} incorrect guesses left.",
            state.remaining_guesses()
        ),
    }
    Ok(())
}
