//! Command-line word search generator.
//!
//! Generates one puzzle from `--word` arguments, or a batch from a puzzle definitions file,
//! and prints the grids and their solutions as text or JSON.
//!
//! # Usage
//!
//! ```sh
//! wordsearch --title Pets --word cat --word dog --word parrot --size 8
//! ```
//!
//! Generate every puzzle of a definitions file with all eight directions, reproducibly:
//!
//! ```sh
//! wordsearch puzzles.json --seed-phrase "issue 12" --format json -o puzzles.out.json
//! ```
//!
//! Restrict placements to left-to-right, top-to-bottom and the down-right diagonal:
//!
//! ```sh
//! wordsearch puzzles.json --basic
//! ```
//!
//! Set `RUST_LOG=debug` to log every placement.

use std::{
    fs,
    io::{self, Write as _},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use wordsearch_core::{Alphabet, Mode};
use wordsearch_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleRequest, PuzzleSeed};

use self::{dto::GeneratedPuzzleDto, dto::PuzzleBookDto, error::CliError};

mod book;
mod dto;
mod error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle definitions file (`{"puzzles": [{"title", "words", "size"}]}`).
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Title of the puzzle built from `--word`.
    #[arg(long, default_value = "Word Search")]
    title: String,

    /// Word to hide. Repeatable.
    #[arg(short, long = "word", value_name = "WORD")]
    words: Vec<String>,

    /// Grid side length, for puzzles that do not set their own.
    #[arg(long, default_value_t = PuzzleRequest::DEFAULT_SIZE, allow_negative_numbers = true)]
    size: i64,

    /// Only place words left-to-right, top-to-bottom and down-right.
    #[arg(short, long)]
    basic: bool,

    /// Base seed as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "seed_phrase")]
    seed: Option<PuzzleSeed>,

    /// Derive the base seed from a phrase.
    #[arg(long, value_name = "TEXT")]
    seed_phrase: Option<String>,

    /// Letters used for filling (default `A`-`Z`).
    #[arg(long, value_name = "LETTERS")]
    alphabet: Option<Alphabet>,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,

    /// Write to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl Args {
    fn mode(&self) -> Mode {
        if self.basic {
            Mode::Basic
        } else {
            Mode::Advanced
        }
    }

    fn base_seed(&self) -> PuzzleSeed {
        match (&self.seed, &self.seed_phrase) {
            (Some(seed), _) => *seed,
            (None, Some(phrase)) => PuzzleSeed::from_phrase(phrase),
            (None, None) => PuzzleSeed::random(),
        }
    }

    fn requests(&self) -> Result<Vec<PuzzleRequest>, CliError> {
        let mut requests = vec![];
        if let Some(path) = &self.input {
            let text = fs::read_to_string(path).map_err(|source| CliError::ReadInput {
                path: path.clone(),
                source,
            })?;
            let book: PuzzleBookDto =
                serde_json::from_str(&text).map_err(|source| CliError::ParseInput {
                    path: path.clone(),
                    source,
                })?;
            requests.extend(
                book.puzzles
                    .into_iter()
                    .map(|puzzle| puzzle.into_request(self.size, self.mode())),
            );
        }
        if !self.words.is_empty() {
            requests.push(
                PuzzleRequest::new(self.title.clone(), self.words.iter().cloned())
                    .with_size(self.size)
                    .with_mode(self.mode()),
            );
        }
        if requests.is_empty() {
            return Err(CliError::NoInput);
        }
        Ok(requests)
    }
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let requests = args.requests()?;
    let generator = args
        .alphabet
        .clone()
        .map_or_else(PuzzleGenerator::new, PuzzleGenerator::with_alphabet);
    let base = args.base_seed();
    log::info!("generating {} puzzle(s) from seed {base}", requests.len());

    let results = book::generate_book(&generator, &requests, base);
    let puzzles = book::keep_generated(&requests, results);
    if puzzles.is_empty() {
        return Err(CliError::NothingGenerated);
    }

    let rendered = match args.format {
        OutputFormat::Text => render_text(base, &puzzles),
        OutputFormat::Json => render_json(&puzzles)?,
    };
    match &args.output {
        Some(path) => fs::write(path, rendered)?,
        None => io::stdout().lock().write_all(rendered.as_bytes())?,
    }
    Ok(())
}

fn render_text(base: PuzzleSeed, puzzles: &[GeneratedPuzzle]) -> String {
    let mut out = format!("Seed:\n\t{base}\n\n");
    for generated in puzzles {
        let puzzle = &generated.puzzle;
        out.push_str(&format!(
            "{}\n{}\n",
            puzzle.display_grid(),
            puzzle.display_solution()
        ));
    }
    out
}

fn render_json(puzzles: &[GeneratedPuzzle]) -> Result<String, CliError> {
    let dtos = puzzles
        .iter()
        .map(GeneratedPuzzleDto::from)
        .collect::<Vec<_>>();
    let mut json = serde_json::to_string_pretty(&dtos)?;
    json.push('\n');
    Ok(json)
}
