use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use quiz_forge::{Config, FileStorage, QuizError, Storage, decode_all, logging};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Text file the questions are stored in
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// TOML config file (defaults to ./quiz-forge.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write new questions and edit the question file
    Author,
    /// Take the quiz in random order
    Take {
        /// Seed for a repeatable question order
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Report how many questions load and which blocks are malformed
    Check,
    /// Count the question blocks in the file
    Count,
    /// Print the questions as JSON
    Export {
        #[arg(long)]
        pretty: bool,
    },
    /// Delete every question
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

impl Command {
    fn is_full_screen(&self) -> bool {
        matches!(self, Command::Author | Command::Take { .. })
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode, QuizError> {
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(file) = args.file {
        config.storage_path = file;
    }
    if let Some(log_file) = args.log_file {
        config.log_file = Some(log_file);
    }

    logging::init(
        args.verbose,
        logging::target(config.log_file.as_deref(), args.command.is_full_screen()),
    )?;
    info!(storage = %config.storage_path.display(), "starting");

    let mut storage = FileStorage::new(&config.storage_path);

    match args.command {
        Command::Author => quiz_forge::run_author(storage)?,
        Command::Take { seed } => {
            let rng = match seed.or(config.seed) {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            quiz_forge::run_taker(storage, rng)?;
        }
        Command::Check => {
            let decoded = decode_all(&storage.read()?);
            println!(
                "{}: {} questions loaded, {} malformed blocks",
                storage.location(),
                decoded.questions.len(),
                decoded.warning_count()
            );
            for warning in &decoded.warnings {
                println!("  {}", warning);
            }
            if decoded.warning_count() > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Count => println!("{}", storage.count_records()?),
        Command::Export { pretty } => {
            let decoded = decode_all(&storage.read()?);
            let json = if pretty {
                serde_json::to_string_pretty(&decoded.questions)?
            } else {
                serde_json::to_string(&decoded.questions)?
            };
            println!("{}", json);
        }
        Command::Clear { yes } => {
            if !yes {
                eprintln!(
                    "Refusing to delete every question in {} without --yes",
                    storage.location()
                );
                return Ok(ExitCode::FAILURE);
            }
            storage.truncate()?;
            println!("Cleared {}", storage.location());
        }
    }

    Ok(ExitCode::SUCCESS)
}
