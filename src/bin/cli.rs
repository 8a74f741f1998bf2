use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, warn};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use flatdb::common::types::DEFAULT_ROOT_DIR;
use flatdb::query::script::StatementReader;
use flatdb::session::unterminated;
use flatdb::{EngineConfig, Session};

const HISTORY_FILE: &str = ".flatdb_history";

/// Printed once input is exhausted or `.EXIT` is read
const FAREWELL: &str = "All done.";

#[derive(Parser)]
#[command(author, version, about = "FlatDB CLI - A tool for interacting with flat-file databases")]
struct Cli {
    /// Directory holding one sub-directory per database
    #[arg(short, long, default_value = DEFAULT_ROOT_DIR)]
    root: PathBuf,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive shell (reads standard input when it is not a terminal)
    Shell,

    /// Execute the statements in a script file
    Run {
        /// Script to execute
        script: PathBuf,
    },

    /// Execute a single statement directly
    Query {
        /// Statement to execute
        query: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = EngineConfig::with_root(&cli.root);
    let mut session = Session::open(config)
        .with_context(|| format!("Failed to open database root {}", cli.root.display()))?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            if io::stdin().is_terminal() {
                run_shell(&mut session)?;
            } else {
                session
                    .run(io::stdin().lock(), &mut io::stdout().lock())
                    .context("Failed to read statements from standard input")?;
            }
            println!("{}", FAREWELL);
        }
        Commands::Run { script } => {
            let file = File::open(&script).with_context(|| format!("Failed to open script {}", script.display()))?;
            session
                .run(BufReader::new(file), &mut io::stdout().lock())
                .with_context(|| format!("Failed to run script {}", script.display()))?;
            println!("{}", FAREWELL);
        }
        Commands::Query { query } => {
            let query = query.trim();
            let query = query.strip_suffix(';').unwrap_or(query);
            print_lines(&session.execute(query))?;
        }
    }

    Ok(())
}

fn run_shell(session: &mut Session) -> Result<()> {
    let mut rl = Editor::<(), DefaultHistory>::new()?;
    if let Err(err) = rl.load_history(HISTORY_FILE) {
        debug!("No history loaded: {}", err);
    }

    let mut reader = StatementReader::new();
    while !session.is_finished() {
        let prompt = if reader.is_pending() { "   ...> " } else { "flatdb> " };
        match rl.readline(prompt) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                if let Some(statement) = reader.push_line(&line) {
                    print_lines(&session.execute(&statement))?;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                if let Some(rest) = reader.take_pending() {
                    print_lines(&unterminated(rest).to_lines())?;
                }
                break;
            }
            Err(err) => return Err(err).context("Failed to read input"),
        }
    }

    if let Err(err) = rl.save_history(HISTORY_FILE) {
        warn!("Error saving history: {}", err);
    }
    Ok(())
}

fn print_lines(lines: &[String]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{}", line)?;
    }
    stdout.flush()?;
    Ok(())
}
