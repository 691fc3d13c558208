use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use budget_tracker::cli::{
    handle_config_command, handle_entry_command, handle_list_command, handle_summary_command,
    run_shell, EntryCommands, EntryKind, Session, TerminalInput,
};
use budget_tracker::config::logging::init_tracing;
use budget_tracker::config::paths::{BudgetPaths, DATA_DIR_ENV};

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Mason Riegel",
    version,
    about = "Personal budget tracker for income and expenses",
    long_about = "Records income and expense entries, saves them after every change, \
                  and reports totals, balance and a per-month net summary."
)]
struct Cli {
    /// Directory holding budget_data.json and config.json
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    #[command(alias = "menu")]
    Shell,

    /// Income commands
    #[command(subcommand)]
    Income(EntryCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(EntryCommands),

    /// Show totals, balance and the monthly summary
    Summary {
        /// Also export the summary to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List all income and expense entries
    #[command(alias = "ls")]
    List,

    /// Show paths and settings, writing a default config.json if missing
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => BudgetPaths::with_base_dir(dir),
        None => BudgetPaths::new()?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut session = Session::open(&paths, &mut out)?;

    match cli.command {
        None | Some(Commands::Shell) => {
            let mut input = TerminalInput::new()?;
            run_shell(&mut session, &mut input, &mut out)?;
        }
        Some(Commands::Income(cmd)) => {
            handle_entry_command(&mut session, EntryKind::Income, cmd, &mut out)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_entry_command(&mut session, EntryKind::Expense, cmd, &mut out)?;
        }
        Some(Commands::Summary { output }) => {
            handle_summary_command(&session, output.as_deref(), &mut out)?;
        }
        Some(Commands::List) => {
            handle_list_command(&session, &mut out)?;
        }
        Some(Commands::Config) => {
            handle_config_command(&session, &paths, &mut out)?;
        }
    }

    Ok(())
}
