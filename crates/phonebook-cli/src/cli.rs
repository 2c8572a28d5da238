use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "phonebook")]
#[command(about = "A command-line phone book backed by a plain text file")]
#[command(version)]
pub struct Cli {
    /// Contact file (overrides PHONEBOOK_FILE and the config file)
    #[arg(long, global = true)]
    pub filename: Option<PathBuf>,

    /// Config file (defaults to ./phonebook.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log store operations to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show one page of contacts
    Display {
        /// Page number, starting at 1
        page: usize,

        /// Contacts per page (defaults to the configured page size)
        #[arg(long, alias = "page_size")]
        page_size: Option<usize>,

        /// Output as JSON for machine processing
        #[arg(long)]
        json: bool,
    },

    /// Append a contact ("Surname,Name,Patronymic,Organization,Work,Personal")
    Add {
        /// Contact line; when omitted, every line piped on stdin is added
        contact: Option<String>,
    },

    /// Replace every line equal to OLD with NEW
    Edit {
        /// Existing contact line, exactly as stored
        old: String,

        /// Replacement contact line
        new: String,
    },

    /// Find contacts matching all field=value criteria
    Search {
        /// Criteria such as фамилия=Иванов or организация=Orga
        criteria: Vec<String>,

        /// Output as JSON for machine processing
        #[arg(long)]
        json: bool,
    },

    /// Print a commented default config file
    Config,
}
