//! Bookshelf CLI - terminal front end for the book inventory

mod commands;
mod render;

use anyhow::Result;
use bookshelf_core::config::DEFAULT_API_URL;
use bookshelf_core::ClientConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Server root the book API lives under
    #[arg(long, global = true, env = "BOOKSHELF_API_URL", default_value = DEFAULT_API_URL)]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all books in the inventory
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find a book by ID
    Get {
        /// Book ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new book
    Add {
        /// Book ID
        #[arg(long)]
        id: Option<String>,

        #[command(flatten)]
        fields: commands::BookArgs,
    },

    /// Update an existing book
    Update {
        /// ID of the book to update
        #[arg(long)]
        id: String,

        #[command(flatten)]
        fields: commands::BookArgs,
    },

    /// Delete a book
    Delete {
        /// Book ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Manage the inventory interactively
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookshelf_cli=debug,bookshelf_core=debug"
    } else {
        "bookshelf_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = ClientConfig::from_env()?;
    config.url = cli.url;

    match cli.command {
        Commands::List { json } => commands::list(&config, json).await,

        Commands::Get { id, json } => commands::get(&config, &id, json).await,

        Commands::Add { id, fields } => commands::add(&config, id, fields).await,

        Commands::Update { id, fields } => commands::update(&config, &id, fields).await,

        Commands::Delete { id, yes } => commands::delete(&config, &id, yes).await,

        Commands::Interactive => commands::interactive(&config).await,
    }
}
