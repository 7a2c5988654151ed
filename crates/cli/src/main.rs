//! Toolshed CLI - Catalog inspection and token tools.
//!
//! # Usage
//!
//! ```bash
//! # List the whole catalog, or one category
//! ts-cli catalog list
//! ts-cli catalog list -c paints
//!
//! # Search the catalog the way the API does
//! ts-cli catalog search berger
//!
//! # Show one product
//! ts-cli catalog show paint-001
//!
//! # Mint a bearer token for exercising the protected routes
//! ts-cli token mint -e dev@toolshed.example
//! ```
//!
//! # Commands
//!
//! - `catalog` - Inspect the bundled catalog content
//! - `token` - Mint development bearer tokens

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ts-cli")]
#[command(author, version, about = "Toolshed CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the catalog content
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Mint development tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products, optionally filtered by category
    List {
        /// Category key (paints, hardware, sanitary, electricals,
        /// tiling_solutions, misc)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Search products by substring
    Search {
        /// The query string
        query: String,
    },
    /// Show a single product by id
    Show {
        /// The product id (e.g., paint-001)
        id: String,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Mint a bearer token signed with the configured JWT secret
    Mint {
        /// Email to embed in the token claims
        #[arg(short, long)]
        email: String,

        /// User id to embed in the token claims
        #[arg(short, long, default_value = "user-cli")]
        user_id: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { category } => commands::catalog::list(category.as_deref())?,
            CatalogAction::Search { query } => commands::catalog::search(&query)?,
            CatalogAction::Show { id } => commands::catalog::show(&id)?,
        },
        Commands::Token { action } => match action {
            TokenAction::Mint { email, user_id } => commands::token::mint(&email, &user_id)?,
        },
    }
    Ok(())
}
