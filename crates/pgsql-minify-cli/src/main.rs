//! pgsql-minify CLI
//!
//! Command-line tool for minifying and tokenizing SQL statements.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use pgsql_minify_cli::{input, output, Config};
use pgsql_minify_core::{scan_with, Minifier};

/// Minify and tokenize Postgres SQL statements.
#[derive(Parser)]
#[command(name = "pgsql-minify")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON config file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Whitespace-separated keyword list replacing the default set.
    #[arg(short, long, global = true)]
    keywords: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true, env = "PGSQL_MINIFY_VERBOSE")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the minified statement.
    Minify {
        /// Statement file (stdin if not specified).
        file: Option<PathBuf>,

        /// Keep comments as `/* ... */`.
        #[arg(long)]
        comments: bool,

        /// Drop the trailing semicolon.
        #[arg(long)]
        no_trailing_semicolon: bool,
    },

    /// Print the token stream.
    Tokens {
        /// Statement file (stdin if not specified).
        file: Option<PathBuf>,

        /// Print tokens as a JSON array.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(path) = &cli.keywords {
        config.keywords = Some(input::read_keywords(path)?);
    }

    match cli.command {
        Commands::Minify {
            file,
            comments,
            no_trailing_semicolon,
        } => {
            if comments {
                config.include_comments = true;
            }
            if no_trailing_semicolon {
                config.include_trailing_semicolon = false;
            }
            debug!(?config, "minifying");

            let sql = input::read_statement(file.as_deref())?;
            let options = config.minify_options();
            println!("{}", Minifier::new(&options).minify(&sql));
        }

        Commands::Tokens { file, json } => {
            let sql = input::read_statement(file.as_deref())?;
            let tokens = scan_with(&sql, &config.scan_options());
            debug!(count = tokens.len(), "scanned statement");
            if json {
                println!("{}", output::token_json(&tokens)?);
            } else {
                print!("{}", output::token_lines(&tokens));
            }
        }
    }

    Ok(())
}
