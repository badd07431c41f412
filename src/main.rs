//! pagetalk CLI
//!
//! Commands:
//!   (none) - interactive chat with a configured document
//!   ask    - one-shot question against a document
//!   chunks - preview a document's chunks
//!   docs   - list configured documents
//!   add    - add a document to the library
//!   remove - remove a document from the library

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pagetalk::{handle_turn, load_document, ChatRepl, CohereProvider, Config, Conversation};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagetalk")]
#[command(about = "Chat with a PDF from the terminal")]
#[command(version)]
struct Cli {
    /// Document to talk to (a logical name from the library)
    #[arg(short, long)]
    doc: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question and print the reply
    Ask {
        /// The question to ask
        message: String,
    },

    /// Preview the chunks of a document
    Chunks,

    /// List configured documents
    Docs,

    /// Add a document to the library
    Add {
        /// Logical name for the document
        name: String,

        /// Path to the PDF file
        path: PathBuf,
    },

    /// Remove a document from the library
    Remove {
        /// Logical name to remove
        name: String,
    },
}

/// Read the Cohere API key from the environment.
fn api_key() -> Result<String> {
    std::env::var("COHERE_API_KEY").context(
        "COHERE_API_KEY is not set. Get a key at https://dashboard.cohere.com/api-keys",
    )
}

/// Pick the document to use: the --doc flag if given, otherwise the sole
/// configured document. An ambiguous or empty library is an error, never a
/// silent default.
fn select_document(config: &Config, requested: Option<String>) -> Result<String> {
    if let Some(name) = requested {
        config.resolve(&name)?;
        return Ok(name);
    }

    let mut names = config.documents.keys();
    match (names.next(), names.next()) {
        (Some(only), None) => Ok(only.clone()),
        (None, _) => bail!("No documents configured. Add one with 'pagetalk add <name> <path>'."),
        (Some(_), Some(_)) => {
            let known: Vec<&str> = config.documents.keys().map(String::as_str).collect();
            bail!(
                "Multiple documents configured, pick one with --doc: {}",
                known.join(", ")
            );
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let config = Config::load_or_default()?;
            config.validate()?;

            let doc = select_document(&config, cli.doc)?;
            let provider = CohereProvider::new(api_key()?, config.model.clone());

            let mut repl = ChatRepl::new(config, Box::new(provider), &doc)?;
            repl.run().await?;
        }

        Some(Commands::Ask { message }) => {
            let config = Config::load_or_default()?;
            config.validate()?;

            let doc = select_document(&config, cli.doc)?;
            let documents = load_document(&config, &doc)?;
            let provider = CohereProvider::new(api_key()?, config.model.clone());

            let mut conversation = Conversation::new();
            let reply = handle_turn(&provider, &mut conversation, &documents, &message).await?;

            println!("{}", reply);
        }

        Some(Commands::Chunks) => {
            let config = Config::load_or_default()?;
            config.validate()?;

            let doc = select_document(&config, cli.doc)?;
            let documents = load_document(&config, &doc)?;

            for chunk in &documents {
                println!("{}  ({} chars)", chunk.title, chunk.snippet.chars().count());
            }
            println!("\n{} chunks from '{}'", documents.len(), doc);
        }

        Some(Commands::Docs) => {
            let config = Config::load_or_default()?;

            if config.documents.is_empty() {
                println!("No documents configured. Use 'pagetalk add <name> <path>'.");
            } else {
                for (name, path) in &config.documents {
                    println!("{}  {}", name, path);
                }
            }
        }

        Some(Commands::Add { name, path }) => {
            if !path.is_file() {
                bail!("{} is not a file", path.display());
            }

            let mut config = Config::load_or_default()?;
            config
                .documents
                .insert(name.clone(), path.to_string_lossy().to_string());
            config.save()?;

            println!("Added '{}' -> {}", name, path.display());
        }

        Some(Commands::Remove { name }) => {
            let mut config = Config::load_or_default()?;

            if config.documents.remove(&name).is_none() {
                let known: Vec<&str> = config.documents.keys().map(String::as_str).collect();
                bail!("No document named '{}' (known: {})", name, known.join(", "));
            }
            config.save()?;

            println!("Removed '{}'", name);
        }
    }

    Ok(())
}
