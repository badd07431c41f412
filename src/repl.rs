//! Interactive chat mode for pagetalk.
//!
//! A plain line-oriented loop: messages go to the model with the selected
//! document's chunks as grounding context, slash commands manage the
//! session. Chunks are computed once per document selection and reused
//! across turns.

use anyhow::Result;
use colored::*;
use indicatif::ProgressBar;
use std::io::{self, Write};
use std::time::Duration;

use crate::chunking::Chunk;
use crate::config::Config;
use crate::llm::ChatProvider;
use crate::session::{handle_turn, Conversation, GREETING};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Command definition with name and description
struct Command {
    name: &'static str,
    description: &'static str,
}

const COMMANDS: &[Command] = &[
    Command { name: "/doc", description: "Switch document: /doc <name>" },
    Command { name: "/docs", description: "List configured documents" },
    Command { name: "/chunks", description: "Preview the current document's chunks" },
    Command { name: "/clear", description: "Clear screen" },
    Command { name: "/help", description: "Show this help" },
    Command { name: "/exit", description: "Exit" },
];

/// Split a command line into its name and argument.
fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    }
}

/// Interactive chat session over one selected document.
pub struct ChatRepl {
    config: Config,
    provider: Box<dyn ChatProvider>,
    doc_name: String,
    documents: Vec<Chunk>,
    conversation: Conversation,
}

impl ChatRepl {
    /// Build a session for `doc_name`, extracting and chunking it up front.
    pub fn new(config: Config, provider: Box<dyn ChatProvider>, doc_name: &str) -> Result<Self> {
        let documents = crate::load_document(&config, doc_name)?;

        Ok(Self {
            config,
            provider,
            doc_name: doc_name.to_string(),
            documents,
            conversation: Conversation::new(),
        })
    }

    /// Run the loop until `/exit` or EOF.
    pub async fn run(&mut self) -> Result<()> {
        self.print_banner();
        println!("{} {}", "assistant".green().bold(), GREETING);
        println!();

        let stdin = io::stdin();
        loop {
            print!("{} ", ">".cyan());
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.read_line(&mut line)? == 0 {
                // EOF (ctrl-d)
                println!();
                break;
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if line.starts_with('/') {
                if !self.handle_command(line)? {
                    break;
                }
                continue;
            }

            self.chat(line).await;
        }

        Ok(())
    }

    fn print_banner(&self) {
        println!();
        println!(
            "  {} v{}  {}",
            "pagetalk".green().bold(),
            VERSION,
            "Personal document assistant".dimmed()
        );
        println!(
            "  {} {}  {}",
            "Document:".dimmed(),
            self.doc_name.white(),
            format!("({} chunks)", self.documents.len()).dimmed()
        );
        println!("  {}", "Type /help for commands.".dimmed());
        println!();
    }

    /// Send one message through the model, printing the reply or the error.
    async fn chat(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner.set_message("thinking...");

        let result = handle_turn(
            self.provider.as_ref(),
            &mut self.conversation,
            &self.documents,
            message,
        )
        .await;

        spinner.finish_and_clear();

        match result {
            Ok(reply) => {
                println!("{} {}", "assistant".green().bold(), reply);
                println!();
            }
            Err(err) => {
                eprintln!("{} {:#}", "error:".red().bold(), err);
                println!();
            }
        }
    }

    /// Handle a slash command. Returns false when the loop should stop.
    fn handle_command(&mut self, line: &str) -> Result<bool> {
        let (name, arg) = split_command(line);

        match name {
            "/doc" => {
                if arg.is_empty() {
                    println!("Usage: /doc <name>");
                } else {
                    self.switch_document(arg);
                }
            }
            "/docs" => {
                for (doc, path) in &self.config.documents {
                    let marker = if doc == &self.doc_name { " ← current" } else { "" };
                    println!("  {} {}{}", doc.white(), path.dimmed(), marker.dimmed());
                }
            }
            "/chunks" => {
                for chunk in &self.documents {
                    println!(
                        "  {}  {}",
                        chunk.title.white(),
                        format!("({} chars)", chunk.snippet.chars().count()).dimmed()
                    );
                }
                println!("  {} chunks total", self.documents.len());
            }
            "/clear" => {
                print!("\x1b[2J\x1b[H");
                io::stdout().flush()?;
                self.print_banner();
            }
            "/help" => {
                println!();
                for cmd in COMMANDS {
                    println!("  {:<10} {}", cmd.name.white(), cmd.description.dimmed());
                }
                println!();
            }
            "/exit" | "/quit" => return Ok(false),
            _ => {
                println!("Unknown command: {}. Type /help for commands.", name);
            }
        }

        Ok(true)
    }

    /// Switch to another configured document: re-extract, re-chunk, and
    /// start a fresh conversation. On failure the current session stays.
    fn switch_document(&mut self, name: &str) {
        match crate::load_document(&self.config, name) {
            Ok(documents) => {
                self.doc_name = name.to_string();
                self.documents = documents;
                self.conversation = Conversation::new();
                println!(
                    "Switched to '{}' ({} chunks). History cleared.",
                    name,
                    self.documents.len()
                );
            }
            Err(err) => {
                eprintln!("{} {}", "error:".red().bold(), err);
            }
        }
    }
}
