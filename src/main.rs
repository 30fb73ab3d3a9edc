mod api;
mod corpus;
mod engine;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use api::{ChatRequest, ChatService, RequestKind};

#[derive(Parser)]
#[command(name = "frontdesk", version, about = "Patient-question assistant for the practice")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer a single message and print the JSON reply
    Ask {
        /// Patient message, any supported language
        message: String,
        /// Use the expanded-information path instead of corpus matching
        #[arg(long)]
        evidence: bool,
        /// Directory of pre-extracted document text files
        #[arg(long)]
        docs_dir: Option<PathBuf>,
    },
    /// Read JSON-line requests on stdin, write JSON-line replies on stdout
    Serve {
        /// Directory of pre-extracted document text files
        #[arg(long)]
        docs_dir: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("frontdesk=info".parse()?),
        )
        .init();

    match Cli::parse().command {
        Command::Ask {
            message,
            evidence,
            docs_dir,
        } => {
            let service = ChatService::new(resolve_docs_dir(docs_dir).as_deref());
            let kind = if evidence {
                RequestKind::OpenEvidence
            } else {
                RequestKind::Normal
            };
            let reply = service.handle(&ChatRequest { message, kind });
            println!("{}", serde_json::to_string(&reply)?);
        }
        Command::Serve { docs_dir } => {
            let service = ChatService::new(resolve_docs_dir(docs_dir).as_deref());
            info!("serving JSON-line requests on stdin");
            let stdin = io::stdin().lock();
            let mut stdout = io::stdout().lock();
            for line in stdin.lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                let reply = service.handle_json(&line);
                serde_json::to_writer(&mut stdout, &reply)?;
                stdout.write_all(b"\n")?;
                stdout.flush()?;
            }
            info!("stdin closed, stopping");
        }
    }
    Ok(())
}

/// CLI flag first, `FRONTDESK_DOCS_DIR` as the fallback.
fn resolve_docs_dir(flag: Option<PathBuf>) -> Option<PathBuf> {
    flag.or_else(|| std::env::var_os("FRONTDESK_DOCS_DIR").map(PathBuf::from))
}
