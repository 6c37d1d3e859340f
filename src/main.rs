//! Handbook QA: employee handbook question answering service
//!
//! Segments an uploaded handbook into sections, ranks section relevance
//! against each question, and answers via a language model backend.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use handbook_qa::{
    answer::AnswerService,
    client::HandbookClient,
    config::{init_logging, Config},
    content,
    corpus::{Corpus, CorpusSource, CorpusStore},
    feedback::FeedbackStore,
    http::{AppState, HttpServer},
    llm::OpenAiChat,
    segment,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "handbook-qa")]
#[command(about = "Employee handbook question answering service")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "handbook-qa.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve,

    /// Extract and segment a document locally, printing the section table
    Inspect {
        /// Path to a PDF or text document
        path: PathBuf,
    },

    /// Ask a question against a running server
    Ask {
        /// The question to ask
        question: String,

        /// Server base URL
        #[arg(short, long, default_value = "http://127.0.0.1:3001")]
        server: String,
    },

    /// Show handbook status of a running server
    Status {
        /// Server base URL
        #[arg(short, long, default_value = "http://127.0.0.1:3001")]
        server: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;
    init_logging(&config.logging);

    match cli.command {
        Commands::Serve => serve(config).await,
        Commands::Inspect { path } => inspect(&path),
        Commands::Ask { question, server } => ask(&server, &question).await,
        Commands::Status { server } => status(&server).await,
    }
}

/// Run the HTTP service until ctrl-c
async fn serve(config: Config) -> Result<()> {
    info!("Starting handbook QA service");

    let store = Arc::new(CorpusStore::new());
    load_default_handbook(&config, &store);

    let model = Arc::new(OpenAiChat::new(config.answer.clone())?);
    let answers = Arc::new(AnswerService::new(
        store.clone(),
        model,
        config.taxonomy.clone(),
        config.ranking.clone(),
    ));

    let config = Arc::new(config);
    let state = AppState {
        config: config.clone(),
        store,
        answers,
        feedback: Arc::new(FeedbackStore::new()),
    };

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", e);
            return;
        }
        info!("Shutdown signal received");
        let _ = shutdown_tx.send(());
    });

    let server = HttpServer::new(config.server.clone(), state);
    server.run(shutdown_rx).await
}

/// Load the configured default handbook, if any. Failures are logged and
/// the service starts with an empty corpus.
fn load_default_handbook(config: &Config, store: &CorpusStore) {
    let Some(path) = &config.corpus.default_document else {
        return;
    };
    if !path.exists() {
        warn!("Default handbook '{}' does not exist, skipping", path.display());
        return;
    }

    info!("Loading default handbook from {}", path.display());
    match content::extract_from_path(path) {
        Ok(text) => {
            let sections = segment::segment(&text);
            info!("Default handbook loaded with {} sections", sections.len());
            let content_len = text.len();
            store.replace(Corpus::new(sections, CorpusSource::Default, content_len));
        }
        Err(e) => {
            error!("Error loading default handbook: {:#}", e);
        }
    }
}

/// Segment a local document and print its section table
fn inspect(path: &PathBuf) -> Result<()> {
    let text = content::extract_from_path(path)
        .with_context(|| format!("Failed to process '{}'", path.display()))?;
    let sections = segment::segment(&text);

    println!("{} sections from {} bytes of text\n", sections.len(), text.len());
    for (i, section) in sections.iter().enumerate() {
        println!("{:>3}. {} ({} bytes)", i + 1, section.title, section.content.len());
    }
    Ok(())
}

/// Ask a question against a running server
async fn ask(server: &str, question: &str) -> Result<()> {
    let client = HandbookClient::new(server);
    let response = client.ask(question).await?;

    println!("{}\n", response.answer);
    if !response.used_sections.is_empty() {
        println!("Sections used: {}", response.used_sections.join(", "));
    }
    Ok(())
}

/// Print the handbook status of a running server
async fn status(server: &str) -> Result<()> {
    let client = HandbookClient::new(server);
    let status = client.status().await?;

    if status.has_handbook {
        println!(
            "Handbook loaded: {} sections{}",
            status.sections,
            if status.is_default_handbook {
                " (default document)"
            } else {
                ""
            }
        );
        for title in &status.section_titles {
            println!("  - {}", title);
        }
    } else {
        println!("No handbook loaded");
    }
    Ok(())
}
