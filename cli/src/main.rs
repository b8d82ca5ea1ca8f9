mod session;

use anyhow::Result;
use clap::Parser;
use docqa_config::{load_dotenv, Config, Credentials, ErrorFormatter, API_KEY_VAR};
use docqa_context::{OpenAiChat, OpenAiEmbedder};
use docqa_pipeline::{build_index, collect_text, split_documents, RetrievalQa};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// Ask questions about your documents.
#[derive(Parser, Debug)]
#[command(name = "docqa", version, about)]
struct Cli {
    /// PDF, TXT or DOCX files to load
    #[arg(long, num_args = 1.., required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", console::style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    if let Some(path) = load_dotenv() {
        debug!("Loaded environment from {}", path.display());
    }
    let Some(credentials) = Credentials::from_env() else {
        println!("Error: {} not found in environment variables.", API_KEY_VAR);
        return Ok(ExitCode::FAILURE);
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", ErrorFormatter::new(&e).format());
            return Ok(ExitCode::FAILURE);
        }
    };

    let text = collect_text(&cli.files, &mut io::stdout())?;
    if text.trim().is_empty() {
        println!("No text extracted from the provided files.");
        return Ok(ExitCode::FAILURE);
    }

    let chunks = split_documents(&text, &config.chunking)?;
    println!("Number of chunks generated: {}", chunks.len());

    let embedder = match OpenAiEmbedder::new(&config.embedding, &credentials) {
        Ok(embedder) => embedder,
        Err(e) => {
            println!("Error vectorizing and storing data: {:#}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Embedding {} chunks...", chunks.len()));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let built = build_index(&chunks, &embedder);
    spinner.finish_and_clear();

    let index = match built {
        Ok(index) => index,
        Err(e) => {
            println!("Error vectorizing and storing data: {:#}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let chat = OpenAiChat::new(&config.llm, &credentials)?;
    info!("Answering with {} (top {})", chat.model(), config.retrieval.top_k);
    let qa = RetrievalQa::new(
        index,
        Box::new(embedder),
        Box::new(chat),
        config.retrieval.top_k,
    );

    println!("\nYou can now ask questions about the documents.");
    println!("Type 'exit' to quit.");

    let stdin = io::stdin();
    let end = session::run_session(&qa, stdin.lock(), &mut io::stdout())?;
    debug!("Session ended: {:?}", end);
    Ok(ExitCode::SUCCESS)
}
