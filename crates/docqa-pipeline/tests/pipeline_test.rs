use anyhow::{anyhow, Result};
use docqa_config::ChunkingConfig;
use docqa_core::models::{ChatMessage, Role};
use docqa_core::traits::{ChatModel, Embedder};
use docqa_pipeline::{
    build_index, collect_text, split_documents, Answerer, RetrievalQa, ANSWER_FAILED,
};
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use tempfile::TempDir;

const TOPICS: [&str; 4] = ["rust", "python", "cooking", "gardening"];

/// One axis per known topic word.
struct TopicEmbedder;

impl Embedder for TopicEmbedder {
    fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts
            .iter()
            .map(|t| {
                let lower = t.to_lowercase();
                TOPICS
                    .iter()
                    .map(|w| if lower.contains(w) { 1.0 } else { 0.0 })
                    .collect()
            })
            .collect())
    }
}

struct BrokenEmbedder;

impl Embedder for BrokenEmbedder {
    fn embed_documents(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Err(anyhow!("connection refused"))
    }
}

/// Embeds documents fine but cannot embed a question.
struct QueryOutageEmbedder;

impl Embedder for QueryOutageEmbedder {
    fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        TopicEmbedder.embed_documents(texts)
    }

    fn embed_query(&self, _text: &str) -> Result<Vec<f32>> {
        Err(anyhow!("OpenAI embeddings failed (429 Too Many Requests): rate limited"))
    }
}

/// Records every request and replies with a fixed answer.
struct RecordingChat {
    requests: Rc<RefCell<Vec<Vec<ChatMessage>>>>,
    reply: Result<String, String>,
}

impl ChatModel for RecordingChat {
    fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        self.requests.borrow_mut().push(messages.to_vec());
        self.reply.clone().map_err(|e| anyhow!(e))
    }
}

fn corpus() -> Vec<String> {
    vec![
        "Rust has ownership".to_string(),
        "Python has a GIL".to_string(),
        "Cooking pasta takes ten minutes".to_string(),
        "Gardening needs patience".to_string(),
        "Rust and Python both have package managers".to_string(),
        "Nothing to see here".to_string(),
        "More cooking tips".to_string(),
    ]
}

fn qa_with(
    reply: Result<String, String>,
    top_k: usize,
) -> (RetrievalQa, Rc<RefCell<Vec<Vec<ChatMessage>>>>) {
    let index = build_index(&corpus(), &TopicEmbedder).unwrap();
    let requests = Rc::new(RefCell::new(Vec::new()));
    let chat = RecordingChat {
        requests: requests.clone(),
        reply,
    };
    (
        RetrievalQa::new(index, Box::new(TopicEmbedder), Box::new(chat), top_k),
        requests,
    )
}

#[test]
fn test_collect_text_concatenates_in_order() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "First document.").unwrap();
    fs::write(&b, "Second document.").unwrap();

    let mut out = Vec::new();
    let text = collect_text(&[a, b], &mut out).unwrap();
    assert_eq!(text, "First document.Second document.");
    assert!(out.is_empty());
}

#[test]
fn test_collect_text_reports_empty_files() {
    let dir = TempDir::new().unwrap();
    let empty = dir.path().join("empty.txt");
    let full = dir.path().join("full.txt");
    let sheet = dir.path().join("report.xlsx");
    fs::write(&empty, "").unwrap();
    fs::write(&full, "Some text.").unwrap();
    fs::write(&sheet, "not really a spreadsheet").unwrap();

    let mut out = Vec::new();
    let text = collect_text(&[empty.clone(), full, sheet.clone()], &mut out).unwrap();
    assert_eq!(text, "Some text.");

    let printed = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = printed.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!("No text extracted from {}.", empty.display()),
            format!(
                "Error extracting data from {}: Unsupported file format: {}",
                sheet.display(),
                sheet.display()
            ),
            format!("No text extracted from {}.", sheet.display()),
        ]
    );
}

#[test]
fn test_collect_text_all_empty() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.pdf");
    let mut out = Vec::new();
    let text = collect_text(&[missing.clone()], &mut out).unwrap();
    assert!(text.is_empty());

    let printed = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = printed.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(&format!("Error extracting data from {}: ", missing.display())));
    assert_eq!(lines[1], format!("No text extracted from {}.", missing.display()));
}

#[test]
fn test_split_documents_uses_config() {
    let config = ChunkingConfig {
        separator: ".".to_string(),
        chunk_size: 10,
        chunk_overlap: 0,
    };
    let chunks = split_documents("aaaa.bbbb.cccc", &config).unwrap();
    assert_eq!(chunks, vec!["aaaa.bbbb", "cccc"]);
}

#[test]
fn test_split_documents_rejects_bad_overlap() {
    let config = ChunkingConfig {
        separator: ".".to_string(),
        chunk_size: 100,
        chunk_overlap: 100,
    };
    assert!(split_documents("text", &config).is_err());
}

#[test]
fn test_build_index_rejects_empty_chunks() {
    let err = build_index(&[], &TopicEmbedder).unwrap_err();
    assert!(err.to_string().contains("no chunks"));
}

#[test]
fn test_build_index_surfaces_embedding_error() {
    let err = build_index(&corpus(), &BrokenEmbedder).unwrap_err();
    assert!(format!("{:#}", err).contains("connection refused"));
}

#[test]
fn test_answer_stuffs_top_k_chunks() {
    let (qa, requests) = qa_with(Ok("Ownership.".to_string()), 2);
    assert_eq!(qa.answer("What does Rust have?"), "Ownership.");

    let requests = requests.borrow();
    assert_eq!(requests.len(), 1);
    let messages = &requests[0];
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[1].content, "What does Rust have?");
    assert!(messages[0]
        .content
        .ends_with("Rust has ownership\n\nRust and Python both have package managers"));
}

#[test]
fn test_retrieval_is_repeatable() {
    let (qa, _) = qa_with(Ok(String::new()), 5);
    let first: Vec<String> = qa
        .retrieve("cooking")
        .unwrap()
        .into_iter()
        .map(|h| h.chunk.id)
        .collect();
    let second: Vec<String> = qa
        .retrieve("cooking")
        .unwrap()
        .into_iter()
        .map(|h| h.chunk.id)
        .collect();
    assert_eq!(first.len(), 5);
    assert_eq!(first, second);
}

#[test]
fn test_chat_failure_returns_apology() {
    let (qa, requests) = qa_with(Err("OpenAI error 500: boom".to_string()), 5);
    assert_eq!(qa.answer("anything"), ANSWER_FAILED);
    assert!(qa.try_answer("anything").is_err());
    assert_eq!(requests.borrow().len(), 2);
}

#[test]
fn test_query_embedding_failure_returns_apology() {
    let index = build_index(&corpus(), &TopicEmbedder).unwrap();
    let requests = Rc::new(RefCell::new(Vec::new()));
    let chat = RecordingChat {
        requests: requests.clone(),
        reply: Ok("never used".to_string()),
    };
    let qa = RetrievalQa::new(index, Box::new(QueryOutageEmbedder), Box::new(chat), 5);

    assert_eq!(qa.answer("What does Rust have?"), ANSWER_FAILED);
    let err = qa.try_answer("What does Rust have?").unwrap_err();
    assert!(format!("{:#}", err).contains("rate limited"));
    assert!(requests.borrow().is_empty());
}
