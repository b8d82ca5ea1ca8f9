use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Input formats the extractor understands, selected by file suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    Pdf,
    Text,
    Docx,
}

impl DocumentKind {
    /// Suffix match on the full path string, so `notes.TXT` is not a text file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.to_string_lossy();
        if name.ends_with(".pdf") {
            Some(DocumentKind::Pdf)
        } else if name.ends_with(".txt") {
            Some(DocumentKind::Text)
        } else if name.ends_with(".docx") {
            Some(DocumentKind::Docx)
        } else {
            None
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Text => "txt",
            DocumentKind::Docx => "docx",
        };
        f.write_str(name)
    }
}

/// A piece of the combined document text, the unit that gets embedded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    pub id: String,
    /// Position in the splitter output.
    pub index: usize,
    pub content: String,
    pub embedding: Option<Vec<f32>>,
}

impl Chunk {
    pub fn new(index: usize, content: impl Into<String>) -> Self {
        let content = content.into();
        let mut hasher = Sha256::new();
        hasher.update(index.to_le_bytes());
        hasher.update(content.as_bytes());
        let hash = hex::encode(hasher.finalize());

        Self {
            id: hash[..16].to_string(),
            index,
            content,
            embedding: None,
        }
    }
}

/// A chunk returned from similarity search.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    /// Squared L2 distance to the query vector.
    pub distance: f32,
    /// `1 / (1 + distance)`, higher is closer.
    pub score: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}
