pub mod chunking;
pub mod extract;
pub mod models;
pub mod traits;

pub use chunking::CharacterSplitter;
pub use extract::{extract_text, try_extract, ExtractError};
pub use models::{ChatMessage, Chunk, DocumentKind, Role, ScoredChunk};
pub use traits::{ChatModel, Embedder};
