pub mod ingest;
pub mod qa;

pub use ingest::{build_index, collect_text, split_documents};
pub use qa::{Answerer, RetrievalQa, ANSWER_FAILED, STUFF_PROMPT};
