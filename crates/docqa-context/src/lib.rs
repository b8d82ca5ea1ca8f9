//! Clients for the hosted embedding and chat-completion services.

pub mod embedder;
pub mod llm;

pub use embedder::OpenAiEmbedder;
pub use llm::OpenAiChat;

/// Default base URL for OpenAI-compatible endpoints.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Join an optional base URL override with an endpoint path.
pub(crate) fn endpoint(api_base: Option<&str>, path: &str) -> String {
    let base = api_base.unwrap_or(DEFAULT_API_BASE).trim_end_matches('/');
    if base.ends_with(path) {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}
