use thiserror::Error;

pub mod client;
pub mod parse;
pub mod prompt;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Provider returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse provider response: {0}")]
    MalformedResponse(String),

    #[error("Provider returned no usable completion")]
    EmptyCompletion,

    #[error("Could not extract comments from completion: {0}")]
    Unparsable(String),
}
