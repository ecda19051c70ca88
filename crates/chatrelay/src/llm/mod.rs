//! Upstream LLM provider client.

mod error;
mod gemini;
mod provider;
mod types;

pub use error::LLMError;
pub use gemini::GeminiProvider;
pub use provider::LLMProvider;
pub use types::{
    Candidate, CandidateContent, Content, GenerateContentRequest, GenerateContentResponse, Part,
    ResponsePart,
};
