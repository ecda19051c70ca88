//! chatrelay - A small HTTP relay that keeps a Gemini API key on the server.

pub mod config;
pub mod handlers;
pub mod llm;
pub mod relay;
pub mod server;

#[cfg(test)]
mod test_support;
