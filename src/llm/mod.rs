mod client;
mod types;

pub use client::{CompletionClient, GeminiClient};
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    UsageMetadata,
};
