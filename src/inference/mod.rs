mod client;

pub use client::{BedrockClient, InferenceClient};
