//! Google Gemini provider (`generateContent` REST endpoint).

pub mod client;
pub mod types;

pub use client::GeminiProvider;
