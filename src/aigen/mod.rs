//! AI Generation Integration
//!
//! Client for the external AI generation service that produces text
//! (scripts, titles, thumbnail prompts, SEO tags), synthesized speech
//! and thumbnail images. The service itself is an opaque HTTP API; this
//! module only shapes requests and decodes responses.

pub mod client;

pub use client::{GenerationClient, GenerationConfig, GenerationError};
