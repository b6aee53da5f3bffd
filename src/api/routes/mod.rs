//! API Route Handlers
//!
//! Handlers are grouped by concern: content CRUD, generation proxy,
//! media proxies (TTS + thumbnail rendering), and health probes.

pub mod content;
pub mod generate;
pub mod health;
pub mod media;
