//! HTTP API Client
//!
//! Functions for communicating with the StoryCrafter REST API.

pub mod client;

pub use client::*;
