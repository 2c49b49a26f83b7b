//! # blogsmith
//!
//! Template-driven blog post generation service.
//!
//! This crate exposes a single JSON endpoint that accepts a topic, tone, and
//! length selection, assembles a markdown blog post from fixed tone-keyed
//! prose templates, and derives SEO metadata from the topic string.

pub mod config;
pub mod error;
pub mod generator;
pub mod http_server;
pub mod logging;
pub mod types;

pub use error::{Error, Result};
pub use generator::{generate_post, PostLength, Tone};
pub use types::{BlogPost, GenerateRequest, SeoMetadata};
