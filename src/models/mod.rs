// src/models/mod.rs

//! Domain models for curriculum standards.
//!
//! This module contains all data structures used throughout the crate,
//! organized by their primary purpose.

mod config;
mod corpus;
mod seed;
mod selection;
mod standard;

// Re-export all public types
pub use config::{Config, GeneratorConfig, HttpConfig, SelectorConfig, SourcesConfig};
pub use corpus::{Corpus, CorpusMeta};
pub use seed::Seed;
pub use selection::{SearchQuery, SelectionSummary, standards_block};
pub use standard::{Framework, GradeBand, StandardRecord, is_valid_code};
