//! Core services: parsing, loading, selection and generation.

pub mod generator;
pub mod loader;
pub mod parser;
pub mod selector;
pub mod source;

pub use generator::{GeminiClient, GenerationOptions, TextGenerator};
pub use loader::{CorpusLoader, load_corpus};
pub use selector::{RelevanceSelector, select_relevant_standards};
pub use source::{DocumentSource, FileSource, HttpSource, MemorySource};
