//! Pipeline entry points behind the CLI commands.
//!
//! - `run_load`: Load the corpus and print its summary
//! - `run_select`: Pick standards for a query
//! - `run_generate`: Select, then ask the generation service for a scenario
//! - `run_validate`: Check configuration and seed data

pub mod generate;
pub mod load;
pub mod merge;
pub mod select;
pub mod validate;

pub use generate::run_generate;
pub use load::run_load;
pub use select::run_select;
pub use validate::run_validate;
