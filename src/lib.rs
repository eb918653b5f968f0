// src/lib.rs

//! Curriculum Standards Library
//!
//! Parses the 2015 and 2022 Korean elementary curriculum documents into
//! achievement standards and picks small cross-subject sets for lesson
//! planning.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
