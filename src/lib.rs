//! # CODEXRAY
//!
//! File-level dependency graphs for mixed-language source trees.
//!
//! Import statements are recognized with static text patterns, resolved to
//! project files where possible, and collected into a deduplicated graph of
//! files and import edges plus a sorted list of external package names.
//!
//! ## Supported Languages
//!
//! Python, JavaScript, TypeScript, C#, GDScript, Go, Rust

pub mod config;
pub mod core;
pub mod parsers;
pub mod resolvers;
