// src/graph/mod.rs
//! Host-side reference discovery: what a file imports, and where it points.

pub mod imports;
pub mod resolver;

pub use imports::{extract, Span};
pub use resolver::NodeResolver;
