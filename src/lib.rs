pub mod check;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod graph;
pub mod hierarchy;
pub mod logging;
pub mod paths;
pub mod report;
