//! CLI module graph.

pub mod check;
pub mod command;
pub mod migrate;
pub mod output;
pub mod serve;

pub use command::{Cli, Commands};
