//! Inbound adapters (driving side): the CLI and the HTTP server.

pub mod cli;
pub mod http;
