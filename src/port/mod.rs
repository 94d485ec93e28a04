//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`TodoStore`] - Persistence for todo items

pub mod outbound;

pub use outbound::store::TodoStore;
