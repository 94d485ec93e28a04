//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading and validation
//! - [`bootstrap`] - Composition root wiring config, pool and store

pub mod bootstrap;
pub mod config;
