//! Generic in-memory store framework.
//!
//! This module provides the building blocks for write-once entity stores, each
//! run as an actor that owns its state and answers requests sequentially.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that persisted types implement to be stored by an actor
//! - [`ResourceActor`] - Generic actor that owns one store
//! - [`ResourceClient`] - Typed handle for sending requests to a store
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
