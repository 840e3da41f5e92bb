//! Synthesis of a reproducible demo dataset.
//!
//! Every random decision is drawn from one [`RandomStream`], passed explicitly to
//! each function that needs it. The same seed and the same sequence of calls give
//! the same dataset, so the order in which things are drawn is part of the contract.
//!
//! - [`random`] - the seeded stream
//! - [`vocabulary`] - name pools
//! - [`factory`] - users, products, pickup locations, customers
//! - [`selector`] - bell-shaped pick from an ordered collection
//! - [`state`] - final order state from the due date
//! - [`history`] - event chain ending in that state
//! - [`timeline`] - orders per day over the whole window
//! - [`generator`] - the run itself, writing through the stores

pub mod error;
pub mod factory;
pub mod generator;
pub mod history;
pub mod random;
pub mod selector;
pub mod state;
pub mod timeline;
pub mod vocabulary;

pub use error::GeneratorError;
pub use generator::{DataGenerator, GenerationOutcome, GenerationSummary};
pub use random::RandomStream;
