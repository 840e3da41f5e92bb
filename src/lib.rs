//! # Bakery Seed
//!
//! Reproducible demo data for a bakery order-management application: staff users,
//! products, pickup locations and roughly two and a half years of customer orders,
//! each with a plausible fulfilment history.
//!
//! The dataset is a pure function of a seed and the current date. Every random
//! decision comes from one [`RandomStream`](demo_data::RandomStream) and entities are
//! written one at a time, in a fixed order, through actor-backed stores.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` that every store runs on.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor),
//!   [`MockClient`](framework::mock::MockClient).
//!
//! ### 2. The Stores ([`user_actor`], [`product_actor`], [`pickup_location_actor`], [`order_actor`])
//! Concrete entities with their validation. The order store checks that everything an
//! order refers to exists.
//!
//! ### 3. The Interface ([`clients`])
//! Typed clients over the generic `ResourceClient`, each with its own error type.
//!
//! ### 4. The Generator ([`demo_data`])
//! Everything random: names, prices, the weighted selector, state and history
//! reconstruction, and the day-by-day order timeline.
//! - **Key items**: [`DataGenerator`](demo_data::DataGenerator), [`GenerationOutcome`](demo_data::GenerationOutcome).
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! Starts and wires the stores, and sets up logging.
//!
//! ## Quick Start
//!
//! ```bash
//! # Generate with today's date
//! RUST_LOG=info cargo run
//!
//! # Pin the date and seed for a reproducible dataset
//! BAKERY_TODAY=2024-06-15 BAKERY_SEED=1 RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod demo_data;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod password;
pub mod pickup_location_actor;
pub mod product_actor;
pub mod user_actor;
