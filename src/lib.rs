//! Dessert recipe browser: domain model, remote client and view-models.
//!
//! The crate is layered leaves-first:
//!
//! - [`model`]: decoded value types for dessert summaries and details
//! - [`client`]: the [`client::MealClient`] capability with live and fixture backends
//! - [`ui`]: MVI view-models that drive a presentation layer
//! - [`config`] and [`logging`]: ambient configuration and tracing setup

pub mod client;
pub mod config;
pub mod logging;
pub mod model;
pub mod ui;
