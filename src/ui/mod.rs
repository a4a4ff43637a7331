//! View-models for the dessert list and dessert detail screens.
//!
//! Both follow the MVI primitives in [`mvi`]: state lives in a [`mvi::Store`],
//! every transition is a reducer step, and the presentation layer observes
//! the store through a `watch` subscription.

pub mod dessert_detail;
pub mod dessert_list;
pub mod mvi;
