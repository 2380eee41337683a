// src/output/mod.rs
//! Delivery of the rendered changelog.
//!
//! Planning (which targets receive the text) is kept apart from execution
//! (the actual writes), so only [`deliver`] performs I/O.

mod types;
mod writer;

pub use types::{CompletedOperation, DeliveryTarget, FailedOperation, OutputPlan, OutputReport};
pub use writer::deliver;
