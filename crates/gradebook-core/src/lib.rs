//! gradebook-core — academic record model, mutations, and weighted averages.
//!
//! This crate defines the record data model, the actions that change it, the
//! aggregation that derives weighted averages from it, and the JSON document
//! format used to export and import it.

pub mod action;
pub mod document;
pub mod error;
pub mod model;
pub mod statistics;
pub mod store;

pub use action::{transition, Action, Transition};
pub use error::{DocumentError, Rejection};
pub use model::{Course, Record, Semester};
pub use store::RecordStore;
