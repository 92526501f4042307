//! Admin dashboard over the stylist collection: loading, statistics, the
//! skills donut chart, filtering, record mutations and CSV export.

pub mod chart;
pub mod export;
pub mod filters;
pub mod http;
pub mod loader;
pub mod mutations;
pub mod stats;
pub mod view;

pub use loader::Roster;
pub use mutations::{Mutation, MutationError};

#[cfg(test)]
pub(crate) mod fixtures;
