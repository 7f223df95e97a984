//! Synthetic retail customer profile generation.
//!
//! This crate produces internally consistent [`profilesmith_core::Profile`]
//! values from a seeded RNG: realistic personal data via the `fake` crate,
//! retail preferences drawn from a fixed catalog, and loyalty records tied to
//! a unique per-run customer id.

pub mod catalog;
pub mod errors;
pub mod generator;

pub use errors::GenerateError;
pub use generator::ProfileGenerator;
