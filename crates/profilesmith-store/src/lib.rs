//! PostgreSQL persistence for customer profiles.
//!
//! The store owns the four-table schema (`customers`, `retail_preferences`,
//! `marketing_preferences`, `loyalty_members`) and writes one profile as one
//! transaction across all four.

pub mod error;
pub mod postgres;
pub mod store;

pub use error::StoreError;
pub use postgres::PostgresStore;
pub use store::Store;
