use async_trait::async_trait;

use profilesmith_core::Profile;

use crate::error::StoreError;

/// Trait implemented by database backends that can persist profiles.
#[async_trait]
pub trait Store {
    /// Returns the engine identifier (e.g. `postgres`).
    fn engine(&self) -> &'static str;

    /// Ensure the four profile tables exist (create-if-absent).
    async fn initialize(&self) -> Result<(), StoreError>;

    /// Insert one profile as a single transaction across the four tables,
    /// returning the customer id that links them.
    async fn insert_profile(&self, profile: &Profile) -> Result<String, StoreError>;

    /// Read a previously inserted profile back by customer id.
    async fn fetch_profile(&self, customer_id: &str) -> Result<Profile, StoreError>;
}
