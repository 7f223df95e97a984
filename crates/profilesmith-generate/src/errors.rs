use thiserror::Error;

/// Errors emitted by the profile generator.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Too many consecutive customer-id collisions within one run.
    #[error("customer id space exhausted after {0} attempts")]
    IdSpaceExhausted(u32),
}
