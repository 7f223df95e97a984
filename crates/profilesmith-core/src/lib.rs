//! Core contracts and helpers for Profilesmith.
//!
//! This crate defines the synthetic customer profile model shared by the
//! generator, the store, and the exporter, plus small utilities such as
//! connection-string redaction for safe logging.

pub mod profile;
pub mod redaction;

pub use profile::{
    Channel, Gender, LoyaltyData, MarketingPreferences, PersonalDetails, Profile,
    RetailPreferences, SystemData,
};
pub use redaction::redact_dsn;
