//! A single-owner bank account that never lets a withdrawal overdraw it,
//! plus a small replay engine that drives accounts from a CSV of operations.

pub mod config;
pub mod dlq;
pub mod domain;
pub mod engine;
pub mod ingestion;
pub mod store;

pub use domain::{Account, AccountStore, Error, Money};
pub use store::{MemoryStore, NoopStore};
