//! Core types for the ballotdesk election-records console.
//!
//! This crate is deliberately free of HTTP and terminal dependencies.
//! It holds the entity and wire-payload shapes, the immutable data
//! snapshot the console renders from, and the client-side report
//! generation. `ballotdesk-cli` depends on it; it depends on nothing
//! beyond serde.

pub mod entity;
pub mod error;
pub mod payload;
pub mod query;
pub mod report;
pub mod snapshot;

pub use error::{Error, Result};
