//! Challenge endpoint client — shared between the CLI and tests.
//!
//! This crate owns the transport half of the contract: one blocking GET
//! for the input payload, one blocking POST for the answers. No retries,
//! no streaming, no partial delivery.

mod client;

pub use client::{ClientError, RelayClient};
