//! Challenge wire format — frozen JSON contract.
//!
//! This crate is the single source of truth for the challenge endpoint's
//! wire types. The format is fixed by the remote service and must not
//! drift; if a test in here fails, fix the types, not the vectors.
//!
//! # Input payload
//!
//! ```json
//! {
//!   "token": "abc",
//!   "data": [1, 2, 3, 4, 5],
//!   "query": [
//!     { "type": "1", "range": [1, 3] },
//!     { "type": "2", "range": [0, 4] }
//!   ]
//! }
//! ```
//!
//! - `type` is the literal string `"1"` (sum) or `"2"` (alternating sum).
//!   Any other value is malformed input.
//! - `range` is an inclusive `[l, r]` pair. Deserialized as raw `i64` so
//!   out-of-bounds values (including negatives) survive decoding and are
//!   rejected by validation, not swallowed by serde.
//!
//! # Output body
//!
//! A bare JSON array of numeric answers in query order, e.g. `[9,3]`,
//! posted with `Authorization: Bearer <token>` and
//! `Content-Type: application/json`.

use serde::{Deserialize, Serialize};

/// Query discriminator on the wire. Frozen: `"1"` = sum, `"2"` =
/// alternating sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryType {
    #[serde(rename = "1")]
    Sum,
    #[serde(rename = "2")]
    AlternatingSum,
}

/// One query as it appears in the challenge payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireQuery {
    #[serde(rename = "type")]
    pub query_type: QueryType,
    /// Inclusive `[l, r]` pair, unvalidated.
    pub range: [i64; 2],
}

/// The full input payload: bearer token, data sequence, query list.
///
/// Missing fields or wrong JSON types fail deserialization, which callers
/// classify as malformed input. Unknown extra fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputPayload {
    pub token: String,
    pub data: Vec<i64>,
    pub query: Vec<WireQuery>,
}
