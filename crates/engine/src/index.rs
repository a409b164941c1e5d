//! Prefix-sum index: one O(n) pass, then O(1) per query.
//!
//! `PrefixIndex` holds two auxiliary arrays over the input sequence:
//!
//! - `prefix[i]` — running total of `seq[0..=i]`
//! - `alt[i]`    — running total where `seq[i]` is added when `i` is even
//!   and subtracted when `i` is odd (sign fixed by *global* index parity)
//!
//! Both arrays are built once and never mutated. Resolution borrows the
//! index immutably, so a built index can be shared across threads freely.
//!
//! # Invariants
//!
//! - Resolution never observes a partially built index: `build` returns
//!   the finished value, there is no incremental construction path.
//! - Invalid ranges are rejected, never clamped.
//! - The alternating answer is always "first term positive" relative to
//!   the *range start*, whatever the start's parity in the full sequence.

use crate::query::{EngineError, QueryKind, RangeQuery};

/// Read-only auxiliary arrays for O(1) range-sum resolution.
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    prefix: Vec<i64>,
    alt: Vec<i64>,
}

impl PrefixIndex {
    /// Build the index in a single left-to-right pass.
    ///
    /// An empty sequence yields an empty index; every query against it
    /// fails with `RangeOutOfBounds`.
    pub fn build(values: &[i64]) -> Self {
        let n = values.len();
        let mut prefix = Vec::with_capacity(n);
        let mut alt = Vec::with_capacity(n);

        for (i, &v) in values.iter().enumerate() {
            if i == 0 {
                prefix.push(v);
                alt.push(v);
            } else {
                prefix.push(prefix[i - 1] + v);
                alt.push(alt[i - 1] + if i % 2 == 0 { v } else { -v });
            }
        }

        Self { prefix, alt }
    }

    /// Length of the indexed sequence.
    pub fn len(&self) -> usize {
        self.prefix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }

    /// Answer one query in O(1). Pure: same query, same answer, always.
    pub fn resolve(&self, query: &RangeQuery) -> Result<i64, EngineError> {
        let RangeQuery { kind, lo, hi } = *query;
        let n = self.len();
        if lo > hi || hi >= n {
            return Err(EngineError::RangeOutOfBounds { lo, hi, len: n });
        }

        Ok(match kind {
            QueryKind::Sum => {
                self.prefix[hi] - if lo > 0 { self.prefix[lo - 1] } else { 0 }
            }
            QueryKind::AlternatingSum => {
                let raw = self.alt[hi] - if lo > 0 { self.alt[lo - 1] } else { 0 };
                // alt[] anchors signs to global index parity. A range that
                // starts at an odd index therefore has every sign inverted
                // relative to the "first term positive" contract.
                if lo % 2 == 1 {
                    -raw
                } else {
                    raw
                }
            }
        })
    }

    /// Resolve a batch in input order. Aborts on the first invalid range:
    /// a batch containing any out-of-bounds query produces no answers.
    pub fn resolve_all(&self, queries: &[RangeQuery]) -> Result<Vec<i64>, EngineError> {
        queries.iter().map(|q| self.resolve(q)).collect()
    }
}
