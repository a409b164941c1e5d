//! Query types and the engine error type.

/// Which aggregate a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Plain sum over the range.
    Sum,
    /// Alternating sum over the range: the first element in the range is
    /// added, the second subtracted, and so on. The range start is the
    /// origin of the alternation, not the sequence start.
    AlternatingSum,
}

/// A single range query: an aggregate kind over an inclusive index
/// range `[lo, hi]` of the preprocessed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeQuery {
    pub kind: QueryKind,
    pub lo: usize,
    pub hi: usize,
}

impl RangeQuery {
    pub fn new(kind: QueryKind, lo: usize, hi: usize) -> Self {
        Self { kind, lo, hi }
    }
}

/// Error type for query resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Query range violates `0 <= lo <= hi <= n-1`. Also raised for any
    /// query against an empty sequence. Ranges are never clamped.
    RangeOutOfBounds { lo: usize, hi: usize, len: usize },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::RangeOutOfBounds { lo, hi, len } => write!(
                f,
                "query range [{}, {}] out of bounds for sequence of length {}",
                lo, hi, len,
            ),
        }
    }
}

impl std::error::Error for EngineError {}
