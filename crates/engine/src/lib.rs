pub mod index;
pub mod query;

pub use index::PrefixIndex;
pub use query::{EngineError, QueryKind, RangeQuery};
