/// Shared application layer patterns
///
/// Paging primitives used by every list-producing bounded context.
pub mod pagination;

pub use pagination::*;
