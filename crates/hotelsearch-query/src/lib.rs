//! hotelsearch-query
//!
//! The pure side of search orchestration: filter building, mode
//! resolution, the dispatch trigger policy, and the display mapping.
//! No I/O; everything here is deterministic over its arguments.

pub mod filter;
pub mod mode;
pub mod present;
pub mod trigger;

pub use filter::build_filter;
pub use mode::{resolve, ResolvedSearchParams};
pub use present::{present, DisplayRecord};
pub use trigger::{should_dispatch, SearchSession};
