//! hotelsearch-remote
//!
//! The impure side of search orchestration: the dispatcher that turns
//! a `SearchRequest` into one call against the external collaborator
//! and normalizes the response, plus the REST collaborator itself.

pub mod dispatch;
pub mod rest;

pub use dispatch::Dispatcher;
pub use rest::RestSearchService;
