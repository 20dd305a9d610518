//! Read-only client for the headless content API. Content is queried by
//! type and optional slug; records come back with a type-specific `metadata`
//! bag and one level of related-object expansion.

mod client;
mod types;

pub use client::*;
pub use types::*;
