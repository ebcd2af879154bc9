//! wgen Asset - Resource model and content-addressed asset table
//!
//! This crate turns externally supplied resources into resolved table
//! entries: classification, content hashing, MIME deduplication, and the
//! order-preserving views the emitter renders from.

mod classify;
mod loader;
mod mime;
mod table;
mod types;

pub use classify::classify;
pub use loader::{load_directory, DEFAULT_MIME, DYNAMIC_EXTENSION};
pub use mime::{MimeEntry, MimeRegistry};
pub use table::{AssetEntry, AssetTable};
pub use types::{Resource, ResourceContent, ResourceKind};
