//! wgen Core - Foundational types for the wgen generator
//!
//! This crate provides the types every other wgen crate depends on:
//! - `ContentHash` - SHA-256 based content hashing and identifier derivation
//! - Error types and Result alias

mod error;
mod hash;

pub use error::{Result, WgenError};
pub use hash::ContentHash;
