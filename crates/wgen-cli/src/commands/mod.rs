//! CLI command implementations

pub mod build;
pub mod generate;
pub mod init;
