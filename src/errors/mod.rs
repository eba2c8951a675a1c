//! Library error types.
//!
//! Errors only arise while building the static tables (whitelist file I/O,
//! pattern compilation). The mutation and tokenization paths themselves never
//! fail: a payload the rules cannot handle degrades to an unchanged outcome
//! or to catch-all token categories.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while constructing symbol tables or pattern registries.
#[derive(Error, Debug)]
pub enum SqlMorphError {
    /// A whitelist file could not be read.
    #[error("failed to read whitelist file {path}")]
    WhitelistIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A pattern in a registry failed to compile.
    #[error("pattern compilation failed")]
    Pattern(#[from] regex::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SqlMorphError>;
