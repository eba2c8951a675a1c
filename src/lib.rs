//! sqlmorph - SQL injection payload mutation and canonicalization
//!
//! A catalog of semantics-preserving rewrites for SQL injection payloads,
//! plus a canonicalizing tokenizer that maps payloads onto a closed token
//! alphabet for downstream classifiers.
//!
//! # Quick start
//!
//! ```
//! use std::sync::Arc;
//!
//! use sqlmorph::{MutationEngine, MutationStrategy, SymbolTables};
//!
//! # fn main() -> sqlmorph::Result<()> {
//! let tables = Arc::new(SymbolTables::builtin());
//! let engine = MutationEngine::new(Arc::clone(&tables))?;
//!
//! let outcome = engine.apply(MutationStrategy::LogicalInvariant, "admin' OR 1=1#");
//! assert!(outcome.is_changed());
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod matcher;
pub mod mutation;
pub mod symbols;
pub mod tokenizer;

pub use errors::{Result, SqlMorphError};
pub use matcher::Candidate;
pub use mutation::{MutationCategory, MutationEngine, MutationOutcome, MutationStrategy};
pub use symbols::{ObjectCategory, SymbolTables, WhitelistFiles};
pub use tokenizer::{Canonicalizer, SqlTokenizer, Token, TokenCategory};
