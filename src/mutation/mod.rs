//! Mutation Module - Semantics-preserving payload rewriting
//!
//! Provides the mutation operator catalog and the engine that applies
//! operators to SQL injection payloads, either one at a time or by
//! weighted random selection.

pub mod comments;
pub mod keywords;
pub mod literals;
pub mod strategy;
pub mod tautology;
pub mod whitespace;

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::errors::Result;
use crate::symbols::SymbolTables;
use crate::tokenizer::SqlTokenizer;

use self::tautology::TautologyDetector;

pub use self::strategy::{MutationCategory, MutationStrategy};

/// Result of applying one mutation operator to a payload.
///
/// `Unchanged` means the operator's precondition did not hold and the
/// payload was left alone. `Variants` holds every rewriting the operator
/// produced; each variant is a complete payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "variants", rename_all = "snake_case")]
pub enum MutationOutcome {
    Unchanged,
    Variants(Vec<String>),
}

impl MutationOutcome {
    /// Whether the operator produced at least one variant.
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Variants(v) if !v.is_empty())
    }

    /// The variants, empty when unchanged.
    pub fn variants(&self) -> &[String] {
        match self {
            Self::Unchanged => &[],
            Self::Variants(v) => v,
        }
    }

    /// Consume the outcome, yielding the variants.
    pub fn into_variants(self) -> Vec<String> {
        match self {
            Self::Unchanged => Vec::new(),
            Self::Variants(v) => v,
        }
    }
}

/// Engine for generating mutated payloads
pub struct MutationEngine {
    tables: Arc<SymbolTables>,
    tokenizer: SqlTokenizer,
    detector: TautologyDetector,
    block_comment: Regex,
    int_literal: Regex,
    /// Random number generator for `mutate`
    rng: SmallRng,
    /// Total weight for strategy selection
    total_weight: u32,
}

impl MutationEngine {
    /// Create a new engine over the given symbol tables.
    pub fn new(tables: Arc<SymbolTables>) -> Result<Self> {
        let total_weight = MutationStrategy::all().iter().map(|s| s.weight()).sum();

        Ok(Self {
            tokenizer: SqlTokenizer::new(Arc::clone(&tables)),
            tables,
            detector: TautologyDetector::new()?,
            block_comment: Regex::new(comments::block_comment_pattern())?,
            int_literal: Regex::new(literals::int_literal_pattern())?,
            rng: SmallRng::from_entropy(),
            total_weight,
        })
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Apply one operator to `payload`. Deterministic: the same payload and
    /// strategy always yield the same outcome.
    pub fn apply(&self, strategy: MutationStrategy, payload: &str) -> MutationOutcome {
        trace!(strategy = %strategy, "applying mutation");
        match strategy {
            MutationStrategy::ResetInlineComments => {
                comments::reset_inline_comments(&self.block_comment, payload)
            }
            MutationStrategy::CommentRewriting => {
                comments::comment_rewriting(&self.block_comment, payload)
            }
            MutationStrategy::LogicalInvariant => self.detector.logical_invariant(payload),
            MutationStrategy::ChangeTautologies => self.detector.change_tautologies(payload),
            MutationStrategy::SpacesToComments => whitespace::spaces_to_comments(payload),
            MutationStrategy::SpacesToWhitespaces => {
                whitespace::spaces_to_whitespaces_alternatives(payload)
            }
            MutationStrategy::RandomCase => {
                whitespace::random_case(&self.tokenizer, &self.tables, payload)
            }
            MutationStrategy::SwapIntRepr => literals::swap_int_repr(&self.int_literal, payload),
            MutationStrategy::SwapKeywords => keywords::swap_keywords(&self.tokenizer, payload),
        }
    }

    /// Pick a weighted random strategy, apply it, and sample one variant.
    /// Returns the payload unchanged when the chosen operator does not
    /// apply.
    pub fn mutate(&mut self, payload: &str) -> String {
        let strategy = self.select_strategy();
        match self.apply(strategy, payload) {
            MutationOutcome::Variants(variants) if !variants.is_empty() => {
                let index = self.rng.gen_range(0..variants.len());
                debug!(strategy = %strategy, variants = variants.len(), "mutated payload");
                variants.into_iter().nth(index).unwrap_or_else(|| payload.to_string())
            }
            _ => {
                trace!(strategy = %strategy, "operator did not apply");
                payload.to_string()
            }
        }
    }

    /// Select a random strategy based on weights
    fn select_strategy(&mut self) -> MutationStrategy {
        let mut target = self.rng.gen_range(0..self.total_weight);

        for strategy in MutationStrategy::all() {
            let weight = strategy.weight();
            if target < weight {
                return strategy;
            }
            target -= weight;
        }

        MutationStrategy::RandomCase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> MutationEngine {
        MutationEngine::new(Arc::new(SymbolTables::builtin())).unwrap()
    }

    #[test]
    fn apply_is_deterministic() {
        let engine = engine();
        let payload = "admin' OR 1=1#";
        for strategy in MutationStrategy::all() {
            let first = engine.apply(strategy, payload);
            let second = engine.apply(strategy, payload);
            assert_eq!(first, second, "strategy {strategy} not deterministic");
        }
    }

    #[test]
    fn mutate_with_seed_is_reproducible() {
        let payload = "admin' OR 1=1#";
        let a = engine().with_seed(42).mutate(payload);
        let b = engine().with_seed(42).mutate(payload);
        assert_eq!(a, b);
    }

    #[test]
    fn mutate_never_panics_on_empty_payload() {
        let mut engine = engine().with_seed(7);
        for _ in 0..50 {
            assert_eq!(engine.mutate(""), "");
        }
    }

    #[test]
    fn every_strategy_applies_to_a_rich_payload() {
        let engine = engine();
        let payload = "1 /*x*/ OR 10=10 -- ";
        for strategy in MutationStrategy::all() {
            let outcome = engine.apply(strategy, payload);
            assert!(
                outcome.is_changed(),
                "strategy {strategy} did not apply to rich payload"
            );
        }
    }

    #[test]
    fn outcome_serializes_with_tag() {
        let outcome = MutationOutcome::Variants(vec!["a".to_string()]);
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"outcome":"variants","variants":["a"]}"#);

        let unchanged = serde_json::to_string(&MutationOutcome::Unchanged).unwrap();
        assert_eq!(unchanged, r#"{"outcome":"unchanged"}"#);
    }

    #[test]
    fn outcome_helpers() {
        assert!(!MutationOutcome::Unchanged.is_changed());
        assert!(MutationOutcome::Unchanged.variants().is_empty());
        let outcome = MutationOutcome::Variants(vec!["x".to_string()]);
        assert!(outcome.is_changed());
        assert_eq!(outcome.into_variants(), vec!["x".to_string()]);
    }
}
