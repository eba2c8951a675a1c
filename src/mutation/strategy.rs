//! Mutation Strategy - Catalog of payload rewriting operators
//!
//! Defines the semantics-preserving rewrites applied to SQL injection
//! payloads to generate syntactic variants.

use serde::{Deserialize, Serialize};

/// Mutation strategies for payload rewriting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationStrategy {
    // Comment mutations
    /// Collapse the first block comment to `/**/`
    ResetInlineComments,
    /// Append or inject filler text into a comment
    CommentRewriting,

    // Tautology mutations
    /// Append a truth-preserving AND/OR suffix
    LogicalInvariant,
    /// Rewrite a detected tautology in an equivalent form
    ChangeTautologies,

    // Whitespace mutations
    /// Swap a space with an empty block comment
    SpacesToComments,
    /// Replace the first whitespace character with an alternative
    #[serde(rename = "spaces_to_whitespaces_alternatives")]
    SpacesToWhitespaces,
    /// Flip the case of common keywords
    RandomCase,

    // Encoding mutations
    /// Re-encode an integer literal as hex or a subquery
    SwapIntRepr,

    // Keyword mutations
    /// Replace a keyword or operator with a synonym
    SwapKeywords,
}

impl MutationStrategy {
    /// Get all strategies
    pub fn all() -> Vec<Self> {
        vec![
            Self::ResetInlineComments,
            Self::CommentRewriting,
            Self::LogicalInvariant,
            Self::ChangeTautologies,
            Self::SpacesToComments,
            Self::SpacesToWhitespaces,
            Self::RandomCase,
            Self::SwapIntRepr,
            Self::SwapKeywords,
        ]
    }

    /// Weight for random selection (higher = more likely)
    pub fn weight(&self) -> u32 {
        match self {
            // Cheap rewrites that almost always apply
            Self::SpacesToComments => 10,
            Self::SpacesToWhitespaces => 10,
            Self::RandomCase => 10,

            // Structural rewrites
            Self::LogicalInvariant => 5,
            Self::SwapKeywords => 5,
            Self::SwapIntRepr => 5,

            // Narrow preconditions, fire less often
            Self::ChangeTautologies => 3,
            Self::ResetInlineComments => 3,
            Self::CommentRewriting => 3,
        }
    }

    /// Category for this strategy
    pub fn category(&self) -> MutationCategory {
        match self {
            Self::ResetInlineComments | Self::CommentRewriting => MutationCategory::Comment,

            Self::LogicalInvariant | Self::ChangeTautologies => MutationCategory::Tautology,

            Self::SpacesToComments | Self::SpacesToWhitespaces | Self::RandomCase => {
                MutationCategory::Whitespace
            }

            Self::SwapIntRepr => MutationCategory::Encoding,

            Self::SwapKeywords => MutationCategory::Keyword,
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResetInlineComments => "reset_inline_comments",
            Self::CommentRewriting => "comment_rewriting",
            Self::LogicalInvariant => "logical_invariant",
            Self::ChangeTautologies => "change_tautologies",
            Self::SpacesToComments => "spaces_to_comments",
            Self::SpacesToWhitespaces => "spaces_to_whitespaces_alternatives",
            Self::RandomCase => "random_case",
            Self::SwapIntRepr => "swap_int_repr",
            Self::SwapKeywords => "swap_keywords",
        }
    }
}

impl std::fmt::Display for MutationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category of mutation strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationCategory {
    /// Comment insertion and rewriting
    Comment,
    /// Tautology detection and rewriting
    Tautology,
    /// Whitespace and case obfuscation
    Whitespace,
    /// Literal re-encoding
    Encoding,
    /// Keyword and operator synonyms
    Keyword,
}

impl MutationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Tautology => "tautology",
            Self::Whitespace => "whitespace",
            Self::Encoding => "encoding",
            Self::Keyword => "keyword",
        }
    }
}
