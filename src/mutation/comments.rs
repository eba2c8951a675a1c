//! Comment-rewriting operators.

use regex::Regex;

use crate::matcher::find_first;

use super::MutationOutcome;

/// First block comment, delimiters included. The content class excludes the
/// delimiter characters, so an unterminated `/*` never matches and nested
/// comments are left alone.
pub(crate) fn block_comment_pattern() -> &'static str {
    r"/\*[^(/*|)\\]*\*/"
}

/// Replace the first block comment, content and delimiters, with the
/// canonical empty comment `/**/`.
pub(crate) fn reset_inline_comments(block_comment: &Regex, payload: &str) -> MutationOutcome {
    match find_first(block_comment, payload) {
        Some(candidate) => MutationOutcome::Variants(vec![candidate.splice(payload, "/**/")]),
        None => MutationOutcome::Unchanged,
    }
}

/// Append filler after a line comment, or inject it into the first block
/// comment. The two branches are mutually exclusive: a line-comment marker
/// anywhere in the payload wins.
pub(crate) fn comment_rewriting(block_comment: &Regex, payload: &str) -> MutationOutcome {
    if payload.contains('#') || payload.contains("-- ") {
        return MutationOutcome::Variants(vec![format!("{payload}hello")]);
    }
    match find_first(block_comment, payload) {
        Some(candidate) => MutationOutcome::Variants(vec![candidate.splice(payload, "/*hello*/")]),
        None => MutationOutcome::Unchanged,
    }
}
