//! Keyword and operator synonym swapping.

use crate::tokenizer::{SqlTokenizer, TokenCategory};

use super::MutationOutcome;

/// Case-exact swap table. Each entry maps one rendering of a logical
/// connective or comparison to its equivalent renderings.
const SWAPS: &[(&str, &[&str])] = &[
    ("||", &[" OR ", " or "]),
    ("OR", &["||", "or"]),
    ("or", &["OR", "||"]),
    ("&&", &[" AND ", " and "]),
    ("AND", &["&&", "and"]),
    ("and", &["AND", "&&"]),
    ("<>", &["!=", " NOT LIKE ", " not like "]),
    ("!=", &["<>", " NOT LIKE ", " not like "]),
    ("NOT LIKE", &["!=", "<>", "not like"]),
    ("not like", &["!=", "<>", "NOT LIKE"]),
    ("=", &[" LIKE ", " like "]),
    ("LIKE", &["like", "="]),
    ("like", &["LIKE", "="]),
];

fn alternatives(key: &str) -> Option<&'static [&'static str]> {
    SWAPS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, alts)| *alts)
}

/// Replace the first swappable keyword or operator, in token-stream order,
/// with each of its equivalent renderings. `NOT LIKE` is matched as a
/// two-keyword unit when both words share the same case.
pub(crate) fn swap_keywords(tokenizer: &SqlTokenizer, payload: &str) -> MutationOutcome {
    let tokens = tokenizer.tokenize(payload);
    let mut offset = 0;
    for (i, token) in tokens.iter().enumerate() {
        let span = match (token.value.as_str(), token.category) {
            ("NOT" | "not", TokenCategory::Keyword) => {
                match not_like_span(&tokens, i) {
                    Some(extra) => Some((format_key(&token.value), offset..offset + extra)),
                    None => None,
                }
            }
            (value, _) if alternatives(value).is_some() => {
                Some((value.to_string(), offset..offset + value.len()))
            }
            _ => None,
        };
        if let Some((key, range)) = span {
            let alts = match alternatives(&key) {
                Some(alts) => alts,
                None => continue,
            };
            let variants = alts
                .iter()
                .map(|alt| format!("{}{}{}", &payload[..range.start], alt, &payload[range.end..]))
                .collect();
            return MutationOutcome::Variants(variants);
        }
        offset += token.value.len();
    }
    MutationOutcome::Unchanged
}

fn format_key(not_word: &str) -> String {
    if not_word == "NOT" {
        "NOT LIKE".to_string()
    } else {
        "not like".to_string()
    }
}

/// Byte length of a `NOT <ws> LIKE` unit starting at token `i`, when the two
/// keywords agree on case and are separated only by whitespace.
fn not_like_span(tokens: &[crate::tokenizer::Token], i: usize) -> Option<usize> {
    let ws = tokens.get(i + 1)?;
    let like = tokens.get(i + 2)?;
    if ws.category != TokenCategory::Whitespace {
        return None;
    }
    let expected = if tokens[i].value == "NOT" { "LIKE" } else { "like" };
    if like.value != expected {
        return None;
    }
    Some(tokens[i].value.len() + ws.value.len() + like.value.len())
}
