//! Whitespace obfuscation operators.

use crate::symbols::SymbolTables;
use crate::tokenizer::SqlTokenizer;

use super::MutationOutcome;

/// Alternative whitespace characters accepted between SQL tokens.
const WHITESPACE_ALTERNATIVES: [char; 6] = [' ', '\t', '\n', '\x0C', '\x0B', '\u{A0}'];

/// Swap the leftmost space for an empty block comment, or vice versa.
/// Whichever of the two appears first in the payload is the one replaced.
pub(crate) fn spaces_to_comments(payload: &str) -> MutationOutcome {
    let space = payload.find(' ');
    let comment = payload.find("/**/");
    let (needle, replacement) = match (space, comment) {
        (Some(s), Some(c)) if c < s => ("/**/", " "),
        (Some(_), _) => (" ", "/**/"),
        (None, Some(_)) => ("/**/", " "),
        (None, None) => return MutationOutcome::Unchanged,
    };
    MutationOutcome::Variants(vec![payload.replacen(needle, replacement, 1)])
}

/// Replace the first whitespace character with each of the other five
/// accepted whitespace characters, yielding five variants.
pub(crate) fn spaces_to_whitespaces_alternatives(payload: &str) -> MutationOutcome {
    let found = payload
        .char_indices()
        .find(|(_, c)| WHITESPACE_ALTERNATIVES.contains(c));
    let Some((offset, current)) = found else {
        return MutationOutcome::Unchanged;
    };
    let variants = WHITESPACE_ALTERNATIVES
        .iter()
        .filter(|&&c| c != current)
        .map(|&c| {
            let mut out = String::with_capacity(payload.len() + c.len_utf8());
            out.push_str(&payload[..offset]);
            out.push(c);
            out.push_str(&payload[offset + current.len_utf8()..]);
            out
        })
        .collect();
    MutationOutcome::Variants(variants)
}

/// Flip the case of every character inside common SQL keywords, leaving
/// identifiers, literals, and rarely-seen reserved words untouched.
pub(crate) fn random_case(
    tokenizer: &SqlTokenizer,
    tables: &SymbolTables,
    payload: &str,
) -> MutationOutcome {
    let mut out = String::with_capacity(payload.len());
    for token in tokenizer.tokenize(payload) {
        if tables.is_common_keyword(&token.value) {
            for c in token.value.chars() {
                if c.is_uppercase() {
                    out.extend(c.to_lowercase());
                } else {
                    out.extend(c.to_uppercase());
                }
            }
        } else {
            out.push_str(&token.value);
        }
    }
    if out == payload {
        MutationOutcome::Unchanged
    } else {
        MutationOutcome::Variants(vec![out])
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn tokenizer() -> (SqlTokenizer, Arc<SymbolTables>) {
        let tables = Arc::new(SymbolTables::builtin());
        (SqlTokenizer::new(Arc::clone(&tables)), tables)
    }

    #[test]
    fn space_becomes_comment() {
        assert_eq!(
            spaces_to_comments("select 1"),
            MutationOutcome::Variants(vec!["select/**/1".to_string()])
        );
    }

    #[test]
    fn comment_becomes_space_when_leftmost() {
        assert_eq!(
            spaces_to_comments("select/**/1 from t"),
            MutationOutcome::Variants(vec!["select 1 from t".to_string()])
        );
    }

    #[test]
    fn later_comment_loses_to_space() {
        assert_eq!(
            spaces_to_comments("a b/**/c"),
            MutationOutcome::Variants(vec!["a/**/b/**/c".to_string()])
        );
    }

    #[test]
    fn spaces_to_comments_without_either() {
        assert_eq!(spaces_to_comments("select"), MutationOutcome::Unchanged);
    }

    #[test]
    fn whitespace_alternatives_from_space() {
        let MutationOutcome::Variants(variants) = spaces_to_whitespaces_alternatives("a b")
        else {
            panic!("expected variants");
        };
        assert_eq!(
            variants,
            vec!["a\tb", "a\nb", "a\x0Cb", "a\x0Bb", "a\u{A0}b"]
        );
    }

    #[test]
    fn whitespace_alternatives_from_tab() {
        let MutationOutcome::Variants(variants) = spaces_to_whitespaces_alternatives("a\tb c")
        else {
            panic!("expected variants");
        };
        assert_eq!(
            variants,
            vec!["a b c", "a\nb c", "a\x0Cb c", "a\x0Bb c", "a\u{A0}b c"]
        );
    }

    #[test]
    fn whitespace_alternatives_without_whitespace() {
        assert_eq!(
            spaces_to_whitespaces_alternatives("select"),
            MutationOutcome::Unchanged
        );
    }

    #[test]
    fn random_case_flips_common_keywords() {
        let (tokenizer, tables) = tokenizer();
        let outcome = random_case(&tokenizer, &tables, "SELECT name from table WHERE x=1");
        assert_eq!(
            outcome,
            MutationOutcome::Variants(vec!["select name FROM table where x=1".to_string()])
        );
    }

    #[test]
    fn random_case_handles_mixed_case() {
        let (tokenizer, tables) = tokenizer();
        let outcome = random_case(&tokenizer, &tables, "SeLeCt 1");
        assert_eq!(
            outcome,
            MutationOutcome::Variants(vec!["sElEcT 1".to_string()])
        );
    }

    #[test]
    fn random_case_without_keywords() {
        let (tokenizer, tables) = tokenizer();
        assert_eq!(
            random_case(&tokenizer, &tables, "x = 'admin'"),
            MutationOutcome::Unchanged
        );
    }
}
