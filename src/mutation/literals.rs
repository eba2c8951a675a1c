//! Integer literal re-encoding.

use regex::Regex;

use crate::matcher::find_first;

use super::MutationOutcome;

pub(crate) fn int_literal_pattern() -> &'static str {
    r"\b\d+\b"
}

/// Rewrite the first integer literal as a hexadecimal literal and as a
/// scalar subquery. Integers too large for a hexadecimal rendering still
/// get the subquery variant.
pub(crate) fn swap_int_repr(int_literal: &Regex, payload: &str) -> MutationOutcome {
    let Some(candidate) = find_first(int_literal, payload) else {
        return MutationOutcome::Unchanged;
    };
    let subquery = candidate.splice(payload, &format!("(SELECT {})", candidate.text));
    let variants = match candidate.text.parse::<u128>() {
        Ok(value) => vec![candidate.splice(payload, &format!("0x{value:x}")), subquery],
        Err(_) => vec![subquery],
    };
    MutationOutcome::Variants(variants)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> Regex {
        Regex::new(int_literal_pattern()).unwrap()
    }

    #[test]
    fn rewrites_first_integer() {
        let outcome = swap_int_repr(&pattern(), "id=15 or 1=1");
        assert_eq!(
            outcome,
            MutationOutcome::Variants(vec![
                "id=0xf or 1=1".to_string(),
                "id=(SELECT 15) or 1=1".to_string(),
            ])
        );
    }

    #[test]
    fn skips_digits_inside_identifiers() {
        let outcome = swap_int_repr(&pattern(), "col1=7");
        assert_eq!(
            outcome,
            MutationOutcome::Variants(vec![
                "col1=0x7".to_string(),
                "col1=(SELECT 7)".to_string(),
            ])
        );
    }

    #[test]
    fn huge_integer_degrades_to_subquery() {
        let huge = "9".repeat(60);
        let outcome = swap_int_repr(&pattern(), &format!("x={huge}"));
        assert_eq!(
            outcome,
            MutationOutcome::Variants(vec![format!("x=(SELECT {huge})")])
        );
    }

    #[test]
    fn without_integers() {
        assert_eq!(
            swap_int_repr(&pattern(), "name='bob'"),
            MutationOutcome::Unchanged
        );
    }
}
