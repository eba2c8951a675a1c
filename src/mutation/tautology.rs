//! Tautology and antinomy detection plus the two rewrite operators built on
//! it.
//!
//! Four shapes are recognized, in priority order: numeric equality tautology
//! (`N=N`, `N LIKE N`), numeric inequality antinomy (`N1!=N2`), string
//! equality tautology (`'s'='s'`), string inequality antinomy (`'s'!='t'`).
//! The positive shapes require the *same* literal on both sides and the
//! negative shapes require *different* literals; anything else is not safe to
//! rewrite without changing the statement's truth value.
//!
//! The identity tests are back-references in spirit. The linear-time regex
//! engine has no back-references, so each shape pairs a relaxed pattern with
//! a predicate over its capture groups, and the scan resumes one character
//! past a rejected match.

use regex::{Captures, Regex};

use crate::errors::Result;
use crate::matcher::Candidate;

use super::MutationOutcome;

/// Invariant suffixes appended by `logical_invariant`, in emission order.
const INVARIANT_SUFFIXES: [&str; 8] = [
    " AND 1",
    " AND True",
    " AND 10=10",
    " AND 'x'='x'",
    " OR 0",
    " OR False",
    " OR 10=11",
    " OR 'x'='y'",
];

/// Replacement renderings used by `change_tautologies`, numeric then string,
/// in emission order.
///
/// The string equality renderings pair two different literals (`'a'='b'`),
/// which the detector itself would not classify as a tautology. The table is
/// kept verbatim for output compatibility; see DESIGN.md.
const NUMERIC_REWRITES: [&str; 6] = [
    "10=10",
    "10 LIKE 10",
    "10!=11",
    "10<>11",
    "10 NOT LIKE 11",
    "10 IN (9,10,11)",
];
const STRING_REWRITES: [&str; 10] = [
    "'a'='b'",
    "'a' LIKE 'b'",
    "\"a\"=\"b\"",
    "\"a\" LIKE \"b\"",
    "'a'!='b'",
    "'a'<>'b'",
    "'a' NOT LIKE 'b'",
    "\"a\"!=\"b\"",
    "\"a\"<>\"b\"",
    "\"a\" NOT LIKE \"b\"",
];

/// One recognizable shape: a relaxed pattern plus the capture-group predicate
/// that enforces the literal identity (or difference) test.
struct Shape {
    pattern: Regex,
    accept: fn(&Captures<'_>) -> bool,
}

/// Detector shared by `logical_invariant` and `change_tautologies`.
pub(crate) struct TautologyDetector {
    shapes: Vec<Shape>,
}

impl TautologyDetector {
    pub(crate) fn new() -> Result<Self> {
        let shapes = vec![
            // Numeric equality: both operands the identical integer literal.
            Shape {
                pattern: Regex::new(r"\b(\d+)(\s*=\s*|\s+(?i:like)\s+)(\d+)\b")?,
                accept: |caps| group(caps, 1) == group(caps, 3),
            },
            // Numeric inequality: operands must differ.
            Shape {
                pattern: Regex::new(r"\b(\d+)(\s*(?:!=|<>)\s*|\s+(?i:not like)\s+)(\d+)\b")?,
                accept: |caps| group(caps, 1) != group(caps, 3),
            },
            // String equality: matching quotes on each side, identical word.
            Shape {
                pattern: Regex::new(
                    r#"(['"])([a-zA-Z][\w#@$]*)(['"])(\s*=\s*|\s+(?i:like)\s+)(['"])([a-zA-Z][\w#@$]*)(['"])"#,
                )?,
                accept: |caps| {
                    group(caps, 3) == group(caps, 1)
                        && group(caps, 7) == group(caps, 5)
                        && group(caps, 6) == group(caps, 2)
                },
            },
            // String inequality: matching quotes, words must differ. The
            // prefix test mirrors the original look-ahead, which also
            // rejected a right word extending the left one.
            Shape {
                pattern: Regex::new(
                    r#"(['"])([a-zA-Z][\w#@$]*)(['"])(\s*(?:!=|<>)\s*|\s+(?i:not like)\s+)(['"])([a-zA-Z][\w#@$]*)(['"])"#,
                )?,
                accept: |caps| {
                    group(caps, 3) == group(caps, 1)
                        && group(caps, 7) == group(caps, 5)
                        && !group(caps, 6).starts_with(group(caps, 2))
                },
            },
        ];
        Ok(Self { shapes })
    }

    /// Leftmost accepted match of the highest-priority shape present.
    pub(crate) fn detect(&self, payload: &str) -> Option<Candidate> {
        for shape in &self.shapes {
            if let Some(candidate) = scan(shape, payload) {
                return Some(candidate);
            }
        }
        None
    }

    /// Append each of the eight invariant suffixes immediately after the
    /// detected expression.
    pub(crate) fn logical_invariant(&self, payload: &str) -> MutationOutcome {
        match self.detect(payload) {
            Some(candidate) => MutationOutcome::Variants(
                INVARIANT_SUFFIXES
                    .iter()
                    .map(|suffix| candidate.append_after(payload, suffix))
                    .collect(),
            ),
            None => MutationOutcome::Unchanged,
        }
    }

    /// Replace the detected expression with each of the sixteen fixed
    /// renderings.
    pub(crate) fn change_tautologies(&self, payload: &str) -> MutationOutcome {
        match self.detect(payload) {
            Some(candidate) => MutationOutcome::Variants(
                NUMERIC_REWRITES
                    .iter()
                    .chain(STRING_REWRITES.iter())
                    .map(|rewrite| candidate.splice(payload, rewrite))
                    .collect(),
            ),
            None => MutationOutcome::Unchanged,
        }
    }
}

fn group<'a>(caps: &'a Captures<'_>, index: usize) -> &'a str {
    caps.get(index).map(|m| m.as_str()).unwrap_or_default()
}

/// Position-ordered scan restarting one character past each rejected match.
fn scan(shape: &Shape, payload: &str) -> Option<Candidate> {
    let mut start = 0;
    while start <= payload.len() {
        let caps = shape.pattern.captures_at(payload, start)?;
        let whole = caps.get(0)?;
        if (shape.accept)(&caps) {
            return Some(Candidate {
                start: whole.start(),
                end: whole.end(),
                text: whole.as_str().to_string(),
                groups: caps
                    .iter()
                    .skip(1)
                    .map(|g| g.map(|m| m.as_str().to_string()))
                    .collect(),
            });
        }
        let step = payload[whole.start()..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        start = whole.start() + step;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> TautologyDetector {
        TautologyDetector::new().unwrap()
    }

    #[test]
    fn detects_numeric_equality_tautology() {
        let c = detector().detect("select * from t where 1=1").unwrap();
        assert_eq!(c.text, "1=1");
    }

    #[test]
    fn rejects_numeric_false_equality() {
        assert!(detector().detect("where 1=2").is_none());
    }

    #[test]
    fn detects_numeric_inequality_antinomy() {
        let c = detector().detect("where 1!=2").unwrap();
        assert_eq!(c.text, "1!=2");
        assert!(detector().detect("where 1!=1").is_none());
    }

    #[test]
    fn detects_like_forms() {
        assert!(detector().detect("where 5 LIKE 5").is_some());
        assert!(detector().detect("where 5 like 5").is_some());
        assert!(detector().detect("where 5 NOT LIKE 6").is_some());
    }

    #[test]
    fn detects_string_tautology() {
        let c = detector().detect("where 'a'='a'").unwrap();
        assert_eq!(c.text, "'a'='a'");
        let c = detector().detect(r#"where "ab" LIKE "ab""#).unwrap();
        assert_eq!(c.text, r#""ab" LIKE "ab""#);
    }

    #[test]
    fn rejects_string_false_equality() {
        assert!(detector().detect("where 'a'='b'").is_none());
    }

    #[test]
    fn detects_string_antinomy() {
        let c = detector().detect("where 'a'!='b'").unwrap();
        assert_eq!(c.text, "'a'!='b'");
        // Same word on both sides is not an antinomy
        assert!(detector().detect("where 'a'!='a'").is_none());
        // Neither is a right side extending the left
        assert!(detector().detect("where 'a'!='ab'").is_none());
    }

    #[test]
    fn numeric_shape_outranks_string_shape() {
        // Both shapes present; numeric wins regardless of position
        let c = detector().detect("where 'x'='x' and 2=2").unwrap();
        assert_eq!(c.text, "2=2");
    }

    #[test]
    fn rejected_match_does_not_mask_later_one() {
        let c = detector().detect("where 1=2 or 3=3").unwrap();
        assert_eq!(c.text, "3=3");
    }

    #[test]
    fn logical_invariant_appends_eight_suffixes() {
        let outcome = detector().logical_invariant("select * from table where 1=1");
        let variants = match outcome {
            MutationOutcome::Variants(v) => v,
            MutationOutcome::Unchanged => panic!("expected variants"),
        };
        assert_eq!(variants.len(), 8);
        assert_eq!(variants[0], "select * from table where 1=1 AND 1");
        assert_eq!(variants[3], "select * from table where 1=1 AND 'x'='x'");
        assert_eq!(variants[7], "select * from table where 1=1 OR 'x'='y'");
    }

    #[test]
    fn logical_invariant_without_candidate() {
        assert_eq!(
            detector().logical_invariant("select x from t where x=1"),
            MutationOutcome::Unchanged
        );
    }

    #[test]
    fn change_tautologies_emits_sixteen_renderings() {
        let outcome = detector().change_tautologies("admin' OR 1=1#");
        let variants = match outcome {
            MutationOutcome::Variants(v) => v,
            MutationOutcome::Unchanged => panic!("expected variants"),
        };
        assert_eq!(variants.len(), 16);
        assert_eq!(variants[0], "admin' OR 10=10#");
        assert_eq!(variants[5], "admin' OR 10 IN (9,10,11)#");
        assert_eq!(variants[6], "admin' OR 'a'='b'#");
        assert_eq!(variants[15], "admin' OR \"a\" NOT LIKE \"b\"#");
    }

    #[test]
    fn variants_only_touch_candidate_span() {
        let payload = "prefix 7=7 suffix";
        let outcome = detector().change_tautologies(payload);
        if let MutationOutcome::Variants(variants) = outcome {
            for v in variants {
                assert!(v.starts_with("prefix "));
                assert!(v.ends_with(" suffix"));
            }
        } else {
            panic!("expected variants");
        }
    }
}
