//! Pattern Matcher - leftmost-match search over payloads
//!
//! Thin wrapper over precompiled regexes. The `regex` crate guarantees
//! linear-time matching, so adversarial payloads cannot trigger backtracking
//! blowups.

use regex::Regex;

/// A successful pattern search: the half-open span `[start, end)` into the
/// payload, the matched substring, and any captured sub-groups the rule needs
/// to build replacements. Call-scoped; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub groups: Vec<Option<String>>,
}

impl Candidate {
    /// Rebuild the payload with `replacement` spliced over the span.
    /// Bytes outside the span are copied verbatim, in order.
    pub fn splice(&self, payload: &str, replacement: &str) -> String {
        let mut out = String::with_capacity(payload.len() + replacement.len());
        out.push_str(&payload[..self.start]);
        out.push_str(replacement);
        out.push_str(&payload[self.end..]);
        out
    }

    /// Rebuild the payload with `suffix` inserted immediately after the span.
    pub fn append_after(&self, payload: &str, suffix: &str) -> String {
        let mut out = String::with_capacity(payload.len() + suffix.len());
        out.push_str(&payload[..self.end]);
        out.push_str(suffix);
        out.push_str(&payload[self.end..]);
        out
    }
}

/// Leftmost match of `pattern` in `payload`, or `None`.
pub fn find_first(pattern: &Regex, payload: &str) -> Option<Candidate> {
    let caps = pattern.captures(payload)?;
    let whole = caps.get(0)?;
    let groups = caps
        .iter()
        .skip(1)
        .map(|g| g.map(|m| m.as_str().to_string()))
        .collect();
    Some(Candidate {
        start: whole.start(),
        end: whole.end(),
        text: whole.as_str().to_string(),
        groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leftmost_match_wins() {
        let re = Regex::new(r"\d+").unwrap();
        let candidate = find_first(&re, "a 12 b 34").unwrap();
        assert_eq!(candidate.start, 2);
        assert_eq!(candidate.end, 4);
        assert_eq!(candidate.text, "12");
    }

    #[test]
    fn no_match_is_none() {
        let re = Regex::new(r"\d+").unwrap();
        assert!(find_first(&re, "no digits here").is_none());
    }

    #[test]
    fn groups_are_captured() {
        let re = Regex::new(r"(\w+)=(\w+)").unwrap();
        let candidate = find_first(&re, "where a=b").unwrap();
        assert_eq!(candidate.groups.len(), 2);
        assert_eq!(candidate.groups[0].as_deref(), Some("a"));
        assert_eq!(candidate.groups[1].as_deref(), Some("b"));
    }

    #[test]
    fn splice_preserves_outside_bytes() {
        let re = Regex::new(r"\d+").unwrap();
        let candidate = find_first(&re, "x=1 and y=2").unwrap();
        assert_eq!(candidate.splice("x=1 and y=2", "0x1"), "x=0x1 and y=2");
    }

    #[test]
    fn append_after_inserts_at_span_end() {
        let re = Regex::new(r"1=1").unwrap();
        let payload = "where 1=1 limit 1";
        let candidate = find_first(&re, payload).unwrap();
        assert_eq!(
            candidate.append_after(payload, " AND 1"),
            "where 1=1 AND 1 limit 1"
        );
    }
}
