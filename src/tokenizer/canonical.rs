//! Canonicalizer - structural fingerprints for payloads
//!
//! Rewrites a payload into a canonical symbolic string where literals,
//! punctuation, and whitelisted schema/system object names are replaced by
//! category tokens. The result depends only on the statement's shape, not on
//! concrete literal values or identifier names, which is what downstream
//! feature extractors key on.
//!
//! Pipeline, in order: object names, literal classes (hex, strings, IP-shaped,
//! decimal, integer), punctuation, whitespace collapse, dotted-path idioms.
//! Every pattern is compiled once at construction.

use regex::{NoExpand, Regex};

use crate::errors::Result;
use crate::symbols::SymbolTables;

/// Precompiled canonicalization pipeline over a symbol table snapshot.
#[derive(Debug)]
pub struct Canonicalizer {
    /// One alternation per non-empty object category, names longest-first.
    object_patterns: Vec<(Regex, &'static str)>,
    hex_literal: Regex,
    string_literal: Regex,
    ip_literal: Regex,
    decimal_literal: Regex,
    int_literal: Regex,
    punctuation: &'static [(&'static str, &'static str)],
}

impl Canonicalizer {
    pub fn new(tables: &SymbolTables) -> Result<Self> {
        let mut object_patterns = Vec::new();
        for (category, names) in tables.objects() {
            if names.is_empty() {
                continue;
            }
            let alternation = names
                .iter()
                .map(|n| regex::escape(n))
                .collect::<Vec<_>>()
                .join("|");
            // Word-bounded so a placeholder emitted by one category can never
            // be re-matched by another pass (SYS inside SYS_DB), which keeps
            // canonicalization idempotent.
            let pattern = Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))?;
            object_patterns.push((pattern, category.placeholder()));
        }

        Ok(Self {
            object_patterns,
            hex_literal: Regex::new(r"(X'[0-9a-fA-F]+'|0x[0-9a-fA-F]+)")?,
            string_literal: Regex::new(r#"'[^']*'|"[^"]*""#)?,
            ip_literal: Regex::new(r"[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+")?,
            decimal_literal: Regex::new(r"[-+]?[0-9]*\.[0-9]+")?,
            int_literal: Regex::new(r"[-+]?[0-9]+")?,
            punctuation: tables.punctuation(),
        })
    }

    /// Canonical symbolic form of `payload`. Purely derived; recompute on
    /// demand rather than storing.
    pub fn canonicalize(&self, payload: &str) -> String {
        let mut query = payload.to_string();

        for (pattern, placeholder) in &self.object_patterns {
            query = pattern
                .replace_all(&query, NoExpand(&format!(" {placeholder} ")))
                .into_owned();
        }

        // Literal classes, priority-ordered: a naive integer pass would
        // otherwise consume part of a hex, IP, or decimal literal.
        query = self
            .hex_literal
            .replace_all(&query, NoExpand(" HEX "))
            .into_owned();
        query = self
            .string_literal
            .replace_all(&query, |caps: &regex::Captures<'_>| {
                let matched = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
                if matched.chars().count() == 3 {
                    " CHR ".to_string()
                } else {
                    " STR ".to_string()
                }
            })
            .into_owned();
        query = self
            .ip_literal
            .replace_all(&query, NoExpand(" IP_ADDR "))
            .into_owned();
        query = self
            .decimal_literal
            .replace_all(&query, NoExpand(" DECIMAL "))
            .into_owned();
        query = self
            .int_literal
            .replace_all(&query, NoExpand(" INT "))
            .into_owned();

        for (symbol, name) in self.punctuation {
            if query.contains(symbol) {
                query = query.replace(symbol, &format!(" {name} "));
            }
        }

        let collapsed = query.split_whitespace().collect::<Vec<_>>().join(" ");
        normalize_dotted_paths(collapsed)
    }
}

/// Collapse recognized dotted-path idioms into a single column placeholder,
/// plus the `ORDER BY <string>` special case.
fn normalize_dotted_paths(query: String) -> String {
    query
        .replace("ORDER BY STR", "ORDER BY USRCOL")
        .replace("CHR PERIOD USRCOL", "USRCOL")
        .replace("STR PERIOD USRCOL", "USRCOL")
        .replace("USRTBL PERIOD USRCOL", "USRCOL")
}
