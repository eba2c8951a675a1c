//! Tokenizer - lossless SQL-aware lexing
//!
//! Splits a payload into classified tokens without a real SQL grammar. The
//! lexer is approximate by design: nested block comments and dialect-specific
//! quoting are not understood, unterminated strings and comments are consumed
//! to end-of-input, and anything unrecognized degrades to `Identifier` or
//! `Other`. What it does guarantee is losslessness: concatenating the token
//! values reconstructs the payload byte-for-byte.

pub mod canonical;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::symbols::SymbolTables;

pub use canonical::Canonicalizer;

/// Classification of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenCategory {
    /// Reserved word or built-in function
    Keyword,
    /// Punctuation or operator symbol
    Operator,
    /// String, numeric, or hex literal
    Literal,
    /// Schema object or other bare word
    Identifier,
    /// Run of whitespace characters
    Whitespace,
    /// Comments and anything unrecognized
    Other,
}

/// One lexed token: the exact slice of the payload plus its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub value: String,
    pub category: TokenCategory,
}

impl Token {
    fn new(value: &str, category: TokenCategory) -> Self {
        Self {
            value: value.to_string(),
            category,
        }
    }
}

/// SQL-aware lexer over a shared symbol table.
#[derive(Debug, Clone)]
pub struct SqlTokenizer {
    tables: Arc<SymbolTables>,
}

impl SqlTokenizer {
    pub fn new(tables: Arc<SymbolTables>) -> Self {
        Self { tables }
    }

    /// Lex `payload` into a lossless token sequence.
    pub fn tokenize(&self, payload: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < payload.len() {
            let rest = &payload[pos..];
            let c = match rest.chars().next() {
                Some(c) => c,
                None => break,
            };

            let token = if c.is_whitespace() {
                let end = scan_while(rest, |c| c.is_whitespace());
                Token::new(&rest[..end], TokenCategory::Whitespace)
            } else if c == '\'' || c == '"' {
                let end = scan_quoted(rest, c);
                Token::new(&rest[..end], TokenCategory::Literal)
            } else if rest.starts_with("/*") {
                let end = scan_block_comment(rest);
                Token::new(&rest[..end], TokenCategory::Other)
            } else if c == '#' || rest.starts_with("-- ") {
                let end = rest.find('\n').unwrap_or(rest.len());
                Token::new(&rest[..end], TokenCategory::Other)
            } else if c.is_ascii_digit() {
                let end = scan_number(rest);
                Token::new(&rest[..end], TokenCategory::Literal)
            } else if c.is_alphabetic() || c == '_' {
                let end = scan_while(rest, |c| c.is_alphanumeric() || c == '_' || c == '$');
                let word = &rest[..end];
                let category = if self.tables.is_keyword(word) {
                    TokenCategory::Keyword
                } else {
                    TokenCategory::Identifier
                };
                Token::new(word, category)
            } else if let Some(symbol) = self.match_operator(rest) {
                Token::new(symbol, TokenCategory::Operator)
            } else {
                Token::new(&rest[..c.len_utf8()], TokenCategory::Other)
            };

            pos += token.value.len();
            tokens.push(token);
        }

        tokens
    }

    /// Longest operator from the punctuation table matching at the front of
    /// `rest`. Table order already puts multi-character operators first.
    fn match_operator<'a>(&self, rest: &'a str) -> Option<&'a str> {
        self.tables
            .punctuation()
            .iter()
            .find(|(symbol, _)| rest.starts_with(symbol))
            .map(|(symbol, _)| &rest[..symbol.len()])
    }
}

fn scan_while(rest: &str, pred: impl Fn(char) -> bool) -> usize {
    rest.char_indices()
        .find(|(_, c)| !pred(*c))
        .map(|(i, _)| i)
        .unwrap_or(rest.len())
}

/// Quoted string including both delimiters. No escape handling; an
/// unterminated string runs to end-of-input.
fn scan_quoted(rest: &str, quote: char) -> usize {
    let inner = &rest[quote.len_utf8()..];
    match inner.find(quote) {
        Some(i) => quote.len_utf8() + i + quote.len_utf8(),
        None => rest.len(),
    }
}

/// Block comment including delimiters; unterminated runs to end-of-input.
fn scan_block_comment(rest: &str) -> usize {
    match rest[2..].find("*/") {
        Some(i) => 2 + i + 2,
        None => rest.len(),
    }
}

/// Integer, decimal, or `0x` hex literal.
fn scan_number(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    if (rest.starts_with("0x") || rest.starts_with("0X"))
        && bytes.get(2).is_some_and(|b| b.is_ascii_hexdigit())
    {
        return 2 + scan_while(&rest[2..], |c| c.is_ascii_hexdigit());
    }
    let mut end = scan_while(rest, |c| c.is_ascii_digit());
    // A dot joins the literal only when digits follow it.
    if bytes.get(end) == Some(&b'.') && bytes.get(end + 1).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
        end += scan_while(&rest[end..], |c| c.is_ascii_digit());
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> SqlTokenizer {
        SqlTokenizer::new(Arc::new(SymbolTables::builtin()))
    }

    fn reassemble(tokens: &[Token]) -> String {
        tokens.iter().map(|t| t.value.as_str()).collect()
    }

    #[test]
    fn lossless_roundtrip() {
        let payloads = [
            "select x from table where 1=1",
            "admin' OR 1=1#",
            "a/*c*/b  ||\t'str' 0x41 1.5",
            "broken 'unterminated",
            "broken /* comment",
            "x\u{a0}y -- trailing",
        ];
        let t = tokenizer();
        for payload in payloads {
            assert_eq!(reassemble(&t.tokenize(payload)), payload);
        }
    }

    #[test]
    fn classifies_keywords_and_identifiers() {
        let tokens = tokenizer().tokenize("select col from tab");
        let cats: Vec<_> = tokens
            .iter()
            .filter(|t| t.category != TokenCategory::Whitespace)
            .map(|t| (t.value.as_str(), t.category))
            .collect();
        assert_eq!(
            cats,
            vec![
                ("select", TokenCategory::Keyword),
                ("col", TokenCategory::Identifier),
                ("from", TokenCategory::Keyword),
                ("tab", TokenCategory::Identifier),
            ]
        );
    }

    #[test]
    fn multichar_operators_lex_whole() {
        let tokens = tokenizer().tokenize("a<>b||c<=d");
        let ops: Vec<_> = tokens
            .iter()
            .filter(|t| t.category == TokenCategory::Operator)
            .map(|t| t.value.as_str())
            .collect();
        assert_eq!(ops, vec!["<>", "||", "<="]);
    }

    #[test]
    fn literals_and_comments() {
        let tokens = tokenizer().tokenize("'abc' 0x1f 10.5 /*x*/ #rest");
        let cats: Vec<_> = tokens
            .iter()
            .filter(|t| t.category != TokenCategory::Whitespace)
            .map(|t| (t.value.as_str(), t.category))
            .collect();
        assert_eq!(
            cats,
            vec![
                ("'abc'", TokenCategory::Literal),
                ("0x1f", TokenCategory::Literal),
                ("10.5", TokenCategory::Literal),
                ("/*x*/", TokenCategory::Other),
                ("#rest", TokenCategory::Other),
            ]
        );
    }

    #[test]
    fn dash_comment_requires_trailing_space() {
        let tokens = tokenizer().tokenize("1--2");
        assert!(tokens.iter().all(|t| t.value != "--2"));
        let tokens = tokenizer().tokenize("1-- 2");
        assert!(tokens.iter().any(|t| t.value == "-- 2"));
    }

    #[test]
    fn unterminated_string_is_single_literal() {
        let tokens = tokenizer().tokenize("x='abc");
        assert_eq!(tokens.last().unwrap().value, "'abc");
        assert_eq!(tokens.last().unwrap().category, TokenCategory::Literal);
    }

    #[test]
    fn number_then_dot_identifier_stays_split() {
        // "1.x" is not a decimal literal
        let tokens = tokenizer().tokenize("1.x");
        assert_eq!(tokens[0].value, "1");
        assert_eq!(tokens[1].value, ".");
    }
}
