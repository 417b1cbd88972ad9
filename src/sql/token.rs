//! Token model: a `TokenKind` plus its literal text, or an ordered list of
//! child tokens for composite nodes.
//!
//! Leaves own the literal text they were scanned from; composites own their
//! children and have no text of their own. Tokens are immutable after
//! construction — extraction works on flattened, normalized *copies* of the
//! text, never by mutating the token tree.
//!
//! The `stringify` helper in this module is the shared flatten-and-stringify
//! primitive: recursively expand a token range to its leaves, collapse every
//! maximal run of whitespace leaves into a single space, concatenate, and
//! trim the ends. It is idempotent on already-normalized text.

use crate::sql::{keyword::Keyword, token_kind::TokenKind};
use itertools::Itertools as _;

/// A lexical leaf or composite node.
///
/// Invariants:
/// - a leaf has non-empty `text` and no `children`;
/// - a composite has children and empty `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub children: Vec<Token>,
}

impl Token {
    /// Construct a leaf token.
    pub fn leaf(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Construct a composite token from an ordered child list.
    pub fn composite(kind: TokenKind, children: Vec<Token>) -> Self {
        Self {
            kind,
            text: String::new(),
            children,
        }
    }

    /// True if this token is a whitespace run.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }

    /// True if this token is the given keyword leaf.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind.is_keyword(kw)
    }

    /// Returns the keyword if this token is a keyword leaf.
    pub fn keyword(&self) -> Option<Keyword> {
        self.kind.keyword()
    }

    /// Append this token's leaves, in order, to `out`.
    pub fn flatten<'a>(&'a self, out: &mut Vec<&'a Token>) {
        if self.children.is_empty() {
            out.push(self);
        } else {
            for child in &self.children {
                child.flatten(out);
            }
        }
    }
}

/// Flatten a token range to its leaves and re-serialize it with every
/// whitespace run collapsed to a single space and the ends trimmed.
pub fn stringify(tokens: &[Token]) -> String {
    let mut leaves = Vec::new();
    for token in tokens {
        token.flatten(&mut leaves);
    }
    leaves
        .into_iter()
        .dedup_by(|a, b| a.is_whitespace() && b.is_whitespace())
        .map(|leaf| {
            if leaf.is_whitespace() {
                " "
            } else {
                leaf.text.as_str()
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(text: &str) -> Token {
        Token::leaf(TokenKind::Ident, text)
    }

    fn ws(text: &str) -> Token {
        Token::leaf(TokenKind::Whitespace, text)
    }

    #[test]
    fn leaf_accessors() {
        let t = Token::leaf(TokenKind::Keyword(Keyword::Select), "SELECT");
        assert!(t.is_keyword(Keyword::Select));
        assert_eq!(t.keyword(), Some(Keyword::Select));
        assert!(!t.is_whitespace());
    }

    #[test]
    fn flatten_expands_composites_in_order() {
        let inner = Token::composite(TokenKind::Field, vec![ident("a"), ws(" "), ident("b")]);
        let tokens = vec![ident("x"), inner];
        let mut leaves = Vec::new();
        for t in &tokens {
            t.flatten(&mut leaves);
        }
        let texts: Vec<&str> = leaves.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["x", "a", " ", "b"]);
    }

    #[test]
    fn stringify_collapses_whitespace_runs() {
        let tokens = vec![
            ident("a"),
            ws("\t\n  "),
            Token::leaf(TokenKind::Operator, ">"),
            ws(" "),
            ws("   "),
            Token::leaf(TokenKind::Number, "1"),
        ];
        assert_eq!(stringify(&tokens), "a > 1");
    }

    #[test]
    fn stringify_trims_the_ends() {
        let tokens = vec![ws("  "), ident("t"), ws("\n")];
        assert_eq!(stringify(&tokens), "t");
    }

    #[test]
    fn stringify_is_idempotent_on_normalized_text() {
        let tokens = vec![ident("a"), ws(" "), ident("b")];
        let once = stringify(&tokens);
        let again = stringify(&[ident(&once)]);
        assert_eq!(once, again);
    }

    #[test]
    fn stringify_keeps_adjacent_leaves_unseparated() {
        let tokens = vec![
            ident("count"),
            Token::leaf(TokenKind::ParenOpen, "("),
            Token::leaf(TokenKind::Operator, "*"),
            Token::leaf(TokenKind::ParenClose, ")"),
        ];
        assert_eq!(stringify(&tokens), "count(*)");
    }
}
