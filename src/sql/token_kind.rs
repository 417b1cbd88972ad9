//! Token kind definitions for the lenient SQL tokenizer.
//!
//! Each `TokenKind` variant classifies a syntactic atom discovered during
//! scanning, or a composite node built by the grouping passes. The scanner
//! avoids strict SQL rules; anything unrecognized becomes `Other`.
//!
//! Leaf kinds carry no payload beyond the keyword classification — the
//! literal text lives on `Token`, since extraction re-serializes normalized
//! copies rather than slicing the original input.
//!
//! Composite kinds mirror the structural nodes the clause extractor needs:
//! a parenthesized run, a single SELECT-list expression (`Field`), the
//! comma-delimited SELECT list (`FieldList`), and the WHERE clause node.

use crate::sql::keyword::Keyword;

/// Classification for a token produced by the tokenizer / grouping passes.
///
/// Not a full SQL lexeme set; intentionally small and pragmatic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Recognized SQL keyword.
    Keyword(Keyword),
    /// Table / alias / column / generic identifier (including quoted ones).
    Ident,
    /// Numeric literal.
    Number,
    /// Single-quoted string literal.
    Literal,
    /// A maximal run of whitespace characters.
    Whitespace,
    /// Comma `,` (separates SELECT-list items, table items, ...).
    Comma,
    /// Dot `.` (qualified names like `table.column`).
    Dot,
    /// Opening parenthesis `(`.
    ParenOpen,
    /// Closing parenthesis `)`.
    ParenClose,
    /// Comparison / arithmetic operator characters (`=`, `>`, `*`, ...).
    Operator,
    /// Any other character we do not specially classify.
    Other,
    /// Composite: a balanced `( ... )` run, children include both parens.
    Parenthesized,
    /// Composite: one SELECT-list expression, possibly containing `AS`.
    Field,
    /// Composite: the comma-delimited SELECT list.
    FieldList,
    /// Composite: the WHERE clause, children start with the WHERE keyword.
    WhereClause,
}

impl TokenKind {
    /// True if this kind is the given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }

    /// Returns the keyword if this kind is a keyword leaf.
    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }

    /// True for the composite kinds built by the grouping passes.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            TokenKind::Parenthesized
                | TokenKind::Field
                | TokenKind::FieldList
                | TokenKind::WhereClause
        )
    }

    /// True if this kind is a whitespace run.
    pub fn is_whitespace(&self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }
}
