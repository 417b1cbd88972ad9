//! `SelectStatement`: structural access to one parsed SELECT statement.
//!
//! Construction tokenizes and groups the input, enforces the
//! single-simple-SELECT contract, and builds the keyword offset table.
//! Everything after that is a read-only query: slice the grouped token
//! stream by keyword offsets and re-serialize the slice with normalized
//! whitespace. The statement never mutates after `parse`.

use crate::{Error, Field, KeywordOffsets, Result};
use crate::sql::{Keyword, Token, TokenKind, group, stringify, tokenize};

/// A single parsed SELECT statement and its keyword offset table.
#[derive(Debug, Clone)]
pub struct SelectStatement {
    tokens: Vec<Token>,
    offsets: KeywordOffsets,
}

impl SelectStatement {
    /// Parse a SQL string holding exactly one simple SELECT statement.
    ///
    /// Fails with:
    /// - [`Error::NotSelect`] when the first token is not `SELECT`;
    /// - [`Error::MultipleStatements`] when a semicolon is followed by
    ///   anything but whitespace (one trailing semicolon is stripped);
    /// - [`Error::UnsupportedSyntax`] when a top-level keyword falls
    ///   outside the supported vocabulary.
    pub fn parse(sql: &str) -> Result<Self> {
        let mut flat = tokenize(sql);

        match flat.iter().find(|t| !t.is_whitespace()) {
            Some(first) if first.is_keyword(Keyword::Select) => {}
            _ => return Err(Error::NotSelect),
        }

        // Statement separation is checked on the flat stream, before a
        // WHERE clause node could swallow the semicolon.
        if let Some(semi) = flat
            .iter()
            .position(|t| t.kind == TokenKind::Other && t.text == ";")
        {
            if flat[semi + 1..].iter().any(|t| !t.is_whitespace()) {
                return Err(Error::MultipleStatements);
            }
            flat.truncate(semi);
        }

        let tokens = group(flat);
        let offsets = KeywordOffsets::locate_strict(&tokens, &Keyword::SUPPORTED)?;
        Ok(Self { tokens, offsets })
    }

    /// The SELECT-list entries in source order, or `None` when the region
    /// between SELECT and FROM is empty or not recognized in shape
    /// (e.g. `SELECT *`).
    pub fn fields(&self) -> Option<Vec<Field>> {
        let select = self.offsets.get(Keyword::Select)?;
        let from = self.offsets.get(Keyword::From)?;
        for token in &self.tokens[select + 1..from] {
            match token.kind {
                TokenKind::Field => return Some(vec![Self::field_entry(token)]),
                TokenKind::FieldList => {
                    return Some(
                        token
                            .children
                            .iter()
                            .filter(|t| t.kind == TokenKind::Field)
                            .map(Self::field_entry)
                            .collect(),
                    );
                }
                _ => {}
            }
        }
        None
    }

    /// Split one `Field` composite into `(expression, alias)` around its
    /// `AS` keyword, if any.
    fn field_entry(field: &Token) -> Field {
        let offsets = KeywordOffsets::locate(&field.children, &[Keyword::As]);
        match offsets.get(Keyword::As) {
            Some(idx) => Field::new(
                stringify(&field.children[..idx]),
                stringify(&field.children[idx + 1..]),
            ),
            None => Field::unaliased(stringify(&field.children)),
        }
    }

    /// The source expression after FROM, truncated before the earliest
    /// terminator keyword present; `None` when the statement has no FROM.
    /// A terminator sitting before FROM leaves no source range and yields
    /// an empty string.
    pub fn source_clause(&self) -> Option<String> {
        let start = self.offsets.get(Keyword::From)? + 1;
        let end = Keyword::TERMINATORS
            .iter()
            .filter_map(|kw| self.offsets.get(*kw))
            .min()
            .unwrap_or(self.tokens.len())
            .max(start);
        Some(stringify(&self.tokens[start..end]))
    }

    /// The WHERE predicate without the leading WHERE keyword, or `None`
    /// when the statement has no WHERE clause.
    pub fn where_clause(&self) -> Option<String> {
        let idx = self.offsets.get(Keyword::Where)?;
        let (_, predicate) = self.tokens[idx].children.split_first()?;
        Some(stringify(predicate))
    }

    /// The statement up to (exclusive) its LIMIT keyword, or the whole
    /// statement when no LIMIT is present. This is the base of the
    /// zero-row probe query used for type introspection.
    pub fn without_limit(&self) -> String {
        match self.offsets.get(Keyword::Limit) {
            Some(limit) => stringify(&self.tokens[..limit]),
            None => stringify(&self.tokens),
        }
    }
}
