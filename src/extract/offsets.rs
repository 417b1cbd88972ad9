//! Keyword locator: maps each recognized keyword to the index of its first
//! occurrence in a statement's top-level token stream.

use crate::{Error, Result};
use crate::sql::{Keyword, Token, TokenKind};
use std::collections::HashMap;

/// Offset table from keyword to token index, built once per statement.
///
/// At most one entry per keyword: the first occurrence wins, so repeated
/// AND / OR in join conditions neither overwrite nor error.
#[derive(Debug, Default, Clone)]
pub struct KeywordOffsets(HashMap<Keyword, usize>);

impl KeywordOffsets {
    /// Locate every vocabulary keyword in `tokens`. A `WhereClause`
    /// composite records `WHERE` at its own index (when WHERE is part of
    /// the vocabulary); out-of-vocabulary keywords are ignored.
    pub fn locate(tokens: &[Token], vocabulary: &[Keyword]) -> Self {
        // The lenient pass cannot fail.
        Self::build(tokens, vocabulary, false).unwrap_or_default()
    }

    /// Like [`locate`](Self::locate), but any keyword leaf outside the
    /// vocabulary fails with `UnsupportedSyntax` naming the offender.
    pub fn locate_strict(tokens: &[Token], vocabulary: &[Keyword]) -> Result<Self> {
        Self::build(tokens, vocabulary, true)
    }

    fn build(tokens: &[Token], vocabulary: &[Keyword], strict: bool) -> Result<Self> {
        let mut offsets = HashMap::new();
        for (idx, token) in tokens.iter().enumerate() {
            if token.kind == TokenKind::WhereClause {
                if vocabulary.contains(&Keyword::Where) {
                    offsets.entry(Keyword::Where).or_insert(idx);
                }
                continue;
            }
            let Some(kw) = token.keyword() else { continue };
            if vocabulary.contains(&kw) {
                offsets.entry(kw).or_insert(idx);
            } else if strict {
                return Err(Error::UnsupportedSyntax(token.text.to_uppercase()));
            }
        }
        Ok(Self(offsets))
    }

    /// Index of the keyword's first occurrence, if present.
    pub fn get(&self, kw: Keyword) -> Option<usize> {
        self.0.get(&kw).copied()
    }

    /// True if the keyword occurs in the statement.
    pub fn contains(&self, kw: Keyword) -> bool {
        self.0.contains_key(&kw)
    }
}
