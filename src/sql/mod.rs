//! Lenient SQL tokenization / shallow statement structure.
//!
//! This module groups the building blocks the clause extractor uses to
//! reason about a single SELECT statement without a full parser:
//!
//! Modules:
//! - `keyword`    : Enum of the supported vocabulary plus keywords we
//!   recognize only to reject.
//! - `token_kind` : Classification of lexical atoms and composite nodes.
//! - `token`      : Token struct owning literal text / child tokens, and the
//!   shared flatten-and-stringify primitive.
//! - `tokenizer`  : Single pass O(n) scanner producing flat leaf tokens.
//! - `grouping`   : Passes building `Parenthesized`, `Field`/`FieldList`
//!   and `WhereClause` composites on top of the flat stream.
//!
//! Design Principles:
//! 1. Scanning and grouping never fail; validation is the extractor's job.
//! 2. Preserve original text exactly — whitespace runs are tokens, and the
//!    grouped tree re-serializes to the input byte for byte.
//! 3. Keep the keyword set purposely small; this is **not** a SQL parser.
//!
//! Example:
//! ```rust
//! use qslice::sql::prelude::*;
//!
//! let tokens = tokenize("SELECT a, b FROM my_table");
//! assert!(tokens.iter().any(|t| t.is_keyword(Keyword::Select)));
//! assert!(tokens.iter().any(|t| t.text == "my_table"));
//! ```

pub mod grouping;
pub mod keyword;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use grouping::group;
pub use keyword::Keyword;
pub use token::{Token, stringify};
pub use token_kind::TokenKind;
pub use tokenizer::tokenize;

/// Convenience prelude re-exporting the most commonly used items.
///
/// Import with:
/// `use qslice::sql::prelude::*;`
pub mod prelude {
    pub use super::{Keyword, Token, TokenKind, group, stringify, tokenize};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_group_and_stringify() {
        let tokens = group(tokenize("SELECT  a\tFROM   tbl"));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Field));
        assert_eq!(stringify(&tokens), "SELECT a FROM tbl");
    }

    #[test]
    fn prelude_import_works() {
        use super::prelude::*;
        let toks = tokenize("FROM X");
        assert!(toks.iter().any(|t| t.is_keyword(Keyword::From)));
        assert!(toks.iter().any(|t| t.text == "X"));
    }
}
