//! SQL keyword model for the lenient tokenizer.
//!
//! Two groups of variants live here. The *supported* vocabulary is the fixed
//! set of keywords a simple single-SELECT statement may use at the top level:
//! the SELECT list introducer, the FROM / join-condition words, and the
//! clause terminators that may follow the source expression. The remaining
//! variants are statement-level keywords the tokenizer still recognizes so
//! that strict validation can reject them by name instead of silently
//! treating them as identifiers.
//!
//! Design notes:
//! - Keywords are matched case-insensitively via `from_lower` using a
//!   pre-lower-cased string slice; the caller lower-cases once per lexeme.
//! - `as_str` provides a canonical lowercase representation.
//! - Multi-word joins (`LEFT OUTER JOIN`, ...) are represented word by word;
//!   each word is individually part of the source-clause vocabulary.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Supported vocabulary
    Select,
    From,
    Inner,
    Cross,
    Left,
    Right,
    Full,
    Outer,
    Join,
    On,
    And,
    Or,
    As,
    Where,
    Group,
    By,
    Having,
    Order,
    Union,
    Limit,
    Offset,
    // Recognized but rejected by strict validation
    Distinct,
    With,
    Fetch,
    Insert,
    Update,
    Delete,
    Into,
    Values,
    Set,
    Over,
    Window,
    Except,
    Intersect,
    Create,
    Drop,
    Alter,
    Returning,
}

impl Keyword {
    /// Keywords that may precede the field list.
    pub const BEFORE_FROM: [Self; 1] = [Keyword::Select];

    /// Keywords that introduce or continue the source expression: FROM, the
    /// join words, the join-condition connectives, and the alias keyword.
    pub const SOURCE: [Self; 12] = [
        Keyword::From,
        Keyword::Inner,
        Keyword::Cross,
        Keyword::Left,
        Keyword::Right,
        Keyword::Full,
        Keyword::Outer,
        Keyword::Join,
        Keyword::On,
        Keyword::And,
        Keyword::Or,
        Keyword::As,
    ];

    /// Keywords that terminate the source expression.
    pub const TERMINATORS: [Self; 8] = [
        Keyword::Where,
        Keyword::Group,
        Keyword::By,
        Keyword::Having,
        Keyword::Order,
        Keyword::Union,
        Keyword::Limit,
        Keyword::Offset,
    ];

    /// The whole supported top-level vocabulary: the union of
    /// `BEFORE_FROM`, `SOURCE` and `TERMINATORS`.
    pub const SUPPORTED: [Self; 21] = [
        Keyword::Select,
        Keyword::From,
        Keyword::Inner,
        Keyword::Cross,
        Keyword::Left,
        Keyword::Right,
        Keyword::Full,
        Keyword::Outer,
        Keyword::Join,
        Keyword::On,
        Keyword::And,
        Keyword::Or,
        Keyword::As,
        Keyword::Where,
        Keyword::Group,
        Keyword::By,
        Keyword::Having,
        Keyword::Order,
        Keyword::Union,
        Keyword::Limit,
        Keyword::Offset,
    ];

    /// Attempt to classify a *lower-cased* word slice into a `Keyword`.
    /// Returns `None` if the word is not a recognized keyword.
    pub fn from_lower(word: &str) -> Option<Self> {
        use Keyword::*;
        let kw = match word {
            "select" => Select,
            "from" => From,
            "inner" => Inner,
            "cross" => Cross,
            "left" => Left,
            "right" => Right,
            "full" => Full,
            "outer" => Outer,
            "join" => Join,
            "on" => On,
            "and" => And,
            "or" => Or,
            "as" => As,
            "where" => Where,
            "group" => Group,
            "by" => By,
            "having" => Having,
            "order" => Order,
            "union" => Union,
            "limit" => Limit,
            "offset" => Offset,
            "distinct" => Distinct,
            "with" => With,
            "fetch" => Fetch,
            "insert" => Insert,
            "update" => Update,
            "delete" => Delete,
            "into" => Into,
            "values" => Values,
            "set" => Set,
            "over" => Over,
            "window" => Window,
            "except" => Except,
            "intersect" => Intersect,
            "create" => Create,
            "drop" => Drop,
            "alter" => Alter,
            "returning" => Returning,
            _ => return None,
        };
        Some(kw)
    }

    /// True if this keyword belongs to the supported top-level vocabulary.
    pub fn is_supported(self) -> bool {
        Self::SUPPORTED.contains(&self)
    }

    /// Canonical lowercase string form of the keyword.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Select => "select",
            From => "from",
            Inner => "inner",
            Cross => "cross",
            Left => "left",
            Right => "right",
            Full => "full",
            Outer => "outer",
            Join => "join",
            On => "on",
            And => "and",
            Or => "or",
            As => "as",
            Where => "where",
            Group => "group",
            By => "by",
            Having => "having",
            Order => "order",
            Union => "union",
            Limit => "limit",
            Offset => "offset",
            Distinct => "distinct",
            With => "with",
            Fetch => "fetch",
            Insert => "insert",
            Update => "update",
            Delete => "delete",
            Into => "into",
            Values => "values",
            Set => "set",
            Over => "over",
            Window => "window",
            Except => "except",
            Intersect => "intersect",
            Create => "create",
            Drop => "drop",
            Alter => "alter",
            Returning => "returning",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
