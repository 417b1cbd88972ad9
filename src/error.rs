#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A top-level keyword outside the supported SELECT vocabulary.
    #[error("unsupported keyword: {0}")]
    UnsupportedSyntax(String),

    #[error("statement is not a SELECT")]
    NotSelect,

    #[error("input contains more than one statement")]
    MultipleStatements,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type Result<T = ()> = std::result::Result<T, Error>;
