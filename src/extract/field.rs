/// One SELECT-list entry: the expression text and its alias.
///
/// The alias equals the expression when the entry carries no explicit `AS`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{expression} AS {alias}")]
pub struct Field {
    pub expression: String,
    pub alias: String,
}

impl Field {
    pub fn new(expression: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            alias: alias.into(),
        }
    }

    /// An entry without an explicit alias; both slots hold the same text.
    pub fn unaliased(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            alias: text.clone(),
            expression: text,
        }
    }
}
