//! Structural clause extraction over a grouped token stream.
//!
//! - `offsets` : keyword locator building the offset table for a statement.
//! - `field`   : one SELECT-list entry, `(expression, alias)`.
//! - `select`  : `SelectStatement`, the read-only clause queries.

crate::reexport!(field);
crate::reexport!(offsets);
crate::reexport!(select);
