//! Grouping passes turning the flat leaf stream into the shallow statement
//! structure the clause extractor works on.
//!
//! Three passes run in order:
//! 1. balanced `( ... )` runs collapse into `Parenthesized` composites, so
//!    keywords inside parentheses never surface at the top level;
//! 2. the WHERE keyword and everything up to the next clause keyword
//!    collapse into a `WhereClause` composite;
//! 3. the region between SELECT and FROM collapses into a single `Field`
//!    composite or a `FieldList` of them, splitting on top-level commas. A
//!    candidate becomes a `Field` only if it contains expression material;
//!    `SELECT *` therefore stays ungrouped and yields no field entries.
//!
//! Like the scanner, grouping is lenient and never fails: unbalanced
//! parentheses degrade to plain leaves and missing keywords leave the
//! stream untouched.

use crate::sql::{keyword::Keyword, token::Token, token_kind::TokenKind};

/// Run all grouping passes over a flat token stream.
pub fn group(tokens: Vec<Token>) -> Vec<Token> {
    group_fields(group_where(group_parens(tokens)))
}

/// Collapse balanced parenthesis runs into `Parenthesized` composites.
/// Both paren leaves stay inside the composite so re-serialization is exact.
fn group_parens(tokens: Vec<Token>) -> Vec<Token> {
    let mut base: Vec<Token> = Vec::new();
    let mut frames: Vec<Vec<Token>> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::ParenOpen => frames.push(vec![token]),
            TokenKind::ParenClose => match frames.pop() {
                Some(mut inner) => {
                    inner.push(token);
                    let composite = Token::composite(TokenKind::Parenthesized, inner);
                    match frames.last_mut() {
                        Some(frame) => frame.push(composite),
                        None => base.push(composite),
                    }
                }
                // Unbalanced close: keep the leaf.
                None => base.push(token),
            },
            _ => match frames.last_mut() {
                Some(frame) => frame.push(token),
                None => base.push(token),
            },
        }
    }

    // Unbalanced opens: flatten the leftover frames back, in order.
    base.extend(frames.into_iter().flatten());
    base
}

/// Collapse `WHERE ...` into a `WhereClause` composite ending before the
/// first following clause keyword (GROUP, BY, HAVING, ORDER, UNION, LIMIT,
/// OFFSET) or at the end of the stream.
fn group_where(tokens: Vec<Token>) -> Vec<Token> {
    let Some(start) = tokens.iter().position(|t| t.is_keyword(Keyword::Where)) else {
        return tokens;
    };
    let end = tokens
        .iter()
        .enumerate()
        .skip(start + 1)
        .find(|(_, t)| {
            matches!(t.keyword(),
                Some(kw) if kw != Keyword::Where && Keyword::TERMINATORS.contains(&kw))
        })
        .map(|(idx, _)| idx)
        .unwrap_or(tokens.len());

    let mut iter = tokens.into_iter();
    let mut out: Vec<Token> = iter.by_ref().take(start).collect();
    let clause: Vec<Token> = iter.by_ref().take(end - start).collect();
    out.push(Token::composite(TokenKind::WhereClause, clause));
    out.extend(iter);
    out
}

/// Collapse the region between SELECT and FROM into `Field` / `FieldList`
/// composites. Leading and trailing whitespace of the region stays outside
/// the composite.
fn group_fields(tokens: Vec<Token>) -> Vec<Token> {
    let Some(select) = tokens.iter().position(|t| t.is_keyword(Keyword::Select)) else {
        return tokens;
    };
    let Some(from) = tokens
        .iter()
        .skip(select + 1)
        .position(|t| t.is_keyword(Keyword::From))
        .map(|idx| idx + select + 1)
    else {
        return tokens;
    };

    let mut iter = tokens.into_iter();
    let mut out: Vec<Token> = iter.by_ref().take(select + 1).collect();
    let region: Vec<Token> = iter.by_ref().take(from - select - 1).collect();
    out.extend(group_field_region(region));
    out.extend(iter);
    out
}

fn group_field_region(region: Vec<Token>) -> Vec<Token> {
    let has_comma = region.iter().any(|t| t.kind == TokenKind::Comma);
    let (lead, core, tail) = split_ws(region);

    let mut out = lead;
    if !has_comma {
        // Single candidate: wrap it only if it looks like an expression.
        if is_expression(&core) {
            out.push(Token::composite(TokenKind::Field, core));
        } else {
            out.extend(core);
        }
    } else {
        let mut children: Vec<Token> = Vec::new();
        let mut current: Vec<Token> = Vec::new();
        for token in core {
            if token.kind == TokenKind::Comma {
                flush_field(&mut children, std::mem::take(&mut current));
                children.push(token);
            } else {
                current.push(token);
            }
        }
        flush_field(&mut children, current);
        out.push(Token::composite(TokenKind::FieldList, children));
    }
    out.extend(tail);
    out
}

/// Wrap one comma-delimited part into a `Field`, keeping its surrounding
/// whitespace as plain children of the list.
fn flush_field(children: &mut Vec<Token>, part: Vec<Token>) {
    let (lead, core, tail) = split_ws(part);
    children.extend(lead);
    if is_expression(&core) {
        children.push(Token::composite(TokenKind::Field, core));
    } else {
        children.extend(core);
    }
    children.extend(tail);
}

/// Split a token run into (leading whitespace, core, trailing whitespace).
fn split_ws(mut tokens: Vec<Token>) -> (Vec<Token>, Vec<Token>, Vec<Token>) {
    let lead_n = tokens.iter().take_while(|t| t.is_whitespace()).count();
    let tail_n = tokens
        .iter()
        .rev()
        .take_while(|t| t.is_whitespace())
        .count()
        .min(tokens.len() - lead_n);
    let tail = tokens.split_off(tokens.len() - tail_n);
    let core = tokens.split_off(lead_n);
    (tokens, core, tail)
}

/// True if the run contains material that can stand as a field expression.
/// A bare `*` or a run of operators does not qualify, and neither does a
/// run carrying a keyword other than `AS` — those keywords must stay at
/// the top level so strict validation can see them.
fn is_expression(tokens: &[Token]) -> bool {
    let material = tokens.iter().any(|t| {
        matches!(
            t.kind,
            TokenKind::Ident | TokenKind::Number | TokenKind::Literal | TokenKind::Parenthesized
        )
    });
    let foreign_keyword = tokens
        .iter()
        .any(|t| matches!(t.keyword(), Some(kw) if kw != Keyword::As));
    material && !foreign_keyword
}
