use crate::sql::{keyword::Keyword, token::Token, token_kind::TokenKind};

/// Lenient SQL scanner producing a flat stream of leaf `Token`s.
///
/// Scope / Intent:
/// - Feeds the grouping passes and the clause extractor; not a validator.
/// - Accepts incomplete / syntactically invalid SQL; classification errors
///   degrade to `Ident` / `Other`, never to a failure.
///
/// Behavior:
/// - Whitespace runs are preserved as `Whitespace` tokens (the
///   flatten-and-stringify primitive needs them for normalization).
/// - `[A-Za-z_][A-Za-z0-9_]*` runs become keywords (via one lowercase pass)
///   or identifiers preserving original case.
/// - Digit runs (with interior dots) become `Number`.
/// - `'...'` becomes a `Literal`, `"..."` a quoted `Ident`; an unterminated
///   quote runs to the end of input.
/// - Comma, dot and parentheses get their own kinds; a small operator
///   character set becomes `Operator`; everything else is `Other`.
///
/// Guarantees:
/// - Never panics on valid UTF-8; never returns an error.
/// - Concatenating the text of all returned tokens reproduces the input.
pub fn tokenize(sql: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let bytes = sql.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i] as char;
        let start = i;

        // Whitespace run
        if c.is_ascii_whitespace() {
            i += 1;
            while i < bytes.len() && (bytes[i] as char).is_ascii_whitespace() {
                i += 1;
            }
            out.push(Token::leaf(TokenKind::Whitespace, &sql[start..i]));
            continue;
        }

        // Word path: keyword or identifier
        if c.is_ascii_alphabetic() || c == '_' {
            i += 1;
            while i < bytes.len() {
                let cc = bytes[i] as char;
                if cc.is_ascii_alphanumeric() || cc == '_' {
                    i += 1;
                } else {
                    break;
                }
            }
            let text = &sql[start..i];
            let lower = text.to_ascii_lowercase();
            let kind = Keyword::from_lower(&lower)
                .map(TokenKind::Keyword)
                .unwrap_or(TokenKind::Ident);
            out.push(Token::leaf(kind, text));
            continue;
        }

        // Numeric literal
        if c.is_ascii_digit() {
            i += 1;
            while i < bytes.len() {
                let cc = bytes[i] as char;
                if cc.is_ascii_digit() || cc == '.' {
                    i += 1;
                } else {
                    break;
                }
            }
            out.push(Token::leaf(TokenKind::Number, &sql[start..i]));
            continue;
        }

        // Quoted literal / quoted identifier
        if c == '\'' || c == '"' {
            i += 1;
            while i < bytes.len() && bytes[i] as char != c {
                i += 1;
            }
            if i < bytes.len() {
                i += 1; // consume the closing quote
            }
            let kind = if c == '\'' {
                TokenKind::Literal
            } else {
                TokenKind::Ident
            };
            out.push(Token::leaf(kind, &sql[start..i]));
            continue;
        }

        // Single-character tokens; non-ASCII consumes the whole char.
        let char_len = sql[start..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(1);
        i = start + char_len;
        let kind = match c {
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '(' => TokenKind::ParenOpen,
            ')' => TokenKind::ParenClose,
            '=' | '<' | '>' | '!' | '+' | '-' | '*' | '/' | '%' => TokenKind::Operator,
            _ => TokenKind::Other,
        };
        out.push(Token::leaf(kind, &sql[start..i]));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::keyword::Keyword;
    use crate::sql::token_kind::TokenKind;

    #[test]
    fn basic_select_sequence() {
        let toks = tokenize("SELECT a, b FROM t");
        assert!(toks.iter().any(|t| t.is_keyword(Keyword::Select)));
        assert!(toks.iter().any(|t| t.is_keyword(Keyword::From)));
        assert!(
            toks.iter()
                .any(|t| t.kind == TokenKind::Ident && t.text == "a")
        );
        assert!(
            toks.iter()
                .any(|t| t.kind == TokenKind::Ident && t.text == "t")
        );
    }

    #[test]
    fn roundtrips_the_input_text() {
        let sql = "SELECT\ta,  b\nFROM t WHERE x > 1";
        let toks = tokenize(sql);
        let rebuilt: String = toks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, sql);
    }

    #[test]
    fn non_ascii_input_roundtrips() {
        let sql = "SELECT 'café' FROM naïve";
        let toks = tokenize(sql);
        let rebuilt: String = toks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, sql);
    }

    #[test]
    fn whitespace_runs_are_single_tokens() {
        let toks = tokenize("a \t\n b");
        let ws: Vec<&Token> = toks.iter().filter(|t| t.is_whitespace()).collect();
        assert_eq!(ws.len(), 1);
        assert_eq!(ws[0].text, " \t\n ");
    }

    #[test]
    fn preserves_case_for_identifiers() {
        let toks = tokenize("From MyTable");
        assert!(toks.iter().any(|t| t.is_keyword(Keyword::From)));
        assert!(toks.iter().any(|t| t.text == "MyTable"));
    }

    #[test]
    fn numbers_and_operators() {
        let toks = tokenize("x > 1.5");
        assert!(
            toks.iter()
                .any(|t| t.kind == TokenKind::Operator && t.text == ">")
        );
        assert!(
            toks.iter()
                .any(|t| t.kind == TokenKind::Number && t.text == "1.5")
        );
    }

    #[test]
    fn quoted_forms() {
        let toks = tokenize(r#"SELECT "Name" FROM t WHERE s = 'a b'"#);
        assert!(
            toks.iter()
                .any(|t| t.kind == TokenKind::Ident && t.text == "\"Name\"")
        );
        assert!(
            toks.iter()
                .any(|t| t.kind == TokenKind::Literal && t.text == "'a b'")
        );
    }

    #[test]
    fn unterminated_quote_runs_to_end() {
        let toks = tokenize("'abc");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].kind, TokenKind::Literal);
        assert_eq!(toks[0].text, "'abc");
    }

    #[test]
    fn other_characters() {
        let toks = tokenize("SELECT * FROM t;");
        assert!(
            toks.iter()
                .any(|t| t.kind == TokenKind::Operator && t.text == "*")
        );
        assert!(
            toks.iter()
                .any(|t| t.kind == TokenKind::Other && t.text == ";")
        );
    }
}
