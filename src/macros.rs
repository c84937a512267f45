//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-text tokens

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's source text
/// * `$literal` - Optional literal value (defaults to `None`)
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Plus, "+".to_string(), span);
/// let number = MK_TOKEN!(TokenKind::Number, "42".to_string(), Some(LiteralValue::Number(42.0)), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $span:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: None,
            span: $span,
        }
    };
    ($kind:expr, $lexeme:expr, $literal:expr, $span:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: $literal,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for a fixed-text token.
///
/// The generated handler pushes a token of the given kind spanning the
/// literal text and advances the lexer past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| -> Result<(), Error> {
            let span = lexer.span_of($value.len());
            lexer.push(MK_TOKEN!($kind, String::from($value), span));
            lexer.advance_n($value.len());
            Ok(())
        }
    };
}
