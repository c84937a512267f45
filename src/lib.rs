#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::{parse_with_config, ParserConfig},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A byte offset into a named source.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Lexes and parses `source` as a single expression.
pub fn parse_source(source: String, file: Option<String>) -> Result<Expr, Error> {
    parse_source_with_config(source, file, ParserConfig::default())
}

pub fn parse_source_with_config(
    source: String,
    file: Option<String>,
    config: ParserConfig,
) -> Result<Expr, Error> {
    let tokens = tokenize(source, file)?;
    let (_, result) = parse_with_config(tokens, config);
    result
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line. An offset at the very end of the source maps
/// to the end of the last line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last = None;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        last = Some((line_number, line.to_string(), pos - start));
        start = end;
        line_number += 1;
    }

    match last {
        // EOF sits just past the final character
        Some((line_number, line, _)) if !line.ends_with('\n') => {
            let line_pos = line.len();
            Some((line_number, line, line_pos))
        }
        _ => Some((line_number, String::new(), 0)),
    }
}

/// Renders `error` against the source it came from.
///
/// ```text
/// Error: UnclosedGrouping (...)
/// -> expr.lox
///   |
/// 1 | (1 + 2
///   | ^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        out.push_str(&format!("   at offset {}\n", position.0));
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (String::from(&string[start..]), start)
}
