//! Line-level parsing for the text matrix format
//!
//! Each line is classified on its own, without knowledge of the extents
//! declared so far; bounds are checked by the reader in [`crate::format`].

use alloc::string::ToString;
use core::str::FromStr;

use crate::{Axis, MatrixElement, ParseCause};

/// One classified line of the text format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<T> {
    /// Empty or whitespace-only line
    Blank,
    /// `rows=<n>` or `cols=<n>`
    Dimension(Axis, usize),
    /// `(<row>,<col>,<value>)`
    Entry { row: i64, col: i64, value: T },
}

/// Classify a single line
pub fn parse_directive<T: MatrixElement>(line: &str) -> Result<Directive<T>, ParseCause> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Directive::Blank);
    }

    if let Some(inner) = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_entry(inner);
    }

    if let Some((key, value)) = line.split_once('=') {
        let axis = match key.trim() {
            "rows" => Axis::Row,
            "cols" => Axis::Column,
            _ => return Err(ParseCause::UnrecognizedLine),
        };
        return Ok(Directive::Dimension(axis, parse_integer(value)?));
    }

    Err(ParseCause::UnrecognizedLine)
}

/// Parse the inside of a parenthesized `row,col,value` triple
fn parse_entry<T: MatrixElement>(inner: &str) -> Result<Directive<T>, ParseCause> {
    let mut fields = inner.split(',');
    let (Some(row), Some(col), Some(value), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(ParseCause::WrongArity {
            found: inner.split(',').count(),
        });
    };

    Ok(Directive::Entry {
        row: parse_coordinate(row)?,
        col: parse_coordinate(col)?,
        value: parse_integer(value)?,
    })
}

/// Parse a coordinate field, saturating well-formed integers that do not
/// fit `i64` so the reader reports them as out of bounds
fn parse_coordinate(field: &str) -> Result<i64, ParseCause> {
    let trimmed = field.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    match parse_integer(field) {
        Ok(index) => Ok(index),
        Err(_) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            Ok(if negative { i64::MIN } else { i64::MAX })
        }
        Err(cause) => Err(cause),
    }
}

/// Parse a trimmed integer field
fn parse_integer<N: FromStr>(field: &str) -> Result<N, ParseCause> {
    let field = field.trim();
    field.parse().map_err(|_| ParseCause::InvalidInteger {
        text: field.to_string(),
    })
}
