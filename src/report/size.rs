use crate::constants::{BLOCK_SIZE, UNIT_SUFFIXES};
use std::fmt;

/// One `du` report line split into its size token and item label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedLine<'a> {
    /// Size field exactly as printed, e.g. `482M`.
    pub size: &'a str,
    /// Everything after the first tab, untouched.
    pub item: &'a str,
    /// Size resolved to bytes.
    pub bytes: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    MissingTab,
    UnknownUnit(char),
    InvalidNumber(String),
}

impl fmt::Display for ParseError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            ParseError::MissingTab => write!(f, "line has no tab separator"),
            ParseError::UnknownUnit(c) => write!(f, "unknown size unit {c:?}"),
            ParseError::InvalidNumber(s) => write!(f, "invalid size number {s:?}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Split `line` at its first tab and resolve the size field to bytes.
pub fn parse_line(line: &str) -> Result<ParsedLine<'_>, ParseError> {
    let (size, item) = line.split_once('\t').ok_or(ParseError::MissingTab)?;
    let bytes = parse_size(size)?;
    Ok(ParsedLine { size, item, bytes })
}

/// Resolve a size token to bytes.
///
/// `4.0K` style tokens scale by the unit letter; bare numbers count 1 KiB
/// blocks, matching du's default `--block-size`.
pub fn parse_size(token: &str) -> Result<f64, ParseError> {
    match token.chars().last() {
        Some(last) if last.is_alphabetic() => {
            let multiplier = unit_multiplier(last).ok_or(ParseError::UnknownUnit(last))?;
            let number = parse_number(&token[..token.len() - last.len_utf8()])?;
            Ok(number * multiplier)
        }
        _ => Ok(parse_number(token)? * BLOCK_SIZE),
    }
}

/// Bytes per unit for a unit letter (`K` = 1024, `M` = 1024^2, ...).
///
/// Lower-case letters are accepted too, beyond du's upper-case alphabet,
/// because `du --si` prints `k`.
pub fn unit_multiplier(letter: char) -> Option<f64> {
    let upper = letter.to_ascii_uppercase();
    UNIT_SUFFIXES
        .iter()
        .position(|&u| u == upper)
        .map(|i| BLOCK_SIZE.powi(i as i32 + 1))
}

// Negative or infinite values still parse; `color_for` maps them to the
// fallback color.
fn parse_number(text: &str) -> Result<f64, ParseError> {
    text.parse()
        .map_err(|_| ParseError::InvalidNumber(text.to_string()))
}
