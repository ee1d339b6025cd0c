//! Line oriented parsing with non-fatal rejection
//!
//! Every line is trimmed and parsed on its own. Lines that don't parse (blank ones included) are
//! kept verbatim in [`Parsed::invalid`] so the caller can report them, and processing continues.
use log::warn;
use num_traits::Float;
use std::io::{self, BufRead};
use std::str::FromStr;

/// Accepted values and rejected raw lines, both in input order
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub values: Vec<T>,
    pub invalid: Vec<String>,
}

impl<T> Parsed<T> {
    /// True when no line was accepted
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse each line with its `FromStr` implementation
///
/// # Examples
///
/// ```
/// let input = "1\n  2 \nthree\n\n4\n";
/// let parsed = text_stats::parse_lines::<i64, _>(input.as_bytes()).unwrap();
/// assert_eq!(vec![1, 2, 4], parsed.values);
/// assert_eq!(vec!["three", ""], parsed.invalid);
/// ```
pub fn parse_lines<T: FromStr, R: BufRead>(reader: R) -> io::Result<Parsed<T>> {
    parse_lines_with(reader, |raw| raw.parse().ok())
}

/// Parse each trimmed line with a custom parser, `None` rejects the line
pub fn parse_lines_with<T, R, F>(reader: R, mut parse: F) -> io::Result<Parsed<T>>
where
    R: BufRead,
    F: FnMut(&str) -> Option<T>,
{
    let mut parsed = Parsed {
        values: Vec::new(),
        invalid: Vec::new(),
    };
    for (num, line) in reader.lines().enumerate() {
        let line = line?;
        let raw = line.trim();
        match parse(raw) {
            Some(val) => parsed.values.push(val),
            None => {
                warn!("line {}: rejected {:?}", num + 1, raw);
                parsed.invalid.push(raw.to_owned());
            }
        }
    }
    Ok(parsed)
}

/// Parse a float, rejecting `NaN` and infinities
///
/// # Examples
///
/// ```
/// assert_eq!(Some(2.5), text_stats::parse_finite::<f64>("2.5"));
/// assert_eq!(None, text_stats::parse_finite::<f64>("nan"));
/// assert_eq!(None, text_stats::parse_finite::<f64>("inf"));
/// ```
pub fn parse_finite<T: Float + FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok().filter(|val: &T| val.is_finite())
}
