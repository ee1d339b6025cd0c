//! Fixed width binary and hexadecimal rendering of signed integers
//!
//! Non-negative values are rendered as plain digits, with binary zero padded to at least the
//! width. Negative values go through the two's-complement mask `value & (2^W - 1)` first, which
//! silently wraps anything wider than `W` bits.
use std::fmt;

use crate::utils::{Error, Result};

/// Bit width of the two's-complement transform, between 1 and 64
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Width(u32);

impl Width {
    pub const DEFAULT: Width = Width(32);

    /// Create a width, erroring outside `1..=64`
    ///
    /// # Examples
    ///
    /// ```
    /// assert_eq!(8, text_stats::Width::new(8).unwrap().bits());
    /// assert!(text_stats::Width::new(0).is_err());
    /// assert!(text_stats::Width::new(65).is_err());
    /// ```
    pub fn new(bits: u32) -> Result<Width> {
        match bits {
            1..=64 => Ok(Width(bits)),
            _ => Err(Error::InvalidWidth(bits)),
        }
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// `2^W - 1`
    pub fn mask(self) -> u64 {
        u64::MAX >> (64 - self.0)
    }
}

impl Default for Width {
    fn default() -> Self {
        Width::DEFAULT
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unsigned `W` bit pattern of a value
///
/// # Examples
///
/// ```
/// use text_stats::{twos_complement, Width};
/// assert_eq!(0xFFFF_FFFF, twos_complement(-1, Width::DEFAULT));
/// assert_eq!(0xFF, twos_complement(-1, Width::new(8).unwrap()));
/// ```
pub fn twos_complement(value: i64, width: Width) -> u64 {
    value as u64 & width.mask()
}

/// Binary digits of a value
///
/// # Examples
///
/// ```
/// use text_stats::{to_binary, Width};
/// assert_eq!("0".repeat(32), to_binary(0, Width::DEFAULT));
/// assert_eq!("00000101", to_binary(5, Width::new(8).unwrap()));
/// assert_eq!("1".repeat(32), to_binary(-1, Width::DEFAULT));
/// ```
pub fn to_binary(value: i64, width: Width) -> String {
    if value >= 0 {
        format!("{:0width$b}", value, width = width.bits() as usize)
    } else {
        format!("{:b}", twos_complement(value, width))
    }
}

/// Uppercase hexadecimal digits of a value, never padded
///
/// # Examples
///
/// ```
/// use text_stats::{to_hex, Width};
/// assert_eq!("0", to_hex(0, Width::DEFAULT));
/// assert_eq!("FF", to_hex(255, Width::DEFAULT));
/// assert_eq!("FFFFFFFF", to_hex(-1, Width::DEFAULT));
/// ```
pub fn to_hex(value: i64, width: Width) -> String {
    if value >= 0 {
        format!("{:X}", value)
    } else {
        format!("{:X}", twos_complement(value, width))
    }
}

/// One row of the conversion table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// 1-based position among the valid lines
    pub index: usize,
    pub number: i64,
    pub binary: String,
    pub hex: String,
}

impl Conversion {
    pub fn new(index: usize, number: i64, width: Width) -> Self {
        Conversion {
            index,
            number,
            binary: to_binary(number, width),
            hex: to_hex(number, width),
        }
    }
}

/// Convert every value, numbering rows from 1
pub fn convert_all<I>(values: I, width: Width) -> Vec<Conversion>
where
    I: IntoIterator<Item = i64>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(i, number)| Conversion::new(i + 1, number, width))
        .collect()
}
