//! Various utilities
use num_traits::Float;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Any error from this library
#[derive(Debug, Error)]
pub enum Error {
    #[error("couldn't open \"{}\": {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("couldn't read from \"{}\": {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("couldn't append to \"{}\": {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("couldn't write to output: {0}")]
    Output(#[source] io::Error),
    #[error("no valid data in \"{}\"", .path.display())]
    NoValidData { path: PathBuf },
    #[error("bit width must be between 1 and 64, got {0}")]
    InvalidWidth(u32),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit status for this error
    ///
    /// An input without any valid data is reported distinctly from hard failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NoValidData { .. } => 2,
            _ => 1,
        }
    }
}

/// File name without directory or final extension
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// assert_eq!("data", text_stats::file_stem(Path::new("tests/data.txt")));
/// assert_eq!("data.v2", text_stats::file_stem(Path::new("data.v2.txt")));
/// ```
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Average of the two central elements of an even sample
pub fn midpoint<T: Float>(low: T, high: T) -> T {
    (low + high) / (T::one() + T::one())
}

/// Render a float in shortest round-trip form, always with a fractional part
///
/// Very large and very small magnitudes keep the exponent form, with the fractional part placed on
/// the mantissa.
///
/// # Examples
///
/// ```
/// assert_eq!("2.0", text_stats::format_float(2.0));
/// assert_eq!("0.5", text_stats::format_float(0.5));
/// assert_eq!("5.0e19", text_stats::format_float(5.0e19));
/// assert_eq!("1.5e-7", text_stats::format_float(1.5e-7));
/// ```
pub fn format_float(val: f64) -> String {
    let repr = format!("{:?}", val);
    match repr.find('e') {
        Some(exp) if !repr[..exp].contains('.') => {
            format!("{}.0{}", &repr[..exp], &repr[exp..])
        }
        _ => repr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_tests() {
        assert_eq!(midpoint(2.0, 3.0), 2.5);
        assert_eq!(midpoint(-1.0_f32, 1.0), 0.0);
    }

    #[test]
    fn exponent_forms_get_a_fraction() {
        assert_eq!(format_float(1.0e-7), "1.0e-7");
        assert_eq!(format_float(-5.0e19), "-5.0e19");
        assert_eq!(format_float(1.0e16), "1.0e16");
        assert_eq!(format_float(-3.0), "-3.0");
        assert_eq!(format_float(0.1), "0.1");
    }

    #[test]
    fn stem_without_extension() {
        assert_eq!(file_stem(Path::new("/tmp/TC1.txt")), "TC1");
        assert_eq!(file_stem(Path::new("plain")), "plain");
    }

    #[test]
    fn exit_codes() {
        let empty = Error::NoValidData { path: PathBuf::from("x") };
        assert_eq!(empty.exit_code(), 2);
        assert_eq!(Error::InvalidWidth(0).exit_code(), 1);
    }
}
