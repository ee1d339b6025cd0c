//! Statistics, base conversion and word counts over line oriented text files
//!
//! The library holds the computations behind the `compute-statistics`, `convert-numbers` and
//! `word-count` binaries. Each binary is a thin wrapper around one function of [`pipeline`], which
//! can also be driven directly with any output writer and results file.
//!
//! # Examples
//!
//! ```
//! use text_stats::{ModePolicy, Summary};
//!
//! let parsed = text_stats::parse_lines::<f64, _>("1\n2\nx\n2\n3\n".as_bytes()).unwrap();
//! assert_eq!(vec!["x"], parsed.invalid);
//! let summ = Summary::new(parsed.values, ModePolicy::All).unwrap();
//! assert_eq!(2.0, summ.median());
//! ```
mod bytes;
mod convert;
mod parse;
pub mod pipeline;
mod report;
mod summary;
mod utils;
mod words;

pub use bytes::ToBytes;
pub use convert::{convert_all, to_binary, to_hex, twos_complement, Conversion, Width};
pub use parse::{parse_finite, parse_lines, parse_lines_with, Parsed};
pub use report::{Report, ResultsFile, CONVERSION_RESULTS, STATISTICS_RESULTS, WORD_COUNT_RESULTS};
pub use summary::{mean, median, modes, variance, ModePolicy, Summary};
pub use utils::{file_stem, format_float, midpoint, Error, Result};
pub use words::{is_word, WordCounts};
