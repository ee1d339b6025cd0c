//! Results files and the lines appended to them
//!
//! Each pipeline builds a [`Report`] and emits it once: every line is mirrored to standard output
//! and then appended to its [`ResultsFile`]. There is no locking, so concurrent runs against the
//! same file may interleave.
use log::info;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::utils::{Error, Result};

/// Default results file of the statistics pipeline
pub const STATISTICS_RESULTS: &str = "StatisticsResults.txt";
/// Default results file of the conversion pipeline
pub const CONVERSION_RESULTS: &str = "ConversionResults.txt";
/// Default results file of the word count pipeline
pub const WORD_COUNT_RESULTS: &str = "WordCountResults.txt";

/// Append-only text file, created on first write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsFile {
    path: PathBuf,
}

impl ResultsFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        ResultsFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append lines, each terminated by a newline
    pub fn append<S: AsRef<str>>(&self, lines: &[S]) -> Result<()> {
        let write_err = |source| Error::Write {
            path: self.path.clone(),
            source,
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        for line in lines {
            writeln!(writer, "{}", line.as_ref()).map_err(write_err)?;
        }
        writer.flush().map_err(write_err)?;
        info!("appended {} lines to {}", lines.len(), self.path.display());
        Ok(())
    }
}

/// Ordered output lines of one run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Report { lines: Vec::new() }
    }

    pub fn push<S: Into<String>>(&mut self, line: S) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Mirror every line to `out`, then append them all to `results`
    pub fn emit<W: Write>(&self, out: &mut W, results: &ResultsFile) -> Result<()> {
        for line in &self.lines {
            writeln!(out, "{}", line).map_err(Error::Output)?;
        }
        out.flush().map_err(Error::Output)?;
        results.append(&self.lines)
    }
}
