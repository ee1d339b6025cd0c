//! The three script pipelines
//!
//! Each runner reads its input file, reports rejected lines on `out`, computes its result, and
//! emits a [`Report`] to `out` and to the given [`ResultsFile`]. Nothing is written to the results
//! file when the run fails.
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use std::time::Instant;

use crate::convert::{self, Conversion, Width};
use crate::parse::{self, Parsed};
use crate::report::{Report, ResultsFile};
use crate::summary::{ModePolicy, Summary};
use crate::utils::{file_stem, format_float, Error, Result};
use crate::words::WordCounts;

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_owned(),
        source,
    })?;
    info!("reading {}", path.display());
    Ok(BufReader::new(file))
}

fn read_err(path: &Path) -> impl Fn(std::io::Error) -> Error + '_ {
    move |source| Error::Read {
        path: path.to_owned(),
        source,
    }
}

fn diagnose<W, F>(out: &mut W, lines: &[String], describe: F) -> Result<()>
where
    W: Write,
    F: Fn(&str) -> String,
{
    for line in lines {
        writeln!(out, "{}", describe(line)).map_err(Error::Output)?;
    }
    Ok(())
}

/// Compute descriptive statistics of one float per line
///
/// Lines that aren't finite floats are reported and skipped. With no valid line at all this
/// returns [`Error::NoValidData`] and writes no statistics.
pub fn statistics<W: Write>(
    input: &Path,
    results: &ResultsFile,
    policy: ModePolicy,
    out: &mut W,
) -> Result<Summary<f64>> {
    let start = Instant::now();
    let Parsed { values, invalid } =
        parse::parse_lines_with(open(input)?, parse::parse_finite::<f64>).map_err(read_err(input))?;
    diagnose(out, &invalid, |raw| {
        format!("Invalid data '{}' found and will be ignored.", raw)
    })?;
    info!("{} valid values, {} rejected", values.len(), invalid.len());

    let summary = Summary::new(values, policy).ok_or_else(|| Error::NoValidData {
        path: input.to_owned(),
    })?;
    let elapsed = start.elapsed().as_secs_f64();
    debug!("statistics computed in {}s with {:?} mode", elapsed, summary.policy());

    let stem = file_stem(input);
    let mode = summary
        .mode()
        .iter()
        .map(|&val| format_float(val))
        .collect::<Vec<_>>()
        .join(", ");
    let mut report = Report::new();
    report.push(format!("{}  COUNT: {}", stem, summary.count()));
    report.push(format!("{}  MEAN: {}", stem, format_float(summary.mean())));
    report.push(format!("{}  MEDIAN: {}", stem, format_float(summary.median())));
    report.push(format!("{}  MODE: {}", stem, mode));
    report.push(format!("{}  SD: {}", stem, format_float(summary.standard_deviation())));
    report.push(format!("{}  VAR: {}", stem, format_float(summary.variance())));
    report.push(format!("{}  Time Elapsed: {} seconds", stem, elapsed));
    report.emit(out, results)?;
    Ok(summary)
}

/// Render one integer per line as binary and hexadecimal
///
/// Lines that aren't integers are reported and skipped. With no valid line at all this returns
/// [`Error::NoValidData`] and writes no table.
pub fn conversion<W: Write>(
    input: &Path,
    results: &ResultsFile,
    width: Width,
    out: &mut W,
) -> Result<Vec<Conversion>> {
    let start = Instant::now();
    let Parsed { values, invalid } =
        parse::parse_lines::<i64, _>(open(input)?).map_err(read_err(input))?;
    diagnose(out, &invalid, |raw| {
        format!("Invalid data encountered and skipped: {}", raw)
    })?;
    info!("{} valid integers, {} rejected", values.len(), invalid.len());
    if values.is_empty() {
        return Err(Error::NoValidData {
            path: input.to_owned(),
        });
    }

    let rows = convert::convert_all(values, width);
    let elapsed = start.elapsed().as_secs_f64();
    debug!("converted {} values at {} bits in {}s", rows.len(), width, elapsed);

    let mut report = Report::new();
    report.push("");
    report.push(table_row(&file_stem(input), "NUMBER", "BIN", "HEX"));
    for row in &rows {
        report.push(table_row(
            &row.index.to_string(),
            &row.number.to_string(),
            &row.binary,
            &row.hex,
        ));
    }
    report.push(format!("Execution Time: {} seconds", elapsed));
    report.emit(out, results)?;
    Ok(rows)
}

fn table_row(index: &str, number: &str, binary: &str, hex: &str) -> String {
    format!("{:<13}{:<10}{:<41}{}", index, number, binary, hex)
}

/// Count case-insensitive word frequencies of a text file
///
/// Tokens that aren't purely alphabetic are reported and skipped. A file without any word still
/// produces a report with a unique count of zero.
pub fn word_count<W: Write>(input: &Path, results: &ResultsFile, out: &mut W) -> Result<WordCounts> {
    let start = Instant::now();
    let mut counts = WordCounts::new();
    let invalid = counts.add_lines(open(input)?).map_err(read_err(input))?;
    diagnose(out, &invalid, |token| {
        format!("Invalid word found and ignored: {}", token)
    })?;
    let elapsed = start.elapsed().as_secs_f64();
    info!("{} unique words, {} rejected tokens", counts.unique(), invalid.len());
    debug!("counted words in {}s", elapsed);

    let mut report = Report::new();
    report.push("");
    report.push(format!("Word count results for {}", file_stem(input)));
    for (word, count) in &counts {
        report.push(format!("{}: {}", word, count));
    }
    report.push(format!(
        "Total Unique Count: {}  Execution and calculation took {} seconds.",
        counts.unique(),
        elapsed
    ));
    report.emit(out, results)?;
    Ok(counts)
}

/// Report a failed run and get the process exit status
///
/// An input without valid data is an expected outcome and is reported on `out`. Everything else
/// goes to standard error.
pub fn report_failure<W: Write>(err: &Error, out: &mut W) -> i32 {
    match err {
        Error::NoValidData { .. } => {
            let _ = writeln!(out, "No valid data to process.");
        }
        _ => eprintln!("error: {}", err),
    }
    err.exit_code()
}
