use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use text_stats::{pipeline, Error, ModePolicy, ResultsFile, Width};

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Fixture {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn input(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn results(&self) -> ResultsFile {
        ResultsFile::new(self.dir.path().join("results.txt"))
    }
}

fn written(results: &ResultsFile) -> String {
    fs::read_to_string(results.path()).unwrap()
}

fn lines(out: Vec<u8>) -> Vec<String> {
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn statistics_end_to_end() {
    let fix = Fixture::new();
    let input = fix.input("TC1.txt", "1\n2\n2\n3\n");
    let results = fix.results();
    let mut out = Vec::new();

    let summ = pipeline::statistics(&input, &results, ModePolicy::Single, &mut out).unwrap();
    assert_eq!(summ.mean(), 2.0);
    assert_eq!(summ.median(), 2.0);
    assert_eq!(summ.mode(), &[2.0]);
    assert_eq!(summ.variance(), 0.5);
    assert!((summ.standard_deviation() - 0.707).abs() < 1.0e-3);

    let out = lines(out);
    assert_eq!(
        &out[..6],
        &[
            "TC1  COUNT: 4",
            "TC1  MEAN: 2.0",
            "TC1  MEDIAN: 2.0",
            "TC1  MODE: 2.0",
            "TC1  SD: 0.7071067811865476",
            "TC1  VAR: 0.5",
        ]
    );
    assert!(out[6].starts_with("TC1  Time Elapsed: "));
    assert!(out[6].ends_with(" seconds"));
    assert_eq!(out.len(), 7);

    let file: Vec<_> = written(&results).lines().map(String::from).collect();
    assert_eq!(file, out);
}

#[test]
fn statistics_reports_invalid_lines_and_continues() {
    let fix = Fixture::new();
    let input = fix.input("mixed.txt", "4\nabc\n\n  8 \nnan\n");
    let mut out = Vec::new();

    let summ = pipeline::statistics(&input, &fix.results(), ModePolicy::Single, &mut out).unwrap();
    assert_eq!(summ.count(), 2);
    assert_eq!(summ.mean(), 6.0);

    let out = lines(out);
    assert_eq!(out[0], "Invalid data 'abc' found and will be ignored.");
    assert_eq!(out[1], "Invalid data '' found and will be ignored.");
    assert_eq!(out[2], "Invalid data 'nan' found and will be ignored.");
    assert_eq!(out[3], "mixed  COUNT: 2");
}

#[test]
fn statistics_all_modes() {
    let fix = Fixture::new();
    let input = fix.input("ties.txt", "5\n1\n5\n1\n3\n");
    let mut out = Vec::new();

    let summ = pipeline::statistics(&input, &fix.results(), ModePolicy::All, &mut out).unwrap();
    assert_eq!(summ.mode(), &[5.0, 1.0]);
    assert!(lines(out).contains(&String::from("ties  MODE: 5.0, 1.0")));
}

#[test]
fn statistics_large_values_keep_a_fraction() {
    let fix = Fixture::new();
    let input = fix.input("big.txt", "5e19\n5e19\n");
    let mut out = Vec::new();

    pipeline::statistics(&input, &fix.results(), ModePolicy::Single, &mut out).unwrap();
    let out = lines(out);
    assert!(out.contains(&String::from("big  MEAN: 5.0e19")));
    assert!(out.contains(&String::from("big  VAR: 0.0")));
}

#[test]
fn statistics_without_valid_data_writes_nothing() {
    let fix = Fixture::new();
    let input = fix.input("bad.txt", "x\ny\n");
    let results = fix.results();
    let mut out = Vec::new();

    let err = pipeline::statistics(&input, &results, ModePolicy::Single, &mut out).unwrap_err();
    match err {
        Error::NoValidData { ref path } => assert_eq!(path, &input),
        ref other => panic!("expected no valid data, got {:?}", other),
    }
    assert_eq!(err.exit_code(), 2);
    assert!(!results.path().exists());
    assert_eq!(lines(out).len(), 2);

    let empty = fix.input("empty.txt", "");
    let err = pipeline::statistics(&empty, &results, ModePolicy::Single, &mut Vec::new());
    assert!(matches!(err, Err(Error::NoValidData { .. })));
    assert!(!results.path().exists());
}

#[test]
fn statistics_appends_across_runs() {
    let fix = Fixture::new();
    let first = fix.input("first.txt", "1\n");
    let second = fix.input("second.txt", "2\n");
    let results = fix.results();

    pipeline::statistics(&first, &results, ModePolicy::Single, &mut Vec::new()).unwrap();
    pipeline::statistics(&second, &results, ModePolicy::Single, &mut Vec::new()).unwrap();

    let file = written(&results);
    assert_eq!(file.lines().count(), 14);
    assert!(file.starts_with("first  COUNT: 1\n"));
    assert!(file.contains("\nsecond  COUNT: 1\n"));
}

#[test]
fn missing_input_is_an_open_error() {
    let fix = Fixture::new();
    let missing = fix.dir.path().join("nope.txt");
    let results = fix.results();

    let err = pipeline::word_count(&missing, &results, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, Error::Open { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(!results.path().exists());

    let mut out = Vec::new();
    assert_eq!(pipeline::report_failure(&err, &mut out), 1);
    assert!(out.is_empty());
}

#[test]
fn conversion_table() {
    let fix = Fixture::new();
    let input = fix.input("TC2.txt", "0\n255\nfoo\n-1\n");
    let results = fix.results();
    let mut out = Vec::new();

    let rows = pipeline::conversion(&input, &results, Width::DEFAULT, &mut out).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].binary, "0".repeat(32));
    assert_eq!(rows[0].hex, "0");
    assert_eq!(rows[2].index, 3);
    assert_eq!(rows[2].binary, "1".repeat(32));
    assert_eq!(rows[2].hex, "FFFFFFFF");

    let out = lines(out);
    assert_eq!(out[0], "Invalid data encountered and skipped: foo");
    assert_eq!(out[1], "");
    assert_eq!(out[2], format!("{:<13}{:<10}{:<41}HEX", "TC2", "NUMBER", "BIN"));
    assert_eq!(
        out[4],
        format!("{:<13}{:<10}{:<41}FF", 2, 255, "00000000000000000000000011111111")
    );
    assert!(out[6].starts_with("Execution Time: "));

    // diagnostics only go to stdout
    let file: Vec<_> = written(&results).lines().map(String::from).collect();
    assert_eq!(file, &out[1..]);
}

#[test]
fn conversion_respects_width() {
    let fix = Fixture::new();
    let input = fix.input("narrow.txt", "-1\n5\n");
    let rows = pipeline::conversion(&input, &fix.results(), Width::new(8).unwrap(), &mut Vec::new())
        .unwrap();
    assert_eq!(rows[0].binary, "11111111");
    assert_eq!(rows[0].hex, "FF");
    assert_eq!(rows[1].binary, "00000101");
}

#[test]
fn conversion_without_valid_data_writes_nothing() {
    let fix = Fixture::new();
    let input = fix.input("floats.txt", "1.5\n2.5\n");
    let results = fix.results();
    let mut out = Vec::new();

    let err = pipeline::conversion(&input, &results, Width::DEFAULT, &mut out).unwrap_err();
    assert!(matches!(err, Error::NoValidData { .. }));
    assert!(!results.path().exists());

    let mut out = Vec::new();
    assert_eq!(pipeline::report_failure(&err, &mut out), 2);
    assert_eq!(String::from_utf8(out).unwrap(), "No valid data to process.\n");
}

#[test]
fn word_count_sorted_and_case_insensitive() {
    let fix = Fixture::new();
    let input = fix.input("words.txt", "Cat cat CAT\ndog cat3 bird!\nBird\n");
    let results = fix.results();
    let mut out = Vec::new();

    let counts = pipeline::word_count(&input, &results, &mut out).unwrap();
    assert_eq!(counts.get("cat"), 3);
    assert_eq!(counts.get("cat3"), 0);
    assert_eq!(counts.unique(), 3);

    let out = lines(out);
    assert_eq!(
        &out[..7],
        &[
            "Invalid word found and ignored: cat3",
            "Invalid word found and ignored: bird!",
            "",
            "Word count results for words",
            "bird: 1",
            "cat: 3",
            "dog: 1",
        ]
    );
    assert!(out[7].starts_with("Total Unique Count: 3  Execution and calculation took "));

    let file: Vec<_> = written(&results).lines().map(String::from).collect();
    assert_eq!(file, &out[2..]);
}

#[test]
fn word_count_of_empty_file_still_reports() {
    let fix = Fixture::new();
    let input = fix.input("blank.txt", "\n\n");
    let results = fix.results();

    let counts = pipeline::word_count(&input, &results, &mut Vec::new()).unwrap();
    assert!(counts.is_empty());
    let file = written(&results);
    assert!(file.contains("Word count results for blank\n"));
    assert!(file.contains("Total Unique Count: 0 "));
}

#[test]
fn results_in_unwritable_location() {
    let fix = Fixture::new();
    let input = fix.input("one.txt", "1\n");
    let results = ResultsFile::new(fix.dir.path().join("no_dir").join("r.txt"));

    let err = pipeline::statistics(&input, &results, ModePolicy::Single, &mut Vec::new());
    assert!(matches!(err, Err(Error::Write { .. })));
}
