use std::io;
use std::path::Path;
use std::process;

use clap::{App, Arg};

use text_stats::{pipeline, ResultsFile, WORD_COUNT_RESULTS};

fn main() {
    pretty_env_logger::init();

    let matches = App::new("word-count")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count the frequency of each distinct word of a text file")
        .arg(Arg::with_name("input")
             .value_name("file")
             .required(true)
             .help("Text file to count words of"))
        .arg(Arg::with_name("output")
             .short("o")
             .long("output")
             .value_name("file")
             .default_value(WORD_COUNT_RESULTS)
             .help("Append results to file"))
        .get_matches();

    let input = match matches.value_of_os("input") {
        Some(input) => Path::new(input),
        None => unreachable!(),
    };
    let results = match matches.value_of_os("output") {
        Some(output) => ResultsFile::new(output),
        None => unreachable!(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = pipeline::word_count(input, &results, &mut out) {
        process::exit(pipeline::report_failure(&err, &mut out));
    }
}
