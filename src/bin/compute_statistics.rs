use std::io;
use std::path::Path;
use std::process;

use clap::{App, Arg};

use text_stats::{pipeline, ModePolicy, ResultsFile, STATISTICS_RESULTS};

fn main() {
    pretty_env_logger::init();

    let matches = App::new("compute-statistics")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compute mean, median, mode, standard deviation and variance of one number per line")
        .arg(Arg::with_name("input")
             .value_name("file")
             .required(true)
             .help("File with one number per line"))
        .arg(Arg::with_name("output")
             .short("o")
             .long("output")
             .value_name("file")
             .default_value(STATISTICS_RESULTS)
             .help("Append results to file"))
        .arg(Arg::with_name("all-modes")
             .long("all-modes")
             .help("Report every value tied for the maximal count instead of the first one"))
        .get_matches();

    let input = match matches.value_of_os("input") {
        Some(input) => Path::new(input),
        None => unreachable!(),
    };
    let results = match matches.value_of_os("output") {
        Some(output) => ResultsFile::new(output),
        None => unreachable!(),
    };
    let policy = if matches.is_present("all-modes") {
        ModePolicy::All
    } else {
        ModePolicy::Single
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = pipeline::statistics(input, &results, policy, &mut out) {
        process::exit(pipeline::report_failure(&err, &mut out));
    }
}
