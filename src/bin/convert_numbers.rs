#[macro_use]
extern crate clap;

use std::io;
use std::path::Path;
use std::process;

use clap::{App, Arg};

use text_stats::{pipeline, ResultsFile, Width, CONVERSION_RESULTS};

fn main() {
    pretty_env_logger::init();

    let matches = App::new("convert-numbers")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert one integer per line to binary and hexadecimal")
        .arg(Arg::with_name("input")
             .value_name("file")
             .required(true)
             .help("File with one integer per line"))
        .arg(Arg::with_name("output")
             .short("o")
             .long("output")
             .value_name("file")
             .default_value(CONVERSION_RESULTS)
             .help("Append results to file"))
        .arg(Arg::with_name("bits")
             .short("b")
             .long("bits")
             .value_name("width")
             .default_value("32")
             .validator(|bits| match bits.parse() {
                 Ok(bits) => Width::new(bits).map(|_| ()).map_err(|err| err.to_string()),
                 Err(_) => Err(format!("\"{}\" is not a bit width", bits)),
             })
             .help("Two's-complement width used for negative numbers, between 1 and 64"))
        .get_matches();

    let input = match matches.value_of_os("input") {
        Some(input) => Path::new(input),
        None => unreachable!(),
    };
    let results = match matches.value_of_os("output") {
        Some(output) => ResultsFile::new(output),
        None => unreachable!(),
    };
    let bits = value_t!(matches, "bits", u32).unwrap_or_else(|err| err.exit());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let run = Width::new(bits).and_then(|width| pipeline::conversion(input, &results, width, &mut out));
    if let Err(err) = run {
        process::exit(pipeline::report_failure(&err, &mut out));
    }
}
