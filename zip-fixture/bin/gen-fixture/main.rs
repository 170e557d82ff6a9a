//! Fixture generator
//!
//! Writes `test.zip` next to this executable.

use std::process;

mod opts;

use opts::GenOpts;

use zip_fixture::run_cli;

const PROGRAM_NAME: &str = "gen-fixture";

fn main() {
    let opts = GenOpts::parse();

    let config = match opts.config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{PROGRAM_NAME}: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = run_cli(&config, PROGRAM_NAME) {
        eprintln!("{err}");
        process::exit(1);
    }
}
