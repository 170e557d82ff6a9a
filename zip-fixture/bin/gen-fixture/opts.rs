//! Command line argument parsing for the gen-fixture utility.

use clap::Parser;

use zip_fixture::{resolve_output_path, GenConfig};

/// Generate the test.zip fixture
///
/// Writes 100 entries named answer000.txt through answer099.txt, each holding
/// question000 through question099, into test.zip in the directory of this
/// executable. Any previous test.zip there is replaced.
#[derive(Debug, Parser)]
#[command(
    name = "gen-fixture",
    version,
    about = "Generate the test.zip fixture next to this executable"
)]
pub struct GenOpts {
    /// Report each entry and the output path on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl GenOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build generator configuration from the parsed options
    pub fn config(&self) -> zip_fixture::Result<GenConfig> {
        Ok(GenConfig {
            output: resolve_output_path()?,
            verbose: self.verbose,
        })
    }
}
