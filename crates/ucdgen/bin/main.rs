//! The `ucdgen` CLI: generate compact Unicode property tables from the Unicode Character
//! Database.

use clap::Parser;
use ucdgen::Opts;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(err) => {
            let _ = err.print();
            // Argument errors exit with status 1; --help and --version exit cleanly.
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(err) = ucdgen::generate(&opts) {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
