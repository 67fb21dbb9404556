#![doc = "Prints the validator snapshot recorded at the start of a metachain epoch."]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

use clap::Parser;

pub mod cli;
pub mod error;

fn main() {
    metachain_cli::backtrace::enable();

    if let Err(err) = cli::Cli::parse().run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
