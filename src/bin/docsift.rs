//! docsift command line binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;

use docsift::cli::args::DocsiftArgs;
use docsift::cli::commands::execute_command;

fn main() {
    let args = DocsiftArgs::parse();

    // Plain "[LEVEL] message" lines on stderr, stdout stays for results
    Builder::new()
        .filter_level(args.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
