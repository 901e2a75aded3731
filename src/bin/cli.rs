// src/bin/cli.rs
use std::io;

use doc_sigcheck::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let code = cli::run(std::env::args().skip(1), &mut io::stdout(), &mut io::stderr())?;
    std::process::exit(code);
}
