//! Binary entry point: reads a 32-byte private key from stdin and writes
//! the DER-encoded key pair to stdout. Takes no arguments.

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    if let Err(e) = priv_der::pipeline::run(&mut stdin, &mut stdout) {
        eprintln!("Error: {:#}", anyhow::Error::new(e));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
