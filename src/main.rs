//! Rebate CLI

use std::{io, process};

use rebate::{config::Config, logging, session};

pub fn main() {
    let config = Config::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = logging::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("error: {error}");
        }

        process::exit(1);
    }

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    if let Err(session_error) = session::run(stdin, stdout, &config.session) {
        #[expect(clippy::print_stderr, reason = "user-facing error report")]
        {
            eprintln!("error: {session_error}");
        }

        process::exit(1);
    }
}
