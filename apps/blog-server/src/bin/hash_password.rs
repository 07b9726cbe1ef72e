//! Print an Argon2 hash suitable for `ADMIN_PASSWORD_HASH`.
//!
//! Usage: `hash-password <password>`, or pipe the password on stdin.

use std::io::{self, BufRead};
use std::process::ExitCode;

use quill_core::ports::PasswordService;
use quill_infra::Argon2PasswordService;

fn main() -> ExitCode {
    let password = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut line = String::new();
            if let Err(e) = io::stdin().lock().read_line(&mut line) {
                eprintln!("failed to read password: {e}");
                return ExitCode::FAILURE;
            }
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if password.is_empty() {
        eprintln!("usage: hash-password <password>");
        return ExitCode::FAILURE;
    }

    match Argon2PasswordService::new().hash(&password) {
        Ok(hash) => {
            println!("{hash}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to hash password: {e}");
            ExitCode::FAILURE
        }
    }
}
