//! pwcheck - interactive password strength check.
//!
//! Prompts for one line and prints whether it passes. Usage:
//!   pwcheck
//!   pwcheck --verbose   # also list missing character classes on stderr

use anyhow::Result;
use clap::Parser;
use ghkit::password::PasswordReport;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use secrecy::{ExposeSecret, SecretString};

const PROMPT: &str = "Enter password: ";

#[derive(Parser)]
#[command(name = "pwcheck", version, about = "Check a password's strength")]
struct Args {
    #[arg(long, help = "List missing character classes on stderr")]
    verbose: bool,
}

fn verdict(report: &PasswordReport) -> &'static str {
    if report.is_valid() {
        "Password is valid."
    } else {
        "Password is invalid."
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut rl = DefaultEditor::new()?;
    let password = match rl.readline(PROMPT) {
        Ok(line) => SecretString::from(line),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    let report = PasswordReport::evaluate(password.expose_secret());
    if args.verbose {
        let missing: Vec<&str> = report.missing().iter().map(|c| c.describe()).collect();
        if !missing.is_empty() {
            eprintln!("[pwcheck] missing: {}", missing.join(", "));
        }
    }

    println!("{}", verdict(&report));
    Ok(())
}
