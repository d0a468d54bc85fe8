//! nameguard - screen-name screening CLI
//!
//! Classifies candidate names, or runs a sign-up submission through the
//! registration check.

use anyhow::{Context, Result};
use clap::Parser;
use nameguard::config::{self, AppConfig};
use nameguard::{evaluate, logging, rejection_message, Classification, NameGuard};
use serde::Serialize;
use std::collections::HashMap;
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nameguard")]
#[command(author, version, about = "Flag bot-like screen names and usernames")]
#[command(long_about = "
nameguard flags names that look randomly generated: case flipping at every
letter, too few vowels, unpronounceable consonant runs.

EXAMPLES:
    nameguard xKjLpQrS 'Mary Jane'          # Classify names
    cat names.txt | nameguard --json        # Audit a list, one JSON object per line
    nameguard --screen-name tOYSuimf --username bob@example.com
")]
struct Cli {
    /// Names to classify (reads stdin, one per line, when omitted)
    names: Vec<String>,

    /// Screen name of a registration submission to check
    #[arg(long)]
    screen_name: Option<String>,

    /// Username of a registration submission to check
    #[arg(long)]
    username: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Config file (defaults to the user config directory)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

#[derive(Serialize)]
struct Verdict<'a> {
    name: &'a str,
    classification: Classification,
    rule: Option<&'static str>,
    message: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };
    logging::init(&cfg.logging);

    let flagged = if cli.screen_name.is_some() || cli.username.is_some() {
        check_registration(&cli, &cfg)?
    } else {
        classify_names(&cli, &cfg)?
    };

    if flagged {
        std::process::exit(1);
    }
    Ok(())
}

/// Returns true when any name was flagged.
fn classify_names(cli: &Cli, cfg: &AppConfig) -> Result<bool> {
    let names = if cli.names.is_empty() {
        read_stdin_names()?
    } else {
        cli.names.clone()
    };

    let mut flagged = false;
    for name in &names {
        let rule = evaluate(name);
        let classification = rule.map_or(Classification::Clean, |r| r.verdict);
        flagged |= !classification.is_clean();

        if cli.json {
            let verdict = Verdict {
                name,
                classification,
                rule: rule.map(|r| r.name),
                message: rejection_message(&cfg.messages, classification),
            };
            println!("{}", serde_json::to_string(&verdict)?);
        } else {
            println!("{}\t{}", classification, name);
        }
    }
    Ok(flagged)
}

fn read_stdin_names() -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read names from stdin")?;
        let line = line.trim_end_matches('\r');
        if !line.is_empty() {
            names.push(line.to_string());
        }
    }
    Ok(names)
}

/// Returns true when the submission was rejected.
fn check_registration(cli: &Cli, cfg: &AppConfig) -> Result<bool> {
    let mut submission = HashMap::new();
    if let Some(screen_name) = &cli.screen_name {
        submission.insert("screen_name".to_string(), screen_name.clone());
    }
    if let Some(username) = &cli.username {
        submission.insert("username".to_string(), username.clone());
    }

    let guard = NameGuard::from_config(cfg);
    match guard.check_submission(&submission) {
        Ok(()) => {
            if cli.json {
                println!("{}", serde_json::json!({ "accepted": true }));
            } else {
                println!("accepted");
            }
            Ok(false)
        }
        Err(rejection) => {
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "accepted": false,
                        "field": rejection.field,
                        "classification": rejection.classification,
                        "rule": rejection.rule,
                        "message": rejection.message,
                    })
                );
            } else {
                println!("rejected\t{}\t{}", rejection.field, rejection.message);
            }
            Ok(true)
        }
    }
}
