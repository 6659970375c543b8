mod ast;
mod error;
mod evaluator;
mod lexer;
mod parser;
mod repl;
mod runner;

use clap::{Arg, Command};
use evaluator::Environment;
use std::fs;
use std::path::Path;

fn main() {
    let matches = Command::new("minilang")
        .about("A tiny arithmetic/assignment language interpreter")
        .arg(
            Arg::new("file")
                .help("A file holding one statement to evaluate")
                .value_name("FILE")
                .index(1),
        )
        .arg(
            Arg::new("eval")
                .short('e')
                .long("eval")
                .help("Evaluate one statement and print the result")
                .value_name("STATEMENT"),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .help("Start in interactive REPL mode")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    if let Some(source) = matches.get_one::<String>("eval") {
        run_source(source, None);
    } else if let Some(file_path) = matches.get_one::<String>("file") {
        run_file(file_path);
    } else {
        repl::start();
    }
}

fn run_source(source: &str, filename: Option<&str>) {
    let mut environment = Environment::new();
    match runner::run_and_report(source, filename, &mut environment) {
        Some(value) => println!("{}", value),
        None => std::process::exit(1),
    }
}

fn run_file(path: &str) {
    let path = Path::new(path);

    if !path.exists() {
        eprintln!("Error: File '{}' not found", path.display());
        std::process::exit(1);
    }

    match fs::read_to_string(path) {
        Ok(source) => {
            run_source(source.trim_end(), path.to_str());
        }
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }
}
