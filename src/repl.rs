use crate::evaluator::Environment;
use crate::runner;
use std::io::{self, Write};

/// Interactive loop. Each line is one statement; the environment persists
/// between lines, so assignments carry over.
pub fn start() {
    println!("minilang v0.1.0");
    println!("Type 'exit' or press Ctrl+C to quit");
    println!();

    let mut environment = Environment::new();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => {
                // EOF reached (Ctrl+D or piped input ended)
                println!();
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "exit" || line == "quit" {
                    println!("Goodbye!");
                    break;
                }

                // Assignment is an expression with a value, so its result
                // prints like any other statement's.
                if let Some(value) = runner::run_and_report(line, None, &mut environment) {
                    println!("{}", value);
                }
            }
            Err(error) => {
                eprintln!("Error reading input: {}", error);
                break;
            }
        }
    }
}
