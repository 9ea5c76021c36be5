//! The interactive prompt (`spec.md` §6.2), grounded in
//! `original_source/repl/repl.go`: print `>> `, read one line, lex +
//! parse + evaluate it against one environment that lives for the
//! whole session.

use std::io::{self, Write};
use wisp::environment::Environment;
use wisp::run_source_with_env;

pub fn run() {
    let env = Environment::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!(">> ");
        if stdout.flush().is_err() {
            return;
        }

        let mut line = String::new();
        let bytes_read = match stdin.read_line(&mut line) {
            Ok(n) => n,
            Err(_) => return,
        };
        if bytes_read == 0 {
            return;
        }

        let (value, errors) = run_source_with_env(line.trim_end_matches('\n'), &env);

        if !errors.is_empty() {
            for error in &errors {
                println!("\t{error}");
            }
            continue;
        }

        if let Some(value) = value {
            println!("{value}");
        }
    }
}
