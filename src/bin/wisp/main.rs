//! The `wisp` binary: a CLI wrapping the interpreter crate, in the
//! shape of the teacher's `src/bin/why/main.rs` (parse args, init
//! logging, read the file, dump the AST if asked, report errors,
//! drive the pipeline).

mod cli;
mod repl;

use cli::Cli;
use log::{debug, error, info};
use std::fs;
use std::process::ExitCode;
use wisp::environment::Environment;
use wisp::error::WispError;
use wisp::lexer::Lexer;
use wisp::evaluator;
use wisp::parser::Parser;

fn main() -> ExitCode {
    let args = Cli::init();
    simple_logger::init_with_level((&args.verbosity).into()).unwrap();

    match &args.file {
        None => {
            info!("starting interactive prompt");
            repl::run();
            ExitCode::SUCCESS
        }
        Some(path) => match run_file(path, args.dump_ast) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!("{err}");
                match err {
                    WispError::Parse(errors) => {
                        for parse_error in &errors {
                            eprintln!("\t{parse_error}");
                        }
                    }
                    WispError::FileRead { .. } => {}
                }
                ExitCode::FAILURE
            }
        },
    }
}

fn run_file(path: &std::path::Path, dump_ast: bool) -> Result<(), WispError> {
    let source = fs::read_to_string(path).map_err(|source| WispError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loaded {}", path.display());

    let mut parser = Parser::new(Lexer::new(&source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return Err(WispError::Parse(parser.errors().to_vec()));
    }

    if dump_ast {
        debug!("parsed program:\n{program:#?}");
    }

    let env = Environment::new();
    let value = evaluator::eval_program(&program, &env);
    println!("{value}");

    Ok(())
}
