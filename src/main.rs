use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use monkey::{
    errors::errors::{Error, ErrorTip},
    parse_source,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const PROMPT: &str = ">> ";
const LOG_ENV: &str = "MONKEY_LOG";

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => repl(),
        2 => run_file(&args[1]),
        _ => {
            eprintln!("Usage: {} [FILE]", args[0]);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run_file(file_path: &str) -> ExitCode {
    let file_contents = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file_path, err);
            return ExitCode::FAILURE;
        }
    };

    let (program, errors) = parse_source(&file_contents);

    if !errors.is_empty() {
        println!("-> {}", file_path);
        errors.iter().for_each(display_error);
        return ExitCode::FAILURE;
    }

    println!("{}", program);
    ExitCode::SUCCESS
}

fn repl() -> ExitCode {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("{}", PROMPT);
        if stdout.flush().is_err() {
            return ExitCode::FAILURE;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {}
            Err(err) => {
                eprintln!("Failed to read input: {}", err);
                return ExitCode::FAILURE;
            }
        }

        let (program, errors) = parse_source(&line);

        if errors.is_empty() {
            println!("{}", program);
        } else {
            errors.iter().for_each(display_error);
        }
    }
}

fn display_error(error: &Error) {
    /*
        Error: UnexpectedToken: expected next token to be Assign, got Int instead
           | Expected `Assign` here but found `Int`
    */

    println!("Error: {}: {}", error.get_error_name(), error);

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        println!("   | {}", tip);
    }
}
