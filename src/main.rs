use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use umni::{Session, get_result};

/// umni is a small calculation language with unit-aware numbers, strings and
/// user-defined functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells umni to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode only prints out the last value produced by the document, and
    /// stops at the first error.
    #[arg(short, long)]
    pipe_mode: bool,

    /// The document to run, or its path with `--file`. Starts an interactive
    /// session when omitted.
    contents: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let Some(contents) = args.contents else {
        if let Err(e) = repl() {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    if args.pipe_mode {
        if let Err(e) = get_result(&script, true) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    }

    let mut session = Session::new();
    for outcome in session.execute_document(&script) {
        match outcome.result {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => eprintln!("line {}: {e}", outcome.line),
        }
    }
}

/// Reads statements from stdin until end of input or `:quit`.
fn repl() -> io::Result<()> {
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if matches!(line.trim(), ":quit" | ":q") {
            break;
        }

        match session.execute_line(&line) {
            Ok(Some(value)) => writeln!(stdout, "{value}")?,
            Ok(None) => {},
            Err(e) => writeln!(stdout, "Error: {e}")?,
        }
    }

    Ok(())
}
