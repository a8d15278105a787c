use std::{fs, io};

use clap::Parser;
use reckon::interpreter::session::Session;

/// reckon is an interactive calculator for arithmetic expressions with
/// variables and assignment.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Statements to evaluate. When omitted, an interactive session starts
    /// on standard input.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let outcome = if let Some(contents) = args.contents {
        let script = if args.file {
            fs::read_to_string(&contents).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &contents);
                std::process::exit(1);
            })
        } else {
            contents
        };
        Session::new(script.as_bytes(), io::stdout(), false).run()
    } else {
        let stdin = io::stdin();
        Session::new(stdin.lock(), io::stdout(), true).run()
    };

    if let Err(e) = outcome {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
