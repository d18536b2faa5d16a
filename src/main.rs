use std::fs;

use clap::Parser;
use genscript::{emit_source, run_source};

/// genscript is the scripting front end of a small code-generation
/// environment: it evaluates scripts, or emits Swift source from them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells genscript to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Emits Swift source generated from the script instead of evaluating
    /// it.
    #[arg(short, long)]
    emit: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let output = if args.emit {
        emit_source(&script)
    } else {
        run_source(&script).map(|value| format!("{value}\n"))
    };

    match output {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
