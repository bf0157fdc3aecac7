use std::{env, fs, process};

use minilang::parser::parser::parse;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <source file>", args[0]);
        process::exit(1);
    }

    let source = match fs::read_to_string(&args[1]) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Could not open file {}: {}", args[1], err);
            process::exit(1);
        }
    };

    match parse(&source) {
        Ok(program) => print!("{}", program.dump()),
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}
