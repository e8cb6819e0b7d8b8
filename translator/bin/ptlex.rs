extern crate portugasm;

use std::{env, fs, process};

use itertools::Itertools;
use portugasm::lexer::Lexer;

fn main() {
    let args = env::args().collect::<Vec<_>>();

    if args.len() < 2 {
        eprintln!("Usage: ptlex <file>...");
        process::exit(1);
    }

    for arg in args[1..].iter() {
        let text = match fs::read_to_string(arg) {
            Ok(text) => text,
            Err(error) => {
                eprintln!("Error: cannot read {}: {}", arg, error);
                process::exit(1);
            }
        };

        let dump = Lexer::new(text.as_str())
            .map(|token| format!("{:?}", token.src))
            .join(" ");
        println!("{}", dump);
    }
}
