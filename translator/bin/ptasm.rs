extern crate portugasm;

use std::path::Path;
use std::{env, process};

use portugasm::driver::translate_file;
use portugasm::{Direction, OutputFormat};

const USAGE: &str = "Assemble:\n\
                     \t\tptasm [format] <file>\n\
                     Formats:\n\
                     \t\t-felf64\t\telf 64 bits file format";

fn main() {
    let args = env::args().collect::<Vec<_>>();

    if args.len() < 2 {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    let format = match args[1].as_str() {
        "-help" => {
            println!("{}", USAGE);
            return;
        }
        "-felf64" => OutputFormat::Elf64,
        // Unrecognized flags fall through to the default format.
        _ => OutputFormat::Default,
    };

    let input = Path::new(args[args.len() - 1].as_str());
    if let Err(error) = translate_file(input, Direction::ToCanonical, format) {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}
