use std::env::args_os;
use std::process::ExitCode;

use huffman_coding::{error::Error, run, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match run(&arguments) {
        Ok(_) => ExitCode::SUCCESS,
        Err(Error::EmptyInput) => {
            eprintln!("Input text is empty. Exiting.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Huffman coding failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
