use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read, Write},
    path::{Path, PathBuf},
    sync::mpsc,
};

pub use cli::CLIParser;
use error::Error;
use huffman::{CodeTable, CodeTree, FrequencyTable, HuffmanDecoder, HuffmanEncoder};
pub use report::Report;
use threadpool::ThreadPool;
use trace::{LogTrace, NoTrace, TraceSink};

mod cli;
pub mod error;
pub mod huffman;
mod logger;
pub mod report;
pub mod statistics;
pub mod trace;

pub type Result<T> = std::result::Result<T, error::Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    Files(Vec<PathBuf>),
    StandardInput,
}

pub struct Arguments {
    input: InputSource,
    verbose: bool,
    show_tree: bool,
    number_of_threads: usize,
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
    })
}

fn read_input_file(file_path: &Path) -> Result<String> {
    let input_file = open_input_file(file_path)?;
    let mut text = String::new();
    BufReader::new(input_file)
        .read_to_string(&mut text)
        .map_err(|e| Error::UnableToReadInputFile(file_path.display().to_string(), e))?;
    log::debug!(
        "Read {} characters from '{}'",
        text.chars().count(),
        file_path.display()
    );
    Ok(text)
}

fn read_standard_input() -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter the string to encode: ")
        .and_then(|_| stdout.flush())
        .map_err(Error::UnableToReadStandardInput)?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(Error::UnableToReadStandardInput)?;
    let text = line.strip_suffix('\n').unwrap_or(&line);
    let text = text.strip_suffix('\r').unwrap_or(text);
    Ok(text.to_owned())
}

/// Counts, builds the tree, assigns codes, encodes and decodes `text`.
pub fn compress_text(text: &str, sink: &mut impl TraceSink<char>) -> Result<Report> {
    let symbols: Vec<char> = text.chars().collect();
    let frequencies = FrequencyTable::from(symbols.as_slice());
    let tree = CodeTree::build(&frequencies, sink).ok_or(Error::EmptyInput)?;
    let code_table = CodeTable::from_tree(&tree, sink);
    let encoded = HuffmanEncoder::new(&code_table).encode(&symbols, sink)?;
    let decoded: String = HuffmanDecoder::new(&tree)
        .decode(&encoded, sink)?
        .into_iter()
        .collect();
    Ok(Report::new(
        text.to_owned(),
        frequencies,
        tree,
        code_table,
        encoded,
        decoded,
    ))
}

fn compress_text_with_verbosity(text: &str, verbose: bool) -> Result<Report> {
    if verbose {
        compress_text(text, &mut LogTrace)
    } else {
        compress_text(text, &mut NoTrace)
    }
}

fn print_report(label: &str, report: Report, show_tree: bool) {
    logger::log_statistics(label, &report.statistics);
    if !report.verified() {
        log::error!("{}: decoded text does not match the original", label);
    }
    println!("{}", report.with_tree(show_tree));
}

fn run_single(label: &str, text: &str, arguments: &Arguments) -> Result<()> {
    let report = compress_text_with_verbosity(text, arguments.verbose)?;
    print_report(label, report, arguments.show_tree);
    Ok(())
}

// An empty file is skipped; only real failures decide the batch result.
fn run_batch(file_paths: &[PathBuf], arguments: &Arguments) -> Result<()> {
    let threadpool = ThreadPool::new(arguments.number_of_threads.max(1));
    let (sender, receiver) = mpsc::channel();
    for (index, file_path) in file_paths.iter().enumerate() {
        let sender = sender.clone();
        let file_path = file_path.clone();
        let verbose = arguments.verbose;
        threadpool.execute(move || {
            log::debug!("Encoding '{}'", file_path.display());
            let result = read_input_file(&file_path)
                .and_then(|text| compress_text_with_verbosity(&text, verbose));
            if sender.send((index, result)).is_err() {
                log::warn!("Result for '{}' was not collected", file_path.display());
            }
        });
    }
    drop(sender);

    let mut results: Vec<Option<Result<Report>>> = file_paths.iter().map(|_| None).collect();
    for (index, result) in receiver {
        results[index] = Some(result);
    }

    let mut first_error = None;
    for (file_path, result) in file_paths.iter().zip(results) {
        let label = file_path.display().to_string();
        println!("== {} ==", label);
        let result = result.unwrap_or_else(|| Err(Error::BatchJobLost(label.clone())));
        match result {
            Ok(report) => print_report(&label, report, arguments.show_tree),
            Err(Error::EmptyInput) => {
                log::warn!("{}: {}", label, Error::EmptyInput);
                println!("Skipped: {}\n", Error::EmptyInput);
            }
            Err(error) => {
                log::error!("{}: {}", label, error);
                println!("Failed: {}\n", error);
                first_error.get_or_insert(error);
            }
        }
    }
    first_error.map_or(Ok(()), Err)
}

pub fn run(arguments: &Arguments) -> Result<()> {
    match &arguments.input {
        InputSource::Text(text) => run_single("argument", text, arguments),
        InputSource::StandardInput => {
            let text = read_standard_input()?;
            run_single("standard input", &text, arguments)
        }
        InputSource::Files(file_paths) => match file_paths.as_slice() {
            [file_path] => {
                let text = read_input_file(file_path)?;
                run_single(&file_path.display().to_string(), &text, arguments)
            }
            _ => run_batch(file_paths, arguments),
        },
    }
}
