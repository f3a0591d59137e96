use crate::{Arguments, InputSource};
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgGroup, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_text_argument(command);
        let command = Self::register_input_file_argument(command);
        let command = Self::register_input_group(command);
        let command = Self::register_verbose_argument(command);
        let command = Self::register_show_tree_argument(command);
        Self::register_threads_argument(command)
    }

    fn register_text_argument(command: Command) -> Command {
        command.arg(Self::create_text_argument())
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    // text and input files are alternative sources
    fn register_input_group(command: Command) -> Command {
        command.group(
            ArgGroup::new("input")
                .args(["text", "input_file"])
                .multiple(false),
        )
    }

    fn register_verbose_argument(command: Command) -> Command {
        command.arg(Self::create_verbose_argument())
    }

    fn register_show_tree_argument(command: Command) -> Command {
        command.arg(Self::create_show_tree_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_text_argument() -> Arg {
        Arg::new("text")
            .help("Text to encode; read from standard input when neither text nor input files are given")
            .required(false)
    }

    fn create_input_file_argument() -> Arg {
        arg!(input_file: -i --input_file <FILE> "Text file to encode, may be repeated")
            .value_parser(value_parser!(PathBuf))
            .action(ArgAction::Append)
            .required(false)
    }

    fn create_verbose_argument() -> Arg {
        arg!(-v --verbose "Log every step of tree building, code assignment, encoding and decoding")
            .action(ArgAction::SetTrue)
    }

    fn create_show_tree_argument() -> Arg {
        arg!(show_tree: -s --show_tree "Print the Huffman tree").action(ArgAction::SetTrue)
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of threads for encoding several input files")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input: Self::extract_input_source(matches),
            verbose: Self::extract_verbose_argument(matches),
            show_tree: Self::extract_show_tree_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
        }
    }

    fn extract_input_source(matches: &ArgMatches) -> InputSource {
        if let Some(text) = Self::extract_text_argument(matches) {
            return InputSource::Text(text);
        }
        let input_files = Self::extract_input_file_argument(matches);
        if input_files.is_empty() {
            InputSource::StandardInput
        } else {
            InputSource::Files(input_files)
        }
    }

    fn extract_text_argument(matches: &ArgMatches) -> Option<String> {
        matches.get_one::<String>("text").cloned()
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> Vec<PathBuf> {
        matches
            .get_many::<PathBuf>("input_file")
            .map(|paths| paths.cloned().collect())
            .unwrap_or_default()
    }

    fn extract_verbose_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    fn extract_show_tree_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("show_tree")
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}
