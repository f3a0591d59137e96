use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::runtime::ConfigErrors;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::statistics::CompressionStatistics;

const CONFIG_FILE: &str = "log4rs.yaml";
const FALLBACK_APPENDER: &str = "stderr";
const FALLBACK_PATTERN: &str = "{l:<5} {t} - {m}{n}";

#[ctor::ctor]
fn init() {
    if let Err(error) = log4rs::init_file(CONFIG_FILE, Default::default()) {
        eprintln!(
            "Logging configuration '{}' not loaded ({}), using defaults",
            CONFIG_FILE, error
        );
        init_fallback();
    }
}

fn init_fallback() {
    match create_fallback_config() {
        Ok(config) => {
            if let Err(error) = log4rs::init_config(config) {
                eprintln!("Unable to install logger: {}", error);
            }
        }
        Err(errors) => eprintln!("Invalid fallback logging configuration: {}", errors),
    }
}

// Same level as log4rs.yaml, so verbose traces show up without it.
fn create_fallback_config() -> Result<Config, ConfigErrors> {
    let appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build(FALLBACK_APPENDER, Box::new(appender)))
        .build(
            Root::builder()
                .appender(FALLBACK_APPENDER)
                .build(LevelFilter::Info),
        )
}

pub fn log_statistics(label: &str, statistics: &CompressionStatistics) {
    log::info!(
        "{}: {} -> {} bits (+{} bits code table), {:.2}% saved",
        label,
        statistics.original_bits,
        statistics.encoded_bits,
        statistics.table_overhead_bits,
        statistics.compression_ratio()
    );
}
