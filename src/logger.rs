use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
};

use crate::huffman::{CodeTableEntry, Symbol};

const LOGGER_CONFIG_FILE: &str = "log4rs.yaml";
const FALLBACK_APPENDER_NAME: &str = "stderr";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(LOGGER_CONFIG_FILE, Default::default()).is_err() {
        init_fallback();
    }
}

fn init_fallback() {
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build(FALLBACK_APPENDER_NAME, Box::new(stderr)))
        .build(
            Root::builder()
                .appender(FALLBACK_APPENDER_NAME)
                .build(LevelFilter::Warn),
        );
    if let Ok(config) = config {
        let _ = log4rs::init_config(config);
    }
}

pub fn log_code_table<S: Symbol>(entries: &[CodeTableEntry<S>]) {
    for entry in entries {
        log::debug!(
            "{:?} x{} -> {} ({} bits)",
            entry.symbol,
            entry.frequency,
            entry.codeword,
            entry.codeword.len()
        );
    }
}
