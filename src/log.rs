// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Log module, writes to a file through log4rs since the terminal belongs
//! to the renderer. Reference https://docs.rs/log4rs

use crate::error::{GridError, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

/// init logs system
pub fn init_log(level: LevelFilter, file_path: &str) -> Result<()> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}",
        )))
        .build(file_path)?;
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .map_err(|e| GridError::Log(e.to_string()))?;
    log4rs::init_config(config).map_err(|e| GridError::Log(e.to_string()))?;
    Ok(())
}
