// adcensor/src/logger.rs
//! Logger setup for the adcensor binary.

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Installs `env_logger` with a `[LEVEL target] message` format.
///
/// `RUST_LOG` is honored unless `level_override` is given. Calling this more
/// than once is harmless; later calls are ignored.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format(|buf, record| {
        writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
    });
    let _ = builder.try_init();
}
