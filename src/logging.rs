//! Logger setup for the binary and tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Level used when `RUST_LOG` is unset.
#[must_use]
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs `env_logger` as the global logger.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks between debug and
/// info. Calling this again is harmless, so every test may call it.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_level(verbose).to_string());
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis();

    if builder.try_init().is_err() {
        log::trace!("logger already installed");
    }
}
