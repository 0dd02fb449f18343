// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod core;
pub mod error;
pub mod params;

pub mod analyze;
pub mod chart;
pub mod extract;
pub mod file;
pub mod load;
pub mod runner;

pub use error::Error;

/// Stdout logging for the binaries. `RUST_LOG` overrides the default level.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}
