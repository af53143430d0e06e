//! The `autoplace` binaries: configuration, logging, notifications and the CLI around the
//! session driver of `autoplace-core`.
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
pub mod app;
pub mod cli;
mod config;
pub mod errors;
pub mod notify;
pub mod utils;

pub use config::*;
