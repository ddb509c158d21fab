//! Command Line Interface (CLI) layer for trimbox.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the `crop` and `measure`
//! subcommands. It wires user-provided options to the library functionality
//! exposed via `trimbox::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
