//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the scenecraft binary.

mod commands;
mod inspect;
mod run;

pub use commands::{Cli, Commands};
pub use inspect::{print_parts, print_presets, print_schema};
pub use run::{FormSource, load_form, run_generate, write_output};
