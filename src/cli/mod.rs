//! Command line interface for the emotion classifier.
//!
//! Without a subcommand the binary starts an interactive session on the
//! terminal. `analyze`, `feedback` and `summary` run once and exit.

pub mod args;
pub mod commands;
pub mod output;

pub use args::{Command, EmotionArgs, OutputFormat};
pub use commands::{SessionInput, execute_command, run_session};
pub use output::output_result;
