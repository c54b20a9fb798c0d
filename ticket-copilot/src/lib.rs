pub mod cli;
pub mod client;
pub mod load_config;

pub use cli::{exit_code_for, run, run_with_args, Cli, RunError, RunOutcome};
