pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, InspectArgs, RegisterArgs, RewriteArgs};
pub use output::{OutputFormat, OutputFormatter};
