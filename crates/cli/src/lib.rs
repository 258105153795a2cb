pub mod buffer;
pub mod cli;
pub mod command;
pub mod completions;
pub mod coordinator;
pub mod dictionary;
pub mod error;
pub mod history;
pub mod matchers;
pub mod normalize;
pub mod scanner;
pub mod symbols;

pub use buffer::{MatchBuffer, MatchRecord};
pub use cli::{Cli, Command as CliCommand, CompletionsArgs, GenerateArgs};
pub use command::{Action, Command};
pub use coordinator::Coordinator;
pub use dictionary::Dictionary;
pub use error::{Error, ExitCode, Result};
pub use scanner::{ScanOptions, Scanner, reconstruct};
