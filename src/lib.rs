pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::TomlConfig;

pub use adapters::{ServerInfo, StdioServer};
pub use core::{registry::ToolRegistry, tools::ArithmeticTool};
pub use domain::model::{Operation, ToolOutput, ToolSpec};
pub use utils::error::{CalcError, Result};
