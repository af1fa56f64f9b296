pub mod arithmetic;
pub mod registry;
pub mod tools;

pub use crate::domain::model::{Operation, ToolOutput, ToolSpec};
pub use crate::domain::ports::{ConfigProvider, Tool};
pub use crate::utils::error::Result;
