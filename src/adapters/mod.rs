// Adapters layer: transports that expose the tool registry to external callers.

pub mod stdio;

pub use stdio::{ServerInfo, StdioServer};
