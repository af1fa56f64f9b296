use crate::domain::model::ToolSpec;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// A named function callable with a JSON argument object.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn spec(&self) -> ToolSpec;

    async fn call(&self, args: &Value) -> Result<f64>;
}

pub trait ConfigProvider: Send + Sync {
    fn server_name(&self) -> &str;
    fn server_version(&self) -> &str;
}
