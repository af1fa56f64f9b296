use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::config::toml_config::ToolsConfig;
use crate::core::tools::ArithmeticTool;
use crate::domain::model::{Operation, ToolOutput, ToolSpec};
use crate::domain::ports::Tool;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::validate_known_names;

/// Maps tool names to tools.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registry holding all eight arithmetic tools.
    pub fn with_arithmetic_tools() -> Self {
        Self::with_operations(Operation::ALL)
    }

    /// Registry restricted by the `[tools]` section of the config file.
    pub fn from_config(config: &ToolsConfig) -> Result<Self> {
        let known = Operation::names();
        if let Some(enabled) = &config.enabled {
            validate_known_names("tools.enabled", enabled, &known)?;
        }
        validate_known_names("tools.disabled", &config.disabled, &known)?;

        let selected = Operation::ALL.into_iter().filter(|op| {
            let name = op.name().to_string();
            let enabled = config
                .enabled
                .as_ref()
                .map_or(true, |names| names.contains(&name));
            enabled && !config.disabled.contains(&name)
        });

        Ok(Self::with_operations(selected))
    }

    fn with_operations(operations: impl IntoIterator<Item = Operation>) -> Self {
        let mut registry = Self::new();
        for op in operations {
            // Operation names are unique, so registration cannot collide here.
            registry
                .tools
                .insert(op.name().to_string(), Arc::new(ArithmeticTool::new(op)));
        }
        tracing::info!("✅ Arithmetic tools loaded ({} registered)", registry.len());
        registry
    }

    pub fn register<T: Tool + 'static>(&mut self, tool: T) -> Result<()> {
        let name = tool.name().to_string();
        if self.tools.contains_key(&name) {
            return Err(CalcError::DuplicateTool { name });
        }
        tracing::debug!("Registered tool {}", name);
        self.tools.insert(name, Arc::new(tool));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Sorted tool names.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Tool specs sorted by name.
    pub fn specs(&self) -> Vec<ToolSpec> {
        let mut specs: Vec<ToolSpec> = self.tools.values().map(|tool| tool.spec()).collect();
        specs.sort_by(|a, b| a.name.cmp(&b.name));
        specs
    }

    pub async fn call(&self, name: &str, args: &Value) -> Result<ToolOutput> {
        let tool = self.get(name).ok_or_else(|| CalcError::UnknownTool {
            name: name.to_string(),
        })?;

        tracing::debug!("🔧 Calling tool {} with {}", name, args);
        match tool.call(args).await {
            Ok(value) => {
                tracing::debug!("Tool {} returned {}", name, value);
                Ok(ToolOutput {
                    tool: name.to_string(),
                    value,
                })
            }
            Err(e) => {
                tracing::warn!("⚠️ Tool {} rejected call: {}", name, e);
                Err(e)
            }
        }
    }

    /// Calls a tool with values bound to its parameters in declaration order.
    pub async fn call_positional(&self, name: &str, values: &[f64]) -> Result<ToolOutput> {
        let spec = self
            .get(name)
            .ok_or_else(|| CalcError::UnknownTool {
                name: name.to_string(),
            })?
            .spec();
        let params = spec.param_names();
        if params.len() != values.len() {
            return Err(CalcError::invalid_argument(format!(
                "'{}' takes {} argument(s) ({}), got {}",
                name,
                params.len(),
                params.join(", "),
                values.len()
            )));
        }

        // JSON has no NaN/inf, pass those as strings
        let mut args = Map::new();
        for (param, value) in params.into_iter().zip(values) {
            let value = if value.is_finite() {
                Value::from(*value)
            } else {
                Value::String(value.to_string())
            };
            args.insert(param, value);
        }

        self.call(name, &Value::Object(args)).await
    }
}
