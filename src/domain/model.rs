use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// The arithmetic operations published as tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    Power,
    SquareRoot,
    Absolute,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Modulus,
        Operation::Power,
        Operation::SquareRoot,
        Operation::Absolute,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Modulus => "modulus",
            Operation::Power => "power",
            Operation::SquareRoot => "squareRoot",
            Operation::Absolute => "absolute",
        }
    }

    pub fn from_name(name: &str) -> Option<Operation> {
        Operation::ALL.into_iter().find(|op| op.name() == name)
    }

    pub fn names() -> Vec<&'static str> {
        Operation::ALL.iter().map(|op| op.name()).collect()
    }

    pub fn description(self) -> &'static str {
        match self {
            Operation::Add => "Add two numbers",
            Operation::Subtract => "Subtract the second number from the first",
            Operation::Multiply => "Multiply two numbers",
            Operation::Divide => "Divide the first number by the second (divisor must be non-zero)",
            Operation::Modulus => "Floating-point remainder of the first number divided by the second",
            Operation::Power => "Raise a base to an exponent",
            Operation::SquareRoot => "Square root of a non-negative number",
            Operation::Absolute => "Absolute value of a number",
        }
    }

    pub fn params(self) -> &'static [ParamSpec] {
        const BINARY: &[ParamSpec] = &[
            ParamSpec::new("a", "First operand"),
            ParamSpec::new("b", "Second operand"),
        ];
        const POWER: &[ParamSpec] = &[
            ParamSpec::new("base", "The base"),
            ParamSpec::new("exponent", "The exponent"),
        ];
        const UNARY: &[ParamSpec] = &[ParamSpec::new("number", "The input number")];

        match self {
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Modulus => BINARY,
            Operation::Power => POWER,
            Operation::SquareRoot | Operation::Absolute => UNARY,
        }
    }

    pub fn spec(self) -> ToolSpec {
        ToolSpec::new(self.name(), self.description(), self.params())
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A numeric tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub description: &'static str,
}

impl ParamSpec {
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

/// Discovery metadata for a tool, shaped the way MCP clients expect it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

impl ToolSpec {
    pub fn new(name: &str, description: &str, params: &[ParamSpec]) -> Self {
        let mut properties = Map::new();
        for param in params {
            properties.insert(
                param.name.to_string(),
                json!({ "type": "number", "description": param.description }),
            );
        }
        let required: Vec<&str> = params.iter().map(|p| p.name).collect();

        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema: json!({
                "type": "object",
                "properties": properties,
                "required": required,
                "additionalProperties": false,
            }),
        }
    }

    /// `name(param, ...)`, as printed by `calc-tools list`.
    pub fn signature(&self) -> String {
        format!("{}({})", self.name, self.param_names().join(", "))
    }

    /// Parameter names in declaration order.
    pub fn param_names(&self) -> Vec<String> {
        self.input_schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    pub tool: String,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_name(op.name()), Some(op));
        }
        assert_eq!(Operation::from_name("sqrt"), None);
        assert_eq!(Operation::SquareRoot.to_string(), "squareRoot");
    }

    #[test]
    fn test_spec_schema_lists_params_in_order() {
        let spec = Operation::Power.spec();
        assert_eq!(spec.name, "power");
        assert_eq!(spec.param_names(), vec!["base", "exponent"]);
        assert_eq!(spec.input_schema["properties"]["base"]["type"], "number");
        assert_eq!(spec.input_schema["additionalProperties"], false);

        assert_eq!(spec.signature(), "power(base, exponent)");
        assert_eq!(Operation::SquareRoot.spec().signature(), "squareRoot(number)");

        let json = serde_json::to_value(&spec).unwrap();
        assert!(json.get("inputSchema").is_some());
    }
}
