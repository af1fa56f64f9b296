use crate::core::arithmetic;
use crate::domain::model::{Operation, ToolSpec};
use crate::domain::ports::Tool;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::require_number;
use async_trait::async_trait;
use serde_json::Value;

/// Exposes one arithmetic [`Operation`] as a [`Tool`].
#[derive(Debug, Clone, Copy)]
pub struct ArithmeticTool {
    operation: Operation,
}

impl ArithmeticTool {
    pub fn new(operation: Operation) -> Self {
        Self { operation }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Applies the operation to already-extracted values, in parameter order.
    pub fn apply(&self, values: &[f64]) -> Result<f64> {
        let expected = self.operation.params().len();
        if values.len() != expected {
            return Err(CalcError::invalid_argument(format!(
                "'{}' takes {} argument(s), got {}",
                self.operation,
                expected,
                values.len()
            )));
        }

        match self.operation {
            Operation::Add => Ok(arithmetic::add(values[0], values[1])),
            Operation::Subtract => Ok(arithmetic::subtract(values[0], values[1])),
            Operation::Multiply => Ok(arithmetic::multiply(values[0], values[1])),
            Operation::Divide => arithmetic::divide(values[0], values[1]),
            Operation::Modulus => Ok(arithmetic::modulus(values[0], values[1])),
            Operation::Power => Ok(arithmetic::power(values[0], values[1])),
            Operation::SquareRoot => arithmetic::square_root(values[0]),
            Operation::Absolute => Ok(arithmetic::absolute(values[0])),
        }
    }

    fn extract(&self, args: &Value) -> Result<Vec<f64>> {
        let empty = Value::Object(Default::default());
        let args = match args {
            Value::Null => &empty,
            Value::Object(_) => args,
            other => {
                return Err(CalcError::invalid_argument(format!(
                    "arguments for '{}' must be an object, got {}",
                    self.operation, other
                )))
            }
        };

        self.operation
            .params()
            .iter()
            .map(|param| require_number(self.operation.name(), args, param.name))
            .collect()
    }
}

#[async_trait]
impl Tool for ArithmeticTool {
    fn name(&self) -> &str {
        self.operation.name()
    }

    fn spec(&self) -> ToolSpec {
        self.operation.spec()
    }

    async fn call(&self, args: &Value) -> Result<f64> {
        let values = self.extract(args)?;
        self.apply(&values)
    }
}
