use crate::utils::error::{CalcError, Result};
use serde_json::Value;
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_known_names(field_name: &str, names: &[String], known: &[&str]) -> Result<()> {
    let known_set: HashSet<&str> = known.iter().copied().collect();

    for name in names {
        if !known_set.contains(name.as_str()) {
            return Err(CalcError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: format!("Unknown tool. Known tools: {}", known.join(", ")),
            });
        }
    }

    Ok(())
}

/// Reads a numeric tool argument. Numeric strings are accepted as well.
pub fn require_number(tool: &str, args: &Value, argument: &str) -> Result<f64> {
    let value = args.get(argument).ok_or_else(|| CalcError::MissingArgument {
        tool: tool.to_string(),
        argument: argument.to_string(),
    })?;

    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| {
            CalcError::invalid_argument(format!("'{}' is not representable as a number", argument))
        }),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| {
            CalcError::invalid_argument(format!("'{}' must be a number, got \"{}\"", argument, s))
        }),
        Value::Null => Err(CalcError::MissingArgument {
            tool: tool.to_string(),
            argument: argument.to_string(),
        }),
        other => Err(CalcError::invalid_argument(format!(
            "'{}' must be a number, got {}",
            argument, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("server.name", "calc").is_ok());
        assert!(validate_non_empty_string("server.name", "   ").is_err());
    }

    #[test]
    fn test_validate_known_names() {
        let names = vec!["add".to_string(), "divide".to_string()];
        assert!(validate_known_names("tools.enabled", &names, &["add", "divide"]).is_ok());

        let unknown = vec!["factorial".to_string()];
        assert!(validate_known_names("tools.enabled", &unknown, &["add"]).is_err());
    }

    #[test]
    fn test_require_number() {
        let args = json!({ "a": 2.5, "b": "4", "c": true, "d": null });
        assert_eq!(require_number("add", &args, "a").unwrap(), 2.5);
        assert_eq!(require_number("add", &args, "b").unwrap(), 4.0);
        assert!(matches!(
            require_number("add", &args, "c"),
            Err(CalcError::InvalidArgument { .. })
        ));
        assert!(matches!(
            require_number("add", &args, "d"),
            Err(CalcError::MissingArgument { .. })
        ));
        assert!(matches!(
            require_number("add", &args, "z"),
            Err(CalcError::MissingArgument { .. })
        ));
    }
}
