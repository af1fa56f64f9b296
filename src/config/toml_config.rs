use crate::core::ConfigProvider;
use crate::domain::model::Operation;
use crate::utils::error::{CalcError, Result};
use crate::utils::logger::{level_filter, LogFormat};
use crate::utils::validation::{validate_known_names, validate_non_empty_string, validate_one_of, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub tools: ToolsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Which tools to publish. `enabled = None` means all of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub enabled: Option<Vec<String>>,
    pub disabled: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn log_format(&self) -> LogFormat {
        LogFormat::parse(&self.format).unwrap_or(LogFormat::Compact)
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| CalcError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn server_name(&self) -> &str {
        &self.server.name
    }

    fn server_version(&self) -> &str {
        &self.server.version
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.name", &self.server.name)?;
        validate_non_empty_string("server.version", &self.server.version)?;
        validate_one_of("logging.format", &self.logging.format, &["compact", "json"])?;
        validate_non_empty_string("logging.level", &self.logging.level)?;
        if let Err(e) = level_filter(&self.logging.level) {
            return Err(CalcError::InvalidConfigValueError {
                field: "logging.level".to_string(),
                value: self.logging.level.clone(),
                reason: format!("not a valid log level: {}", e),
            });
        }

        let known = Operation::names();
        if let Some(enabled) = &self.tools.enabled {
            validate_known_names("tools.enabled", enabled, &known)?;
        }
        validate_known_names("tools.disabled", &self.tools.disabled, &known)?;

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}
