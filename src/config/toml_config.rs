use crate::domain::model::{OutputFormat, WorkoutPackage};
use crate::domain::ports::PackageSource;
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub tracker: TrackerInfo,
    pub output: Option<OutputConfig>,
    #[serde(default)]
    pub packages: Vec<WorkoutPackage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入訓練資料
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${WEIGHT_KG})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TrackerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn name(&self) -> &str {
        &self.tracker.name
    }

    pub fn configured_format(&self) -> Result<Option<OutputFormat>> {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .map(str::parse)
            .transpose()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("tracker.name", &self.tracker.name)?;

        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_deref()) {
            let format = format.trim().to_ascii_lowercase();
            validate_one_of("output.format", &format, &OutputFormat::NAMES)?;
        }

        // 未知標籤不在此拒絕，交由 dispatcher 略過
        for (index, package) in self.packages.iter().enumerate() {
            validate_non_empty_string(&format!("packages[{}].tag", index), &package.tag)?;
        }

        Ok(())
    }
}

impl PackageSource for TomlConfig {
    fn source_name(&self) -> &str {
        self.name()
    }

    fn packages(&self) -> &[WorkoutPackage] {
        &self.packages
    }

    fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.configured_format()
    }
}
