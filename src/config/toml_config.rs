use crate::core::assessment::ExportFormat;
use crate::domain::model::AssessmentInput;
use crate::utils::error::{MamaError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub batch: BatchConfig,
    pub speech: Option<SpeechConfig>,
    pub output: OutputConfig,
    #[serde(default)]
    pub assessments: Vec<AssessmentEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub name: String,
    pub description: Option<String>,
    /// 以 JSON 格式輸出日誌
    pub json_logs: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    pub enabled: bool,
    pub lang: Option<String>,
    pub slow: Option<bool>,
    pub endpoint: Option<String>,
    pub player: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentEntry {
    pub id: String,
    pub age: i32,
    pub gestational_weeks: i32,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub previous_complications: bool,
}

impl AssessmentEntry {
    pub fn to_input(&self) -> AssessmentInput {
        AssessmentInput {
            age: self.age,
            gestational_weeks: self.gestational_weeks,
            symptoms: super::normalize_symptoms(&self.symptoms)
                .into_iter()
                .collect::<BTreeSet<_>>(),
            previous_complications: self.previous_complications,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MamaError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MamaError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MamaError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("batch.name", &self.batch.name)?;
        validation::validate_path("output.path", &self.output.path)?;

        if let Some(format) = &self.output.format {
            validation::validate_export_format("output.format", format)?;
        }

        if let Some(speech) = self.speech.as_ref().filter(|s| s.enabled) {
            if let Some(endpoint) = &speech.endpoint {
                validation::validate_url("speech.endpoint", endpoint)?;
            }
            if let Some(lang) = &speech.lang {
                validation::validate_non_empty_string("speech.lang", lang)?;
            }
        }

        // 每筆評估需有唯一 id，並落在表單範圍內
        let mut seen = HashSet::new();
        for (i, entry) in self.assessments.iter().enumerate() {
            validation::validate_non_empty_string(&format!("assessments[{}].id", i), &entry.id)?;
            if !seen.insert(entry.id.as_str()) {
                return Err(MamaError::InvalidConfigValueError {
                    field: format!("assessments[{}].id", i),
                    value: entry.id.clone(),
                    reason: "Duplicate assessment id".to_string(),
                });
            }
            validation::validate_form_input(entry.age, entry.gestational_weeks).map_err(|e| {
                match e {
                    MamaError::InvalidConfigValueError { field, value, reason } => {
                        MamaError::InvalidConfigValueError {
                            field: format!("assessments[{}].{}", i, field),
                            value,
                            reason,
                        }
                    }
                    other => other,
                }
            })?;
        }

        Ok(())
    }

    pub fn output_path(&self) -> &str {
        &self.output.path
    }

    pub fn export_format(&self) -> Result<Option<ExportFormat>> {
        self.output.format.as_deref().map(str::parse).transpose()
    }

    pub fn speech_enabled(&self) -> bool {
        self.speech.as_ref().map(|s| s.enabled).unwrap_or(false)
    }

    pub fn speech_lang(&self) -> &str {
        self.speech
            .as_ref()
            .and_then(|s| s.lang.as_deref())
            .unwrap_or("en")
    }

    pub fn speech_endpoint(&self) -> &str {
        self.speech
            .as_ref()
            .and_then(|s| s.endpoint.as_deref())
            .unwrap_or(crate::speech::DEFAULT_TTS_ENDPOINT)
    }

    pub fn speech_slow(&self) -> bool {
        self.speech.as_ref().and_then(|s| s.slow).unwrap_or(false)
    }

    pub fn speech_player(&self) -> Option<&str> {
        self.speech.as_ref().and_then(|s| s.player.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.batch.json_logs.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
