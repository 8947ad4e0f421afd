pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::assessment::ExportFormat;
#[cfg(feature = "cli")]
use crate::domain::model::AssessmentInput;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// 表單的命令列版本：每個旗標對應一個表單欄位
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "mamaai")]
#[command(about = "Pregnancy risk assessment from age, gestational age and symptoms")]
pub struct CliConfig {
    /// Your age (15-45)
    #[arg(long, default_value = "25", allow_hyphen_values = true)]
    pub age: i32,

    /// Weeks pregnant (1-42)
    #[arg(long, default_value = "20", allow_hyphen_values = true)]
    pub weeks: i32,

    /// Comma separated symptoms, e.g. "vaginal bleeding,swelling"
    #[arg(long, value_delimiter = ',')]
    pub symptoms: Vec<String>,

    /// Previous pregnancy complications
    #[arg(long)]
    pub previous_complications: bool,

    /// Read the advice aloud
    #[arg(long)]
    pub speak: bool,

    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Slower speech
    #[arg(long)]
    pub slow: bool,

    #[arg(long, default_value = crate::speech::DEFAULT_TTS_ENDPOINT)]
    pub tts_endpoint: String,

    /// Audio player command used to play the advice, e.g. "mpg123 -q"
    #[arg(long)]
    pub player: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Export the assessment summary (csv or json)
    #[arg(long)]
    pub export: Option<String>,

    /// Print the symptom checklist and exit
    #[arg(long)]
    pub list_symptoms: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn to_input(&self) -> AssessmentInput {
        AssessmentInput::new(
            self.age,
            self.weeks,
            normalize_symptoms(&self.symptoms),
            self.previous_complications,
        )
    }

    pub fn export_format(&self) -> Result<Option<ExportFormat>> {
        self.export.as_deref().map(str::parse).transpose()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_form_input(self.age, self.weeks)?;
        validation::validate_path("output_path", &self.output_path)?;

        if let Some(format) = &self.export {
            validation::validate_export_format("export", format)?;
        }

        if self.speak {
            validation::validate_url("tts_endpoint", &self.tts_endpoint)?;
            validation::validate_non_empty_string("lang", &self.lang)?;
            if let Some(player) = &self.player {
                validation::validate_non_empty_string("player", player)?;
            }
        }

        Ok(())
    }
}

/// 表單勾選框一律輸出小寫標籤，這裡對自由輸入做相同處理
pub fn normalize_symptoms<S: AsRef<str>>(symptoms: &[S]) -> Vec<String> {
    symptoms
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
