pub mod config;
pub mod core;
pub mod domain;
pub mod speech;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use self::core::{
    assessment::{AssessmentEngine, AssessmentOutcome, AssessmentReport, ExportFormat, SpeechOutcome},
    scorer::{RiskScorer, SymptomCatalog},
};
pub use domain::model::{AssessmentInput, AssessmentResult, Tier};
pub use speech::{CommandPlayer, GoogleTts};
pub use utils::error::{MamaError, Result};
