use crate::core::report::AssessmentSummary;
use crate::core::scorer::RiskScorer;
use crate::domain::model::{AssessmentInput, AssessmentResult};
use crate::domain::ports::{AudioPlayer, SpeechSynthesizer, Storage};
use crate::utils::error::{MamaError, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = MamaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(MamaError::InvalidConfigValueError {
                field: "export".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: csv, json".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechOutcome {
    NotRequested,
    Saved { path: String },
    Played { path: String },
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct AssessmentReport {
    pub id: Option<String>,
    pub input: AssessmentInput,
    pub result: AssessmentResult,
    pub summary: AssessmentSummary,
    pub export_path: Option<String>,
    pub speech: SpeechOutcome,
}

#[derive(Debug, Clone)]
pub enum AssessmentOutcome {
    /// 沒有勾選任何症狀也沒有過往併發症
    NothingToAssess,
    Assessed(Box<AssessmentReport>),
}

pub struct AssessmentEngine<S: Storage> {
    scorer: RiskScorer,
    storage: S,
    export: Option<ExportFormat>,
    synthesizer: Option<Box<dyn SpeechSynthesizer>>,
    player: Option<Box<dyn AudioPlayer>>,
}

impl<S: Storage> AssessmentEngine<S> {
    pub fn new(storage: S) -> Self {
        Self {
            scorer: RiskScorer::new(),
            storage,
            export: None,
            synthesizer: None,
            player: None,
        }
    }

    pub fn with_export(mut self, format: Option<ExportFormat>) -> Self {
        self.export = format;
        self
    }

    pub fn with_speech(mut self, synthesizer: Box<dyn SpeechSynthesizer>) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }

    pub fn with_player(mut self, player: Box<dyn AudioPlayer>) -> Self {
        self.player = Some(player);
        self
    }

    pub async fn assess(&self, id: Option<&str>, input: &AssessmentInput) -> Result<AssessmentOutcome> {
        if !input.has_findings() {
            tracing::info!("No symptoms or complications selected, skipping assessment");
            return Ok(AssessmentOutcome::NothingToAssess);
        }

        let result = self.scorer.assess(input);
        tracing::info!(
            "🎯 Assessment {} -> {} (score {})",
            id.unwrap_or("-"),
            result.tier,
            result.score
        );

        let summary = AssessmentSummary::new(id.map(str::to_string), input, &result);

        // 匯出摘要
        let export_path = match self.export {
            Some(format) => {
                let data = match format {
                    ExportFormat::Csv => summary.to_csv()?,
                    ExportFormat::Json => summary.to_json()?,
                };
                let name = file_name(id, "assessment_summary", format.extension());
                let path = self.storage.write_file(&name, &data).await?;
                tracing::info!("📁 Summary saved to: {}", path);
                Some(path)
            }
            None => None,
        };

        // 評分已完成，語音失敗只記錄警告
        let speech = match &self.synthesizer {
            Some(synthesizer) => match self.speak(synthesizer.as_ref(), id, &result).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!(
                        "🔇 Voice output failed: {} (Category: {:?})",
                        e,
                        e.category()
                    );
                    SpeechOutcome::Failed(e.user_friendly_message())
                }
            },
            None => SpeechOutcome::NotRequested,
        };

        Ok(AssessmentOutcome::Assessed(Box::new(AssessmentReport {
            id: id.map(str::to_string),
            input: input.clone(),
            result,
            summary,
            export_path,
            speech,
        })))
    }

    async fn speak(
        &self,
        synthesizer: &dyn SpeechSynthesizer,
        id: Option<&str>,
        result: &AssessmentResult,
    ) -> Result<SpeechOutcome> {
        let audio = synthesizer.synthesize(&result.spoken_message()).await?;
        let name = file_name(id, "advice", "mp3");
        let path = self.storage.write_file(&name, &audio).await?;

        match &self.player {
            Some(player) => {
                player.play(&path).await?;
                tracing::info!("🔊 Voice output completed");
                Ok(SpeechOutcome::Played { path })
            }
            None => {
                tracing::info!("🔊 Advice audio saved to: {}", path);
                Ok(SpeechOutcome::Saved { path })
            }
        }
    }
}

fn file_name(id: Option<&str>, stem: &str, extension: &str) -> String {
    match id {
        Some(id) => {
            let safe: String = id
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
                .collect();
            format!("{}_{}.{}", safe, stem, extension)
        }
        None => format!("{}.{}", stem, extension),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Tier;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(path.to_string())
        }
    }

    struct FailingSynthesizer;

    #[async_trait]
    impl SpeechSynthesizer for FailingSynthesizer {
        async fn synthesize(&self, _text: &str) -> Result<Vec<u8>> {
            Err(MamaError::SpeechServiceError {
                status: 503,
                message: "service unavailable".to_string(),
            })
        }
    }

    struct EchoSynthesizer {
        spoken: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl SpeechSynthesizer for EchoSynthesizer {
        async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
            self.spoken.lock().await.push(text.to_string());
            Ok(b"ID3fake".to_vec())
        }
    }

    fn expect_report(outcome: AssessmentOutcome) -> AssessmentReport {
        match outcome {
            AssessmentOutcome::Assessed(report) => *report,
            AssessmentOutcome::NothingToAssess => panic!("expected an assessment"),
        }
    }

    #[tokio::test]
    async fn test_empty_input_is_not_assessed() {
        let engine = AssessmentEngine::new(MockStorage::new());
        let input = AssessmentInput::new(40, 42, Vec::<String>::new(), false);
        let outcome = engine.assess(None, &input).await.unwrap();
        assert!(matches!(outcome, AssessmentOutcome::NothingToAssess));
    }

    #[tokio::test]
    async fn test_complications_alone_are_assessed() {
        let engine = AssessmentEngine::new(MockStorage::new());
        let input = AssessmentInput::new(40, 20, Vec::<String>::new(), true);
        let report = expect_report(engine.assess(None, &input).await.unwrap());
        assert_eq!(report.result.tier, Tier::Medium);
        assert_eq!(report.result.score, 4);
        assert_eq!(report.speech, SpeechOutcome::NotRequested);
        assert!(report.export_path.is_none());
    }

    #[tokio::test]
    async fn test_csv_export_written_to_storage() {
        let storage = MockStorage::new();
        let engine =
            AssessmentEngine::new(storage.clone()).with_export(Some(ExportFormat::Csv));
        let input = AssessmentInput::new(25, 20, ["swelling"], false);

        let report = expect_report(engine.assess(Some("patient 1"), &input).await.unwrap());
        assert_eq!(
            report.export_path.as_deref(),
            Some("patient_1_assessment_summary.csv")
        );

        let data = storage
            .get_file("patient_1_assessment_summary.csv")
            .await
            .unwrap();
        let text = String::from_utf8(data).unwrap();
        assert!(text.contains("Risk Level,LOW RISK"));
    }

    #[tokio::test]
    async fn test_speech_failure_is_not_fatal() {
        let storage = MockStorage::new();
        let engine = AssessmentEngine::new(storage.clone())
            .with_export(Some(ExportFormat::Json))
            .with_speech(Box::new(FailingSynthesizer));
        let input = AssessmentInput::new(25, 20, ["vaginal bleeding", "convulsions"], false);

        let report = expect_report(engine.assess(None, &input).await.unwrap());
        assert_eq!(report.result.tier, Tier::High);
        assert!(matches!(report.speech, SpeechOutcome::Failed(ref msg) if msg.contains("503")));
        assert!(storage.get_file("assessment_summary.json").await.is_some());
        assert!(storage.get_file("advice.mp3").await.is_none());
    }

    #[tokio::test]
    async fn test_speech_message_includes_tier_label() {
        let storage = MockStorage::new();
        let spoken = Arc::new(Mutex::new(Vec::new()));
        let engine = AssessmentEngine::new(storage.clone()).with_speech(Box::new(EchoSynthesizer {
            spoken: spoken.clone(),
        }));
        let input = AssessmentInput::new(25, 20, ["fatigue"], false);

        let report = expect_report(engine.assess(None, &input).await.unwrap());
        assert_eq!(
            report.speech,
            SpeechOutcome::Saved {
                path: "advice.mp3".to_string()
            }
        );

        let spoken = spoken.lock().await;
        assert_eq!(spoken.len(), 1);
        assert!(spoken[0].starts_with("Risk Level: LOW RISK. ✅ Low Risk"));
        assert_eq!(storage.get_file("advice.mp3").await.unwrap(), b"ID3fake".to_vec());
    }

    #[test]
    fn test_export_format_parsing() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
