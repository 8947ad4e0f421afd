pub mod advice;
pub mod assessment;
pub mod report;
pub mod scorer;

pub use crate::domain::model::{AssessmentInput, AssessmentResult, ScoreBreakdown, Tier};
pub use crate::domain::ports::{AudioPlayer, SpeechSynthesizer, Storage};
pub use crate::utils::error::Result;
