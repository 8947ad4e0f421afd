use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    /// 以分數決定風險等級，先符合者優先
    pub const fn from_score(score: u32) -> Self {
        if score >= 5 {
            Tier::High
        } else if score >= 3 {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Tier::Low => "LOW RISK",
            Tier::Medium => "MEDIUM RISK",
            Tier::High => "HIGH RISK",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub age: i32,
    pub gestational_weeks: i32,
    #[serde(default)]
    pub symptoms: BTreeSet<String>,
    #[serde(default)]
    pub previous_complications: bool,
}

impl AssessmentInput {
    pub fn new<I, S>(
        age: i32,
        gestational_weeks: i32,
        symptoms: I,
        previous_complications: bool,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            age,
            gestational_weeks,
            symptoms: symptoms.into_iter().map(Into::into).collect(),
            previous_complications,
        }
    }

    pub fn has_findings(&self) -> bool {
        !self.symptoms.is_empty() || self.previous_complications
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub tier: Tier,
    pub score: u32,
    pub advice: String,
}

impl AssessmentResult {
    /// 語音播報的完整訊息
    pub fn spoken_message(&self) -> String {
        format!("Risk Level: {}. {}", self.tier.label(), self.advice)
    }
}

/// 各項加分明細
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub age_points: u32,
    pub gestation_points: u32,
    pub high_risk_count: u32,
    pub medium_risk_count: u32,
    pub complication_points: u32,
}

impl ScoreBreakdown {
    pub const HIGH_RISK_WEIGHT: u32 = 3;
    pub const MEDIUM_RISK_WEIGHT: u32 = 1;

    pub fn total(&self) -> u32 {
        self.age_points
            + self.gestation_points
            + self.high_risk_count * Self::HIGH_RISK_WEIGHT
            + self.medium_risk_count * Self::MEDIUM_RISK_WEIGHT
            + self.complication_points
    }
}
