//! Weighted-sum pregnancy risk scoring.
//!
//! The score is a pure function of the input and the two fixed symptom
//! catalogs; calling it repeatedly with the same input yields identical
//! results.

use crate::core::advice;
use crate::domain::model::{AssessmentInput, AssessmentResult, ScoreBreakdown, Tier};
use std::collections::HashSet;

pub const HIGH_RISK_SYMPTOMS: [&str; 8] = [
    "vaginal bleeding",
    "severe abdominal pain",
    "high fever",
    "no fetal movement",
    "blurred vision",
    "severe headache",
    "convulsions",
    "water breaking early",
];

pub const MEDIUM_RISK_SYMPTOMS: [&str; 7] = [
    "mild headache",
    "swelling",
    "dizziness",
    "nausea",
    "back pain",
    "fatigue",
    "frequent urination",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymptomWeight {
    High,
    Medium,
}

/// 兩組互斥的症狀清單，建立後不可變更
#[derive(Debug, Clone)]
pub struct SymptomCatalog {
    high: HashSet<&'static str>,
    medium: HashSet<&'static str>,
}

impl SymptomCatalog {
    pub fn new() -> Self {
        Self {
            high: HIGH_RISK_SYMPTOMS.iter().copied().collect(),
            medium: MEDIUM_RISK_SYMPTOMS.iter().copied().collect(),
        }
    }

    /// 字串完全相符才算（大小寫敏感）
    pub fn weight_of(&self, symptom: &str) -> Option<SymptomWeight> {
        if self.high.contains(symptom) {
            Some(SymptomWeight::High)
        } else if self.medium.contains(symptom) {
            Some(SymptomWeight::Medium)
        } else {
            None
        }
    }

    pub fn high_risk(&self) -> &'static [&'static str] {
        &HIGH_RISK_SYMPTOMS
    }

    pub fn medium_risk(&self) -> &'static [&'static str] {
        &MEDIUM_RISK_SYMPTOMS
    }
}

impl Default for SymptomCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    catalog: SymptomCatalog,
}

impl RiskScorer {
    pub fn new() -> Self {
        Self {
            catalog: SymptomCatalog::new(),
        }
    }

    pub fn catalog(&self) -> &SymptomCatalog {
        &self.catalog
    }

    pub fn breakdown(&self, input: &AssessmentInput) -> ScoreBreakdown {
        let mut breakdown = ScoreBreakdown::default();

        // 年齡
        if input.age < 18 || input.age > 35 {
            breakdown.age_points = 2;
        }

        // 孕週
        if input.gestational_weeks < 12 {
            breakdown.gestation_points = 1;
        } else if input.gestational_weeks > 40 {
            breakdown.gestation_points = 2;
        }

        for symptom in &input.symptoms {
            match self.catalog.weight_of(symptom) {
                Some(SymptomWeight::High) => breakdown.high_risk_count += 1,
                Some(SymptomWeight::Medium) => breakdown.medium_risk_count += 1,
                None => {}
            }
        }

        if input.previous_complications {
            breakdown.complication_points = 2;
        }

        breakdown
    }

    pub fn assess(&self, input: &AssessmentInput) -> AssessmentResult {
        let breakdown = self.breakdown(input);
        let score = breakdown.total();
        let tier = Tier::from_score(score);

        tracing::debug!(
            score,
            tier = %tier,
            age_points = breakdown.age_points,
            gestation_points = breakdown.gestation_points,
            high_risk_count = breakdown.high_risk_count,
            medium_risk_count = breakdown.medium_risk_count,
            complication_points = breakdown.complication_points,
            "Risk score computed"
        );

        AssessmentResult {
            tier,
            score,
            advice: advice::advice_for(tier, &input.symptoms),
        }
    }

    pub fn score<I, S>(
        &self,
        age: i32,
        gestational_weeks: i32,
        symptoms: I,
        previous_complications: bool,
    ) -> AssessmentResult
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let input = AssessmentInput::new(age, gestational_weeks, symptoms, previous_complications);
        self.assess(&input)
    }
}
