use crate::core::scorer::SymptomCatalog;
use crate::domain::model::{AssessmentInput, AssessmentResult, Tier};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

pub const EMERGENCY_CONTACTS: &str = "Emergency Contacts in Nigeria:\n\
- Emergency: 112 or 199\n\
- Contact your nearest hospital immediately!";

pub const NOTHING_TO_ASSESS: &str =
    "Please select at least one symptom or indicate previous complications.";

pub const DISCLAIMER: &str =
    "This is not a substitute for professional medical care. Always consult healthcare professionals for medical advice.";

/// 評估摘要表的一列
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    #[serde(rename = "Parameter")]
    pub parameter: &'static str,
    #[serde(rename = "Value")]
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummary {
    pub id: Option<String>,
    pub assessed_at: DateTime<Utc>,
    pub rows: Vec<SummaryRow>,
    pub score: u32,
    pub tier: Tier,
}

impl AssessmentSummary {
    pub fn new(id: Option<String>, input: &AssessmentInput, result: &AssessmentResult) -> Self {
        let rows = vec![
            SummaryRow {
                parameter: "Age",
                value: input.age.to_string(),
            },
            SummaryRow {
                parameter: "Weeks Pregnant",
                value: input.gestational_weeks.to_string(),
            },
            SummaryRow {
                parameter: "Symptoms Count",
                value: input.symptoms.len().to_string(),
            },
            SummaryRow {
                parameter: "Previous Complications",
                value: if input.previous_complications { "Yes" } else { "No" }.to_string(),
            },
            SummaryRow {
                parameter: "Risk Level",
                value: result.tier.label().to_string(),
            },
        ];

        Self {
            id,
            assessed_at: Utc::now(),
            rows,
            score: result.score,
            tier: result.tier,
        }
    }

    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        writer
            .into_inner()
            .map_err(|e| crate::utils::error::MamaError::IoError(e.into_error()))
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    pub fn render_table(&self) -> String {
        let width = self
            .rows
            .iter()
            .map(|r| r.parameter.len())
            .max()
            .unwrap_or(0)
            .max("Parameter".len());

        let mut out = String::new();
        let _ = writeln!(out, "{:<width$} | Value", "Parameter", width = width);
        let _ = writeln!(out, "{}-+-{}", "-".repeat(width), "-".repeat(11));
        for row in &self.rows {
            let _ = writeln!(out, "{:<width$} | {}", row.parameter, row.value, width = width);
        }
        out
    }
}

/// 終端機輸出：依等級加上強調與緊急聯絡資訊
pub fn render_result(result: &AssessmentResult) -> String {
    let marker = match result.tier {
        Tier::High => "🚨",
        Tier::Medium => "⚠️",
        Tier::Low => "✅",
    };

    let mut out = String::new();
    let _ = writeln!(out, "{} {}", marker, result.tier.label());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", result.advice);

    if result.tier == Tier::High {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", EMERGENCY_CONTACTS);
    }
    out
}

pub fn render_catalog(catalog: &SymptomCatalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Concerning Symptoms:");
    for symptom in catalog.high_risk() {
        let _ = writeln!(out, "  - {}", symptom);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Common Symptoms:");
    for symptom in catalog.medium_risk() {
        let _ = writeln!(out, "  - {}", symptom);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "🚨 Go to hospital immediately if you have:");
    for line in [
        "Heavy vaginal bleeding",
        "Severe abdominal pain",
        "No fetal movement",
        "High fever with pain",
    ] {
        let _ = writeln!(out, "  - {}", line);
    }
    out
}
