use crate::domain::model::Tier;
use std::collections::BTreeSet;

/// 依風險等級選擇建議文字；條件段落只看症狀是否存在，不重新計分
pub fn advice_for(tier: Tier, symptoms: &BTreeSet<String>) -> String {
    match tier {
        Tier::High => high_risk_advice(symptoms),
        Tier::Medium => medium_risk_advice(symptoms),
        Tier::Low => low_risk_advice(),
    }
}

pub fn high_risk_advice(symptoms: &BTreeSet<String>) -> String {
    let mut advice = String::from("🚨 EMERGENCY - SEEK IMMEDIATE MEDICAL ATTENTION!\n\n");
    advice.push_str("Based on your symptoms, this could be serious.\n");
    advice.push_str("Please go to the nearest hospital or call emergency services.\n");

    if symptoms.contains("vaginal bleeding") {
        advice.push_str("\n• Vaginal bleeding can indicate serious complications");
    }
    if symptoms.contains("no fetal movement") {
        advice.push_str("\n• Reduced fetal movement needs immediate evaluation");
    }
    if symptoms.contains("severe abdominal pain") {
        advice.push_str("\n• Severe abdominal pain could indicate emergencies");
    }

    advice.push_str("\n\nDon't wait - your health and baby's health are important!");
    advice
}

pub fn medium_risk_advice(symptoms: &BTreeSet<String>) -> String {
    let mut advice = String::from("⚠️ Consult Your Doctor Soon\n\n");
    advice.push_str("You should see a healthcare provider within 24-48 hours.\n");

    if symptoms.contains("swelling") {
        advice.push_str("\n• Monitor swelling and blood pressure");
    }
    // 頭痛以子字串比對，"mild headache" 與 "severe headache" 都會觸發
    if symptoms.iter().any(|s| s.contains("headache")) {
        advice.push_str("\n• Headaches should be evaluated if persistent");
    }
    if symptoms.contains("dizziness") {
        advice.push_str("\n• Stay hydrated and avoid sudden movements");
    }

    advice.push_str("\n\nKeep monitoring your symptoms and contact your doctor.");
    advice
}

pub fn low_risk_advice() -> String {
    let mut advice = String::from("✅ Low Risk - Continue Routine Care\n\n");
    advice.push_str("Your symptoms appear to be within normal range.\n");
    advice.push_str("Continue with your regular prenatal care and:\n");
    advice.push_str("\n• Attend all scheduled appointments");
    advice.push_str("\n• Maintain healthy diet and hydration");
    advice.push_str("\n• Get adequate rest");
    advice.push_str("\n• Monitor any new symptoms");

    advice.push_str("\n\nAlways contact your healthcare provider with concerns.");
    advice
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_high_risk_clauses_follow_fixed_order() {
        let advice = high_risk_advice(&set(&[
            "severe abdominal pain",
            "vaginal bleeding",
            "no fetal movement",
        ]));

        let bleeding = advice.find("Vaginal bleeding").unwrap();
        let movement = advice.find("Reduced fetal movement").unwrap();
        let pain = advice.find("Severe abdominal pain").unwrap();
        assert!(bleeding < movement && movement < pain);
        assert!(advice.starts_with("🚨 EMERGENCY"));
        assert!(advice.ends_with("your health and baby's health are important!"));
    }

    #[test]
    fn test_high_risk_without_trigger_symptoms_has_no_clauses() {
        let advice = high_risk_advice(&set(&["convulsions", "high fever"]));
        assert!(!advice.contains('•'));
    }

    #[test]
    fn test_medium_headache_matches_substring() {
        let mild = medium_risk_advice(&set(&["mild headache"]));
        assert!(mild.contains("Headaches should be evaluated if persistent"));

        let severe = medium_risk_advice(&set(&["severe headache"]));
        assert!(severe.contains("Headaches should be evaluated if persistent"));

        let none = medium_risk_advice(&set(&["nausea"]));
        assert!(!none.contains("Headaches"));
    }

    #[test]
    fn test_medium_clauses_follow_fixed_order() {
        let advice = medium_risk_advice(&set(&["dizziness", "swelling", "mild headache"]));
        let swelling = advice.find("Monitor swelling").unwrap();
        let headache = advice.find("Headaches").unwrap();
        let dizziness = advice.find("Stay hydrated").unwrap();
        assert!(swelling < headache && headache < dizziness);
    }

    #[test]
    fn test_low_risk_advice_is_static() {
        assert_eq!(advice_for(Tier::Low, &set(&["swelling"])), low_risk_advice());
        assert!(low_risk_advice().contains("Attend all scheduled appointments"));
    }
}
