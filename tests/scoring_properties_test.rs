use mamaai::core::scorer::{HIGH_RISK_SYMPTOMS, MEDIUM_RISK_SYMPTOMS};
use mamaai::{AssessmentInput, RiskScorer, Tier};

const NONE: [&str; 0] = [];

#[test]
fn test_documented_examples() {
    let scorer = RiskScorer::new();

    let baseline = scorer.score(25, 20, NONE, false);
    assert_eq!((baseline.tier, baseline.score), (Tier::Low, 0));

    let teen = scorer.score(17, 20, NONE, false);
    assert_eq!((teen.tier, teen.score), (Tier::Low, 2));

    let single = scorer.score(25, 20, ["vaginal bleeding"], false);
    assert_eq!((single.tier, single.score), (Tier::Medium, 3));

    let double = scorer.score(25, 20, ["vaginal bleeding", "no fetal movement"], false);
    assert_eq!((double.tier, double.score), (Tier::High, 6));

    let older = scorer.score(40, 20, NONE, true);
    assert_eq!((older.tier, older.score), (Tier::Medium, 4));
}

#[test]
fn test_tier_cutoffs() {
    let scorer = RiskScorer::new();

    // 2: age only
    assert_eq!(scorer.score(17, 20, NONE, false).tier, Tier::Low);
    // 3: age + first trimester
    let three = scorer.score(17, 8, NONE, false);
    assert_eq!((three.score, three.tier), (3, Tier::Medium));
    // 4: age + complications
    assert_eq!(scorer.score(17, 20, NONE, true).tier, Tier::Medium);
    // 5: age + first trimester + complications
    let five = scorer.score(17, 8, NONE, true);
    assert_eq!((five.score, five.tier), (5, Tier::High));

    assert_eq!(Tier::from_score(2), Tier::Low);
    assert_eq!(Tier::from_score(3), Tier::Medium);
    assert_eq!(Tier::from_score(4), Tier::Medium);
    assert_eq!(Tier::from_score(5), Tier::High);
}

#[test]
fn test_unknown_symptoms_score_zero() {
    let scorer = RiskScorer::new();
    let result = scorer.score(
        25,
        20,
        ["hiccups", "Vaginal Bleeding", "headache", "craving pickles"],
        false,
    );
    assert_eq!(result.score, 0);
    assert_eq!(result.tier, Tier::Low);
}

#[test]
fn test_every_catalog_symptom_carries_its_weight() {
    let scorer = RiskScorer::new();
    for symptom in HIGH_RISK_SYMPTOMS {
        assert_eq!(scorer.score(25, 20, [symptom], false).score, 3, "{}", symptom);
    }
    for symptom in MEDIUM_RISK_SYMPTOMS {
        assert_eq!(scorer.score(25, 20, [symptom], false).score, 1, "{}", symptom);
    }

    let everything = scorer.score(
        25,
        20,
        HIGH_RISK_SYMPTOMS.iter().chain(MEDIUM_RISK_SYMPTOMS.iter()).copied(),
        false,
    );
    assert_eq!(everything.score, 8 * 3 + 7);
}

#[test]
fn test_scoring_is_repeatable() {
    let scorer = RiskScorer::new();
    let input = AssessmentInput::new(38, 41, ["swelling", "severe headache", "dizziness"], true);

    let first = scorer.assess(&input);
    let second = scorer.assess(&input);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );

    let fresh = RiskScorer::new().assess(&input);
    assert_eq!(first, fresh);
}

#[test]
fn test_advice_matches_tier() {
    let scorer = RiskScorer::new();

    let high = scorer.score(25, 20, ["vaginal bleeding", "severe abdominal pain"], false);
    assert!(high.advice.contains("Vaginal bleeding can indicate serious complications"));
    assert!(high.advice.contains("Severe abdominal pain could indicate emergencies"));
    assert!(!high.advice.contains("Reduced fetal movement"));

    // severe headache (3) + swelling (1) = 4
    let medium = scorer.score(25, 20, ["severe headache", "swelling"], false);
    assert_eq!(medium.tier, Tier::Medium);
    assert!(medium.advice.contains("Monitor swelling and blood pressure"));
    assert!(medium.advice.contains("Headaches should be evaluated if persistent"));

    let low = scorer.score(25, 20, ["dizziness"], false);
    assert_eq!(low.tier, Tier::Low);
    assert!(!low.advice.contains("Stay hydrated"));
    assert!(low.advice.starts_with("✅ Low Risk - Continue Routine Care"));
}
