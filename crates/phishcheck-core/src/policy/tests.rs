use super::*;
use crate::features::FeatureRow;
use crate::probe::UnreachableReason;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

struct FixedProber(Reachability);

impl Prober for FixedProber {
    fn probe(&self, _url: &str) -> Reachability {
        self.0.clone()
    }
}

/// Records the URL it was asked about.
struct RecordingProber(Mutex<Vec<String>>);

impl Prober for RecordingProber {
    fn probe(&self, url: &str) -> Reachability {
        self.0.lock().unwrap().push(url.to_string());
        Reachability::Reachable { status: 200 }
    }
}

struct ConstClassifier {
    p: f64,
    calls: AtomicUsize,
}

impl ConstClassifier {
    fn new(p: f64) -> Arc<Self> {
        Arc::new(Self {
            p,
            calls: AtomicUsize::new(0),
        })
    }
}

impl Classifier for ConstClassifier {
    fn predict_probability(&self, row: &FeatureRow) -> f64 {
        assert_eq!(row.len(), crate::features::FEATURE_COUNT);
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.p
    }
}

fn reachable() -> FixedProber {
    FixedProber(Reachability::Reachable { status: 200 })
}

fn heuristic_policy<P: Prober>(prober: P) -> InferencePolicy<P> {
    InferencePolicy::new(prober, Lexicon::default(), HeuristicRules::default())
}

#[test]
fn unreachable_short_circuits() {
    let classifier = ConstClassifier::new(0.99);
    let policy = heuristic_policy(FixedProber(Reachability::Unreachable(
        UnreachableReason::Timeout,
    )))
    .with_classifier(classifier.clone());

    for url in ["https://192.168.1.1/secure-login", "", "example.com"] {
        let p = policy.predict(url);
        assert_eq!(p.verdict, Verdict::Unreachable);
        assert_eq!(p.confidence, Confidence::NotApplicable);
        assert!(p.features.is_none());
    }
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn probe_sees_normalized_url() {
    let policy = heuristic_policy(RecordingProber(Mutex::new(Vec::new())));
    policy.predict("  example.com/path ");
    let seen = policy.prober.0.lock().unwrap().clone();
    assert_eq!(seen, vec!["https://example.com/path".to_string()]);
}

#[test]
fn heuristic_flags_ip_with_suspicious_words() {
    let policy = heuristic_policy(reachable());
    assert!(!policy.has_classifier());
    let p = policy.predict("http://192.168.1.1/secure");
    assert_eq!(p.verdict, Verdict::Phishing);
    assert_eq!(p.confidence, Confidence::Heuristic);
    let f = p.features.expect("features on reachable path");
    assert!(f.has_ip && f.has_suspicious_words);
}

#[test]
fn heuristic_passes_clean_url() {
    let p = heuristic_policy(reachable()).predict("https://shop.example.com");
    assert_eq!(p.verdict, Verdict::Legitimate);
    assert_eq!(p.confidence, Confidence::Heuristic);
    assert!(p.features.is_some());
}

#[test]
fn model_branch_uses_classifier() {
    let classifier = ConstClassifier::new(0.8731);
    let policy = heuristic_policy(reachable()).with_classifier(classifier.clone());
    let p = policy.predict("https://shop.example.com");
    assert_eq!(p.verdict, Verdict::Phishing);
    assert_eq!(p.confidence, Confidence::Probability(0.87));
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn model_overrides_heuristic() {
    let policy = heuristic_policy(reachable()).with_classifier(ConstClassifier::new(0.1));
    let p = policy.predict("http://192.168.1.1/secure-login");
    assert_eq!(p.verdict, Verdict::Legitimate);
    assert_eq!(p.confidence, Confidence::Probability(0.1));
}

#[test]
fn probability_boundary_is_strict() {
    assert_eq!(decide_from_probability(0.5).0, Verdict::Legitimate);
    assert_eq!(decide_from_probability(0.500_001).0, Verdict::Phishing);
    assert_eq!(decide_from_probability(0.0).0, Verdict::Legitimate);
    assert_eq!(decide_from_probability(1.0).0, Verdict::Phishing);

    let policy = heuristic_policy(reachable()).with_classifier(ConstClassifier::new(0.5));
    let p = policy.predict("https://example.com");
    assert_eq!(p.verdict, Verdict::Legitimate);
    assert_eq!(p.confidence, Confidence::Probability(0.5));
}

#[test]
fn probability_is_rounded_not_thresholded_after_rounding() {
    // 0.504 rounds to 0.5 for display but is still above the threshold.
    let (verdict, confidence) = decide_from_probability(0.504);
    assert_eq!(verdict, Verdict::Phishing);
    assert_eq!(confidence, Confidence::Probability(0.5));
}

#[test]
fn exact_ties_round_to_even() {
    assert_eq!(decide_from_probability(0.125).1, Confidence::Probability(0.12));
    assert_eq!(decide_from_probability(0.625).1, Confidence::Probability(0.62));
    assert_eq!(decide_from_probability(0.375).1, Confidence::Probability(0.38));
}

#[test]
fn labels_and_sentinels_render() {
    assert_eq!(Verdict::Unreachable.to_string(), "Unreachable Website");
    assert_eq!(Confidence::NotApplicable.to_string(), "N/A");
    assert_eq!(Confidence::Heuristic.to_string(), "N/A (heuristic)");
    assert_eq!(serde_json::to_string(&Confidence::Probability(0.87)).unwrap(), "0.87");
    assert_eq!(
        serde_json::to_string(&Confidence::Heuristic).unwrap(),
        "\"N/A (heuristic)\""
    );
    assert_eq!(serde_json::to_string(&Verdict::Phishing).unwrap(), "\"Phishing\"");
}

#[test]
fn policy_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<InferencePolicy<FixedProber>>();
}
