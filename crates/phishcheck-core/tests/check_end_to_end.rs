//! Integration test: inference policy with the real prober, and the JSON payload.

mod common;

use phishcheck_core::config::ProbeConfig;
use phishcheck_core::features::{Lexicon, FEATURE_NAMES};
use phishcheck_core::policy::{Confidence, HeuristicRules, InferencePolicy, Verdict};
use phishcheck_core::probe::CurlProber;
use phishcheck_core::report::CheckResponse;

fn policy() -> InferencePolicy<CurlProber> {
    InferencePolicy::new(
        CurlProber::new(&ProbeConfig::default()),
        Lexicon::default(),
        HeuristicRules::default(),
    )
}

#[test]
fn reachable_url_gets_heuristic_verdict_and_features() {
    let base = common::status_server::start();
    let url = format!("{base}secure/login");
    let prediction = policy().predict(&url);
    // 127.0.0.1 is a dotted-quad host and the path has suspicious words.
    assert_eq!(prediction.verdict, Verdict::Phishing);
    assert_eq!(prediction.confidence, Confidence::Heuristic);

    let json = serde_json::to_value(CheckResponse::new(&url, prediction)).unwrap();
    let features = json["features"].as_object().unwrap();
    // serde_json::Map without `preserve_order` sorts keys; compare as sets.
    let mut keys: Vec<&str> = features.keys().map(String::as_str).collect();
    let mut expected: Vec<&str> = FEATURE_NAMES.to_vec();
    keys.sort_unstable();
    expected.sort_unstable();
    assert_eq!(keys, expected);
    assert_eq!(json["features"]["has_ip"], 1);
}

#[test]
fn server_error_is_unreachable_website() {
    let base = common::status_server::start();
    let url = format!("{base}error");
    let json = serde_json::to_value(CheckResponse::new(&url, policy().predict(&url))).unwrap();
    assert_eq!(json["prediction"], "Unreachable Website");
    assert_eq!(json["probability"], "N/A");
    assert_eq!(json["features"], serde_json::json!({}));
}

#[test]
fn empty_input_is_unreachable_not_an_error() {
    let prediction = policy().predict("");
    assert_eq!(prediction.verdict, Verdict::Unreachable);
    assert_eq!(prediction.confidence, Confidence::NotApplicable);
}
