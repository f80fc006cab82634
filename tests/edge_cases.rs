//! Totality on hostile and degenerate input.

use std::time::{Duration, Instant};

use proptest::prelude::*;
use qrcontent::{
    classify, is_web_url, normalize_url, present, split_segments, tokenize, ActionDescriptor,
    ClassifierConfig, ContentKind, DefaultLabels,
};

fn cfg() -> ClassifierConfig {
    ClassifierConfig::default()
}

#[test]
fn empty_and_whitespace_are_text() {
    for raw in ["", " ", "\t\n", "\u{3000}"] {
        let content = classify(raw, &cfg());
        assert_eq!(content.kind(), ContentKind::Text, "{raw:?}");
        assert_eq!(content.render(&DefaultLabels), raw);
    }
}

#[test]
fn bare_prefixes_degrade_gracefully() {
    for raw in ["mailto:", "smsto:", "geo:", "tel:", "market://", "MECARD:", "WIFI:"] {
        let view = present(&classify(raw, &cfg()), &DefaultLabels);
        assert_ne!(view.kind, ContentKind::Text, "{raw:?}");
        assert!(view.action.is_some() || view.action_error.is_some());
    }
    assert_eq!(
        classify("geo:", &cfg()).action(),
        Ok(ActionDescriptor::NoOp)
    );
}

#[test]
fn oversized_payload_is_total() {
    let raw = "x".repeat(4_500);
    assert_eq!(classify(&raw, &cfg()).kind(), ContentKind::Text);

    let long_mecard = format!("MECARD:N:{};;", "a".repeat(10_000));
    assert_eq!(classify(&long_mecard, &cfg()).kind(), ContentKind::Contact);
}

#[test]
fn payload_cap_skips_structured_parsing() {
    let capped = ClassifierConfig {
        max_payload_chars: Some(4_296),
        ..cfg()
    };
    let raw = format!("WIFI:S:{};;", "n".repeat(5_000));
    assert_eq!(classify(&raw, &capped).kind(), ContentKind::Text);
    assert_eq!(classify(&raw, &cfg()).kind(), ContentKind::Wifi);
}

#[test]
fn adversarial_url_like_input_is_fast() {
    let inputs = [
        format!("http://{}", "a.".repeat(100_000)),
        format!("{}!", "a".repeat(120_000)),
        format!("http://qrs.ly/{}", "-".repeat(100_000)),
        "a.".repeat(60_000) + " ",
        format!("https://{}@", "x:".repeat(50_000)),
    ];
    for raw in &inputs {
        let start = Instant::now();
        let content = classify(raw, &cfg());
        let elapsed = start.elapsed();
        assert!(
            elapsed < Duration::from_secs(2),
            "{} chars took {elapsed:?}",
            raw.len()
        );
        // Always some variant, always renderable.
        let _ = content.render(&DefaultLabels);
    }
}

#[test]
fn multibyte_text_near_prefixes() {
    for raw in ["t\u{e9}l:123", "g\u{e9}o:1,2", "\u{1f4f6}WIFI:S:x;;", "mailto\u{ff1a}a@b"] {
        assert_eq!(classify(raw, &cfg()).kind(), ContentKind::Text, "{raw:?}");
    }
    assert_eq!(
        classify("tel:\u{661}\u{662}\u{663}", &cfg()).render(&DefaultLabels),
        "\u{661}\u{662}\u{663}"
    );
}

#[test]
fn dangling_escape_is_swallowed() {
    assert_eq!(split_segments(r"N:abc;X:\"), vec!["N:abc".to_string()]);
    assert!(tokenize(r"\").is_empty());
}

#[test]
fn normalization_is_idempotent() {
    for raw in [
        "example.com",
        "http://example.com",
        "HTTPS://example.com",
        "ftp://example.com",
        "rtsp://cam.example.com/live",
        "",
        "http:",
    ] {
        let once = normalize_url(raw);
        assert_eq!(normalize_url(&once), once, "{raw:?}");
    }
}

// -- Generated inputs --

const PREFIXES: [&str; 12] = [
    "mailto:", "MAILTO:", "smsto:", "geo:", "tel:", "market://", "market://details?id=",
    "MECARD:", "WIFI:", "http://", "https://", "ftp://",
];

/// Bodies heavy in the characters the sub-parsers treat specially.
fn arb_body() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[A-Za-z0-9:;,.?=&%+@#/\\\\ -]{0,64}",
        "([A-Z]{1,5}:[^;]{0,8};){0,6};?",
    ]
}

fn arb_payload() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        (prop::sample::select(PREFIXES.to_vec()), arb_body())
            .prop_map(|(prefix, body)| format!("{prefix}{body}")),
    ]
}

fn lenient() -> ClassifierConfig {
    ClassifierConfig {
        accept_ftp_urls: true,
        ..cfg()
    }
}

proptest! {
    #[test]
    fn classify_and_present_are_total(raw in arb_payload()) {
        for config in [cfg(), lenient()] {
            let content = classify(&raw, &config);
            let view = present(&content, &DefaultLabels);
            prop_assert_eq!(view.kind, content.kind());
            prop_assert!(view.action.is_some() != view.action_error.is_some());
        }
    }

    #[test]
    fn classification_is_deterministic(raw in arb_payload()) {
        prop_assert_eq!(classify(&raw, &cfg()), classify(&raw, &cfg()));
    }

    #[test]
    fn normalize_url_is_idempotent(raw in arb_payload()) {
        let once = normalize_url(&raw);
        prop_assert_eq!(normalize_url(&once), once);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn url_matching_stays_linear_on_long_input(
        raw in "[a-z.:/@-]{10000,20000}",
        scheme in prop::sample::select(vec!["", "http://", "https://"]),
    ) {
        let raw = format!("{scheme}{raw}");
        let start = Instant::now();
        let _ = is_web_url(&raw, &cfg());
        let _ = classify(&raw, &cfg());
        let elapsed = start.elapsed();
        prop_assert!(
            elapsed < Duration::from_secs(1),
            "{} chars took {:?}",
            raw.len(),
            elapsed
        );
    }
}
