//! Classification from many threads with one shared config and label set.

use std::sync::Arc;
use std::thread;

use qrcontent::{
    classify, classify_batch, present, ClassifierConfig, ContentKind, LabelCatalog,
    LabelProvider,
};

#[test]
fn concurrent_classify_shared_labels() {
    let config = Arc::new(ClassifierConfig::default());
    let labels: Arc<dyn LabelProvider> = Arc::new(
        LabelCatalog::from_names([("title.geo", "Ort")]).expect("known key"),
    );

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let config = Arc::clone(&config);
            let labels = Arc::clone(&labels);
            thread::spawn(move || {
                let raw = format!("geo:{i},{i}");
                present(&classify(&raw, &config), labels.as_ref())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let view = handle.join().unwrap();
        assert_eq!(view.kind, ContentKind::Geo, "thread {i}");
        assert_eq!(view.title, "Ort");
    }
}

#[test]
fn batch_preserves_order() {
    let raw: Vec<String> = (0..1_000)
        .map(|i| match i % 3 {
            0 => format!("tel:{i}"),
            1 => format!("host{i}.example.com"),
            _ => format!("note {i}"),
        })
        .collect();
    let results = classify_batch(&raw, &ClassifierConfig::default());
    assert_eq!(results.len(), raw.len());
    for (i, content) in results.iter().enumerate() {
        let expected = match i % 3 {
            0 => ContentKind::Phone,
            1 => ContentKind::Url,
            _ => ContentKind::Text,
        };
        assert_eq!(content.kind(), expected, "index {i}");
    }
}

#[test]
fn batch_matches_sequential() {
    let cfg = ClassifierConfig::default();
    let raw: Vec<String> = ["mailto:x@y.z", "WIFI:S:n;;", "", "geo:bad"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let sequential: Vec<_> = raw.iter().map(|s| classify(s, &cfg)).collect();
    assert_eq!(classify_batch(&raw, &cfg), sequential);
}
