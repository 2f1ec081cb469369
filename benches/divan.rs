use std::time::Duration;

use chrono::{TimeZone, Utc};
use inference_hub::client::simulated::Report;
use inference_hub::path::{CanonicalPath, normalize};

fn main() {
    divan::main();
}

const PATHS: &[&str] = &[
    r"D:\raffay_fyp\video_input\00002.mp4",
    r"c:\Users\me\Videos\clip.mp4",
    "/mnt/d/already/linux/path.mp4",
    "just some free text to analyze",
];

#[divan::bench]
fn normalize_mixed() {
    for path in PATHS {
        divan::black_box(normalize(divan::black_box(path)));
    }
}

#[divan::bench]
fn canonical_path() {
    for path in PATHS {
        divan::black_box(CanonicalPath::new(divan::black_box(path)));
    }
}

#[divan::bench(args = [1, 16, 256])]
fn render_report(words: usize) {
    let input = vec!["frame"; words].join(" ");
    let report = Report {
        input: &input,
        elapsed: Duration::from_millis(2000),
        confidence: 91.4,
        at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
    };
    // a simple sanity check
    assert_eq!(report.word_count(), words);
    divan::black_box(report.to_string());
}
