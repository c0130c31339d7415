//! Audience segmentation by keyword matching.

use crate::phrases;

/// A short audience segment label.
pub type Segment = String;

/// Derive audience segment labels from the audience and niche text.
///
/// Both strings are lower-cased and searched for the keywords of each rule in
/// the phrase library, in rule order. Every matching rule contributes its
/// labels; duplicates are skipped so the result reads as an ordered set. When
/// nothing matches, the fallback segments are returned, so the result is
/// never empty.
pub fn derive_audience_segments(audience: &str, niche: &str) -> Vec<Segment> {
    let haystack = format!("{audience} {niche}").to_lowercase();
    let segments = &phrases::library().segments;

    let mut out: Vec<Segment> = Vec::new();
    for rule in &segments.rules {
        if !rule.keywords.iter().any(|k| haystack.contains(k.as_str())) {
            continue;
        }
        for label in &rule.labels {
            if !out.contains(label) {
                out.push(label.clone());
            }
        }
    }

    if out.is_empty() {
        tracing::debug!("no audience keywords matched, using fallback segments");
        return segments.fallback.clone();
    }
    out
}
