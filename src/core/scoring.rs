use crate::core::keywords::keywords;
use crate::models::{Item, MatchWeights};

/// Minimum score a candidate must strictly exceed to count as a good match.
pub const GOOD_MATCH_THRESHOLD: u8 = 50;

/// Credit fraction for substring (rather than exact) text matches.
const PARTIAL_CREDIT: f64 = 0.5;

/// Date proximity bands: (max whole days apart, fraction of the date weight).
/// Checked in ascending order; the first band that fits wins.
const DATE_BANDS: [(i64, f64); 4] = [(1, 1.0), (3, 0.75), (7, 0.5), (14, 0.25)];

/// Calculate a match score (0-100) between a reference item and a candidate
/// from the opposite collection.
///
/// Weighted additive heuristic with a hard gate:
/// ```text
/// category   30   gate: differing or missing categories score 0 outright
/// location   20   exact (case-insensitive), 10 for containment
/// date       20 / 15 / 10 / 5   <=1 / <=3 / <=7 / <=14 days apart
/// keywords   up to 30, from shared description words of >=4 chars
/// name       +10 exact, +5 containment
/// color      +5 when both given and compatible
/// brand      +5 when both given and compatible
/// ```
/// Bonuses can push the raw sum past 100; the result is rounded, then
/// clamped to 100 rather than renormalized. Pure, and symmetric for
/// duplicate-free descriptions; a repeated keyword counts per occurrence
/// on the reference side, so swapping the arguments can move the overlap
/// component.
pub fn match_score(reference: &Item, candidate: &Item, weights: &MatchWeights) -> u8 {
    // Category gate: no partial credit across categories.
    match (reference.category, candidate.category) {
        (Some(a), Some(b)) if a == b => {}
        _ => return 0,
    }

    let score = weights.category
        + text_similarity_score(&reference.location, &candidate.location, weights.location)
        + date_proximity_score(reference.event_date(), candidate.event_date(), weights.date)
        + keyword_overlap_score(
            &reference.description,
            &candidate.description,
            weights.description,
        )
        + text_similarity_score(&reference.item_name, &candidate.item_name, weights.name)
        + attribute_bonus(
            reference.color.as_deref(),
            candidate.color.as_deref(),
            weights.color,
        )
        + attribute_bonus(
            reference.brand.as_deref(),
            candidate.brand.as_deref(),
            weights.brand,
        );

    score.round().min(100.0) as u8
}

/// Case-insensitive text comparison: the full weight for an exact match,
/// half for containment either direction, zero otherwise or when a side
/// is empty.
#[inline]
fn text_similarity_score(a: &str, b: &str, weight: f64) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a == b {
        weight
    } else if a.contains(&b) || b.contains(&a) {
        weight * PARTIAL_CREDIT
    } else {
        0.0
    }
}

/// Score how close two items sit on the lost/found time axis, in whole days.
#[inline]
fn date_proximity_score(
    a: Option<chrono::DateTime<chrono::Utc>>,
    b: Option<chrono::DateTime<chrono::Utc>>,
    weight: f64,
) -> f64 {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => return 0.0,
    };

    let days_apart = (a - b).num_days().abs();
    for (max_days, fraction) in DATE_BANDS {
        if days_apart <= max_days {
            return weight * fraction;
        }
    }
    0.0
}

/// Keyword overlap between the two descriptions as a share of the larger
/// token list, scaled into the description weight.
///
/// Token lists are compared as-is: a word repeated in the reference counts
/// once per occurrence, making the ratio directional when words repeat.
/// Long-standing platform behavior, kept for score compatibility.
#[inline]
fn keyword_overlap_score(a: &str, b: &str, weight: f64) -> f64 {
    let tokens_a = keywords(a);
    let tokens_b = keywords(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let shared = tokens_a.iter().filter(|t| tokens_b.contains(t)).count();
    let similarity = shared as f64 / tokens_a.len().max(tokens_b.len()) as f64 * 100.0;
    (similarity * (weight / 100.0)).min(weight)
}

/// Color/brand bonus: the full weight when both items specify the attribute
/// and the values match exactly or by containment.
#[inline]
fn attribute_bonus(a: Option<&str>, b: Option<&str>, weight: f64) -> f64 {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => (a, b),
        _ => return 0.0,
    };

    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a == b || a.contains(&b) || b.contains(&a) {
        weight
    } else {
        0.0
    }
}
