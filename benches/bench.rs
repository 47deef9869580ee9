// Criterion benchmarks for the Campus Finder matching service

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use finder_match::core::{keywords::keywords, match_score, rank_candidates};
use finder_match::models::{Category, Item, ItemStatus, MatchWeights};

fn base_date() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap()
}

fn create_candidate(id: usize) -> Item {
    let categories = [
        Category::Electronics,
        Category::Clothing,
        Category::Books,
        Category::Accessories,
        Category::Documents,
        Category::Other,
    ];
    let locations = [
        "Library 3rd Floor",
        "Student Center",
        "Engineering Building",
        "Dining Hall",
        "Gym Locker Room",
    ];
    let descriptions = [
        "black dell laptop with stickers on the lid",
        "navy jansport backpack with water bottle pocket",
        "silver hydro flask with dents near the base",
        "brown leather wallet containing student card",
        "white wireless headphones in a charging case",
    ];

    Item {
        id: format!("found_{}", id),
        owner_id: format!("user_{}", id % 40),
        item_name: format!("Item {}", id),
        category: Some(categories[id % categories.len()]),
        description: descriptions[id % descriptions.len()].to_string(),
        location: locations[id % locations.len()].to_string(),
        date_lost: None,
        date_found: Some(base_date() + Duration::days((id % 20) as i64)),
        color: if id % 2 == 0 {
            Some("black".to_string())
        } else {
            None
        },
        brand: None,
        status: ItemStatus::Available,
        created_at: Some(base_date() + Duration::days((id % 20) as i64)),
    }
}

fn create_reference() -> Item {
    Item {
        id: "lost_1".to_string(),
        owner_id: "user_1".to_string(),
        item_name: "Dell Laptop".to_string(),
        category: Some(Category::Electronics),
        description: "black dell laptop with stickers on the lid".to_string(),
        location: "Library 3rd Floor".to_string(),
        date_lost: Some(base_date() + Duration::days(5)),
        date_found: None,
        color: Some("black".to_string()),
        brand: Some("Dell".to_string()),
        status: ItemStatus::Active,
        created_at: Some(base_date() + Duration::days(5)),
    }
}

fn bench_keyword_extraction(c: &mut Criterion) {
    c.bench_function("keyword_extraction", |b| {
        b.iter(|| {
            keywords(black_box(
                "Black Dell XPS 13 laptop with several stickers on the lid",
            ))
        });
    });
}

fn bench_match_score(c: &mut Criterion) {
    let weights = MatchWeights::default();
    let reference = create_reference();
    let candidate = create_candidate(0);

    c.bench_function("match_score", |b| {
        b.iter(|| {
            match_score(
                black_box(&reference),
                black_box(&candidate),
                black_box(&weights),
            )
        });
    });
}

fn bench_ranking(c: &mut Criterion) {
    let weights = MatchWeights::default();
    let reference = create_reference();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Item> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("rank_candidates", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    rank_candidates(
                        black_box(&reference),
                        black_box(candidates.clone()),
                        black_box(&weights),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_keyword_extraction,
    bench_match_score,
    bench_ranking
);

criterion_main!(benches);
