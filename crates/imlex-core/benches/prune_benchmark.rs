use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use imlex_core::{scan_for_duplicates, PruneConfig};

/// Deterministic synthetic corpus; every tenth sentence is a
/// near-duplicate of its predecessor.
fn synthetic_rows(n: usize) -> Vec<(i64, String)> {
    let words = [
        "the", "cat", "sat", "on", "mat", "dog", "ran", "home", "fast", "slow", "bird", "sang",
    ];
    let mut rows: Vec<(i64, String)> = Vec::with_capacity(n);
    let mut state = 0x2545_F491_4F6C_DD1Du64;
    for i in 0..n {
        if i % 10 == 9 {
            let near_dup = format!("{}s", rows[i - 1].1);
            rows.push((i as i64 + 1, near_dup));
            continue;
        }
        let mut sentence = String::new();
        for _ in 0..6 {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let word = words[(state >> 33) as usize % words.len()];
            if !sentence.is_empty() {
                sentence.push(' ');
            }
            sentence.push_str(word);
        }
        rows.push((i as i64 + 1, sentence));
    }
    rows
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_for_duplicates");
    for size in [1_000usize, 10_000] {
        let rows = synthetic_rows(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter(|| scan_for_duplicates(rows.clone(), &PruneConfig::default()).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
