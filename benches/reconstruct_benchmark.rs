//! Benchmarks for the text reconstruction pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hantext::{NoiseFilter, ParagraphAccumulator, StructuralSplitter};

/// Synthetic OCR-like output: wrapped lines, noise characters, and head
/// markers scattered mid-line.
fn synthetic_page(repeats: usize) -> String {
    let chunk = "1. 신청 자격은 다음과 같으며|관련 서류를\n제출하여야 합니다. (가) 신분증 사본 (나) 주민등록 등본\n가. 추가로 필요한 경우 안내에 따라\n서류를 보완합니다.\n\n";
    chunk.repeat(repeats)
}

fn bench_noise_filter(c: &mut Criterion) {
    let filter = NoiseFilter::korean();
    let text = synthetic_page(50);

    c.bench_function("noise_clean_50_chunks", |b| {
        b.iter(|| filter.clean(black_box(&text)))
    });
}

fn bench_normalize(c: &mut Criterion) {
    let accumulator = ParagraphAccumulator::new();
    let text = synthetic_page(50);

    c.bench_function("normalize_50_chunks", |b| {
        b.iter(|| accumulator.normalize(black_box(&text)))
    });
}

fn bench_structural_split(c: &mut Criterion) {
    let splitter = StructuralSplitter::new();
    let accumulator = ParagraphAccumulator::new();
    let text = accumulator.normalize(&synthetic_page(50));

    c.bench_function("split_by_heads_50_chunks", |b| {
        b.iter(|| splitter.split_by_heads(black_box(&text)))
    });
}

criterion_group!(
    benches,
    bench_noise_filter,
    bench_normalize,
    bench_structural_split
);
criterion_main!(benches);
