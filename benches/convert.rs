use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use rakamla::{convert_with, Lexicon};

static INPUTS: &[(&str, &str)] = &[
    ("plain", "bugün hava çok güzel"),
    ("short", "yirmi beş"),
    ("suffixed", "yirmi beşte görüşürüz"),
    ("fused", "yirmibeş kişi yüzelli lira"),
    ("long", "saat on birde bir milyon iki yüz bin lira ödedik"),
];

fn bench_convert(c: &mut Criterion) {
    let lexicon = Lexicon::global();
    let mut group = c.benchmark_group("convert");
    for &(label, text) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, text.len()), &text, |b, &text| {
            b.iter(|| convert_with(lexicon, text));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
