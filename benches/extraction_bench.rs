use criterion::{black_box, criterion_group, criterion_main, Criterion};
use citydir::{process_page, stitch_lines, FieldExtractor};

// Synthetic page built from typical directory lines, repeated to page size
fn synthetic_page(entries: usize) -> Vec<String> {
    let templates = [
        "Anderson John, lab, Northwestern Mills, r 2103",
        "Bryant av S",
        "Berg Olaf, carp, b 1710 Cedar av",
        "Acme Goods Co, 500 Main",
        "Mary Jones (wid Rasmus), r 415 Elm",
        "Lund Peter, student Uni- versity, b 1102 1th av S",
    ];
    templates.iter().cycle().take(entries).map(|s| s.to_string()).collect()
}

fn bench_stitching(c: &mut Criterion) {
    let lines = synthetic_page(600);
    c.bench_function("stitch_page_600_lines", |b| {
        b.iter(|| black_box(stitch_lines(black_box(&lines))))
    });
}

fn bench_extraction(c: &mut Criterion) {
    let extractor = FieldExtractor::new("Minneapolis 1900");
    let lines = synthetic_page(600);

    let mut group = c.benchmark_group("extraction");
    group.sample_size(20);
    group.bench_function("process_page_600_lines", |b| {
        b.iter(|| black_box(process_page(&extractor, black_box(&lines), 108)))
    });
    group.bench_function("parse_entry_single", |b| {
        b.iter(|| {
            black_box(extractor.parse_entry(
                black_box("Anderson John, lab, Northwestern Mills, r 2103 Bryant av S"),
                108,
            ))
        })
    });
    group.finish();
}

criterion_group!(benches, bench_stitching, bench_extraction);
criterion_main!(benches);
