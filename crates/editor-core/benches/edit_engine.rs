use criterion::{black_box, criterion_group, criterion_main, Criterion};
use editor_core::{Caret, EditEngine, Position};
use rand::Rng;

fn bench_sequential_typing(c: &mut Criterion) {
    c.bench_function("type 2000 chars, single caret", |b| {
        b.iter(|| {
            let mut engine = EditEngine::new();
            for _ in 0..2000 {
                engine.insert_text("x");
            }
            black_box(engine.text().len());
        });
    });
}

fn bench_multi_caret_typing(c: &mut Criterion) {
    let mut text = String::new();
    for i in 0..500 {
        text.push_str(&format!("line {i}\n"));
    }

    c.bench_function("type 1 char across 500 carets", |b| {
        b.iter(|| {
            let mut engine = EditEngine::from_text(&text);
            let carets: Vec<_> = (0..500)
                .map(|i| Caret::at(Position::new(i, 4)))
                .collect();
            engine.set_carets(carets);
            engine.insert_text("!");
            black_box(engine.carets().len());
        });
    });
}

fn bench_random_access_in_large_document(c: &mut Criterion) {
    let mut text = String::new();
    for i in 0..20_000 {
        text.push_str(&format!("line {i}\n"));
    }
    let engine = EditEngine::from_text(&text);
    let mut rng = rand::thread_rng();

    c.bench_function("line_content random access, 20k lines", |b| {
        b.iter(|| {
            let line = rng.gen_range(0..20_000);
            black_box(engine.line_content(line).unwrap().len());
        });
    });
}

fn bench_undo_redo_churn(c: &mut Criterion) {
    c.bench_function("1000 undo/redo round trips", |b| {
        b.iter(|| {
            let mut engine = EditEngine::new();
            for _ in 0..1000 {
                engine.insert_text("x");
            }
            for _ in 0..1000 {
                engine.undo().unwrap();
            }
            for _ in 0..1000 {
                engine.redo().unwrap();
            }
            black_box(engine.text().len());
        });
    });
}

criterion_group!(
    benches,
    bench_sequential_typing,
    bench_multi_caret_typing,
    bench_random_access_in_large_document,
    bench_undo_redo_churn,
);
criterion_main!(benches);
