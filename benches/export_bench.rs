use criterion::{Criterion, criterion_group, criterion_main};
use grapher_rs::api::Chart;
use grapher_rs::core::{Column, DataTable, Role};
use grapher_rs::render::{EmbedRenderer, IframeRenderer};
use std::hint::black_box;

const ENTITIES: [&str; 4] = ["Chile", "Peru", "Kenya", "Norway"];

fn panel_table(years: i64) -> DataTable {
    let rows = years as usize * ENTITIES.len();
    DataTable::new([
        Column::new("year", (0..rows).map(|i| 1000 + (i / ENTITIES.len()) as i64)),
        Column::new("value", (0..rows).map(|i| (i as f64 * 0.37).sin() * 100.0)),
        Column::new("entity", (0..rows).map(|i| ENTITIES[i % ENTITIES.len()])),
    ])
    .expect("valid generated table")
}

fn bench_export_line_10k(c: &mut Criterion) {
    let table = panel_table(2_500);
    let chart = Chart::new(&table)
        .mark_line()
        .encode([(Role::X, "year"), (Role::Y, "value"), (Role::Color, "entity")]);

    c.bench_function("export_line_10k", |b| {
        b.iter(|| {
            let document = chart.export().expect("export");
            black_box(document.data.len());
        })
    });
}

fn bench_iframe_embed_10k(c: &mut Criterion) {
    let table = panel_table(2_500);
    let document = Chart::new(&table)
        .mark_line()
        .encode([(Role::X, "year"), (Role::Y, "value"), (Role::Color, "entity")])
        .export()
        .expect("export");

    c.bench_function("iframe_embed_10k", |b| {
        b.iter(|| {
            let html = IframeRenderer::default()
                .render(black_box(&document))
                .expect("render");
            black_box(html.len());
        })
    });
}

criterion_group!(benches, bench_export_line_10k, bench_iframe_embed_10k);
criterion_main!(benches);
