use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use tipsheet_terminal::catalog::Catalog;
use tipsheet_terminal::navigator::Navigator;
use tipsheet_terminal::registry::ViewRegistry;
use tipsheet_terminal::render::Renderer;

const CATALOG_JSON: &str = include_str!("../data/catalog.json");

fn bench_catalog_parse(c: &mut Criterion) {
    c.bench_function("catalog_parse", |b| {
        b.iter(|| {
            let catalog = Catalog::from_json_str(black_box(CATALOG_JSON)).unwrap();
            black_box(catalog.tips("free").len());
        })
    });
}

fn bench_render_views(c: &mut Criterion) {
    let registry = ViewRegistry::standard();
    let catalog = Catalog::builtin().unwrap();
    let renderer = Renderer::new(&registry, catalog);
    c.bench_function("render_all_views", |b| {
        b.iter(|| {
            for view in registry.all() {
                let text = renderer.render(black_box(view.key), true);
                black_box(text.lines.len());
            }
            black_box(renderer.menu(false, "home").len());
        })
    });
}

fn bench_navigation_cycle(c: &mut Criterion) {
    c.bench_function("navigation_cycle", |b| {
        b.iter(|| {
            let mut nav = Navigator::new(ViewRegistry::standard());
            nav.request_navigate(black_box("ultimate"));
            nav.submit_credential(black_box("0000"));
            nav.submit_credential(black_box("12400"));
            nav.request_navigate(black_box("btts"));
            nav.request_navigate(black_box("missing"));
            black_box(nav.current_view());
        })
    });
}

criterion_group!(
    benches,
    bench_catalog_parse,
    bench_render_views,
    bench_navigation_cycle
);
criterion_main!(benches);
