//! Benchmarks for project gallery filtering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use portfolio::catalog::{self, ProjectCategory, TechCategory};
use portfolio::state::{filter_projects, Facet, FilterSelection, ProjectGallery};

fn bench_filter_unrestricted(c: &mut Criterion) {
    let projects = catalog::projects();
    let selection = FilterSelection::default();
    c.bench_function("filter_projects_all_all", |b| {
        b.iter(|| filter_projects(black_box(&projects), black_box(&selection)))
    });
}

fn bench_filter_both_facets(c: &mut Criterion) {
    let projects = catalog::projects();
    let selection = FilterSelection {
        category: Facet::Only(ProjectCategory::WebDevelopment),
        tech: Facet::Only(TechCategory::Database),
    };
    c.bench_function("filter_projects_both_facets", |b| {
        b.iter(|| filter_projects(black_box(&projects), black_box(&selection)))
    });
}

fn bench_every_selection(c: &mut Criterion) {
    let gallery = ProjectGallery::new(catalog::projects());
    let categories = ProjectGallery::category_options();
    let techs = ProjectGallery::tech_options();
    c.bench_function("filter_projects_every_selection", |b| {
        b.iter(|| {
            let mut visible = 0;
            for category in &categories {
                for tech in &techs {
                    let selection = FilterSelection {
                        category: *category,
                        tech: *tech,
                    };
                    visible += filter_projects(gallery.projects(), black_box(&selection)).len();
                }
            }
            visible
        })
    });
}

criterion_group!(
    benches,
    bench_filter_unrestricted,
    bench_filter_both_facets,
    bench_every_selection
);
criterion_main!(benches);
