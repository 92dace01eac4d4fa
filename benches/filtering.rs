// benches/filtering.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use provider_directory::{
    apply_filters, derive_areas, derive_specialties,
    model::{Category, Provider},
    Selection,
};

const AREAS: [&str; 8] = ["المعادي", "الجيزة", "الدقي", "مدينة نصر", "Heliopolis", "Zamalek", "شبرا", "Maadi"];
const SPECIALTIES: [&str; 6] = ["باطنة", "أسنان", "عيون", "Cardiology", "Pediatrics", "جراحة عامة"];

// Synthetic directory; the bundled sample files are too small to time.
fn synthetic(n: usize) -> Vec<Provider> {
    (0..n)
        .map(|i| Provider {
            name: format!("Provider {i} مركز"),
            category: Category::ALL[i % Category::ALL.len()],
            specialty: (i % 7 != 0).then(|| SPECIALTIES[i % SPECIALTIES.len()].to_string()),
            area: AREAS[i % AREAS.len()].to_string(),
            address: None,
            phone: format!("0100{i:07}"),
        })
        .collect()
}

fn bench_filters(c: &mut Criterion) {
    let providers = synthetic(20_000);

    let everything = Selection::new();
    let narrow = Selection::new()
        .with_category(Category::Clinics)
        .with_area("الجيزة")
        .with_query("provider 1");

    c.bench_function("apply_filters_empty", |b| {
        b.iter(|| black_box(apply_filters(black_box(&providers), &everything).len()))
    });

    c.bench_function("apply_filters_narrow", |b| {
        b.iter(|| black_box(apply_filters(black_box(&providers), &narrow).len()))
    });

    c.bench_function("derive_areas", |b| {
        b.iter(|| black_box(derive_areas(black_box(&providers)).len()))
    });

    c.bench_function("derive_specialties_all", |b| {
        b.iter(|| black_box(derive_specialties(black_box(&providers), None).len()))
    });
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
