#[macro_use]
extern crate criterion;
extern crate julia_orbits;

use criterion::Criterion;
use julia_orbits::presets;
use julia_orbits::{compute_escape_field, compute_escape_field_threaded, trace_orbit};

fn escape_field(c: &mut Criterion) {
    let params = presets::find("Dendrite Spiral").unwrap().parameters(200, 200).unwrap();
    c.bench_function("dendrite spiral 200x200", move |b| b.iter(|| compute_escape_field(&params)));
}

fn escape_field_threaded(c: &mut Criterion) {
    let params = presets::find("Dendrite Spiral").unwrap().parameters(200, 200).unwrap();
    c.bench_function("dendrite spiral 200x200, 4 threads", move |b| {
        b.iter(|| compute_escape_field_threaded(&params, 4))
    });
}

fn orbit(c: &mut Criterion) {
    let params = presets::find("Petal Loops").unwrap().parameters(600, 600).unwrap();
    c.bench_function("petal loops orbit", move |b| b.iter(|| trace_orbit(&params)));
}

criterion_group!(benches, escape_field, escape_field_threaded, orbit);
criterion_main!(benches);
