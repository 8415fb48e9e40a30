use criterion::{criterion_group, criterion_main};

mod dataset;
mod texture;

criterion_group!(benches_texture, texture::bench_texture);
criterion_group!(benches_dataset, dataset::bench_dataset);
criterion_main!(benches_texture, benches_dataset);
