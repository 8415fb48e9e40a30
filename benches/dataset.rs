use criterion::Criterion;
use rand::SeedableRng;
use rand::rngs::StdRng;
use slum_detection::SlumDetection;
use slum_detection_test_util::{DatasetTree, random_tile};
use std::hint::black_box;

pub fn bench_dataset(c: &mut Criterion) {
    const COUNTS: [usize; 2] = [16, 128];

    let mut rng = StdRng::seed_from_u64(0);
    for &n in COUNTS.iter() {
        let tree = DatasetTree::new().unwrap();
        for i in 0..n {
            let city = if i % 2 == 0 { "bs_as" } else { "cordoba_capital" };
            let prefix = if i % 3 == 0 { "vya_" } else { "" };
            let tile = random_tile(&mut rng, 32, 32);
            tree.add_tile(format!("{city}/{prefix}{i:04}.tif"), &tile)
                .unwrap();
        }

        c.bench_function(format!("Build with features, {n} tiles").as_str(), |b| {
            b.iter(|| {
                SlumDetection::<f32>::builder(black_box(tree.root()))
                    .include_additional_features(true)
                    .build()
                    .unwrap()
            })
        });
        let dataset = SlumDetection::<f32>::builder(tree.root()).build().unwrap();
        c.bench_function(format!("Load all, {n} tiles").as_str(), |b| {
            b.iter(|| {
                for sample in dataset.iter() {
                    black_box(sample.unwrap());
                }
            })
        });
    }
}
