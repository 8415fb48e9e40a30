use criterion::Criterion;
use rand::SeedableRng;
use rand::rngs::StdRng;
use slum_detection::*;
use slum_detection_test_util::random_tile;
use std::hint::black_box;

pub fn bench_texture(c: &mut Criterion) {
    const SIZES: [usize; 3] = [32, 64, 256];

    let mut rng = StdRng::seed_from_u64(0);
    let extractor =
        FeatureExtractor::from_names(&ADDITIONAL_FEATURES, &UserFeatureCallbacks::new()).unwrap();

    for &size in SIZES.iter() {
        let tile = random_tile(&mut rng, size, size);
        let digitized = digitized_rgb(tile.view());

        c.bench_function(format!("GLCM {size}x{size}").as_str(), |b| {
            b.iter(|| Glcm::<f32>::from_image(black_box(digitized.view())))
        });
        c.bench_function(format!("All features {size}x{size}").as_str(), |b| {
            b.iter(|| {
                let mut sample = TileSample::new(black_box(tile.clone())).unwrap();
                extractor.eval(&mut sample)
            })
        });
    }
}

