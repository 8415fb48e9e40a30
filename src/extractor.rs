use crate::error::ConfigError;
use crate::evaluator::*;
use crate::feature::Feature;
use crate::features::UserFeatureCallbacks;

/// Ordered set of features evaluated together on each tile
///
/// All names are resolved when the extractor is built, so evaluation itself cannot fail.
#[derive(Clone, Debug)]
pub struct FeatureExtractor<T>
where
    T: Float,
{
    features: Vec<Feature<T>>,
}

impl<T> FeatureExtractor<T>
where
    T: Float,
{
    pub fn new(features: Vec<Feature<T>>) -> Self {
        Self { features }
    }

    /// Resolve every name with [Feature::resolve], failing on the first unresolvable one
    pub fn from_names<S: AsRef<str>>(
        names: &[S],
        callbacks: &UserFeatureCallbacks<T>,
    ) -> Result<Self, ConfigError> {
        let features = names
            .iter()
            .map(|name| Feature::resolve(name.as_ref(), callbacks))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(features))
    }

    /// Copy of the feature vector
    pub fn get_features(&self) -> Vec<Feature<T>> {
        self.features.clone()
    }

    pub fn get_names(&self) -> Vec<&str> {
        self.features.iter().map(|x| x.get_name()).collect()
    }

    pub fn get_descriptions(&self) -> Vec<&str> {
        self.features.iter().map(|x| x.get_description()).collect()
    }

    /// Number of values returned by [FeatureExtractor::eval]
    pub fn size_hint(&self) -> usize {
        self.features.len()
    }

    pub fn eval(&self, tile: &mut TileSample<T>) -> Vec<T> {
        self.features.iter().map(|x| x.eval(tile)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::ADDITIONAL_FEATURES;
    use crate::tests::*;

    use ndarray::ArrayView2;
    use std::sync::Arc;

    #[test]
    fn names_keep_requested_order() {
        let names = ["mean_RVI", "ASM", "contrast", "mean_RVI"];
        let fe = FeatureExtractor::<f64>::from_names(&names, &Default::default()).unwrap();
        assert_eq!(fe.get_names(), names);
        assert_eq!(fe.size_hint(), 4);
        assert_eq!(fe.get_descriptions().len(), 4);
    }

    #[test]
    fn unresolvable_name_fails() {
        let err = FeatureExtractor::<f64>::from_names(&["contrast", "lacunarity"], &Default::default())
            .unwrap_err();
        assert_eq!(err, ConfigError::UnresolvedFeature("lacunarity".into()));
    }

    #[test]
    fn callback_value_replaces_builtin() {
        let mut callbacks = UserFeatureCallbacks::<f64>::new();
        callbacks.insert(
            "contrast".into(),
            Arc::new(|image: ArrayView2<u8>| image.len() as f64),
        );
        let fe = FeatureExtractor::from_names(&["contrast", "homogeneity"], &callbacks).unwrap();
        let mut tile = TileSample::new(vertical_stripes()).unwrap();
        let actual = fe.eval(&mut tile);
        all_close(&actual, &[1024.0, 0.02], 1e-9);
    }

    #[test]
    fn all_default_features_of_flat_tile() {
        let fe = FeatureExtractor::<f32>::from_names(&ADDITIONAL_FEATURES, &Default::default())
            .unwrap();
        let mut tile = TileSample::new(flat_tile(2.0).mapv(|x| x as f32)).unwrap();
        let actual = fe.eval(&mut tile);
        assert_eq!(actual, vec![0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0]);
    }
}
