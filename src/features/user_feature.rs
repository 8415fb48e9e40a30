use crate::evaluator::*;

use ndarray::ArrayView2;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Scalar function of the digitized visible-light image
pub type UserFeatureFn<T> = Arc<dyn Fn(ArrayView2<'_, u8>) -> T + Send + Sync>;

/// User callbacks by feature name, they take priority over built-in features of the same name
pub type UserFeatureCallbacks<T> = BTreeMap<String, UserFeatureFn<T>>;

macro_const! {
    const DOC: &str = r"
User-defined feature

Calls a user-supplied function with the digitized grayscale image of the tile, the same image
texture features are computed from, and uses its return value as the feature value.

- Depends on: **red**, **green**, **blue**
- Number of features: **1**
";
}

#[doc = DOC!()]
#[derive(Clone)]
pub struct UserFeature<T> {
    name: String,
    callback: UserFeatureFn<T>,
}

impl<T> UserFeature<T>
where
    T: Float,
{
    pub fn new(name: impl Into<String>, callback: UserFeatureFn<T>) -> Self {
        Self {
            name: name.into(),
            callback,
        }
    }

    pub fn from_fn<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(ArrayView2<'_, u8>) -> T + Send + Sync + 'static,
    {
        Self::new(name, Arc::new(f))
    }

    pub const fn doc() -> &'static str {
        DOC
    }
}

impl<T> fmt::Debug for UserFeature<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserFeature")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<T> FeatureNamesDescriptionsTrait for UserFeature<T> {
    fn get_name(&self) -> &str {
        &self.name
    }

    fn get_description(&self) -> &str {
        "user-defined feature of the digitized grayscale image"
    }
}

impl<T> FeatureEvaluator<T> for UserFeature<T>
where
    T: Float,
{
    fn eval(&self, tile: &mut TileSample<T>) -> T {
        (self.callback)(tile.get_digitized())
    }
}
