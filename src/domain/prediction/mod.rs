//! Prediction domain module.
//!
//! Pure assembly of the numeric feature vectors each predictor expects.

mod features;

pub use features::{
    crop_features, fertilizer_features, FeatureError, FeatureVector, CROP_FEATURE_COUNT,
    FERTILIZER_FEATURE_COUNT,
};
