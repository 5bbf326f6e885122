pub mod classifier;
pub mod estimator;
pub mod selector;
pub mod serializer;
