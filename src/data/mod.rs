//! Data loading for feature matrices

pub mod csv;

pub use self::csv::FeatureMatrix;
