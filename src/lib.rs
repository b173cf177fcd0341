//! Binary classification evaluation for Rust
//!
//! Computes accuracy, precision, recall, F1, and ROC AUC from true labels
//! and either hard 0/1 predictions or a fitted classifier, prints each
//! metric in a fixed report format, and compares metric snapshots from two
//! evaluation runs.

pub mod error;
pub mod evaluation;
pub mod metrics;
pub mod model;

// Re-export the main evaluation surface
pub use error::{Error, Result};
pub use evaluation::{compare, evaluate, evaluate_model, Metric, MetricSnapshot};
pub use model::BinaryClassifier;
