//! Evaluation reports and snapshot comparison
//!
//! `evaluate` and `evaluate_model` score a set of predictions, print the
//! metric report, and return a [`MetricSnapshot`]; `compare` prints how each
//! metric moved between two snapshots.

pub mod report;
pub mod snapshot;

pub use report::{compare, deltas, evaluate, evaluate_model, format_comparison, format_report};
pub use snapshot::{Metric, MetricSnapshot};
