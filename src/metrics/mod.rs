//! Model evaluation metrics
//!
//! Provides the scalar metric functions used to score binary classifiers.

pub mod classification;

pub use classification::{
    accuracy_score, f1_score, precision_score, recall_score, roc_auc_score,
};
