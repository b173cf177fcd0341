//! Metric identifiers and evaluation snapshots

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Metrics reported for a binary classifier
///
/// Declaration order is report order; `Ord` derives from it, so a
/// `BTreeMap` keyed by `Metric` iterates in the order the report prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Metric {
    Accuracy,
    Precision,
    Recall,
    F1,
    RocAuc,
}

impl Metric {
    /// All metrics in report order
    pub const ALL: [Metric; 5] = [
        Metric::Accuracy,
        Metric::Precision,
        Metric::Recall,
        Metric::F1,
        Metric::RocAuc,
    ];

    /// Snapshot key for this metric
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Accuracy => "Accuracy",
            Metric::Precision => "Precision",
            Metric::Recall => "Recall",
            Metric::F1 => "F1",
            Metric::RocAuc => "ROCAUC",
        }
    }

    /// Label used for this metric's line in the printed report
    pub fn label(&self) -> &'static str {
        match self {
            Metric::RocAuc => "ROC AUC",
            other => other.name(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scores captured by one evaluation run
///
/// An ordered metric-to-score mapping. Evaluation fills in all five
/// metrics; hand-built snapshots may hold a subset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    scores: BTreeMap<Metric, f64>,
}

impl MetricSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        MetricSnapshot {
            scores: BTreeMap::new(),
        }
    }

    /// Record a score for a metric
    pub fn insert(&mut self, metric: Metric, value: f64) {
        self.scores.insert(metric, value);
    }

    /// Get the score recorded for a metric
    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.scores.get(&metric).copied()
    }

    /// Iterate over (metric, score) pairs in report order
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        self.scores.iter().map(|(metric, value)| (*metric, *value))
    }

    /// Iterate over the recorded metrics in report order
    pub fn metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        self.scores.keys().copied()
    }

    /// Number of recorded metrics
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the snapshot holds no scores
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Serialize the snapshot to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a snapshot from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_follows_report_order() {
        let mut snapshot = MetricSnapshot::new();
        // Insert out of order on purpose
        snapshot.insert(Metric::RocAuc, 0.9);
        snapshot.insert(Metric::Accuracy, 0.8);
        snapshot.insert(Metric::F1, 0.7);

        let order: Vec<Metric> = snapshot.metrics().collect();
        assert_eq!(order, vec![Metric::Accuracy, Metric::F1, Metric::RocAuc]);
    }

    #[test]
    fn test_get_and_len() {
        let mut snapshot = MetricSnapshot::new();
        assert!(snapshot.is_empty());

        snapshot.insert(Metric::Precision, 0.5);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get(Metric::Precision), Some(0.5));
        assert_eq!(snapshot.get(Metric::Recall), None);
    }

    #[test]
    fn test_metric_names() {
        assert_eq!(Metric::RocAuc.name(), "ROCAUC");
        assert_eq!(Metric::RocAuc.label(), "ROC AUC");
        assert_eq!(Metric::F1.name(), "F1");
        assert_eq!(Metric::Accuracy.to_string(), "Accuracy");
    }

    #[test]
    fn test_json_round_trip() {
        let mut snapshot = MetricSnapshot::new();
        snapshot.insert(Metric::Accuracy, 0.75);
        snapshot.insert(Metric::RocAuc, 0.5);

        let json = snapshot.to_json().unwrap();
        let restored = MetricSnapshot::from_json(&json).unwrap();
        assert_eq!(restored, snapshot);
    }
}
