//! Metric report computation and snapshot comparison

use log::debug;

use crate::error::{Error, Result};
use crate::metrics::classification::{
    accuracy_score, f1_score, precision_score, recall_score, roc_auc_score,
};
use crate::model::BinaryClassifier;

use super::snapshot::{Metric, MetricSnapshot};

/// Width of the metric-name field in comparison lines
const COMPARISON_NAME_WIDTH: usize = 15;

/// Convert 0/1 values to bool labels, rejecting anything else
fn binary_labels(values: &[u8], what: &str) -> Result<Vec<bool>> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| match v {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(Error::InvalidValue(format!(
                "{} must be 0 or 1, found {} at index {}",
                what, other, i
            ))),
        })
        .collect()
}

/// Extract the positive-class probability column (column 1)
fn positive_class_scores(proba: &[Vec<f64>]) -> Result<Vec<f64>> {
    proba
        .iter()
        .enumerate()
        .map(|(i, row)| {
            if row.len() < 2 {
                return Err(Error::DimensionMismatch(format!(
                    "Probability row {} has {} columns, expected at least 2",
                    i,
                    row.len()
                )));
            }
            Ok(row[1])
        })
        .collect()
}

/// Compute all five metrics: hard labels for the threshold metrics, scores
/// for ROC AUC
fn compute_snapshot(y_true: &[bool], y_pred: &[bool], y_score: &[f64]) -> Result<MetricSnapshot> {
    let mut snapshot = MetricSnapshot::new();
    snapshot.insert(Metric::Accuracy, accuracy_score(y_true, y_pred)?);
    snapshot.insert(Metric::Precision, precision_score(y_true, y_pred)?);
    snapshot.insert(Metric::Recall, recall_score(y_true, y_pred)?);
    snapshot.insert(Metric::F1, f1_score(y_true, y_pred)?);
    snapshot.insert(Metric::RocAuc, roc_auc_score(y_true, y_score)?);

    debug!(
        "computed {} classification metrics over {} samples",
        snapshot.len(),
        y_true.len()
    );
    Ok(snapshot)
}

/// Format one report line per metric, in report order
pub fn format_report(snapshot: &MetricSnapshot) -> String {
    let mut out = String::new();
    for (metric, value) in snapshot.iter() {
        out.push_str(&format!("{}: {:.2}\n", metric.label(), value));
    }
    out
}

/// Evaluate hard 0/1 predictions against true labels
///
/// Prints each metric at two-decimal precision in the order Accuracy,
/// Precision, Recall, F1, ROC AUC, and returns the snapshot. ROC AUC is
/// computed over the 0/1 predictions treated as scores.
///
/// # Arguments
/// * `y_true` - True labels (0 or 1)
/// * `y_pred` - Predicted labels (0 or 1), aligned index-wise with `y_true`
pub fn evaluate(y_true: &[u8], y_pred: &[u8]) -> Result<MetricSnapshot> {
    let truth = binary_labels(y_true, "true labels")?;
    let predictions = binary_labels(y_pred, "predicted labels")?;
    let scores: Vec<f64> = predictions
        .iter()
        .map(|&p| if p { 1.0 } else { 0.0 })
        .collect();

    let snapshot = compute_snapshot(&truth, &predictions, &scores)?;
    print!("{}", format_report(&snapshot));
    Ok(snapshot)
}

/// Evaluate a fitted classifier on a feature matrix
///
/// Predicts labels and class probabilities from `x`, then reports the
/// same metrics as [`evaluate`], using the positive-class probability
/// column for ROC AUC.
///
/// # Arguments
/// * `model` - Fitted classifier
/// * `x` - Feature rows, aligned index-wise with `y_true`
/// * `y_true` - True labels (0 or 1)
pub fn evaluate_model<M>(model: &M, x: &[Vec<f64>], y_true: &[u8]) -> Result<MetricSnapshot>
where
    M: BinaryClassifier + ?Sized,
{
    let truth = binary_labels(y_true, "true labels")?;
    let predicted = model.predict(x)?;
    let predictions = binary_labels(&predicted, "predicted labels")?;

    let proba = model.predict_proba(x)?;
    if proba.len() != truth.len() {
        return Err(Error::DimensionMismatch(format!(
            "Length mismatch between true labels and probability rows: {} vs {}",
            truth.len(),
            proba.len()
        )));
    }
    let scores = positive_class_scores(&proba)?;

    let snapshot = compute_snapshot(&truth, &predictions, &scores)?;
    print!("{}", format_report(&snapshot));
    Ok(snapshot)
}

/// Signed per-metric deltas, second snapshot minus first
///
/// Iterates in the first snapshot's order; fails with a missing-key error
/// when the second snapshot lacks one of its metrics.
pub fn deltas(before: &MetricSnapshot, after: &MetricSnapshot) -> Result<Vec<(Metric, f64)>> {
    before
        .iter()
        .map(|(metric, old)| {
            let new = after
                .get(metric)
                .ok_or_else(|| Error::KeyNotFound(metric.name().to_string()))?;
            Ok((metric, new - old))
        })
        .collect()
}

/// Format the comparison lines between two snapshots
pub fn format_comparison(before: &MetricSnapshot, after: &MetricSnapshot) -> Result<String> {
    let mut out = String::new();
    for (metric, delta) in deltas(before, after)? {
        // An exact zero delta can come out as -0.0; keep the printed sign "+"
        let delta = if delta == 0.0 { 0.0 } else { delta };
        out.push_str(&format!(
            "{:<width$} {:+.2}\n",
            metric.name(),
            delta,
            width = COMPARISON_NAME_WIDTH
        ));
    }
    Ok(out)
}

/// Print how each metric moved between two evaluation runs
///
/// Each line holds the metric key left-justified in a fixed-width field
/// followed by the signed delta at two-decimal precision, with an explicit
/// leading `+` for non-negative deltas.
pub fn compare(before: &MetricSnapshot, after: &MetricSnapshot) -> Result<()> {
    let report = format_comparison(before, after)?;
    debug!("compared {} metrics", before.len());
    print!("{}", report);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(pairs: &[(Metric, f64)]) -> MetricSnapshot {
        let mut snapshot = MetricSnapshot::new();
        for &(metric, value) in pairs {
            snapshot.insert(metric, value);
        }
        snapshot
    }

    #[test]
    fn test_format_report_two_decimals() {
        let snapshot = snapshot(&[(Metric::Accuracy, 0.5), (Metric::RocAuc, 1.0)]);
        assert_eq!(format_report(&snapshot), "Accuracy: 0.50\nROC AUC: 1.00\n");
    }

    #[test]
    fn test_format_comparison_signs() {
        let before = snapshot(&[
            (Metric::Accuracy, 0.6),
            (Metric::Precision, 0.8),
            (Metric::Recall, 0.5),
        ]);
        let after = snapshot(&[
            (Metric::Accuracy, 0.7),
            (Metric::Precision, 0.7),
            (Metric::Recall, 0.5),
        ]);

        let report = format_comparison(&before, &after).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Accuracy        +0.10");
        assert_eq!(lines[1], "Precision       -0.10");
        assert_eq!(lines[2], "Recall          +0.00");
    }

    #[test]
    fn test_comparison_of_identical_snapshots_is_zero() {
        let first = snapshot(&[(Metric::Accuracy, 0.75), (Metric::F1, 0.6)]);

        let report = format_comparison(&first, &first).unwrap();
        for line in report.lines() {
            assert!(line.ends_with("+0.00"), "unexpected line: {}", line);
        }
    }

    #[test]
    fn test_deltas_are_antisymmetric() {
        let first = snapshot(&[(Metric::Accuracy, 0.6), (Metric::RocAuc, 0.9)]);
        let second = snapshot(&[(Metric::Accuracy, 0.8), (Metric::RocAuc, 0.4)]);

        let forward = deltas(&first, &second).unwrap();
        let backward = deltas(&second, &first).unwrap();
        for ((metric_f, delta_f), (metric_b, delta_b)) in forward.iter().zip(backward.iter()) {
            assert_eq!(metric_f, metric_b);
            assert!((delta_f + delta_b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_comparison_with_missing_key() {
        let before = snapshot(&[(Metric::Accuracy, 0.6), (Metric::F1, 0.5)]);
        let after = snapshot(&[(Metric::Accuracy, 0.7)]);

        let result = format_comparison(&before, &after);
        assert!(matches!(result, Err(Error::KeyNotFound(_))));
    }

    #[test]
    fn test_binary_labels_rejects_other_values() {
        let result = binary_labels(&[0, 1, 2], "true labels");
        assert!(matches!(result, Err(Error::InvalidValue(_))));
    }

    #[test]
    fn test_positive_class_scores_requires_two_columns() {
        let proba = vec![vec![0.4, 0.6], vec![0.9]];
        let result = positive_class_scores(&proba);
        assert!(matches!(result, Err(Error::DimensionMismatch(_))));
    }
}
