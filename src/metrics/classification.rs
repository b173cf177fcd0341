//! Classification model evaluation metrics

use crate::error::{Error, Result};
use std::cmp::Ordering;


/// Shared input validation for the metric functions
fn check_input<T, U>(y_true: &[T], y_pred: &[U]) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(Error::DimensionMismatch(format!(
            "Length mismatch between true and predicted labels: {} vs {}",
            y_true.len(),
            y_pred.len()
        )));
    }

    if y_true.is_empty() {
        return Err(Error::EmptyData(
            "Cannot calculate with empty data".to_string(),
        ));
    }

    Ok(())
}

/// True positive, false positive, and false negative counts shared by the
/// precision-family metrics
fn positive_counts(y_true: &[bool], y_pred: &[bool]) -> (usize, usize, usize) {
    let mut tp = 0;
    let mut fp = 0;
    let mut fn_ = 0;

    for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
        match (t, p) {
            (true, true) => tp += 1,
            (false, true) => fp += 1,
            (true, false) => fn_ += 1,
            (false, false) => {}
        }
    }

    (tp, fp, fn_)
}

/// Calculate accuracy
///
/// # Arguments
/// * `y_true` - True labels
/// * `y_pred` - Predicted labels
///
/// # Returns
/// * `Result<f64>` - Accuracy (0 to 1)
pub fn accuracy_score<T: PartialEq>(y_true: &[T], y_pred: &[T]) -> Result<f64> {
    check_input(y_true, y_pred)?;

    let correct_count = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();

    Ok(correct_count as f64 / y_true.len() as f64)
}

/// Calculate precision (binary classification)
///
/// # Arguments
/// * `y_true` - True labels (true or false)
/// * `y_pred` - Predicted labels (true or false)
///
/// # Returns
/// * `Result<f64>` - Precision (0 to 1)
pub fn precision_score(y_true: &[bool], y_pred: &[bool]) -> Result<f64> {
    check_input(y_true, y_pred)?;

    let (tp, fp, _) = positive_counts(y_true, y_pred);

    if tp + fp == 0 {
        return Ok(0.0); // No positive predictions
    }

    Ok(tp as f64 / (tp + fp) as f64)
}

/// Calculate recall (binary classification)
///
/// # Arguments
/// * `y_true` - True labels (true or false)
/// * `y_pred` - Predicted labels (true or false)
///
/// # Returns
/// * `Result<f64>` - Recall (0 to 1)
pub fn recall_score(y_true: &[bool], y_pred: &[bool]) -> Result<f64> {
    check_input(y_true, y_pred)?;

    let (tp, _, fn_) = positive_counts(y_true, y_pred);

    if tp + fn_ == 0 {
        return Ok(0.0); // No actual positive samples
    }

    Ok(tp as f64 / (tp + fn_) as f64)
}

/// Calculate F1 score (binary classification)
///
/// # Arguments
/// * `y_true` - True labels (true or false)
/// * `y_pred` - Predicted labels (true or false)
///
/// # Returns
/// * `Result<f64>` - F1 score (0 to 1)
pub fn f1_score(y_true: &[bool], y_pred: &[bool]) -> Result<f64> {
    let precision = precision_score(y_true, y_pred)?;
    let recall = recall_score(y_true, y_pred)?;

    if precision + recall == 0.0 {
        return Ok(0.0); // Avoid division by zero
    }

    Ok(2.0 * precision * recall / (precision + recall))
}

/// Calculate the area under the ROC curve (binary classification)
///
/// Uses the rank-statistic formulation: AUC equals the Mann-Whitney U
/// statistic of the positive-class scores divided by the number of
/// positive/negative pairs. Tied scores receive their average rank, which
/// matches the trapezoidal ROC integral.
///
/// # Arguments
/// * `y_true` - True labels (true or false)
/// * `y_score` - Predicted scores or positive-class probabilities
///
/// # Returns
/// * `Result<f64>` - ROC AUC (0 to 1); fails when only one class is present
pub fn roc_auc_score(y_true: &[bool], y_score: &[f64]) -> Result<f64> {
    check_input(y_true, y_score)?;

    let mut pairs: Vec<(f64, bool)> = y_score
        .iter()
        .copied()
        .zip(y_true.iter().copied())
        .collect();
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let n = pairs.len();
    let mut pos = 0usize;
    let mut neg = 0usize;
    let mut positive_rank_sum = 0.0;

    let mut i = 0;
    let mut rank = 1.0;
    while i < n {
        let mut j = i;
        while j < n && pairs[j].0 == pairs[i].0 {
            j += 1;
        }

        // Samples with tied scores share the average rank of the run
        let count = (j - i) as f64;
        let avg_rank = rank + (count - 1.0) / 2.0;
        for pair in &pairs[i..j] {
            if pair.1 {
                positive_rank_sum += avg_rank;
                pos += 1;
            } else {
                neg += 1;
            }
        }

        rank += count;
        i = j;
    }

    if pos == 0 || neg == 0 {
        return Err(Error::Computation(
            "ROC AUC is undefined when only one class is present".to_string(),
        ));
    }

    let u = positive_rank_sum - pos as f64 * (pos as f64 + 1.0) / 2.0;
    Ok(u / (pos as f64 * neg as f64))
}
