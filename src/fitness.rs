//! This module implements the impurity functions used to grow the decision tree: label entropy,
//! information gain and the choice of the best splitting feature.
//!
//! All functions take rows whose last field is the class label.

use crate::decision_tree::{partition, Row};

use std::collections::HashMap;

/// Comparing two number with default floating error threshold.
///
/// # Example
/// ```rust
/// use id3tree::fitness::almost_equal;
/// assert_eq!(false, almost_equal(1.0, 0.998));
/// assert_eq!(true, almost_equal(1.0, 0.999_999_9));
/// ```
pub fn almost_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < 1.0e-6
}

/// The label of a row. Rows are never empty once they pass the loader or `DecisionTree::fit`.
pub fn label_of(row: &[String]) -> &str {
    row.last().map(String::as_str).unwrap_or("")
}

/// Count the labels of `rows` in first-encountered order.
fn label_counts<'a, I>(rows: I) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for row in rows {
        let label = label_of(row);
        match position.get(label) {
            Some(&i) => counts[i].1 += 1,
            None => {
                position.insert(label, counts.len());
                counts.push((label, 1));
            }
        }
    }
    counts
}

/// Shannon entropy (base 2) of the label distribution of `rows`. Returns 0.0 for an empty input.
///
/// # Example
/// ```rust
/// use id3tree::fitness::entropy;
/// let rows = vec![
///     vec!["a".to_string(), "yes".to_string()],
///     vec!["b".to_string(), "no".to_string()],
/// ];
/// assert_eq!(entropy(&rows), 1.0);
/// ```
pub fn entropy(rows: &[Row]) -> f64 {
    entropy_of(rows.iter())
}

fn entropy_of<'a, I>(rows: I) -> f64
where
    I: IntoIterator<Item = &'a Row>,
{
    let counts = label_counts(rows);
    let total: usize = counts.iter().map(|(_, c)| *c).sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    let mut ent = 0.0;
    for (_, count) in counts.iter() {
        let p = *count as f64 / total;
        ent -= p * p.log2();
    }
    ent
}

/// Information gain of splitting `rows` on `column`, given the entropy of `rows`.
///
/// gain = parent_entropy - sum over values v of (|rows_v| / |rows|) * entropy(rows_v)
pub fn information_gain(rows: &[Row], column: usize, parent_entropy: f64) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    let total = rows.len() as f64;
    let weighted: f64 = partition(rows, column)
        .values()
        .map(|subset| (subset.len() as f64 / total) * entropy_of(subset.iter().copied()))
        .sum();
    parent_entropy - weighted
}

/// Return the feature column in `[0, feature_count)` with the greatest information gain, and
/// that gain. Columns are scanned in ascending order and the best is only replaced on a strict
/// improvement, so the lowest index wins a tie. Returns `None` when `feature_count` is 0.
///
/// # Example
/// ```rust
/// use id3tree::fitness::best_feature;
/// let rows: Vec<Vec<String>> = vec![
///     vec!["sunny", "hot", "no"],
///     vec!["sunny", "cool", "yes"],
///     vec!["rainy", "cool", "yes"],
///     vec!["rainy", "hot", "no"],
/// ]
/// .into_iter()
/// .map(|r| r.into_iter().map(String::from).collect())
/// .collect();
/// let (index, gain) = best_feature(&rows, 2).unwrap();
/// assert_eq!(index, 1);
/// assert_eq!(gain, 1.0);
/// ```
pub fn best_feature(rows: &[Row], feature_count: usize) -> Option<(usize, f64)> {
    if feature_count == 0 {
        return None;
    }
    let parent_entropy = entropy(rows);
    let mut best_gain = -1.0;
    let mut best_index = 0;
    for i in 0..feature_count {
        let gain = information_gain(rows, i, parent_entropy);
        if gain > best_gain {
            best_gain = gain;
            best_index = i;
        }
    }
    Some((best_index, best_gain))
}

/// The most frequent label of `rows`. On a tie the label seen first in `rows` wins.
pub fn most_common_label(rows: &[Row]) -> Option<&str> {
    let mut best: Option<(&str, usize)> = None;
    for (label, count) in label_counts(rows.iter()) {
        match best {
            Some((_, max)) if count <= max => {}
            _ => best = Some((label, count)),
        }
    }
    best.map(|(label, _)| label)
}

/// Return the shared label if every row carries the same one.
pub fn same_label(rows: &[Row]) -> Option<&str> {
    let first = label_of(rows.first()?);
    if rows.iter().skip(1).all(|row| label_of(row) == first) {
        Some(first)
    } else {
        None
    }
}
