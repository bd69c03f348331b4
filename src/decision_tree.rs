//! This module implements an ID3 decision tree for categorical data.
//!
//! Every sample is a row of strings. The last field of a training row is the class label, all
//! preceding fields are feature values. The header set names the columns in the same order.
//!
//! In the training process, each node is split on the feature with the largest information gain
//! (see [fitness::best_feature]). The chosen feature's column is removed from the rows handed to
//! the children, so a feature is used at most once on any path and the depth of the tree is
//! bounded by the number of features. A node becomes a leaf when all of its rows share one label,
//! or when no feature is left (the leaf then predicts the most common label).
//!
//! Inference looks features up by name in the header set the tree was trained with, so a sample
//! is always given with one value per feature in the original column order. A value that never
//! reached a branch during training makes the prediction unknown.
//!
//! [fitness::best_feature]: ../fitness/fn.best_feature.html
//!
//! # Example
//! ```
//! use id3tree::decision_tree::{DecisionTree, UNKNOWN_LABEL};
//!
//! fn strings(v: &[&str]) -> Vec<String> {
//!     v.iter().map(|s| s.to_string()).collect()
//! }
//!
//! let headers = strings(&["weather", "temp", "play"]);
//! let dv = vec![
//!     strings(&["sunny", "hot", "no"]),
//!     strings(&["sunny", "cool", "yes"]),
//!     strings(&["rainy", "cool", "yes"]),
//!     strings(&["rainy", "hot", "no"]),
//! ];
//!
//! // train a decision tree
//! let mut tree = DecisionTree::new();
//! tree.fit(&headers, &dv).unwrap();
//! tree.print();
//!
//! // inference
//! assert_eq!(tree.predict_one(&["sunny", "hot"]), "no");
//! assert_eq!(tree.predict_one(&["snowy", "warm"]), UNKNOWN_LABEL);
//!
//! // output:
//! // [temp = cool]
//! //   -> yes
//! // [temp = hot]
//! //   -> no
//! ```

use crate::config::Config;
#[cfg(feature = "enable_training")]
use crate::errors::{Id3Error, Result};
#[cfg(feature = "enable_training")]
use crate::fitness::{best_feature, label_of, most_common_label, same_label};

use std::collections::{BTreeMap, HashSet};
use std::fmt;

#[cfg(feature = "enable_training")]
use log::{debug, info};

/// The label returned by [`DecisionTree::predict_one`] when a sample cannot be classified.
///
/// [`DecisionTree::predict_one`]: struct.DecisionTree.html#method.predict_one
pub const UNKNOWN_LABEL: &str = "Unknown";

/// A training sample (features followed by the label) or a test sample (features only).
pub type Row = Vec<String>;
/// The vector of the samples
pub type DataVec = Vec<Row>;
/// The vector of the predicted labels.
pub type PredVec = Vec<String>;

/// Group `rows` by their value in `column`.
///
/// Every row lands in exactly one group and keeps its relative order. The column itself is
/// left in place; use [`project`] to drop it.
///
/// # Panic
/// Panics if a row has no field at `column`.
///
/// # Example
/// ```
/// use id3tree::decision_tree::partition;
/// let rows: Vec<Vec<String>> = vec![vec!["a".into(), "x".into()], vec!["b".into(), "y".into()], vec!["a".into(), "z".into()]];
/// let groups = partition(&rows, 0);
/// assert_eq!(groups["a"].len(), 2);
/// assert_eq!(groups["b"].len(), 1);
/// ```
///
/// [`project`]: fn.project.html
pub fn partition(rows: &[Row], column: usize) -> BTreeMap<&str, Vec<&Row>> {
    let mut groups: BTreeMap<&str, Vec<&Row>> = BTreeMap::new();
    for row in rows {
        groups.entry(row[column].as_str()).or_default().push(row);
    }
    groups
}

/// Copy `rows` without the field at `column`.
pub fn project(rows: &[&Row], column: usize) -> DataVec {
    rows.iter().map(|row| remove_column(row, column)).collect()
}

/// Copy `fields` without the entry at `column`.
pub fn remove_column(fields: &[String], column: usize) -> Vec<String> {
    fields
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != column)
        .map(|(_, f)| f.clone())
        .collect()
}

/// Return the first name that occurs more than once in `headers`.
///
/// Inference finds features by name, so the names of a header set must be unique.
pub fn duplicate_name(headers: &[String]) -> Option<&str> {
    let mut seen = HashSet::new();
    headers
        .iter()
        .find(|h| !seen.insert(h.as_str()))
        .map(String::as_str)
}

/// A node of the decision tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A terminal node predicting `label`.
    Leaf { label: String },
    /// A node splitting on `feature`, with one child per value observed in training.
    Internal {
        feature: String,
        children: BTreeMap<String, Node>,
    },
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of nodes in this subtree.
    pub fn len(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { children, .. } => 1 + children.values().map(Node::len).sum::<usize>(),
        }
    }

    /// Number of edges on the longest path to a leaf. A leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { children, .. } => {
                1 + children.values().map(Node::depth).max().unwrap_or(0)
            }
        }
    }

    /// Classify `sample` starting from this node.
    ///
    /// `headers` is the full header set the tree was trained with and `sample` holds one value per
    /// feature in that order. Each internal node finds its feature by name in `headers`.
    ///
    /// Returns `None` when the sample's value has no branch, or when the sample has no value for
    /// the node's feature.
    pub fn predict<S: AsRef<str>>(&self, headers: &[String], sample: &[S]) -> Option<&str> {
        match self {
            Node::Leaf { label } => Some(label.as_str()),
            Node::Internal { feature, children } => {
                let index = headers.iter().position(|h| h == feature)?;
                let value = sample.get(index)?;
                children.get(value.as_ref())?.predict(headers, sample)
            }
        }
    }

    /// Append the text form of this subtree to `out`.
    ///
    /// A leaf is written as `<indent>-> <label>`. An internal node writes `<indent>[<feature> = <value>]`
    /// for every branch, followed by the child indented by two more spaces.
    pub fn render(&self, indent: &str, out: &mut String) {
        match self {
            Node::Leaf { label } => {
                out.push_str(indent);
                out.push_str("-> ");
                out.push_str(label);
                out.push('\n');
            }
            Node::Internal { feature, children } => {
                let child_indent = format!("{}  ", indent);
                for (value, child) in children.iter() {
                    out.push_str(&format!("{}[{} = {}]\n", indent, feature, value));
                    child.render(&child_indent, out);
                }
            }
        }
    }
}

/// Recursively build the node for `rows`. `headers` has one name per column of `rows`.
#[cfg(feature = "enable_training")]
fn build_node(rows: &[Row], headers: &[String], depth: usize) -> Node {
    if let Some(label) = same_label(rows) {
        debug!("D{:02} leaf {} (pure, {} rows)", depth, label, rows.len());
        return Node::Leaf {
            label: label.to_string(),
        };
    }

    // The last header names the label, everything before it is a feature.
    let feature_count = headers.len().saturating_sub(1);
    let (best, gain) = match best_feature(rows, feature_count) {
        Some(split) => split,
        None => {
            let label = most_common_label(rows).unwrap_or("");
            debug!("D{:02} leaf {} (no features, {} rows)", depth, label, rows.len());
            return Node::Leaf {
                label: label.to_string(),
            };
        }
    };

    let feature = headers[best].clone();
    let child_headers = remove_column(headers, best);
    let groups = partition(rows, best);
    debug!(
        "D{:02} split on {} gain={:.4} branches={}",
        depth,
        feature,
        gain,
        groups.len()
    );

    let mut children = BTreeMap::new();
    for (value, subset) in groups {
        let child_rows = project(&subset, best);
        let child = build_node(&child_rows, &child_headers, depth + 1);
        children.insert(value.to_string(), child);
    }
    Node::Internal { feature, children }
}

/// The decision tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    /// the root node, `None` until the tree is trained
    root: Option<Node>,
    /// the header set of the training data: feature names followed by the label name
    headers: Vec<String>,
    /// returned by `predict_one` when a sample cannot be classified
    unknown_label: String,
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionTree {
    /// Return an untrained decision tree that predicts [`UNKNOWN_LABEL`] for unseen values.
    ///
    /// [`UNKNOWN_LABEL`]: constant.UNKNOWN_LABEL.html
    pub fn new() -> Self {
        DecisionTree {
            root: None,
            headers: Vec::new(),
            unknown_label: UNKNOWN_LABEL.to_string(),
        }
    }

    /// Return an untrained decision tree using the settings of `conf`.
    pub fn with_config(conf: &Config) -> Self {
        let mut tree = DecisionTree::new();
        tree.set_unknown_label(&conf.unknown_label);
        tree
    }

    /// Set the label returned when a sample cannot be classified.
    pub fn set_unknown_label(&mut self, label: &str) {
        self.unknown_label = label.to_string();
    }

    /// Train the tree on `train_data`, whose columns are named by `headers`.
    ///
    /// `headers` holds the feature names followed by the label name and every row must have the
    /// same length as `headers`. Training again replaces the previous tree.
    ///
    /// # Error
    /// Returns `Id3Error::InvalidData` if `headers` or `train_data` is empty, if a header name
    /// repeats, if a row has the wrong length, or if a row's label equals the unknown label. The
    /// tree is left unchanged in that case.
    ///
    /// # Example
    /// ```
    /// use id3tree::decision_tree::DecisionTree;
    /// let headers: Vec<String> = vec!["a".into(), "label".into()];
    /// let dv = vec![vec!["x".to_string(), "1".to_string()]];
    /// let mut tree = DecisionTree::new();
    /// tree.fit(&headers, &dv).unwrap();
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[cfg(feature = "enable_training")]
    pub fn fit(&mut self, headers: &[String], train_data: &DataVec) -> Result<()> {
        if headers.is_empty() {
            return Err(Id3Error::from("the header set is empty"));
        }
        if train_data.is_empty() {
            return Err(Id3Error::from("the training set is empty"));
        }
        if let Some((i, row)) = train_data
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != headers.len())
        {
            return Err(Id3Error::InvalidData(format!(
                "row {} has {} fields, expected {}",
                i,
                row.len(),
                headers.len()
            )));
        }

        if let Some(name) = duplicate_name(headers) {
            return Err(Id3Error::InvalidData(format!(
                "duplicate feature name {}",
                name
            )));
        }
        // A label equal to the unknown label could not be told apart from an unseen value.
        if let Some(i) = train_data
            .iter()
            .position(|row| label_of(row) == self.unknown_label)
        {
            return Err(Id3Error::InvalidData(format!(
                "row {} is labelled {}, which is reserved for unknown predictions",
                i, self.unknown_label
            )));
        }

        let root = build_node(train_data, headers, 0);
        info!(
            "Tree with {} nodes and depth {} constructed from {} rows",
            root.len(),
            root.depth(),
            train_data.len()
        );
        self.root = Some(root);
        self.headers = headers.to_vec();
        Ok(())
    }

    /// Classify one sample, returning `None` if it cannot be classified or the tree is untrained.
    ///
    /// `sample` has one value per feature, in the order of the training headers.
    pub fn predict_label<S: AsRef<str>>(&self, sample: &[S]) -> Option<&str> {
        self.root.as_ref()?.predict(&self.headers, sample)
    }

    /// Classify one sample. Unclassifiable samples yield the unknown label ("Unknown" by default).
    pub fn predict_one<S: AsRef<str>>(&self, sample: &[S]) -> String {
        self.predict_label(sample)
            .unwrap_or(self.unknown_label.as_str())
            .to_string()
    }

    /// Classify every sample in `test_data`. Training rows may be passed as they are: the
    /// trailing label field is never looked up.
    pub fn predict(&self, test_data: &DataVec) -> PredVec {
        test_data.iter().map(|x| self.predict_one(x)).collect()
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// The header set the tree was trained with.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn feature_names(&self) -> &[String] {
        let n = self.headers.len().saturating_sub(1);
        &self.headers[..n]
    }

    pub fn label_name(&self) -> Option<&str> {
        self.headers.last().map(String::as_str)
    }

    /// The unknown label configured for this tree.
    pub fn unknown_label(&self) -> &str {
        &self.unknown_label
    }

    /// Return the number of nodes in current decision tree
    pub fn len(&self) -> usize {
        self.root.as_ref().map_or(0, Node::len)
    }

    /// Returns true if the current decision tree is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, Node::depth)
    }

    /// Return the text form of the tree. See [`Node::render`].
    ///
    /// [`Node::render`]: enum.Node.html#method.render
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(root) = &self.root {
            root.render("", &mut out);
        }
        out
    }

    /// Print the tree to stdout.
    pub fn print(&self) {
        print!("{}", self.render());
    }
}

impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render())
    }
}
