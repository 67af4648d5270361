//! ID3 decision-tree induction over nominal datasets.
//!
//! [`arff::parse`] loads a dataset, [`tree::DecisionTree::fit`] induces
//! a tree by recursive information-gain splitting, and
//! [`tree::DecisionTree::predict`] classifies encoded records against
//! the immutable model.

pub mod arff;
pub mod dataset;
pub mod evaluate;
pub mod gain;
pub mod tree;

pub use crate::arff::ArffError;
pub use crate::dataset::{Attribute, Dataset, Record, Schema};
pub use crate::evaluate::evaluate;
pub use crate::tree::{DecisionTree, Node, Prediction, SchemaError};
