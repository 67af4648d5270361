use crate::dataset::{Dataset, Record, Schema};
use crate::gain::{information_gain, label_distribution};
use itertools::Itertools;
use std::error::Error;
use std::fmt;

/// Outcome of classifying one record. `Unknown` is the sentinel for
/// records the tree has no evidence about: an empty training partition
/// or a value outside the training-time domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction {
    Label(usize),
    Unknown,
}

/// A node of the induced tree.
///
/// `Decision` splits on one attribute; `children[v]` is the subtree for
/// the attribute's domain value `v`, so the vector length always equals
/// the domain size and every legal value has a child, observed during
/// training or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Decision { attribute: usize, children: Vec<Node> },
    Leaf(Prediction),
}

/// The record handed to `predict` does not match the schema the tree
/// was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaError {
    pub expected: usize,
    pub found: usize,
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "record has {} attribute values, model expects {}",
            self.found, self.expected
        )
    }
}

impl Error for SchemaError {}

/// An ID3 decision tree. Built once by [`DecisionTree::fit`] and
/// immutable afterwards, so a model can be shared across threads and
/// classified against concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTree {
    schema: Schema,
    root: Node,
}

impl DecisionTree {
    pub fn fit(data: &Dataset) -> Self {
        Self::train(&data.records, &data.schema)
    }

    pub fn train(records: &[Record], schema: &Schema) -> Self {
        let refs: Vec<&Record> = records.iter().collect();
        let remaining: Vec<usize> = (0..schema.num_attributes()).collect();
        let root = build(&refs, &remaining, schema);
        DecisionTree {
            schema: schema.clone(),
            root,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Classifies one record given as encoded attribute values, ordered
    /// as in the schema. A value outside the training-time domain of
    /// the attribute under test yields `Prediction::Unknown`; a record
    /// with the wrong number of values is a contract violation and
    /// fails instead.
    pub fn predict(&self, values: &[usize]) -> Result<Prediction, SchemaError> {
        if values.len() != self.schema.num_attributes() {
            return Err(SchemaError {
                expected: self.schema.num_attributes(),
                found: values.len(),
            });
        }
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf(prediction) => return Ok(*prediction),
                Node::Decision {
                    attribute,
                    children,
                } => match children.get(values[*attribute]) {
                    Some(child) => node = child,
                    None => return Ok(Prediction::Unknown),
                },
            }
        }
    }

    pub fn predict_record(&self, record: &Record) -> Result<Prediction, SchemaError> {
        self.predict(&record.values)
    }

    /// Human-readable name for a prediction; the unknown sentinel is
    /// rendered as `?`.
    pub fn label_name(&self, prediction: Prediction) -> &str {
        match prediction {
            Prediction::Label(index) => self.schema.label_name(index),
            Prediction::Unknown => "?",
        }
    }
}

fn build(records: &[&Record], remaining: &[usize], schema: &Schema) -> Node {
    if records.is_empty() {
        return Node::Leaf(Prediction::Unknown);
    }
    if records.iter().map(|record| record.label).all_equal() {
        return Node::Leaf(Prediction::Label(records[0].label));
    }
    if remaining.is_empty() {
        return Node::Leaf(Prediction::Label(majority_label(
            records,
            schema.num_labels(),
        )));
    }
    let best = choose_best_attribute(records, remaining, schema);
    let attribute = &schema.attributes[best];
    let rest: Vec<usize> = remaining
        .iter()
        .cloned()
        .filter(|&index| index != best)
        .collect();
    let children: Vec<Node> = (0..attribute.domain.len())
        .map(|value| {
            let partition: Vec<&Record> = records
                .iter()
                .cloned()
                .filter(|record| record.values[attribute.index] == value)
                .collect();
            build(&partition, &rest, schema)
        })
        .collect();
    Node::Decision {
        attribute: best,
        children,
    }
}

/// Index of the remaining attribute with maximal information gain.
/// Ties go to the earliest attribute in `remaining`: a later attribute
/// must be strictly better to displace the current best.
fn choose_best_attribute(records: &[&Record], remaining: &[usize], schema: &Schema) -> usize {
    let mut best = remaining[0];
    let mut best_gain = -1.0;
    for &index in remaining {
        let gain = information_gain(records, &schema.attributes[index], schema.num_labels());
        if gain > best_gain {
            best_gain = gain;
            best = index;
        }
    }
    best
}

/// Most frequent label of a non-empty record set. Ties go to the label
/// earliest in the label domain's declaration order.
fn majority_label(records: &[&Record], num_labels: usize) -> usize {
    let distribution = label_distribution(records, num_labels);
    let mut majority = 0;
    let mut majority_count = 0;
    for (label, &count) in distribution.iter().enumerate() {
        if count > majority_count {
            majority_count = count;
            majority = label;
        }
    }
    majority
}

impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_node(f, &self.root, 0)
    }
}

impl DecisionTree {
    fn fmt_node(&self, f: &mut fmt::Formatter, node: &Node, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match node {
            Node::Leaf(prediction) => {
                writeln!(f, "{}Leaf: {}", indent, self.label_name(*prediction))
            }
            Node::Decision {
                attribute,
                children,
            } => {
                let attribute = &self.schema.attributes[*attribute];
                writeln!(f, "{}Decision: {}", indent, attribute.name)?;
                for (value, child) in children.iter().enumerate() {
                    writeln!(
                        f,
                        "{}  If {} = {}:",
                        indent, attribute.name, attribute.domain[value]
                    )?;
                    self.fmt_node(f, child, depth + 2)?;
                }
                Ok(())
            }
        }
    }
}
