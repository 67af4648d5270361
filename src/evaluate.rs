use crate::dataset::Record;
use crate::tree::{DecisionTree, Prediction, SchemaError};

/// Fraction of `validation_data` the tree labels correctly. An unknown
/// prediction counts as a miss.
pub fn evaluate(validation_data: &[Record], tree: &DecisionTree) -> Result<f64, SchemaError> {
    if validation_data.is_empty() {
        return Ok(0.0);
    }
    let mut correct = 0;
    for record in validation_data {
        if tree.predict_record(record)? == Prediction::Label(record.label) {
            correct += 1;
        }
    }
    Ok(correct as f64 / validation_data.len() as f64)
}
