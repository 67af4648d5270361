use rand::seq::SliceRandom;
use rand::thread_rng;

/// A named nominal attribute with its declared domain of legal values.
///
/// The domain comes from the dataset declaration, not from the values
/// observed in any particular record set, so a value can be legal while
/// never occurring in the training data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub index: usize,
    pub domain: Vec<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, index: usize, domain: Vec<String>) -> Self {
        Attribute {
            name: name.into(),
            index,
            domain,
        }
    }

    /// Position of `value` in this attribute's declared domain.
    pub fn value_index(&self, value: &str) -> Option<usize> {
        self.domain.iter().position(|v| v == value)
    }
}

/// One data row. Values are stored as indices into the domain of the
/// attribute at the same position; `label` indexes the label domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub values: Vec<usize>,
    pub label: usize,
}

/// The attribute layout shared by every record of a dataset: the ordered
/// predictive attributes plus the designated label attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub attributes: Vec<Attribute>,
    pub label: Attribute,
}

impl Schema {
    pub fn num_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn num_labels(&self) -> usize {
        self.label.domain.len()
    }

    /// Name of the label domain value at `index`.
    pub fn label_name(&self, index: usize) -> &str {
        &self.label.domain[index]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub schema: Schema,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn shuffle(&mut self) {
        self.records.as_mut_slice().shuffle(&mut thread_rng());
    }

    /// Splits the records into a training prefix and a validation
    /// suffix, keeping `train_percent` percent for training. `None`
    /// unless the percentage lies in `0..=100` (NaN included).
    pub fn holdout_split(&self, train_percent: f64) -> Option<(&[Record], &[Record])> {
        if !(0.0..=100.0).contains(&train_percent) {
            return None;
        }
        let training_count = (self.records.len() as f64 * (train_percent / 100.0)) as usize;
        Some(self.records.split_at(training_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_index_follows_declaration_order() {
        let attr = Attribute::new(
            "outlook",
            0,
            vec!["sunny".into(), "overcast".into(), "rainy".into()],
        );
        assert_eq!(attr.value_index("overcast"), Some(1));
        assert_eq!(attr.value_index("snowy"), None);
    }

    #[test]
    fn shuffle_keeps_every_record() {
        let schema = Schema {
            attributes: vec![Attribute::new("a", 0, vec!["x".into(), "y".into()])],
            label: Attribute::new("class", 1, vec!["no".into(), "yes".into()]),
        };
        let records: Vec<Record> = (0..10)
            .map(|i| Record {
                values: vec![i % 2],
                label: i % 2,
            })
            .collect();
        let mut data = Dataset {
            schema,
            records: records.clone(),
        };
        data.shuffle();
        assert_eq!(data.records.len(), records.len());
        for record in &records {
            assert!(data.records.contains(record));
        }
    }

    #[test]
    fn holdout_split_keeps_the_requested_share() {
        let schema = Schema {
            attributes: vec![Attribute::new("a", 0, vec!["x".into(), "y".into()])],
            label: Attribute::new("class", 1, vec!["no".into(), "yes".into()]),
        };
        let records: Vec<Record> = (0..10)
            .map(|i| Record {
                values: vec![i % 2],
                label: i % 2,
            })
            .collect();
        let data = Dataset { schema, records };
        let (train, test) = data.holdout_split(70.0).unwrap();
        assert_eq!(train.len(), 7);
        assert_eq!(test.len(), 3);
        let (all, none) = data.holdout_split(100.0).unwrap();
        assert_eq!(all.len(), 10);
        assert!(none.is_empty());
    }

    #[test]
    fn holdout_split_rejects_out_of_range_percentages() {
        let data = Dataset {
            schema: Schema {
                attributes: vec![Attribute::new("a", 0, vec!["x".into()])],
                label: Attribute::new("class", 1, vec!["p".into(), "q".into()]),
            },
            records: vec![Record {
                values: vec![0],
                label: 0,
            }],
        };
        assert_eq!(data.holdout_split(150.0), None);
        assert_eq!(data.holdout_split(-5.0), None);
        assert_eq!(data.holdout_split(f64::NAN), None);
    }
}
