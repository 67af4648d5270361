use crate::dataset::{Attribute, Record};

/// Counts how often each label value occurs in `records`. The result
/// always has `num_labels` entries, zero-count labels included.
pub fn label_distribution(records: &[&Record], num_labels: usize) -> Vec<usize> {
    let mut distribution = vec![0; num_labels];
    for record in records {
        distribution[record.label] += 1;
    }
    distribution
}

/// Shannon entropy (bits) of the label distribution of a non-empty
/// record set: `-Σ p·log2(p)` over represented labels. 0 for a pure
/// set, `log2(k)` when k labels are evenly represented.
pub fn entropy(records: &[&Record], num_labels: usize) -> f64 {
    let total = records.len() as f64;
    label_distribution(records, num_labels)
        .iter()
        .filter(|count| **count > 0)
        .map(|count| *count as f64 / total)
        .map(|p| -p * p.log2())
        .sum()
}

/// Information gain of splitting `records` on `attribute`: the entropy
/// of the whole set minus the size-weighted entropy of the partitions,
/// one partition per domain value. Empty partitions contribute nothing.
pub fn information_gain(records: &[&Record], attribute: &Attribute, num_labels: usize) -> f64 {
    let total = records.len() as f64;
    let weighted: f64 = (0..attribute.domain.len())
        .map(|value| {
            let partition: Vec<&Record> = records
                .iter()
                .cloned()
                .filter(|record| record.values[attribute.index] == value)
                .collect();
            if partition.is_empty() {
                0.0
            } else {
                (partition.len() as f64 / total) * entropy(&partition, num_labels)
            }
        })
        .sum();
    entropy(records, num_labels) - weighted
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn record(values: Vec<usize>, label: usize) -> Record {
        Record { values, label }
    }

    #[test]
    fn entropy_of_pure_set_is_zero() {
        let records = vec![record(vec![0], 1), record(vec![1], 1), record(vec![0], 1)];
        let refs: Vec<&Record> = records.iter().collect();
        assert_abs_diff_eq!(entropy(&refs, 2), 0.0);
    }

    #[test]
    fn entropy_of_uniform_set_is_log2_k() {
        let records = vec![
            record(vec![0], 0),
            record(vec![0], 1),
            record(vec![0], 2),
            record(vec![0], 3),
        ];
        let refs: Vec<&Record> = records.iter().collect();
        assert_abs_diff_eq!(entropy(&refs, 4), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn entropy_of_skewed_set() {
        // 5 of one label, 3 of the other: known value from the
        // textbook 5/8-3/8 split.
        let mut records = Vec::new();
        for _ in 0..5 {
            records.push(record(vec![0], 0));
        }
        for _ in 0..3 {
            records.push(record(vec![0], 1));
        }
        let refs: Vec<&Record> = records.iter().collect();
        assert_abs_diff_eq!(entropy(&refs, 2), 0.954434, epsilon = 1e-5);
    }

    #[test]
    fn gain_of_perfect_split_equals_entropy() {
        // weather = sunny -> yes, weather = rainy -> no
        let records = vec![
            record(vec![0], 0),
            record(vec![0], 0),
            record(vec![1], 1),
            record(vec![1], 1),
        ];
        let refs: Vec<&Record> = records.iter().collect();
        let weather = Attribute::new("weather", 0, vec!["sunny".into(), "rainy".into()]);
        assert_abs_diff_eq!(entropy(&refs, 2), 1.0);
        assert_abs_diff_eq!(information_gain(&refs, &weather, 2), 1.0);
    }

    #[test]
    fn gain_of_uninformative_attribute_is_zero() {
        // the attribute value carries no label information
        let records = vec![
            record(vec![0], 0),
            record(vec![1], 0),
            record(vec![0], 1),
            record(vec![1], 1),
        ];
        let refs: Vec<&Record> = records.iter().collect();
        let attr = Attribute::new("noise", 0, vec!["a".into(), "b".into()]);
        assert_abs_diff_eq!(information_gain(&refs, &attr, 2), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn gain_is_never_negative() {
        let records = vec![
            record(vec![0, 1], 0),
            record(vec![1, 0], 1),
            record(vec![2, 1], 0),
            record(vec![0, 0], 1),
            record(vec![1, 1], 1),
        ];
        let refs: Vec<&Record> = records.iter().collect();
        let attrs = vec![
            Attribute::new("a", 0, vec!["x".into(), "y".into(), "z".into()]),
            Attribute::new("b", 1, vec!["p".into(), "q".into()]),
        ];
        for attr in &attrs {
            let gain = information_gain(&refs, attr, 2);
            assert!(gain >= -1e-12, "gain for {} was {}", attr.name, gain);
            assert!(gain <= entropy(&refs, 2) + 1e-12);
        }
    }
}
