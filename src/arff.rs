use crate::dataset::{Attribute, Dataset, Record, Schema};
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum ArffError {
    /// A data row appeared before any `@data` marker, or no attributes
    /// were declared before it.
    MissingHeader,
    /// An `@attribute` line without a `{...}` domain. Only nominal
    /// attributes are supported.
    NotNominal { attribute: String },
    /// Fewer than two attributes were declared; the last attribute is
    /// the label, so at least one predictive attribute must remain.
    TooFewAttributes { found: usize },
    /// A data row with the wrong number of fields.
    WrongFieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A data field holding a value absent from its attribute's
    /// declared domain.
    UndeclaredValue {
        line: usize,
        attribute: String,
        value: String,
    },
}

impl fmt::Display for ArffError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArffError::MissingHeader => {
                write!(f, "data section reached before any attribute declaration")
            }
            ArffError::NotNominal { attribute } => {
                write!(f, "attribute '{}' is not nominal", attribute)
            }
            ArffError::TooFewAttributes { found } => write!(
                f,
                "need at least two attributes (features + label), found {}",
                found
            ),
            ArffError::WrongFieldCount {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {}: expected {} fields, found {}",
                line, expected, found
            ),
            ArffError::UndeclaredValue {
                line,
                attribute,
                value,
            } => write!(
                f,
                "line {}: value '{}' is not in the domain of attribute '{}'",
                line, value, attribute
            ),
        }
    }
}

impl Error for ArffError {}

/// Parses a nominal-attribute ARFF document into a [`Dataset`].
///
/// The last declared attribute is taken as the label. Every data field
/// is encoded as the index of its value in the owning attribute's
/// declared domain; a value outside that domain is an error, never a
/// silent coercion.
pub fn parse(contents: &str) -> Result<Dataset, ArffError> {
    lazy_static! {
        static ref ATTRIBUTE: Regex = RegexBuilder::new(r"^@attribute\s+(\S+).*")
            .case_insensitive(true)
            .build()
            .unwrap();
        static ref DATA: Regex = RegexBuilder::new("^@data")
            .case_insensitive(true)
            .build()
            .unwrap();
        static ref NOMINAL: Regex = RegexBuilder::new(r"\{(.*)\}")
            .case_insensitive(true)
            .build()
            .unwrap();
        static ref VALUE: Regex = RegexBuilder::new(r"([^,]+),?")
            .case_insensitive(true)
            .build()
            .unwrap();
    }
    let mut attributes: Vec<Attribute> = Vec::new();
    let mut records: Vec<Record> = Vec::new();
    let mut data_section = false;
    for (line_index, line) in contents.lines().enumerate() {
        let line_number = line_index + 1;
        if line.chars().next() == Some('%') || line.trim().is_empty() {
            continue;
        }
        if data_section {
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() != attributes.len() {
                return Err(ArffError::WrongFieldCount {
                    line: line_number,
                    expected: attributes.len(),
                    found: fields.len(),
                });
            }
            let mut values = Vec::with_capacity(fields.len());
            for (attribute, raw) in attributes.iter().zip(fields) {
                let value =
                    attribute
                        .value_index(raw)
                        .ok_or_else(|| ArffError::UndeclaredValue {
                            line: line_number,
                            attribute: attribute.name.clone(),
                            value: raw.to_owned(),
                        })?;
                values.push(value);
            }
            let label = values.pop().expect("at least two attributes");
            records.push(Record { values, label });
        } else if let Some(name) = ATTRIBUTE
            .captures(line)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().trim().to_owned())
        {
            let domain_raw = NOMINAL
                .captures(line)
                .and_then(|cap| cap.get(1))
                .map(|m| m.as_str().to_owned())
                .ok_or_else(|| ArffError::NotNominal {
                    attribute: name.clone(),
                })?;
            let domain: Vec<String> = VALUE
                .captures_iter(&domain_raw)
                .map(|captures| captures.get(1).unwrap().as_str().trim().to_owned())
                .collect();
            let index = attributes.len();
            attributes.push(Attribute::new(name, index, domain));
        } else if DATA.is_match(line) {
            if attributes.is_empty() {
                return Err(ArffError::MissingHeader);
            }
            if attributes.len() < 2 {
                return Err(ArffError::TooFewAttributes {
                    found: attributes.len(),
                });
            }
            data_section = true;
        }
    }
    if !data_section {
        return Err(ArffError::MissingHeader);
    }
    let label = attributes.pop().expect("at least two attributes");
    Ok(Dataset {
        schema: Schema { attributes, label },
        records,
    })
}
