use clap::{App, Arg};
use std::fs;
use std::process;

use id3_tree::evaluate::evaluate;
use id3_tree::tree::DecisionTree;

fn main() {
    let matches = App::new("id3-tree")
        .version("0.1.0")
        .about("Trains an ID3 decision tree on a nominal ARFF dataset")
        .arg(
            Arg::with_name("file")
                .short("f")
                .long("file")
                .required(true)
                .takes_value(true)
                .help("ARFF dataset to train on"),
        )
        .arg(
            Arg::with_name("validation")
                .short("v")
                .long("validation")
                .required(true)
                .number_of_values(2)
                .takes_value(true)
                .help("Validation mode: 'random <train-%>' or 'training <ignored>'"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("Suppress the tree dump"),
        )
        .get_matches();
    let file = matches.value_of("file").unwrap();

    let contents = fs::read_to_string(file).unwrap_or_else(|err| {
        eprintln!("cannot read {}: {}", file, err);
        process::exit(1);
    });
    let mut data = id3_tree::arff::parse(&contents).unwrap_or_else(|err| {
        eprintln!("cannot parse {}: {}", file, err);
        process::exit(1);
    });
    data.shuffle();

    let mut validation_values = matches.values_of("validation").unwrap();
    match validation_values.next() {
        Some("random") => {
            let raw = validation_values.next().unwrap_or("");
            let training_size = raw.parse::<f64>().ok();
            let (train, test) = match training_size.and_then(|size| data.holdout_split(size)) {
                Some(split) => split,
                None => {
                    eprintln!(
                        "invalid training percentage '{}': expected a number in 0..=100",
                        raw
                    );
                    process::exit(1);
                }
            };
            let tree = DecisionTree::train(train, &data.schema);
            if !matches.is_present("quiet") {
                println!("{}", tree);
            }
            match evaluate(test, &tree) {
                Ok(accuracy) => println!("test accuracy: {}", accuracy),
                Err(err) => {
                    eprintln!("evaluation failed: {}", err);
                    process::exit(1);
                }
            }
        }
        Some("training") => {
            let tree = DecisionTree::fit(&data);
            if !matches.is_present("quiet") {
                println!("{}", tree);
            }
            match evaluate(&data.records, &tree) {
                Ok(accuracy) => println!("training accuracy: {}", accuracy),
                Err(err) => {
                    eprintln!("evaluation failed: {}", err);
                    process::exit(1);
                }
            }
        }
        _ => {}
    }
}
