use easyscript::{run, Interpreter};

use regex::Regex;
use test_generator::test_resources;

#[derive(Debug, PartialEq)]
struct Outcome {
    output: Vec<String>,
    error: Option<String>,
}

#[test_resources("tests/scripts/*.es")]
fn test_script(file: &str) {
    let source = std::fs::read_to_string(file).unwrap();
    let expected_file = format!("{}.expected", file.strip_suffix(".es").unwrap());
    let expected = std::fs::read_to_string(&expected_file).unwrap();

    assert_eq!(get_expected_outcome(&expected), run_script(&source), "{}", file);
}

fn run_script(source: &str) -> Outcome {
    let mut interpreter = Interpreter::new_with_output(Vec::<u8>::new());
    let result = run(&mut interpreter, source);

    let output = String::from_utf8(interpreter.into_output())
        .unwrap()
        .lines()
        .map(|l| l.to_owned())
        .collect();

    Outcome {
        output,
        error: result.err().map(|e| e.kind().to_string()),
    }
}

fn get_expected_outcome(expected: &str) -> Outcome {
    let output_regexer = Regex::new(r"^out: (.*)$").unwrap();
    let error_regexer = Regex::new(r"^error: (\w+)$").unwrap();

    let mut outcome = Outcome {
        output: vec![],
        error: None,
    };

    for line in expected.lines() {
        if let Some(r) = output_regexer.captures(line) {
            outcome.output.push(r.get(1).unwrap().as_str().to_owned());
        }
        if let Some(r) = error_regexer.captures(line) {
            outcome.error.replace(r.get(1).unwrap().as_str().to_owned());
        }
    }

    outcome
}
