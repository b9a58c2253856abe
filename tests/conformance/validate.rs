use super::common::load_suite;
use iodef::codec::decode_str;
use iodef::validate::validate;

/// A single validation test case from the suite.
#[derive(Debug, serde::Deserialize)]
struct TestCase {
    name: String,
    id: String,
    input: String,
    expected: Expected,
}

#[derive(Debug, serde::Deserialize)]
struct Expected {
    valid: bool,
    #[serde(default)]
    errors: Vec<ExpectedError>,
}

#[derive(Debug, serde::Deserialize)]
struct ExpectedError {
    key: String,
    #[serde(default)]
    message: Option<String>,
}

#[test]
fn validate_conformance_suite() {
    let cases: Vec<TestCase> = load_suite("validate/suite.yaml");

    let mut passed = 0;
    let mut failed = 0;

    for case in &cases {
        let doc = match decode_str(&case.input) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("  FAIL [{}] {}: decode error: {}", case.id, case.name, e);
                failed += 1;
                continue;
            }
        };
        let report = validate(&doc);

        let mut problems = Vec::new();
        if report.is_valid() != case.expected.valid {
            problems.push(format!(
                "valid={}, expected valid={}",
                report.is_valid(),
                case.expected.valid
            ));
        }
        // The expected keys are the complete set: nothing missing, nothing extra.
        if report.len() != case.expected.errors.len() {
            problems.push(format!(
                "{} violation(s), expected {}",
                report.len(),
                case.expected.errors.len()
            ));
        }
        for expected in &case.expected.errors {
            match report.get(&expected.key) {
                None => problems.push(format!("missing violation at {}", expected.key)),
                Some(actual) => {
                    if let Some(msg) = &expected.message
                        && msg != actual
                    {
                        problems.push(format!(
                            "at {}: message '{}', expected '{}'",
                            expected.key, actual, msg
                        ));
                    }
                }
            }
        }

        if problems.is_empty() {
            passed += 1;
        } else {
            eprintln!("  FAIL [{}] {}:", case.id, case.name);
            for p in &problems {
                eprintln!("    {}", p);
            }
            for (k, v) in report.iter() {
                eprintln!("    reported {} => {}", k, v);
            }
            failed += 1;
        }
    }

    eprintln!(
        "\nValidation conformance: {} passed, {} failed out of {} total",
        passed,
        failed,
        cases.len()
    );

    assert_eq!(failed, 0, "{} validation conformance tests failed", failed);
}
