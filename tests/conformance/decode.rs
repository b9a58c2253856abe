use super::common::load_suite;
use iodef::codec::decode_str;
use iodef::error::DecodeErrorKind;

#[derive(Debug, serde::Deserialize)]
struct TestCase {
    name: String,
    id: String,
    input: String,
    expected: Expected,
}

#[derive(Debug, serde::Deserialize)]
struct Expected {
    ok: bool,
    #[serde(default)]
    kind: Option<DecodeErrorKind>,
    #[serde(default)]
    path: Option<String>,
}

#[test]
fn decode_conformance_suite() {
    let cases: Vec<TestCase> = load_suite("decode/suite.yaml");

    let mut passed = 0;
    let mut failed = 0;

    for case in &cases {
        let result = decode_str(&case.input);
        let outcome = match (&result, case.expected.ok) {
            (Ok(_), true) => Ok(()),
            (Ok(_), false) => Err("expected a decode error, got Ok".to_string()),
            (Err(e), true) => Err(format!("expected Ok, got error: {}", e)),
            (Err(e), false) => {
                if case.expected.kind.as_ref().is_some_and(|k| *k != e.kind) {
                    Err(format!("kind {:?}, expected {:?}", e.kind, case.expected.kind))
                } else if case.expected.path.as_ref().is_some_and(|p| *p != e.path) {
                    Err(format!("path '{}', expected {:?}", e.path, case.expected.path))
                } else {
                    Ok(())
                }
            }
        };
        match outcome {
            Ok(()) => passed += 1,
            Err(msg) => {
                eprintln!("  FAIL [{}] {}: {}", case.id, case.name, msg);
                failed += 1;
            }
        }
    }

    eprintln!(
        "\nDecode conformance: {} passed, {} failed out of {} total",
        passed,
        failed,
        cases.len()
    );

    assert_eq!(failed, 0, "{} decode conformance tests failed", failed);
}
