use super::common::load_suite;
use iodef::codec::{decode_str, encode_string};

#[derive(Debug, serde::Deserialize)]
struct TestCase {
    name: String,
    id: String,
    input: String,
    expected: Expected,
}

#[derive(Debug, serde::Deserialize)]
struct Expected {
    identical: bool,
}

#[test]
fn roundtrip_conformance_suite() {
    let cases: Vec<TestCase> = load_suite("roundtrip/suite.yaml");

    let mut passed = 0;
    let mut failed = 0;

    for case in &cases {
        // Step 1: decode → encode
        let doc1 = match decode_str(&case.input) {
            Ok(d) => d,
            Err(e) => {
                eprintln!(
                    "  FAIL [{}] {}: initial decode error: {}",
                    case.id, case.name, e
                );
                failed += 1;
                continue;
            }
        };
        let json1 = match encode_string(&doc1) {
            Ok(j) => j,
            Err(e) => {
                eprintln!("  FAIL [{}] {}: encode error: {}", case.id, case.name, e);
                failed += 1;
                continue;
            }
        };

        // Step 2: decode again → encode again
        let doc2 = match decode_str(&json1) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("  FAIL [{}] {}: re-decode error: {}", case.id, case.name, e);
                eprintln!("    Encoded JSON:\n{}", json1);
                failed += 1;
                continue;
            }
        };
        let json2 = encode_string(&doc2).unwrap();

        // Step 3: the tree is stable and the text is byte-identical
        if doc1 != doc2 {
            eprintln!("  FAIL [{}] {}: tree changed on re-decode", case.id, case.name);
            failed += 1;
        } else if json1 != json2 {
            eprintln!("  FAIL [{}] {}: encoding not stable", case.id, case.name);
            eprintln!("    First:  {}", json1);
            eprintln!("    Second: {}", json2);
            failed += 1;
        } else if case.expected.identical && json1 != case.input.trim() {
            eprintln!("  FAIL [{}] {}: encoding differs from input", case.id, case.name);
            eprintln!("    Input:   {}", case.input.trim());
            eprintln!("    Encoded: {}", json1);
            failed += 1;
        } else {
            passed += 1;
        }
    }

    eprintln!(
        "\nRound-trip conformance: {} passed, {} failed out of {} total",
        passed,
        failed,
        cases.len()
    );

    assert_eq!(failed, 0, "{} round-trip conformance tests failed", failed);
}
