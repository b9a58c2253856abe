use iodef::enums::*;
use iodef::validate::{ValidationReport, check};
use iodef::*;
use proptest::prelude::*;

const METHOD_GROUP: &str = "Method:Reference|Description|AttackPattern|Vulnerability|Weakness";
const OBSERVABLE_GROUP: &str = "Observable:System|Address|DomainData|EmailData|Service|WindowsRegistryKeysModified|FileData|CertificateData|RegistryHandle|RecordData|EventData|Incident|Expectation|Reference|Assessment|DetectionPattern|HistoryItem|BulkObservable|AdditionalData";

fn reference() -> Reference {
    Reference {
        urls: vec!["https://capec.mitre.org/".to_string()],
        ..Default::default()
    }
}

fn structured_info() -> StructuredInfo {
    StructuredInfo {
        spec_id: Some("urn:example:cwe".to_string()),
        content_id: Some("CWE-79".to_string()),
        ..Default::default()
    }
}

fn valid_system() -> System {
    System::new(
        SystemCategory::Source,
        Node::from_address(Address::new("192.0.2.1", AddressCategory::Ipv4Addr)),
    )
}

/// Fill `count` distinct observable payload slots with valid records.
fn observable_with(payloads: &[usize]) -> Observable {
    let mut obs = Observable::default();
    for &slot in payloads {
        match slot {
            0 => obs.system = Some(valid_system()),
            1 => obs.address = Some(Address::new("198.51.100.1", AddressCategory::Ipv4Addr)),
            2 => obs.reference = Some(reference()),
            3 => {
                obs.registry_handle = Some(RegistryHandle {
                    handle: Some("EXAMPLE-ARIN".to_string()),
                    registry: Some(Registry::Arin),
                    ext_registry: None,
                })
            }
            _ => {
                obs.additional_data = vec![ExtensionType::new(ExtensionDtype::String, "blob")]
            }
        }
    }
    obs
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // at least one of: neither set fails with one grouped message, any set passes
    #[test]
    fn method_at_least_one(
        with_reference in any::<bool>(),
        with_description in any::<bool>(),
        with_weakness in any::<bool>(),
    ) {
        let method = Method {
            references: if with_reference { vec![reference()] } else { vec![] },
            descriptions: if with_description { vec![MlString::new("phishing")] } else { vec![] },
            weaknesses: if with_weakness { vec![structured_info()] } else { vec![] },
            ..Default::default()
        };
        let mut report = ValidationReport::new();
        let ok = check(&method, &mut report, "");
        let any = with_reference || with_description || with_weakness;
        prop_assert_eq!(ok, any);
        prop_assert_eq!(report.len(), usize::from(!any));
        prop_assert_eq!(report.get(METHOD_GROUP).is_some(), !any);
    }

    // exactly one of: the one-of verdict depends only on how many payloads are set
    #[test]
    fn observable_exactly_one(payloads in proptest::sample::subsequence(vec![0usize, 1, 2, 3, 4], 0..=5)) {
        let obs = observable_with(&payloads);
        let mut report = ValidationReport::new();
        let ok = check(&obs, &mut report, "");
        prop_assert_eq!(ok, payloads.len() == 1);
        // valid payloads contribute nothing, so the group message is the only entry
        prop_assert_eq!(report.len(), usize::from(payloads.len() != 1));
        if let Some(message) = report.get(OBSERVABLE_GROUP) {
            if payloads.is_empty() {
                prop_assert!(message.starts_with("exactly one of"));
            } else {
                let expected_suffix = format!("found {}", payloads.len());
                prop_assert!(message.ends_with(&expected_suffix));
            }
        }
    }
}
