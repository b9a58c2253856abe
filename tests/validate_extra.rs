use iodef::enums::*;
use iodef::validate::{ValidationReport, check, validate};
use iodef::*;
use serde_json::json;

const MINIMAL: &str = r#"{"version":"2.0","lang":"en","Incident":[{"purpose":"reporting","restriction":"private","IncidentID":{"id":"492382","name":"csirt.example.com"},"GenerationTime":"2015-07-18T09:00:00-05:00","Contact":[{"role":"creator","type":"organization","Email":[{"EmailTo":"contact@csirt.example.com"}]}]}]}"#;

/// Helper: decode then validate.
fn report_for(input: &str) -> ValidationReport {
    let doc = decode_str(input).expect("decode should succeed");
    validate(&doc)
}

fn minimal_incident() -> Incident {
    let mut incident = Incident::new(
        IncidentPurpose::Reporting,
        IncidentId::new("492382", "csirt.example.com"),
        "2015-07-18T09:00:00-05:00",
    );
    incident.contacts.push(Contact::new(ContactRole::Creator, ContactType::Organization));
    incident
}

fn document_with(incident: Incident) -> IodefDocument {
    let mut doc = IodefDocument::new("en");
    doc.incidents.push(incident);
    doc
}

// ─── Minimal document ───────────────────────────────────────────────────────

#[test]
fn minimal_document_is_valid_and_reencodes_identically() {
    let doc = decode_str(MINIMAL).expect("decode should succeed");
    let report = validate(&doc);
    assert!(report.is_valid(), "unexpected violations: {:?}", report);
    assert_eq!(encode_string(&doc).unwrap(), MINIMAL);
}

#[test]
fn built_document_matches_decoded_document() {
    let mut incident = minimal_incident();
    incident.restriction = Some(Restriction::Private);
    incident.contacts[0]
        .emails
        .push(Email::new("contact@csirt.example.com"));
    let built = document_with(incident);
    assert_eq!(built, decode_str(MINIMAL).unwrap());
}

// ─── Required slots ─────────────────────────────────────────────────────────

#[test]
fn missing_generation_time_is_reported_once() {
    let input = MINIMAL.replace(r#""GenerationTime":"2015-07-18T09:00:00-05:00","#, "");
    let report = report_for(&input);
    assert_eq!(report.len(), 1, "got: {:?}", report);
    assert_eq!(
        report.get("IODEF-Document:Incident(0)/Incident:GenerationTime"),
        Some("required")
    );
    assert_eq!(report.keys_ending_with("Incident:GenerationTime").count(), 1);
}

#[test]
fn empty_document_reports_each_missing_root_slot() {
    let report = report_for("{}");
    let keys: Vec<&str> = report.keys().collect();
    assert_eq!(
        keys,
        vec![
            "IODEF-Document:Incident",
            "IODEF-Document:lang",
            "IODEF-Document:version",
        ]
    );
}

#[test]
fn empty_incident_array_counts_as_missing() {
    let report = report_for(r#"{"version":"2.0","lang":"en","Incident":[]}"#);
    assert_eq!(report.get("IODEF-Document:Incident"), Some("required"));
}

#[test]
fn every_violation_is_collected() {
    let mut incident = Incident::default();
    incident.contacts.push(Contact::default());
    let report = validate(&document_with(incident));
    for key in [
        "IODEF-Document:Incident(0)/Incident:purpose",
        "IODEF-Document:Incident(0)/Incident:IncidentID",
        "IODEF-Document:Incident(0)/Incident:GenerationTime",
        "IODEF-Document:Incident(0)/Incident:Contact(0)/Contact:role",
        "IODEF-Document:Incident(0)/Incident:Contact(0)/Contact:type",
    ] {
        assert_eq!(report.get(key), Some("required"), "missing {}", key);
    }
    assert_eq!(report.len(), 5, "got: {:?}", report);
}

// ─── ext-value pairing ──────────────────────────────────────────────────────

#[test]
fn standalone_contact_reports_missing_ext_role() {
    let contact = Contact::new(ContactRole::ExtValue, ContactType::Person);
    let mut report = ValidationReport::new();
    assert!(!check(&contact, &mut report, ""));
    assert_eq!(report.len(), 1);
    assert_eq!(
        report.get("Contact:ext-role"),
        Some("required when role is ext-value")
    );
}

#[test]
fn stray_ext_role_is_misuse() {
    let mut contact = Contact::new(ContactRole::Creator, ContactType::Person);
    contact.ext_role = Some("ombudsman".to_string());
    let mut report = ValidationReport::new();
    check(&contact, &mut report, "");
    assert_eq!(
        report.get("Contact:ext-role"),
        Some("must be absent unless role is ext-value")
    );
}

#[test]
fn ext_role_builder_is_valid() {
    let contact = Contact::new(ContactRole::Creator, ContactType::Person).with_ext_role("ombudsman");
    let mut report = ValidationReport::new();
    assert!(check(&contact, &mut report, ""));
    assert!(report.is_empty());
}

#[test]
fn nested_ext_violation_carries_full_path() {
    let mut incident = minimal_incident();
    incident.contacts[0].role = Some(ContactRole::ExtValue);
    let report = validate(&document_with(incident));
    assert_eq!(
        report.keys().collect::<Vec<_>>(),
        vec!["IODEF-Document:Incident(0)/Incident:Contact(0)/Contact:ext-role"]
    );
}

// ─── Groups ─────────────────────────────────────────────────────────────────

#[test]
fn observable_with_two_payloads_reports_one_violation() {
    let mut observable = Observable::from_address(Address::new("192.0.2.7", AddressCategory::Ipv4Addr));
    observable.system = Some(System::new(
        SystemCategory::Source,
        Node::from_address(Address::new("192.0.2.1", AddressCategory::Ipv4Addr)),
    ));
    let mut report = ValidationReport::new();
    assert!(!check(&observable, &mut report, ""));
    assert_eq!(report.len(), 1);
    let (key, message) = report.iter().next().unwrap();
    assert!(key.starts_with("Observable:System|Address|"), "key: {}", key);
    assert!(message.starts_with("only one of System, Address,"), "message: {}", message);
    assert!(message.ends_with("is allowed, found 2"), "message: {}", message);
}

#[test]
fn method_without_any_member_reports_group() {
    let mut incident = minimal_incident();
    incident.methods.push(Method::default());
    let report = validate(&document_with(incident));
    assert_eq!(
        report.get("IODEF-Document:Incident(0)/Incident:Method(0)/Method:Reference|Description|AttackPattern|Vulnerability|Weakness"),
        Some("at least one of Reference, Description, AttackPattern, Vulnerability, Weakness is required")
    );
}

#[test]
fn nested_incident_inside_observable_is_walked() {
    let observable = Observable::from_incident(Incident::default());
    let mut report = ValidationReport::new();
    check(&observable, &mut report, "");
    assert_eq!(
        report.get("Observable:Incident/Incident:purpose"),
        Some("required")
    );
    assert_eq!(
        report.get("Observable:Incident/Incident:Contact"),
        Some("required")
    );
}

#[test]
fn indicator_needs_exactly_one_body() {
    let indicator = Indicator {
        indicator_id: Some(IndicatorId::new("G90823490", "csirt.example.com", "1")),
        ..Default::default()
    };
    let mut report = ValidationReport::new();
    check(&indicator, &mut report, "");
    assert_eq!(
        report.get("Indicator:Observable|ObservableReference|IndicatorExpression|IndicatorReference"),
        Some("exactly one of Observable, ObservableReference, IndicatorExpression, IndicatorReference is required")
    );
}

// ─── Report behavior ────────────────────────────────────────────────────────

#[test]
fn check_result_matches_report() {
    for input in [MINIMAL, "{}", r#"{"version":"2.0"}"#] {
        let doc = decode_str(input).unwrap();
        let mut report = ValidationReport::new();
        let ok = check(&doc, &mut report, "");
        assert_eq!(ok, report.is_valid(), "input: {}", input);
    }
}

#[test]
fn prefix_is_prepended_to_every_key() {
    let contact = Contact::default();
    let mut report = ValidationReport::new();
    check(&contact, &mut report, "Outer:Contact(3)/");
    assert!(report.keys().all(|k| k.starts_with("Outer:Contact(3)/Contact:")));
    assert_eq!(report.len(), 2);
}

#[test]
fn validation_is_deterministic_and_read_only() {
    let doc = decode_str(r#"{"Incident":[{"Contact":[{},{}],"Method":[{}]}]}"#).unwrap();
    let before = doc.clone();
    let first = validate(&doc);
    let second = validate(&doc);
    assert_eq!(first, second);
    assert_eq!(doc, before);
    let keys: Vec<&str> = first.keys().collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
}

#[test]
fn merge_keeps_existing_messages() {
    let mut a = ValidationReport::new();
    a.insert("X:a", "first");
    let mut b = ValidationReport::new();
    b.insert("X:a", "second");
    b.insert("X:b", "other");
    a.merge(b);
    assert_eq!(a.get("X:a"), Some("first"));
    assert_eq!(a.get("X:b"), Some("other"));
    assert_eq!(a.into_map().len(), 2);
}

// ─── load ───────────────────────────────────────────────────────────────────

#[test]
fn load_accepts_valid_document() {
    let doc = load(MINIMAL).expect("valid document should load");
    assert_eq!(doc.incidents.len(), 1);
}

#[test]
fn load_returns_every_violation() {
    match load(r#"{"version":"2.0","lang":"en"}"#) {
        Err(IodefError::Invalid(report)) => {
            assert_eq!(report.get("IODEF-Document:Incident"), Some("required"));
        }
        other => panic!("expected Invalid, got {:?}", other),
    }
}

#[test]
fn load_surfaces_decode_errors() {
    match load("[1, 2]") {
        Err(IodefError::Decode(err)) => assert_eq!(err.kind, DecodeErrorKind::NotAnObject),
        other => panic!("expected Decode, got {:?}", other),
    }
}

// ─── Per-record rules ───────────────────────────────────────────────────────

/// Helper: decode `invalid` as `R`, check it standalone and compare the report
/// against `expected` exactly, then confirm `valid` passes.
fn assert_rules<R: iodef::validate::Check + serde::de::DeserializeOwned>(
    invalid: serde_json::Value,
    expected: &[(&str, &str)],
    valid: serde_json::Value,
) {
    let record: R = decode_record(&invalid).expect("invalid fixture should decode");
    let mut report = ValidationReport::new();
    assert!(!check(&record, &mut report, ""), "expected violations for {}", invalid);
    let got: Vec<(&str, &str)> = report.iter().collect();
    let mut want = expected.to_vec();
    want.sort_unstable();
    assert_eq!(got, want, "input: {}", invalid);

    let record: R = decode_record(&valid).expect("valid fixture should decode");
    let mut report = ValidationReport::new();
    assert!(check(&record, &mut report, ""), "unexpected violations {:?} for {}", report, valid);
}

const REQUIRED: &str = "required";

#[test]
fn hash_data_needs_scope_and_a_hash() {
    assert_rules::<HashData>(
        json!({"HashTargetID": "t1"}),
        &[
            ("HashData:scope", REQUIRED),
            ("HashData:Hash|FuzzyHash", "at least one of Hash, FuzzyHash is required"),
        ],
        json!({"scope": "file-contents", "Hash": [{"DigestMethod": "sha256", "DigestValue": "ab12"}]}),
    );
    assert_rules::<HashData>(
        json!({"scope": "file-contents", "Hash": [{}]}),
        &[
            ("HashData:Hash(0)/Hash:DigestMethod", REQUIRED),
            ("HashData:Hash(0)/Hash:DigestValue", REQUIRED),
        ],
        json!({"scope": "file-contents", "FuzzyHash": [{"FuzzyHashValue": [{"value": "3:abc", "dtype": "string"}]}]}),
    );
}

#[test]
fn hash_and_fuzzy_hash_required_slots() {
    assert_rules::<Hash>(
        json!({"CanonicalizationMethod": "c14n"}),
        &[("Hash:DigestMethod", REQUIRED), ("Hash:DigestValue", REQUIRED)],
        json!({"DigestMethod": "sha256", "DigestValue": "ab12"}),
    );
    assert_rules::<FuzzyHash>(
        json!({"FuzzyHashValue": []}),
        &[("FuzzyHash:FuzzyHashValue", REQUIRED)],
        json!({"FuzzyHashValue": [{"value": "3:abc", "dtype": "string"}]}),
    );
}

#[test]
fn bulk_observable_format_needs_exactly_one_body() {
    assert_rules::<BulkObservableFormat>(
        json!({}),
        &[("BulkObservableFormat:Hash|AdditionalData", "exactly one of Hash, AdditionalData is required")],
        json!({"Hash": {"DigestMethod": "sha256", "DigestValue": "ab12"}}),
    );
    assert_rules::<BulkObservableFormat>(
        json!({
            "Hash": {"DigestMethod": "sha256", "DigestValue": "ab12"},
            "AdditionalData": [{"dtype": "string", "value": "x"}]
        }),
        &[("BulkObservableFormat:Hash|AdditionalData", "only one of Hash, AdditionalData is allowed, found 2")],
        json!({"AdditionalData": [{"dtype": "string", "value": "x"}]}),
    );
}

#[test]
fn bulk_observable_needs_its_list() {
    assert_rules::<BulkObservable>(
        json!({"type": "asn"}),
        &[("BulkObservable:BulkObservableList", REQUIRED)],
        json!({"type": "asn", "BulkObservableList": "64496\n64497"}),
    );
}

#[test]
fn reference_style_groups() {
    assert_rules::<IndicatorReference>(
        json!({"version": "1"}),
        &[("IndicatorReference:uid-ref|euid-ref", "at least one of uid-ref, euid-ref is required")],
        json!({"euid-ref": "ext-ind-7"}),
    );
    assert_rules::<AttackPhase>(
        json!({}),
        &[("AttackPhase:AttackPhaseID|URL|Description", "at least one of AttackPhaseID, URL, Description is required")],
        json!({"AttackPhaseID": ["TA0001"]}),
    );
    assert_rules::<ThreatActor>(
        json!({"restriction": "amber"}),
        &[("ThreatActor:ThreatActorID|URL|Description", "at least one of ThreatActorID, URL, Description is required")],
        json!({"ThreatActorID": ["APT-EXAMPLE"]}),
    );
    assert_rules::<Campaign>(
        json!({}),
        &[("Campaign:CampaignID|URL|Description", "at least one of CampaignID, URL, Description is required")],
        json!({"URL": ["https://intel.example.com/campaign/1"]}),
    );
    assert_rules::<ServiceName>(
        json!({}),
        &[("ServiceName:IANAService|URL|Description", "at least one of IANAService, URL, Description is required")],
        json!({"IANAService": "http"}),
    );
}

#[test]
fn software_type_and_its_reference() {
    assert_rules::<SoftwareType>(
        json!({}),
        &[("SoftwareType:SoftwareReference|URL|Description", "at least one of SoftwareReference, URL, Description is required")],
        json!({"SoftwareReference": {"value": "cpe:2.3:a:example:httpd:2.4", "spec-name": "cpe"}}),
    );
    assert_rules::<SoftwareType>(
        json!({"SoftwareReference": {}}),
        &[("SoftwareType:SoftwareReference/SoftwareReference:spec-name", REQUIRED)],
        json!({"Description": ["web server"]}),
    );
    assert_rules::<SoftwareReference>(
        json!({"spec-name": "ext-value"}),
        &[("SoftwareReference:ext-spec-name", "required when spec-name is ext-value")],
        json!({"spec-name": "ext-value", "ext-spec-name": "vendor-catalogue"}),
    );
}

#[test]
fn detection_pattern_needs_application_and_content() {
    assert_rules::<DetectionPattern>(
        json!({"restriction": "green"}),
        &[
            ("DetectionPattern:Application", REQUIRED),
            ("DetectionPattern:Description|DetectionConfiguration", "at least one of Description, DetectionConfiguration is required"),
        ],
        json!({"Application": {"URL": ["https://ids.example.com"]}, "DetectionConfiguration": ["alert tcp any any -> any 80"]}),
    );
}

#[test]
fn domain_pieces_required_slots() {
    assert_rules::<Nameservers>(
        json!({}),
        &[("Nameservers:Server", REQUIRED), ("Nameservers:Address", REQUIRED)],
        json!({"Server": "ns1.example.com", "Address": [{"value": "192.0.2.53", "category": "ipv4-addr"}]}),
    );
    assert_rules::<RegistryHandle>(
        json!({}),
        &[("RegistryHandle:handle", REQUIRED), ("RegistryHandle:registry", REQUIRED)],
        json!({"handle": "EXAMPLE-ARIN", "registry": "arin"}),
    );
    assert_rules::<PostalAddress>(
        json!({"type": "street"}),
        &[("PostalAddress:PAddress", REQUIRED)],
        json!({"type": "street", "PAddress": "1 Main St"}),
    );
    assert_rules::<PostalAddress>(
        json!({"type": "ext-value", "PAddress": "PO Box 1"}),
        &[("PostalAddress:ext-type", "required when type is ext-value")],
        json!({"type": "ext-value", "ext-type": "po-box", "PAddress": "PO Box 1"}),
    );
}

#[test]
fn registry_keys_required_slots() {
    assert_rules::<RegistryKey>(
        json!({"registryaction": "add-key"}),
        &[("Key:KeyName", REQUIRED)],
        json!({"registryaction": "add-key", "KeyName": "HKLM\\Software\\Run"}),
    );
    assert_rules::<WindowsRegistryKeysModified>(
        json!({}),
        &[("WindowsRegistryKeysModified:Key", REQUIRED)],
        json!({"Key": [{"KeyName": "HKLM\\Software\\Run"}]}),
    );
    assert_rules::<WindowsRegistryKeysModified>(
        json!({"Key": [{}]}),
        &[("WindowsRegistryKeysModified:Key(0)/Key:KeyName", REQUIRED)],
        json!({"Key": [{"KeyName": "HKCU\\Run", "KeyValue": "evil.exe"}]}),
    );
}

#[test]
fn certificates_required_slots() {
    assert_rules::<Certificate>(
        json!({"Description": ["leaf"]}),
        &[("Certificate:X509Data", REQUIRED)],
        json!({"X509Data": "MIIBszCCAVmgAwIBAgIJ"}),
    );
    assert_rules::<CertificateData>(
        json!({}),
        &[("CertificateData:Certificate", REQUIRED)],
        json!({"Certificate": [{"X509Data": "MIIBszCCAVmgAwIBAgIJ"}]}),
    );
    assert_rules::<CertificateData>(
        json!({"Certificate": [{}]}),
        &[("CertificateData:Certificate(0)/Certificate:X509Data", REQUIRED)],
        json!({"restriction": "amber", "Certificate": [{"X509Data": "MIIB"}]}),
    );
}

#[test]
fn files_required_slots() {
    assert_rules::<FileData>(
        json!({"restriction": "private"}),
        &[("FileData:File", REQUIRED)],
        json!({"File": [{"FileName": "dropper.exe"}]}),
    );
    assert_rules::<File>(
        json!({"FileName": "dropper.exe", "HashData": {}}),
        &[
            ("File:HashData/HashData:scope", REQUIRED),
            ("File:HashData/HashData:Hash|FuzzyHash", "at least one of Hash, FuzzyHash is required"),
        ],
        json!({"FileName": "dropper.exe", "HashData": {"scope": "file-contents", "Hash": [{"DigestMethod": "sha256", "DigestValue": "ab12"}]}}),
    );
}

#[test]
fn identifiers_required_slots() {
    assert_rules::<AlternativeId>(
        json!({}),
        &[("AlternativeID:IncidentID", REQUIRED)],
        json!({"IncidentID": [{"id": "7", "name": "partner.example.org"}]}),
    );
    assert_rules::<AlternativeId>(
        json!({"IncidentID": [{}]}),
        &[
            ("AlternativeID:IncidentID(0)/IncidentID:id", REQUIRED),
            ("AlternativeID:IncidentID(0)/IncidentID:name", REQUIRED),
        ],
        json!({"IncidentID": [{"id": "7", "name": "partner.example.org", "instance": "2"}]}),
    );
    assert_rules::<AlternativeIndicatorId>(
        json!({}),
        &[("AlternativeIndicatorID:IndicatorID", REQUIRED)],
        json!({"IndicatorID": [{"id": "G1", "name": "csirt.example.com", "version": "1"}]}),
    );
    assert_rules::<ObservableReference>(
        json!({}),
        &[("ObservableReference:uid-ref", REQUIRED)],
        json!({"uid-ref": "obs-1"}),
    );
}

#[test]
fn monetary_impact_needs_value() {
    assert_rules::<MonetaryImpact>(
        json!({"currency": "USD"}),
        &[("MonetaryImpact:value", REQUIRED)],
        json!({"value": "1000", "currency": "USD"}),
    );
}

#[test]
fn records_without_own_rules_check_their_children() {
    assert_rules::<EmailData>(
        json!({"EmailHeaderField": [{"value": "X-Spam: yes"}], "HashData": [{}]}),
        &[
            ("EmailData:EmailHeaderField(0)/ExtensionType:dtype", REQUIRED),
            ("EmailData:HashData(0)/HashData:scope", REQUIRED),
            ("EmailData:HashData(0)/HashData:Hash|FuzzyHash", "at least one of Hash, FuzzyHash is required"),
        ],
        json!({"EmailFrom": "attacker@example.net", "EmailSubject": "invoice"}),
    );
    assert_rules::<RecordData>(
        json!({"RecordPattern": [{}]}),
        &[
            ("RecordData:RecordPattern(0)/RecordPattern:value", REQUIRED),
            ("RecordData:RecordPattern(0)/RecordPattern:type", REQUIRED),
        ],
        json!({"RecordPattern": [{"value": "cmd.exe /c", "type": "regex"}]}),
    );
    assert_rules::<RecordPattern>(
        json!({"value": "4d5a", "type": "ext-value"}),
        &[("RecordPattern:ext-type", "required when type is ext-value")],
        json!({"value": "4d5a", "type": "ext-value", "ext-type": "yara"}),
    );
}

// ─── Shared shapes ──────────────────────────────────────────────────────────

#[test]
fn shared_shapes_key_by_their_class_name() {
    let method: Method = decode_record(&json!({
        "AttackPattern": [{"ContentID": "CAPEC-1"}],
        "AdditionalData": [{"value": "x"}]
    }))
    .unwrap();
    let mut report = ValidationReport::new();
    check(&method, &mut report, "");
    assert_eq!(report.get("Method:AttackPattern(0)/StructuredInfo:SpecID"), Some(REQUIRED));
    assert_eq!(report.get("Method:AdditionalData(0)/ExtensionType:dtype"), Some(REQUIRED));
    assert_eq!(report.len(), 2);
}
