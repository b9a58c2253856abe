use iodef::enums::*;
use iodef::validate::{ValidationReport, check};
use iodef::*;
use proptest::prelude::*;

fn violations(record_report: impl FnOnce(&mut ValidationReport) -> bool) -> ValidationReport {
    let mut report = ValidationReport::new();
    let ok = record_report(&mut report);
    assert_eq!(ok, report.is_valid(), "return value must match the report");
    report
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // A violation is flagged iff exactly one of {sentinel, ext slot} holds.
    #[test]
    fn contact_role_pairing(sentinel in any::<bool>(), ext_set in any::<bool>(), ext in "[a-z]{1,10}") {
        let mut contact = Contact::new(
            if sentinel { ContactRole::ExtValue } else { ContactRole::Tech },
            ContactType::Person,
        );
        if ext_set {
            contact.ext_role = Some(ext);
        }
        let report = violations(|r| check(&contact, r, ""));
        prop_assert_eq!(report.get("Contact:ext-role").is_some(), sentinel != ext_set);
        prop_assert_eq!(report.len(), usize::from(sentinel != ext_set));
    }

    #[test]
    fn incident_restriction_pairing(sentinel in any::<bool>(), ext_set in any::<bool>()) {
        let mut incident = Incident::new(
            IncidentPurpose::Watch,
            IncidentId::new("1", "csirt.example.com"),
            "2015-07-18T09:00:00-05:00",
        );
        incident.contacts.push(Contact::new(ContactRole::Creator, ContactType::Organization));
        incident.restriction = Some(if sentinel { Restriction::ExtValue } else { Restriction::Amber });
        if ext_set {
            incident.ext_restriction = Some("tlp-amber-strict".to_string());
        }
        let report = violations(|r| check(&incident, r, ""));
        prop_assert_eq!(report.get("Incident:ext-restriction").is_some(), sentinel != ext_set);
    }

    // An absent enumerated slot behaves like a non-sentinel value.
    #[test]
    fn absent_value_with_ext_is_misuse(ext_set in any::<bool>()) {
        let email = Email {
            email_to: Some("a@example.com".to_string()),
            email_type: None,
            ext_email_type: ext_set.then(|| "pager".to_string()),
            ..Default::default()
        };
        let report = violations(|r| check(&email, r, ""));
        prop_assert_eq!(report.get("Email:ext-type").is_some(), ext_set);
    }

    // String-valued slots follow the same convention.
    #[test]
    fn spec_id_pairing(sentinel in any::<bool>(), ext_set in any::<bool>()) {
        let info = StructuredInfo {
            spec_id: Some(if sentinel { "ext-value".to_string() } else { "urn:example:capec".to_string() }),
            ext_spec_id: ext_set.then(|| "vendor-db".to_string()),
            content_id: Some("X-1".to_string()),
            ..Default::default()
        };
        let report = violations(|r| check(&info, r, ""));
        prop_assert_eq!(report.get("StructuredInfo:ext-SpecID").is_some(), sentinel != ext_set);
    }
}
