use iodef::codec::{decode, decode_str, encode, encode_string};
use iodef::enums::*;
use iodef::*;
use proptest::prelude::*;

fn arb_role() -> impl Strategy<Value = ContactRole> {
    prop_oneof![
        Just(ContactRole::Creator),
        Just(ContactRole::Reporter),
        Just(ContactRole::Irt),
        Just(ContactRole::Victim),
        Just(ContactRole::ExtValue),
        "[a-z]{3,10}".prop_map(|s| ContactRole::from_wire(&s)),
    ]
}

fn arb_ml_string() -> impl Strategy<Value = MlString> {
    (
        "[a-zA-Z][a-zA-Z ]{0,18}",
        proptest::option::of(prop_oneof![Just("en"), Just("fr"), Just("de")]),
        proptest::option::of("t[0-9]{1,3}"),
    )
        .prop_map(|(value, lang, translation_id)| MlString {
            value,
            lang: lang.map(str::to_string),
            translation_id,
        })
}

/// Reals with an exact binary representation, so text round trips are exact.
fn arb_real() -> impl Strategy<Value = f64> {
    (0u32..100_000).prop_map(|n| n as f64 / 4.0)
}

fn arb_contact() -> impl Strategy<Value = Contact> {
    (
        arb_role(),
        proptest::option::of("[a-z]{3,10}"),
        proptest::collection::vec(arb_ml_string(), 0..3),
        proptest::collection::vec("[a-z]{1,8}@example\\.(com|org)", 0..3),
    )
        .prop_map(|(role, ext_role, names, emails)| Contact {
            role: Some(role),
            ext_role,
            contact_type: Some(ContactType::Organization),
            contact_names: names,
            emails: emails.into_iter().map(Email::new).collect(),
            ..Default::default()
        })
}

fn arb_counter() -> impl Strategy<Value = Counter> {
    arb_real().prop_map(|value| Counter {
        value: Some(value),
        counter_type: Some(CounterType::Count),
        unit: Some(CounterUnit::Host),
        ..Default::default()
    })
}

fn arb_incident() -> impl Strategy<Value = Incident> {
    (
        "[0-9]{1,8}",
        proptest::collection::vec(arb_contact(), 1..4),
        proptest::collection::vec(arb_ml_string(), 0..3),
        proptest::collection::vec(arb_counter(), 0..3),
        proptest::option::of(0i64..65536),
    )
        .prop_map(|(id, contacts, descriptions, counters, port)| {
            let mut incident = Incident::new(
                IncidentPurpose::Reporting,
                IncidentId::new(id, "csirt.example.com"),
                "2015-07-18T09:00:00-05:00",
            );
            incident.contacts = contacts;
            incident.descriptions = descriptions;
            if !counters.is_empty() {
                incident.assessments.push(Assessment {
                    counters,
                    ..Default::default()
                });
            }
            if let Some(port) = port {
                let mut system = System::new(
                    SystemCategory::Target,
                    Node::from_address(Address::new("192.0.2.1", AddressCategory::Ipv4Addr)),
                );
                system.services.push(Service {
                    port: Some(port),
                    ..Default::default()
                });
                incident.event_data.push(EventData {
                    systems: vec![system],
                    ..Default::default()
                });
            }
            incident
        })
}

fn arb_document() -> impl Strategy<Value = IodefDocument> {
    proptest::collection::vec(arb_incident(), 1..3).prop_map(|incidents| {
        let mut doc = IodefDocument::new("en");
        doc.incidents = incidents;
        doc
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // decode(encode(r)) == r for programmatically built trees
    #[test]
    fn decode_inverts_encode(doc in arb_document()) {
        let value = encode(&doc).expect("encode should succeed");
        let back = decode(&value).expect("decode should succeed");
        prop_assert_eq!(back, doc);
    }

    // encode(decode(encode(r))) is byte-identical to encode(r)
    #[test]
    fn encoding_is_stable(doc in arb_document()) {
        let text1 = encode_string(&doc).expect("encode should succeed");
        let doc2 = decode_str(&text1).expect("re-decode should succeed");
        let text2 = encode_string(&doc2).expect("re-encode should succeed");
        prop_assert_eq!(text1, text2);
    }

    // Bare MLStrings stay bare; tagged ones become objects.
    #[test]
    fn ml_string_shape_follows_tags(s in arb_ml_string()) {
        let value = serde_json::to_value(&s).unwrap();
        if s.lang.is_none() && s.translation_id.is_none() {
            prop_assert!(value.is_string());
        } else {
            prop_assert!(value.is_object());
        }
        let back: MlString = serde_json::from_value(value).unwrap();
        prop_assert_eq!(back, s);
    }
}
