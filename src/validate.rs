//! Structural validation of a populated record tree.
//!
//! [`check`] walks a record and every descendant, recording **all** violations
//! into a [`ValidationReport`] rather than stopping at the first. Validation
//! does not modify the tree.
//!
//! Keys name where a violation sits. A field under a record is
//! `TypeName:field`; descending into a child adds `TypeName:field/`, or
//! `TypeName:field(i)/` for the i-th element of a repeated slot. A violation of
//! `GenerationTime` in the first incident of a document is therefore keyed
//! `IODEF-Document:Incident(0)/Incident:GenerationTime`.
//!
//! Each record type's rules live in its [`Check`] impl below, expressed only
//! through [`Checker`] calls, so the wording and keying of every rule is decided
//! in one place.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::ext::{EXT_VALUE, ExtViolation, Extensible, check_ext_attr};
use crate::presence::Presence;
use crate::types::*;

const MSG_REQUIRED: &str = "required";
const MSG_AT_LEAST_ONE: &str = "at least one of";
const MSG_EXACTLY_ONE: &str = "exactly one of";
const MSG_ONLY_ONE: &str = "only one of";

/// Path key → violation message. Empty means valid.
///
/// Backed by a `BTreeMap`, so iteration order is stable across runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    entries: BTreeMap<String, String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Keys whose last segments match `suffix`, e.g. `Contact:ext-role`.
    pub fn keys_ending_with<'a>(&'a self, suffix: &'a str) -> impl Iterator<Item = &'a str> {
        self.keys().filter(move |k| k.ends_with(suffix))
    }

    /// Fold another report in. Entries already present keep their message.
    pub fn merge(&mut self, other: ValidationReport) {
        for (k, v) in other.entries {
            self.entries.entry(k).or_insert(v);
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.entries.insert(key.into(), message.into());
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A record type the validator can walk.
pub trait Check {
    /// The RFC class name, used as the type segment of path keys.
    ///
    /// Elements sharing a class key by the class: an `AttackPattern` reports
    /// as `StructuredInfo:…` under its `Method:AttackPattern(i)/` prefix.
    const NAME: &'static str;

    /// Declare this record's rules against `v`.
    fn check_fields(&self, v: &mut Checker<'_>);
}

/// Rule recorder handed to [`Check::check_fields`] for one record.
pub struct Checker<'r> {
    report: &'r mut ValidationReport,
    prefix: &'r str,
    type_name: &'static str,
    ok: bool,
}

impl Checker<'_> {
    fn key(&self, field: &str) -> String {
        format!("{}{}:{}", self.prefix, self.type_name, field)
    }

    fn fail(&mut self, key: String, message: String) {
        trace!(%key, %message, "violation");
        self.report.insert(key, message);
        self.ok = false;
    }

    /// The slot must be set.
    pub fn required(&mut self, field: &str, slot: &impl Presence) {
        if !slot.is_set() {
            self.fail(self.key(field), MSG_REQUIRED.to_string());
        }
    }

    /// At least one of the named slots must be set. One grouped message on failure.
    pub fn at_least_one(&mut self, slots: &[(&str, bool)]) {
        if !slots.iter().any(|(_, set)| *set) {
            let names = group_names(slots);
            self.fail(
                self.key(&names.join("|")),
                format!("{} {} is required", MSG_AT_LEAST_ONE, names.join(", ")),
            );
        }
    }

    /// Exactly one of the named slots must be set.
    pub fn exactly_one(&mut self, slots: &[(&str, bool)]) {
        let count = slots.iter().filter(|(_, set)| *set).count();
        if count == 1 {
            return;
        }
        let names = group_names(slots);
        let message = if count == 0 {
            format!("{} {} is required", MSG_EXACTLY_ONE, names.join(", "))
        } else {
            format!(
                "{} {} is allowed, found {}",
                MSG_ONLY_ONE,
                names.join(", "),
                count
            )
        };
        self.fail(self.key(&names.join("|")), message);
    }

    /// An enumerated slot and its `ext-<field>` partner.
    pub fn ext<E: Extensible + ?Sized>(
        &mut self,
        field: &str,
        value: Option<&E>,
        ext: &Option<String>,
    ) {
        if let Err(violation) = check_ext_attr(value, ext.is_set()) {
            let message = match violation {
                ExtViolation::MissingExt => format!("required when {} is {}", field, EXT_VALUE),
                ExtViolation::MisusedExt => {
                    format!("must be absent unless {} is {}", field, EXT_VALUE)
                }
            };
            self.fail(self.key(&format!("ext-{}", field)), message);
        }
    }

    /// Recurse into a single optional sub-record, if set.
    pub fn child<R: Check>(&mut self, field: &str, child: Option<&R>) {
        if let Some(child) = child {
            let prefix = format!("{}/", self.key(field));
            self.ok &= check(child, self.report, &prefix);
        }
    }

    /// Recurse into every element of a repeated sub-record slot.
    pub fn children<R: Check>(&mut self, field: &str, children: &[R]) {
        for (i, child) in children.iter().enumerate() {
            let prefix = format!("{}({})/", self.key(field), i);
            self.ok &= check(child, self.report, &prefix);
        }
    }
}

fn group_names<'a>(slots: &[(&'a str, bool)]) -> Vec<&'a str> {
    slots.iter().map(|(name, _)| *name).collect()
}

/// Check `record` and its descendants, appending violations to `report` under
/// keys starting with `prefix`.
///
/// Returns `true` iff nothing was recorded for this record or below it.
pub fn check<R: Check>(record: &R, report: &mut ValidationReport, prefix: &str) -> bool {
    let mut checker = Checker {
        report,
        prefix,
        type_name: R::NAME,
        ok: true,
    };
    record.check_fields(&mut checker);
    checker.ok
}

/// Validate a whole document. Keys start at `IODEF-Document:`.
pub fn validate(doc: &IodefDocument) -> ValidationReport {
    let mut report = ValidationReport::new();
    check(doc, &mut report, "");
    debug!(violations = report.len(), "validated IODEF document");
    report
}

impl Check for IodefDocument {
    const NAME: &'static str = "IODEF-Document";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("version", &self.version);
        v.required("lang", &self.lang);
        v.required("Incident", &self.incidents);
        v.children("Incident", &self.incidents);
        v.children("AdditionalData", &self.additional_data);
    }
}

impl Check for Incident {
    const NAME: &'static str = "Incident";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("purpose", &self.purpose);
        v.required("IncidentID", &self.incident_id);
        v.required("GenerationTime", &self.generation_time);
        v.required("Contact", &self.contacts);
        v.ext("purpose", self.purpose.as_ref(), &self.ext_purpose);
        v.ext("status", self.status.as_ref(), &self.ext_status);
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
        v.child("IncidentID", self.incident_id.as_ref());
        v.child("AlternativeID", self.alternative_id.as_ref());
        v.child("History", self.history.as_ref());
        v.children("RelatedActivity", &self.related_activities);
        v.children("Discovery", &self.discoveries);
        v.children("Assessment", &self.assessments);
        v.children("Method", &self.methods);
        v.children("Contact", &self.contacts);
        v.children("EventData", &self.event_data);
        v.children("Indicator", &self.indicators);
        v.children("AdditionalData", &self.additional_data);
    }
}

impl Check for IncidentId {
    const NAME: &'static str = "IncidentID";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("id", &self.id);
        v.required("name", &self.name);
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
    }
}

impl Check for AlternativeId {
    const NAME: &'static str = "AlternativeID";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("IncidentID", &self.incident_ids);
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
        v.children("IncidentID", &self.incident_ids);
    }
}

impl Check for RelatedActivity {
    const NAME: &'static str = "RelatedActivity";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.at_least_one(&[
            ("IncidentID", self.incident_ids.is_set()),
            ("URL", self.urls.is_set()),
            ("ThreatActor", self.threat_actors.is_set()),
            ("Campaign", self.campaigns.is_set()),
            ("IndicatorID", self.indicator_ids.is_set()),
        ]);
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
        v.child("Confidence", self.confidence.as_ref());
        v.children("IncidentID", &self.incident_ids);
        v.children("ThreatActor", &self.threat_actors);
        v.children("Campaign", &self.campaigns);
        v.children("IndicatorID", &self.indicator_ids);
        v.children("AdditionalData", &self.additional_data);
    }
}

impl Check for ThreatActor {
    const NAME: &'static str = "ThreatActor";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.at_least_one(&[
            ("ThreatActorID", self.threat_actor_ids.is_set()),
            ("URL", self.urls.is_set()),
            ("Description", self.descriptions.is_set()),
        ]);
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
        v.children("AdditionalData", &self.additional_data);
    }
}

impl Check for Campaign {
    const NAME: &'static str = "Campaign";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.at_least_one(&[
            ("CampaignID", self.campaign_ids.is_set()),
            ("URL", self.urls.is_set()),
            ("Description", self.descriptions.is_set()),
        ]);
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
        v.children("AdditionalData", &self.additional_data);
    }
}

impl Check for IndicatorId {
    const NAME: &'static str = "IndicatorID";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("id", &self.id);
        v.required("name", &self.name);
        v.required("version", &self.version);
    }
}

impl Check for Confidence {
    const NAME: &'static str = "Confidence";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("rating", &self.rating);
        v.ext("rating", self.rating.as_ref(), &self.ext_rating);
    }
}

impl Check for Contact {
    const NAME: &'static str = "Contact";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("role", &self.role);
        v.required("type", &self.contact_type);
        v.ext("role", self.role.as_ref(), &self.ext_role);
        v.ext("type", self.contact_type.as_ref(), &self.ext_contact_type);
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
        v.children("RegistryHandle", &self.registry_handles);
        v.children("PostalAddress", &self.postal_addresses);
        v.children("Email", &self.emails);
        v.children("Telephone", &self.telephones);
        v.children("Contact", &self.contacts);
        v.children("AdditionalData", &self.additional_data);
    }
}

impl Check for RegistryHandle {
    const NAME: &'static str = "RegistryHandle";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("handle", &self.handle);
        v.required("registry", &self.registry);
        v.ext("registry", self.registry.as_ref(), &self.ext_registry);
    }
}

impl Check for PostalAddress {
    const NAME: &'static str = "PostalAddress";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("PAddress", &self.address);
        v.ext("type", self.address_type.as_ref(), &self.ext_address_type);
    }
}

impl Check for Email {
    const NAME: &'static str = "Email";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("EmailTo", &self.email_to);
        v.ext("type", self.email_type.as_ref(), &self.ext_email_type);
    }
}

impl Check for Telephone {
    const NAME: &'static str = "Telephone";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("TelephoneNumber", &self.telephone_number);
        v.ext("type", self.telephone_type.as_ref(), &self.ext_telephone_type);
    }
}

impl Check for Discovery {
    const NAME: &'static str = "Discovery";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.ext("source", self.source.as_ref(), &self.ext_source);
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
        v.children("Contact", &self.contacts);
        v.children("DetectionPattern", &self.detection_patterns);
    }
}

impl Check for DetectionPattern {
    const NAME: &'static str = "DetectionPattern";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("Application", &self.application);
        v.at_least_one(&[
            ("Description", self.descriptions.is_set()),
            ("DetectionConfiguration", self.detection_configurations.is_set()),
        ]);
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
        v.child("Application", self.application.as_ref());
    }
}

impl Check for Method {
    const NAME: &'static str = "Method";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.at_least_one(&[
            ("Reference", self.references.is_set()),
            ("Description", self.descriptions.is_set()),
            ("AttackPattern", self.attack_patterns.is_set()),
            ("Vulnerability", self.vulnerabilities.is_set()),
            ("Weakness", self.weaknesses.is_set()),
        ]);
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
        v.children("Reference", &self.references);
        v.children("AttackPattern", &self.attack_patterns);
        v.children("Vulnerability", &self.vulnerabilities);
        v.children("Weakness", &self.weaknesses);
        v.children("AdditionalData", &self.additional_data);
    }
}

impl Check for Reference {
    const NAME: &'static str = "Reference";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.at_least_one(&[
            ("ReferenceName", self.reference_name.is_set()),
            ("URL", self.urls.is_set()),
            ("Description", self.descriptions.is_set()),
        ]);
        v.child("ReferenceName", self.reference_name.as_ref());
    }
}

impl Check for ReferenceName {
    const NAME: &'static str = "ReferenceName";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("specIndex", &self.spec_index);
        v.required("ID", &self.id);
    }
}

impl Check for StructuredInfo {
    const NAME: &'static str = "StructuredInfo";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("SpecID", &self.spec_id);
        v.at_least_one(&[
            ("ContentID", self.content_id.is_set()),
            ("RawData", self.raw_data.is_set()),
            ("Reference", self.references.is_set()),
        ]);
        v.ext("SpecID", self.spec_id.as_ref(), &self.ext_spec_id);
        v.children("Reference", &self.references);
        v.children("Platform", &self.platforms);
        v.children("Scoring", &self.scoring);
    }
}

impl Check for Assessment {
    const NAME: &'static str = "Assessment";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.at_least_one(&[
            ("SystemImpact", self.system_impacts.is_set()),
            ("BusinessImpact", self.business_impacts.is_set()),
            ("TimeImpact", self.time_impacts.is_set()),
            ("MonetaryImpact", self.monetary_impacts.is_set()),
            ("IntendedImpact", self.intended_impacts.is_set()),
        ]);
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
        v.child("Confidence", self.confidence.as_ref());
        v.children("SystemImpact", &self.system_impacts);
        v.children("BusinessImpact", &self.business_impacts);
        v.children("TimeImpact", &self.time_impacts);
        v.children("MonetaryImpact", &self.monetary_impacts);
        v.children("IntendedImpact", &self.intended_impacts);
        v.children("Counter", &self.counters);
        v.children("AdditionalData", &self.additional_data);
    }
}

impl Check for SystemImpact {
    const NAME: &'static str = "SystemImpact";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("type", &self.impact_type);
        v.ext("type", self.impact_type.as_ref(), &self.ext_impact_type);
    }
}

impl Check for BusinessImpact {
    const NAME: &'static str = "BusinessImpact";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("type", &self.impact_type);
        v.ext("severity", self.severity.as_ref(), &self.ext_severity);
        v.ext("type", self.impact_type.as_ref(), &self.ext_impact_type);
    }
}

impl Check for TimeImpact {
    const NAME: &'static str = "TimeImpact";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("value", &self.value);
        v.required("metric", &self.metric);
        v.ext("metric", self.metric.as_ref(), &self.ext_metric);
        v.ext("duration", self.duration.as_ref(), &self.ext_duration);
    }
}

impl Check for MonetaryImpact {
    const NAME: &'static str = "MonetaryImpact";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("value", &self.value);
    }
}

impl Check for Counter {
    const NAME: &'static str = "Counter";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("value", &self.value);
        v.required("type", &self.counter_type);
        v.required("unit", &self.unit);
        v.ext("type", self.counter_type.as_ref(), &self.ext_counter_type);
        v.ext("unit", self.unit.as_ref(), &self.ext_unit);
        v.ext("duration", self.duration.as_ref(), &self.ext_duration);
    }
}

impl Check for History {
    const NAME: &'static str = "History";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("HistoryItem", &self.history_items);
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
        v.children("HistoryItem", &self.history_items);
    }
}

impl Check for HistoryItem {
    const NAME: &'static str = "HistoryItem";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("action", &self.action);
        v.required("DateTime", &self.date_time);
        v.ext("action", self.action.as_ref(), &self.ext_action);
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
        v.child("IncidentID", self.incident_id.as_ref());
        v.child("Contact", self.contact.as_ref());
        v.children("AdditionalData", &self.additional_data);
    }
}

impl Check for EventData {
    const NAME: &'static str = "EventData";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
        v.child("Assessment", self.assessment.as_ref());
        v.children("Contact", &self.contacts);
        v.children("Discovery", &self.discoveries);
        v.children("Method", &self.methods);
        v.children("System", &self.systems);
        v.children("Expectation", &self.expectations);
        v.children("RecordData", &self.record_data);
        v.children("EventData", &self.event_data);
        v.children("AdditionalData", &self.additional_data);
    }
}

impl Check for Expectation {
    const NAME: &'static str = "Expectation";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.ext("action", self.action.as_ref(), &self.ext_action);
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
        v.child("Contact", self.contact.as_ref());
    }
}

impl Check for System {
    const NAME: &'static str = "System";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("Node", &self.node);
        v.ext("category", self.category.as_ref(), &self.ext_category);
        v.ext("ownership", self.ownership.as_ref(), &self.ext_ownership);
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
        v.child("Node", self.node.as_ref());
        v.children("NodeRole", &self.node_roles);
        v.children("Service", &self.services);
        v.children("OperatingSystem", &self.operating_systems);
        v.children("Counter", &self.counters);
        v.children("AdditionalData", &self.additional_data);
    }
}

impl Check for Node {
    const NAME: &'static str = "Node";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.at_least_one(&[
            ("DomainData", self.domain_data.is_set()),
            ("Address", self.addresses.is_set()),
        ]);
        v.child("PostalAddress", self.postal_address.as_ref());
        v.children("DomainData", &self.domain_data);
        v.children("Address", &self.addresses);
        v.children("Counter", &self.counters);
    }
}

impl Check for Address {
    const NAME: &'static str = "Address";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("value", &self.value);
        v.ext("category", self.category.as_ref(), &self.ext_category);
    }
}

impl Check for NodeRole {
    const NAME: &'static str = "NodeRole";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("category", &self.category);
        v.ext("category", self.category.as_ref(), &self.ext_category);
    }
}

impl Check for Service {
    const NAME: &'static str = "Service";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.child("ServiceName", self.service_name.as_ref());
        v.child("EmailData", self.email_data.as_ref());
        v.child("Application", self.application.as_ref());
        v.children("ApplicationHeaderField", &self.application_header_fields);
    }
}

impl Check for ServiceName {
    const NAME: &'static str = "ServiceName";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.at_least_one(&[
            ("IANAService", self.iana_service.is_set()),
            ("URL", self.urls.is_set()),
            ("Description", self.descriptions.is_set()),
        ]);
    }
}

impl Check for ExtensionType {
    const NAME: &'static str = "ExtensionType";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("dtype", &self.dtype);
        v.ext("dtype", self.dtype.as_ref(), &self.ext_dtype);
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
    }
}

impl Check for SoftwareType {
    const NAME: &'static str = "SoftwareType";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.at_least_one(&[
            ("SoftwareReference", self.software_reference.is_set()),
            ("URL", self.urls.is_set()),
            ("Description", self.descriptions.is_set()),
        ]);
        v.child("SoftwareReference", self.software_reference.as_ref());
    }
}

impl Check for SoftwareReference {
    const NAME: &'static str = "SoftwareReference";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("spec-name", &self.spec_name);
        v.ext("spec-name", self.spec_name.as_ref(), &self.ext_spec_name);
        v.ext("dtype", self.dtype.as_ref(), &self.ext_dtype);
    }
}

impl Check for EmailData {
    const NAME: &'static str = "EmailData";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.children("EmailHeaderField", &self.email_header_fields);
        v.children("HashData", &self.hash_data);
    }
}

impl Check for DomainData {
    const NAME: &'static str = "DomainData";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("system-status", &self.system_status);
        v.required("domain-status", &self.domain_status);
        v.required("Name", &self.name);
        v.ext("system-status", self.system_status.as_ref(), &self.ext_system_status);
        v.ext("domain-status", self.domain_status.as_ref(), &self.ext_domain_status);
        v.child("DomainContacts", self.domain_contacts.as_ref());
        v.children("RelatedDNS", &self.related_dns);
        v.children("Nameservers", &self.nameservers);
    }
}

impl Check for Nameservers {
    const NAME: &'static str = "Nameservers";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("Server", &self.server);
        v.required("Address", &self.addresses);
        v.children("Address", &self.addresses);
    }
}

impl Check for DomainContacts {
    const NAME: &'static str = "DomainContacts";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.exactly_one(&[
            ("SameDomainContact", self.same_domain_contact.is_set()),
            ("Contact", self.contacts.is_set()),
        ]);
        v.children("Contact", &self.contacts);
    }
}

impl Check for RecordData {
    const NAME: &'static str = "RecordData";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
        v.child("Application", self.application.as_ref());
        v.children("RecordPattern", &self.record_patterns);
        v.children("RecordItem", &self.record_items);
        v.children("FileData", &self.file_data);
        v.children("WindowsRegistryKeysModified", &self.windows_registry_keys_modified);
        v.children("CertificateData", &self.certificate_data);
        v.children("AdditionalData", &self.additional_data);
    }
}

impl Check for RecordPattern {
    const NAME: &'static str = "RecordPattern";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("value", &self.value);
        v.required("type", &self.pattern_type);
        v.ext("type", self.pattern_type.as_ref(), &self.ext_pattern_type);
        v.ext("offsetunit", self.offsetunit.as_ref(), &self.ext_offsetunit);
    }
}

impl Check for WindowsRegistryKeysModified {
    const NAME: &'static str = "WindowsRegistryKeysModified";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("Key", &self.keys);
        v.children("Key", &self.keys);
    }
}

impl Check for RegistryKey {
    const NAME: &'static str = "Key";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("KeyName", &self.key_name);
        v.ext("registryaction", self.registryaction.as_ref(), &self.ext_registryaction);
    }
}

impl Check for CertificateData {
    const NAME: &'static str = "CertificateData";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("Certificate", &self.certificates);
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
        v.children("Certificate", &self.certificates);
    }
}

impl Check for Certificate {
    const NAME: &'static str = "Certificate";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("X509Data", &self.x509_data);
    }
}

impl Check for FileData {
    const NAME: &'static str = "FileData";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("File", &self.files);
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
        v.children("File", &self.files);
    }
}

impl Check for File {
    const NAME: &'static str = "File";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.child("HashData", self.hash_data.as_ref());
        v.child("AssociatedSoftware", self.associated_software.as_ref());
        v.children("FileProperties", &self.file_properties);
    }
}

impl Check for HashData {
    const NAME: &'static str = "HashData";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("scope", &self.scope);
        v.at_least_one(&[
            ("Hash", self.hashes.is_set()),
            ("FuzzyHash", self.fuzzy_hashes.is_set()),
        ]);
        v.ext("scope", self.scope.as_ref(), &self.ext_scope);
        v.children("Hash", &self.hashes);
        v.children("FuzzyHash", &self.fuzzy_hashes);
    }
}

impl Check for Hash {
    const NAME: &'static str = "Hash";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("DigestMethod", &self.digest_method);
        v.required("DigestValue", &self.digest_value);
        v.child("Application", self.application.as_ref());
    }
}

impl Check for FuzzyHash {
    const NAME: &'static str = "FuzzyHash";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("FuzzyHashValue", &self.fuzzy_hash_values);
        v.child("Application", self.application.as_ref());
        v.children("FuzzyHashValue", &self.fuzzy_hash_values);
        v.children("AdditionalData", &self.additional_data);
    }
}

impl Check for Indicator {
    const NAME: &'static str = "Indicator";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("IndicatorID", &self.indicator_id);
        v.exactly_one(&[
            ("Observable", self.observable.is_set()),
            ("ObservableReference", self.observable_reference.is_set()),
            ("IndicatorExpression", self.indicator_expression.is_set()),
            ("IndicatorReference", self.indicator_reference.is_set()),
        ]);
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
        v.child("IndicatorID", self.indicator_id.as_ref());
        v.child("Confidence", self.confidence.as_ref());
        v.child("Observable", self.observable.as_ref());
        v.child("ObservableReference", self.observable_reference.as_ref());
        v.child("IndicatorExpression", self.indicator_expression.as_ref());
        v.child("IndicatorReference", self.indicator_reference.as_ref());
        v.children("AlternativeIndicatorID", &self.alternative_indicator_ids);
        v.children("Contact", &self.contacts);
        v.children("NodeRole", &self.node_roles);
        v.children("AttackPhase", &self.attack_phases);
        v.children("Reference", &self.references);
        v.children("AdditionalData", &self.additional_data);
    }
}

impl Check for AlternativeIndicatorId {
    const NAME: &'static str = "AlternativeIndicatorID";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("IndicatorID", &self.indicator_ids);
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
        v.children("IndicatorID", &self.indicator_ids);
    }
}

impl Check for Observable {
    const NAME: &'static str = "Observable";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.exactly_one(&[
            ("System", self.system.is_set()),
            ("Address", self.address.is_set()),
            ("DomainData", self.domain_data.is_set()),
            ("EmailData", self.email_data.is_set()),
            ("Service", self.service.is_set()),
            ("WindowsRegistryKeysModified", self.windows_registry_keys_modified.is_set()),
            ("FileData", self.file_data.is_set()),
            ("CertificateData", self.certificate_data.is_set()),
            ("RegistryHandle", self.registry_handle.is_set()),
            ("RecordData", self.record_data.is_set()),
            ("EventData", self.event_data.is_set()),
            ("Incident", self.incident.is_set()),
            ("Expectation", self.expectation.is_set()),
            ("Reference", self.reference.is_set()),
            ("Assessment", self.assessment.is_set()),
            ("DetectionPattern", self.detection_pattern.is_set()),
            ("HistoryItem", self.history_item.is_set()),
            ("BulkObservable", self.bulk_observable.is_set()),
            ("AdditionalData", self.additional_data.is_set()),
        ]);
        v.ext("restriction", self.restriction.as_ref(), &self.ext_restriction);
        v.child("System", self.system.as_ref());
        v.child("Address", self.address.as_ref());
        v.child("DomainData", self.domain_data.as_ref());
        v.child("EmailData", self.email_data.as_ref());
        v.child("Service", self.service.as_ref());
        v.child("WindowsRegistryKeysModified", self.windows_registry_keys_modified.as_ref());
        v.child("FileData", self.file_data.as_ref());
        v.child("CertificateData", self.certificate_data.as_ref());
        v.child("RegistryHandle", self.registry_handle.as_ref());
        v.child("RecordData", self.record_data.as_ref());
        v.child("EventData", self.event_data.as_deref());
        v.child("Incident", self.incident.as_deref());
        v.child("Expectation", self.expectation.as_ref());
        v.child("Reference", self.reference.as_ref());
        v.child("Assessment", self.assessment.as_ref());
        v.child("DetectionPattern", self.detection_pattern.as_ref());
        v.child("HistoryItem", self.history_item.as_ref());
        v.child("BulkObservable", self.bulk_observable.as_ref());
        v.children("AdditionalData", &self.additional_data);
    }
}

impl Check for BulkObservable {
    const NAME: &'static str = "BulkObservable";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("BulkObservableList", &self.bulk_observable_list);
        v.ext("type", self.observable_type.as_ref(), &self.ext_observable_type);
        v.child("BulkObservableFormat", self.bulk_observable_format.as_ref());
        v.children("AdditionalData", &self.additional_data);
    }
}

impl Check for BulkObservableFormat {
    const NAME: &'static str = "BulkObservableFormat";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.exactly_one(&[
            ("Hash", self.hash.is_set()),
            ("AdditionalData", self.additional_data.is_set()),
        ]);
        v.child("Hash", self.hash.as_ref());
        v.children("AdditionalData", &self.additional_data);
    }
}

impl Check for ObservableReference {
    const NAME: &'static str = "ObservableReference";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.required("uid-ref", &self.uid_ref);
    }
}

impl Check for IndicatorExpression {
    const NAME: &'static str = "IndicatorExpression";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.at_least_one(&[
            ("IndicatorExpression", self.indicator_expressions.is_set()),
            ("Observable", self.observables.is_set()),
            ("ObservableReference", self.observable_references.is_set()),
            ("IndicatorReference", self.indicator_references.is_set()),
        ]);
        v.child("Confidence", self.confidence.as_ref());
        v.children("IndicatorExpression", &self.indicator_expressions);
        v.children("Observable", &self.observables);
        v.children("ObservableReference", &self.observable_references);
        v.children("IndicatorReference", &self.indicator_references);
        v.children("AdditionalData", &self.additional_data);
    }
}

impl Check for IndicatorReference {
    const NAME: &'static str = "IndicatorReference";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.at_least_one(&[
            ("uid-ref", self.uid_ref.is_set()),
            ("euid-ref", self.euid_ref.is_set()),
        ]);
    }
}

impl Check for AttackPhase {
    const NAME: &'static str = "AttackPhase";

    fn check_fields(&self, v: &mut Checker<'_>) {
        v.at_least_one(&[
            ("AttackPhaseID", self.attack_phase_ids.is_set()),
            ("URL", self.urls.is_set()),
            ("Description", self.descriptions.is_set()),
        ]);
        v.children("AdditionalData", &self.additional_data);
    }
}
