//! The IODEF record types.
//!
//! Field declaration order is the RFC order, which is also the key order of
//! the encoded JSON. Every slot is optional at the type level: presence of
//! required slots is a validation concern (see [`crate::validate`]), so a
//! document with missing fields still decodes.
//!
//! Types are self-referential (`Incident` → `Indicator` → `Observable` →
//! `Incident`, `EventData` → `EventData`). Instances are owned trees; building
//! a cyclic instance is impossible, but depth is unbounded and callers that
//! generate trees programmatically must cap it themselves.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::*;
use crate::mlstring::MlString;

/// The schema version this crate binds.
pub const IODEF_VERSION: &str = "2.0";

/// `AttackPattern`, `Vulnerability`, `Weakness`, `Platform` and `Scoring`
/// all share the `StructuredInfo` shape.
pub type AttackPattern = StructuredInfo;
pub type Vulnerability = StructuredInfo;
pub type Weakness = StructuredInfo;
pub type IntendedImpact = BusinessImpact;
pub type AdditionalData = ExtensionType;
pub type Application = SoftwareType;
pub type OperatingSystem = SoftwareType;

// ─── IODEF-Document ─────────────────────────────────────────────────────────

/// The root of an IODEF report: one or more incidents plus document metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IodefDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(rename = "format-id", skip_serializing_if = "Option::is_none")]
    pub format_id: Option<String>,
    #[serde(rename = "private-enum-name", skip_serializing_if = "Option::is_none")]
    pub private_enum_name: Option<String>,
    #[serde(rename = "private-enum-id", skip_serializing_if = "Option::is_none")]
    pub private_enum_id: Option<String>,
    #[serde(rename = "Incident", default, skip_serializing_if = "Vec::is_empty")]
    pub incidents: Vec<Incident>,
    #[serde(rename = "AdditionalData", default, skip_serializing_if = "Vec::is_empty")]
    pub additional_data: Vec<ExtensionType>,
}

// ─── Incident ───────────────────────────────────────────────────────────────

/// A single security incident and everything known about it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<IncidentPurpose>,
    #[serde(rename = "ext-purpose", skip_serializing_if = "Option::is_none")]
    pub ext_purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IncidentStatus>,
    #[serde(rename = "ext-status", skip_serializing_if = "Option::is_none")]
    pub ext_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "observable-id", skip_serializing_if = "Option::is_none")]
    pub observable_id: Option<String>,
    #[serde(rename = "IncidentID", skip_serializing_if = "Option::is_none")]
    pub incident_id: Option<IncidentId>,
    #[serde(rename = "AlternativeID", skip_serializing_if = "Option::is_none")]
    pub alternative_id: Option<AlternativeId>,
    #[serde(rename = "RelatedActivity", default, skip_serializing_if = "Vec::is_empty")]
    pub related_activities: Vec<RelatedActivity>,
    #[serde(rename = "DetectTime", skip_serializing_if = "Option::is_none")]
    pub detect_time: Option<String>,
    #[serde(rename = "StartTime", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(rename = "EndTime", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(rename = "RecoveryTime", skip_serializing_if = "Option::is_none")]
    pub recovery_time: Option<String>,
    #[serde(rename = "ReportTime", skip_serializing_if = "Option::is_none")]
    pub report_time: Option<String>,
    #[serde(rename = "GenerationTime", skip_serializing_if = "Option::is_none")]
    pub generation_time: Option<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
    #[serde(rename = "Discovery", default, skip_serializing_if = "Vec::is_empty")]
    pub discoveries: Vec<Discovery>,
    #[serde(rename = "Assessment", default, skip_serializing_if = "Vec::is_empty")]
    pub assessments: Vec<Assessment>,
    #[serde(rename = "Method", default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<Method>,
    #[serde(rename = "Contact", default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<Contact>,
    #[serde(rename = "EventData", default, skip_serializing_if = "Vec::is_empty")]
    pub event_data: Vec<EventData>,
    #[serde(rename = "Indicator", default, skip_serializing_if = "Vec::is_empty")]
    pub indicators: Vec<Indicator>,
    #[serde(rename = "History", skip_serializing_if = "Option::is_none")]
    pub history: Option<History>,
    #[serde(rename = "AdditionalData", default, skip_serializing_if = "Vec::is_empty")]
    pub additional_data: Vec<ExtensionType>,
}

// ─── IncidentID ─────────────────────────────────────────────────────────────

/// Identifier of an incident, unique within the namespace of `name` (the issuing CSIRT).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentId {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
}

// ─── AlternativeID ──────────────────────────────────────────────────────────

/// Identifiers other parties use for the same incident.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AlternativeId {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "IncidentID", default, skip_serializing_if = "Vec::is_empty")]
    pub incident_ids: Vec<IncidentId>,
}

// ─── RelatedActivity ────────────────────────────────────────────────────────

/// Links to related incidents, actors, campaigns or indicators.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedActivity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "IncidentID", default, skip_serializing_if = "Vec::is_empty")]
    pub incident_ids: Vec<IncidentId>,
    #[serde(rename = "URL", default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    #[serde(rename = "ThreatActor", default, skip_serializing_if = "Vec::is_empty")]
    pub threat_actors: Vec<ThreatActor>,
    #[serde(rename = "Campaign", default, skip_serializing_if = "Vec::is_empty")]
    pub campaigns: Vec<Campaign>,
    #[serde(rename = "IndicatorID", default, skip_serializing_if = "Vec::is_empty")]
    pub indicator_ids: Vec<IndicatorId>,
    #[serde(rename = "Confidence", skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
    #[serde(rename = "AdditionalData", default, skip_serializing_if = "Vec::is_empty")]
    pub additional_data: Vec<ExtensionType>,
}

// ─── ThreatActor ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThreatActor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "ThreatActorID", default, skip_serializing_if = "Vec::is_empty")]
    pub threat_actor_ids: Vec<String>,
    #[serde(rename = "URL", default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
    #[serde(rename = "AdditionalData", default, skip_serializing_if = "Vec::is_empty")]
    pub additional_data: Vec<ExtensionType>,
}

// ─── Campaign ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "CampaignID", default, skip_serializing_if = "Vec::is_empty")]
    pub campaign_ids: Vec<String>,
    #[serde(rename = "URL", default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
    #[serde(rename = "AdditionalData", default, skip_serializing_if = "Vec::is_empty")]
    pub additional_data: Vec<ExtensionType>,
}

// ─── IndicatorID ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorId {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

// ─── Confidence ─────────────────────────────────────────────────────────────

/// Confidence in an assessment. `value` carries the number when `rating` is `numeric`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Confidence {
    #[serde(default, with = "crate::lenient::real_opt", skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<ConfidenceRating>,
    #[serde(rename = "ext-rating", skip_serializing_if = "Option::is_none")]
    pub ext_rating: Option<String>,
}

// ─── Contact ────────────────────────────────────────────────────────────────

/// A person or organization involved in handling the incident.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ContactRole>,
    #[serde(rename = "ext-role", skip_serializing_if = "Option::is_none")]
    pub ext_role: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<ContactType>,
    #[serde(rename = "ext-type", skip_serializing_if = "Option::is_none")]
    pub ext_contact_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "ContactName", default, skip_serializing_if = "Vec::is_empty")]
    pub contact_names: Vec<MlString>,
    #[serde(rename = "ContactTitle", default, skip_serializing_if = "Vec::is_empty")]
    pub contact_titles: Vec<MlString>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
    #[serde(rename = "RegistryHandle", default, skip_serializing_if = "Vec::is_empty")]
    pub registry_handles: Vec<RegistryHandle>,
    #[serde(rename = "PostalAddress", default, skip_serializing_if = "Vec::is_empty")]
    pub postal_addresses: Vec<PostalAddress>,
    #[serde(rename = "Email", default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<Email>,
    #[serde(rename = "Telephone", default, skip_serializing_if = "Vec::is_empty")]
    pub telephones: Vec<Telephone>,
    #[serde(rename = "Timezone", skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(rename = "Contact", default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<Contact>,
    #[serde(rename = "AdditionalData", default, skip_serializing_if = "Vec::is_empty")]
    pub additional_data: Vec<ExtensionType>,
}

// ─── RegistryHandle ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryHandle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<Registry>,
    #[serde(rename = "ext-registry", skip_serializing_if = "Option::is_none")]
    pub ext_registry: Option<String>,
}

// ─── PostalAddress ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PostalAddress {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub address_type: Option<PostalAddressType>,
    #[serde(rename = "ext-type", skip_serializing_if = "Option::is_none")]
    pub ext_address_type: Option<String>,
    #[serde(rename = "PAddress", skip_serializing_if = "Option::is_none")]
    pub address: Option<MlString>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
}

// ─── Email ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Email {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub email_type: Option<EmailType>,
    #[serde(rename = "ext-type", skip_serializing_if = "Option::is_none")]
    pub ext_email_type: Option<String>,
    #[serde(rename = "EmailTo", skip_serializing_if = "Option::is_none")]
    pub email_to: Option<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
}

// ─── Telephone ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Telephone {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub telephone_type: Option<TelephoneType>,
    #[serde(rename = "ext-type", skip_serializing_if = "Option::is_none")]
    pub ext_telephone_type: Option<String>,
    #[serde(rename = "TelephoneNumber", skip_serializing_if = "Option::is_none")]
    pub telephone_number: Option<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
}

// ─── Discovery ──────────────────────────────────────────────────────────────

/// How the incident was detected.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Discovery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<DiscoverySource>,
    #[serde(rename = "ext-source", skip_serializing_if = "Option::is_none")]
    pub ext_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
    #[serde(rename = "Contact", default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<Contact>,
    #[serde(rename = "DetectionPattern", default, skip_serializing_if = "Vec::is_empty")]
    pub detection_patterns: Vec<DetectionPattern>,
}

// ─── DetectionPattern ───────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionPattern {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "observable-id", skip_serializing_if = "Option::is_none")]
    pub observable_id: Option<String>,
    #[serde(rename = "Application", skip_serializing_if = "Option::is_none")]
    pub application: Option<SoftwareType>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
    #[serde(rename = "DetectionConfiguration", default, skip_serializing_if = "Vec::is_empty")]
    pub detection_configurations: Vec<String>,
}

// ─── Method ─────────────────────────────────────────────────────────────────

/// The techniques used by the threat actor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Method {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "Reference", default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<Reference>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
    #[serde(rename = "AttackPattern", default, skip_serializing_if = "Vec::is_empty")]
    pub attack_patterns: Vec<StructuredInfo>,
    #[serde(rename = "Vulnerability", default, skip_serializing_if = "Vec::is_empty")]
    pub vulnerabilities: Vec<StructuredInfo>,
    #[serde(rename = "Weakness", default, skip_serializing_if = "Vec::is_empty")]
    pub weaknesses: Vec<StructuredInfo>,
    #[serde(rename = "AdditionalData", default, skip_serializing_if = "Vec::is_empty")]
    pub additional_data: Vec<ExtensionType>,
}

// ─── Reference ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "observable-id", skip_serializing_if = "Option::is_none")]
    pub observable_id: Option<String>,
    #[serde(rename = "ReferenceName", skip_serializing_if = "Option::is_none")]
    pub reference_name: Option<ReferenceName>,
    #[serde(rename = "URL", default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
}

// ─── ReferenceName ──────────────────────────────────────────────────────────

/// An enumeration reference: an index into the IANA specification registry plus an identifier.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceName {
    #[serde(rename = "specIndex", default, with = "crate::lenient::int_opt", skip_serializing_if = "Option::is_none")]
    pub spec_index: Option<i64>,
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

// ─── StructuredInfo ─────────────────────────────────────────────────────────

/// Externally specified structured information (CAPEC, CVE, CWE, CVSS, ...).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredInfo {
    #[serde(rename = "SpecID", skip_serializing_if = "Option::is_none")]
    pub spec_id: Option<String>,
    #[serde(rename = "ext-SpecID", skip_serializing_if = "Option::is_none")]
    pub ext_spec_id: Option<String>,
    #[serde(rename = "ContentID", skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
    #[serde(rename = "RawData", default, skip_serializing_if = "Vec::is_empty")]
    pub raw_data: Vec<Value>,
    #[serde(rename = "Reference", default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<Reference>,
    #[serde(rename = "Platform", default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<StructuredInfo>,
    #[serde(rename = "Scoring", default, skip_serializing_if = "Vec::is_empty")]
    pub scoring: Vec<StructuredInfo>,
}

// ─── Assessment ─────────────────────────────────────────────────────────────

/// Technical and non-technical repercussions of the incident.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrence: Option<Occurrence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "observable-id", skip_serializing_if = "Option::is_none")]
    pub observable_id: Option<String>,
    #[serde(rename = "IncidentCategory", default, skip_serializing_if = "Vec::is_empty")]
    pub incident_categories: Vec<MlString>,
    #[serde(rename = "SystemImpact", default, skip_serializing_if = "Vec::is_empty")]
    pub system_impacts: Vec<SystemImpact>,
    #[serde(rename = "BusinessImpact", default, skip_serializing_if = "Vec::is_empty")]
    pub business_impacts: Vec<BusinessImpact>,
    #[serde(rename = "TimeImpact", default, skip_serializing_if = "Vec::is_empty")]
    pub time_impacts: Vec<TimeImpact>,
    #[serde(rename = "MonetaryImpact", default, skip_serializing_if = "Vec::is_empty")]
    pub monetary_impacts: Vec<MonetaryImpact>,
    #[serde(rename = "IntendedImpact", default, skip_serializing_if = "Vec::is_empty")]
    pub intended_impacts: Vec<BusinessImpact>,
    #[serde(rename = "Counter", default, skip_serializing_if = "Vec::is_empty")]
    pub counters: Vec<Counter>,
    #[serde(rename = "MitigatingFactor", default, skip_serializing_if = "Vec::is_empty")]
    pub mitigating_factors: Vec<MlString>,
    #[serde(rename = "Cause", default, skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<MlString>,
    #[serde(rename = "Confidence", skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    #[serde(rename = "AdditionalData", default, skip_serializing_if = "Vec::is_empty")]
    pub additional_data: Vec<ExtensionType>,
}

// ─── SystemImpact ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemImpact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion: Option<Completion>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub impact_type: Option<SystemImpactType>,
    #[serde(rename = "ext-type", skip_serializing_if = "Option::is_none")]
    pub ext_impact_type: Option<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
}

// ─── BusinessImpact ─────────────────────────────────────────────────────────

/// Business impact of an incident. Also the shape of `IntendedImpact`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessImpact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<BusinessImpactSeverity>,
    #[serde(rename = "ext-severity", skip_serializing_if = "Option::is_none")]
    pub ext_severity: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub impact_type: Option<BusinessImpactType>,
    #[serde(rename = "ext-type", skip_serializing_if = "Option::is_none")]
    pub ext_impact_type: Option<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
}

// ─── TimeImpact ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeImpact {
    #[serde(default, with = "crate::lenient::real_opt", skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<TimeImpactMetric>,
    #[serde(rename = "ext-metric", skip_serializing_if = "Option::is_none")]
    pub ext_metric: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
    #[serde(rename = "ext-duration", skip_serializing_if = "Option::is_none")]
    pub ext_duration: Option<String>,
}

// ─── MonetaryImpact ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MonetaryImpact {
    #[serde(default, with = "crate::lenient::real_opt", skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

// ─── Counter ────────────────────────────────────────────────────────────────

/// A summary count of some event over time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Counter {
    #[serde(default, with = "crate::lenient::real_opt", skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub counter_type: Option<CounterType>,
    #[serde(rename = "ext-type", skip_serializing_if = "Option::is_none")]
    pub ext_counter_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<CounterUnit>,
    #[serde(rename = "ext-unit", skip_serializing_if = "Option::is_none")]
    pub ext_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
    #[serde(rename = "ext-duration", skip_serializing_if = "Option::is_none")]
    pub ext_duration: Option<String>,
}

// ─── History ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "HistoryItem", default, skip_serializing_if = "Vec::is_empty")]
    pub history_items: Vec<HistoryItem>,
}

// ─── HistoryItem ────────────────────────────────────────────────────────────

/// A single logged action taken while handling the incident.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(rename = "ext-action", skip_serializing_if = "Option::is_none")]
    pub ext_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "observable-id", skip_serializing_if = "Option::is_none")]
    pub observable_id: Option<String>,
    #[serde(rename = "DateTime", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(rename = "IncidentID", skip_serializing_if = "Option::is_none")]
    pub incident_id: Option<IncidentId>,
    #[serde(rename = "Contact", skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
    #[serde(rename = "DefinedCOA", default, skip_serializing_if = "Vec::is_empty")]
    pub defined_coas: Vec<String>,
    #[serde(rename = "AdditionalData", default, skip_serializing_if = "Vec::is_empty")]
    pub additional_data: Vec<ExtensionType>,
}

// ─── EventData ──────────────────────────────────────────────────────────────

/// Details of a particular event within the incident. May nest further `EventData`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "observable-id", skip_serializing_if = "Option::is_none")]
    pub observable_id: Option<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
    #[serde(rename = "DetectTime", skip_serializing_if = "Option::is_none")]
    pub detect_time: Option<String>,
    #[serde(rename = "StartTime", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(rename = "EndTime", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(rename = "RecoveryTime", skip_serializing_if = "Option::is_none")]
    pub recovery_time: Option<String>,
    #[serde(rename = "ReportTime", skip_serializing_if = "Option::is_none")]
    pub report_time: Option<String>,
    #[serde(rename = "Contact", default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<Contact>,
    #[serde(rename = "Discovery", default, skip_serializing_if = "Vec::is_empty")]
    pub discoveries: Vec<Discovery>,
    #[serde(rename = "Assessment", skip_serializing_if = "Option::is_none")]
    pub assessment: Option<Assessment>,
    #[serde(rename = "Method", default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<Method>,
    #[serde(rename = "System", default, skip_serializing_if = "Vec::is_empty")]
    pub systems: Vec<System>,
    #[serde(rename = "Expectation", default, skip_serializing_if = "Vec::is_empty")]
    pub expectations: Vec<Expectation>,
    #[serde(rename = "RecordData", default, skip_serializing_if = "Vec::is_empty")]
    pub record_data: Vec<RecordData>,
    #[serde(rename = "EventData", default, skip_serializing_if = "Vec::is_empty")]
    pub event_data: Vec<EventData>,
    #[serde(rename = "AdditionalData", default, skip_serializing_if = "Vec::is_empty")]
    pub additional_data: Vec<ExtensionType>,
}

// ─── Expectation ────────────────────────────────────────────────────────────

/// An action the sender asks the recipient to take.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Expectation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(rename = "ext-action", skip_serializing_if = "Option::is_none")]
    pub ext_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "observable-id", skip_serializing_if = "Option::is_none")]
    pub observable_id: Option<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
    #[serde(rename = "DefinedCOA", default, skip_serializing_if = "Vec::is_empty")]
    pub defined_coas: Vec<String>,
    #[serde(rename = "StartTime", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(rename = "EndTime", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(rename = "Contact", skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

// ─── System ─────────────────────────────────────────────────────────────────

/// A host or network device involved in the incident.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct System {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<SystemCategory>,
    #[serde(rename = "ext-category", skip_serializing_if = "Option::is_none")]
    pub ext_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spoofed: Option<YesNoUnknown>,
    #[serde(rename = "virtual", skip_serializing_if = "Option::is_none")]
    pub virtualized: Option<YesNoUnknown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership: Option<Ownership>,
    #[serde(rename = "ext-ownership", skip_serializing_if = "Option::is_none")]
    pub ext_ownership: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "observable-id", skip_serializing_if = "Option::is_none")]
    pub observable_id: Option<String>,
    #[serde(rename = "Node", skip_serializing_if = "Option::is_none")]
    pub node: Option<Node>,
    #[serde(rename = "NodeRole", default, skip_serializing_if = "Vec::is_empty")]
    pub node_roles: Vec<NodeRole>,
    #[serde(rename = "Service", default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Service>,
    #[serde(rename = "OperatingSystem", default, skip_serializing_if = "Vec::is_empty")]
    pub operating_systems: Vec<SoftwareType>,
    #[serde(rename = "Counter", default, skip_serializing_if = "Vec::is_empty")]
    pub counters: Vec<Counter>,
    #[serde(rename = "AssetID", default, skip_serializing_if = "Vec::is_empty")]
    pub asset_ids: Vec<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
    #[serde(rename = "AdditionalData", default, skip_serializing_if = "Vec::is_empty")]
    pub additional_data: Vec<ExtensionType>,
}

// ─── Node ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "DomainData", default, skip_serializing_if = "Vec::is_empty")]
    pub domain_data: Vec<DomainData>,
    #[serde(rename = "Address", default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,
    #[serde(rename = "PostalAddress", skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<PostalAddress>,
    #[serde(rename = "Location", default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<MlString>,
    #[serde(rename = "Counter", default, skip_serializing_if = "Vec::is_empty")]
    pub counters: Vec<Counter>,
}

// ─── Address ────────────────────────────────────────────────────────────────

/// A network address. `category` defaults to `ipv6-addr` when absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<AddressCategory>,
    #[serde(rename = "ext-category", skip_serializing_if = "Option::is_none")]
    pub ext_category: Option<String>,
    #[serde(rename = "vlan-name", skip_serializing_if = "Option::is_none")]
    pub vlan_name: Option<String>,
    #[serde(rename = "vlan-num", default, with = "crate::lenient::int_opt", skip_serializing_if = "Option::is_none")]
    pub vlan_num: Option<i64>,
    #[serde(rename = "observable-id", skip_serializing_if = "Option::is_none")]
    pub observable_id: Option<String>,
}

// ─── NodeRole ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeRole {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<NodeRoleCategory>,
    #[serde(rename = "ext-category", skip_serializing_if = "Option::is_none")]
    pub ext_category: Option<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
}

// ─── Service ────────────────────────────────────────────────────────────────

/// A network service, identified by protocol and port.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "ip-protocol", default, with = "crate::lenient::int_opt", skip_serializing_if = "Option::is_none")]
    pub ip_protocol: Option<i64>,
    #[serde(rename = "observable-id", skip_serializing_if = "Option::is_none")]
    pub observable_id: Option<String>,
    #[serde(rename = "ServiceName", skip_serializing_if = "Option::is_none")]
    pub service_name: Option<ServiceName>,
    #[serde(rename = "Port", default, with = "crate::lenient::int_opt", skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(rename = "PortList", skip_serializing_if = "Option::is_none")]
    pub port_list: Option<String>,
    #[serde(rename = "ProtoCode", default, with = "crate::lenient::int_opt", skip_serializing_if = "Option::is_none")]
    pub proto_code: Option<i64>,
    #[serde(rename = "ProtoType", default, with = "crate::lenient::int_opt", skip_serializing_if = "Option::is_none")]
    pub proto_type: Option<i64>,
    #[serde(rename = "ProtoField", default, with = "crate::lenient::int_opt", skip_serializing_if = "Option::is_none")]
    pub proto_field: Option<i64>,
    #[serde(rename = "ApplicationHeaderField", default, skip_serializing_if = "Vec::is_empty")]
    pub application_header_fields: Vec<ExtensionType>,
    #[serde(rename = "EmailData", skip_serializing_if = "Option::is_none")]
    pub email_data: Option<EmailData>,
    #[serde(rename = "Application", skip_serializing_if = "Option::is_none")]
    pub application: Option<SoftwareType>,
}

// ─── ServiceName ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceName {
    #[serde(rename = "IANAService", skip_serializing_if = "Option::is_none")]
    pub iana_service: Option<String>,
    #[serde(rename = "URL", default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
}

// ─── ExtensionType ──────────────────────────────────────────────────────────

/// The generic extension container behind `AdditionalData`, `RecordItem` and friends.
///
/// `value` is kept as raw JSON so XML or structured payloads survive a round trip.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtensionType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtype: Option<ExtensionDtype>,
    #[serde(rename = "ext-dtype", skip_serializing_if = "Option::is_none")]
    pub ext_dtype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "observable-id", skip_serializing_if = "Option::is_none")]
    pub observable_id: Option<String>,
}

// ─── SoftwareType ───────────────────────────────────────────────────────────

/// A piece of software, used by `Application`, `OperatingSystem` and `AssociatedSoftware`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SoftwareType {
    #[serde(rename = "SoftwareReference", skip_serializing_if = "Option::is_none")]
    pub software_reference: Option<SoftwareReference>,
    #[serde(rename = "URL", default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
}

// ─── SoftwareReference ──────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SoftwareReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(rename = "spec-name", skip_serializing_if = "Option::is_none")]
    pub spec_name: Option<SoftwareSpecName>,
    #[serde(rename = "ext-spec-name", skip_serializing_if = "Option::is_none")]
    pub ext_spec_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtype: Option<SoftwareDtype>,
    #[serde(rename = "ext-dtype", skip_serializing_if = "Option::is_none")]
    pub ext_dtype: Option<String>,
}

// ─── EmailData ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailData {
    #[serde(rename = "observable-id", skip_serializing_if = "Option::is_none")]
    pub observable_id: Option<String>,
    #[serde(rename = "EmailTo", default, skip_serializing_if = "Vec::is_empty")]
    pub email_to: Vec<String>,
    #[serde(rename = "EmailFrom", skip_serializing_if = "Option::is_none")]
    pub email_from: Option<String>,
    #[serde(rename = "EmailSubject", skip_serializing_if = "Option::is_none")]
    pub email_subject: Option<String>,
    #[serde(rename = "EmailX-Mailer", skip_serializing_if = "Option::is_none")]
    pub email_x_mailer: Option<String>,
    #[serde(rename = "EmailHeaderField", default, skip_serializing_if = "Vec::is_empty")]
    pub email_header_fields: Vec<ExtensionType>,
    #[serde(rename = "EmailHeaders", skip_serializing_if = "Option::is_none")]
    pub email_headers: Option<String>,
    #[serde(rename = "EmailBody", skip_serializing_if = "Option::is_none")]
    pub email_body: Option<String>,
    #[serde(rename = "EmailMessage", skip_serializing_if = "Option::is_none")]
    pub email_message: Option<String>,
    #[serde(rename = "HashData", default, skip_serializing_if = "Vec::is_empty")]
    pub hash_data: Vec<HashData>,
    #[serde(rename = "Signature", default, skip_serializing_if = "Vec::is_empty")]
    pub signatures: Vec<String>,
}

// ─── DomainData ─────────────────────────────────────────────────────────────

/// DNS registration facts about a domain.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainData {
    #[serde(rename = "system-status", skip_serializing_if = "Option::is_none")]
    pub system_status: Option<SystemStatus>,
    #[serde(rename = "ext-system-status", skip_serializing_if = "Option::is_none")]
    pub ext_system_status: Option<String>,
    #[serde(rename = "domain-status", skip_serializing_if = "Option::is_none")]
    pub domain_status: Option<DomainStatus>,
    #[serde(rename = "ext-domain-status", skip_serializing_if = "Option::is_none")]
    pub ext_domain_status: Option<String>,
    #[serde(rename = "observable-id", skip_serializing_if = "Option::is_none")]
    pub observable_id: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "DateDomainWasChecked", skip_serializing_if = "Option::is_none")]
    pub date_domain_was_checked: Option<String>,
    #[serde(rename = "RegistrationDate", skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,
    #[serde(rename = "ExpirationDate", skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(rename = "RelatedDNS", default, skip_serializing_if = "Vec::is_empty")]
    pub related_dns: Vec<ExtensionType>,
    #[serde(rename = "Nameservers", default, skip_serializing_if = "Vec::is_empty")]
    pub nameservers: Vec<Nameservers>,
    #[serde(rename = "DomainContacts", skip_serializing_if = "Option::is_none")]
    pub domain_contacts: Option<DomainContacts>,
}

// ─── Nameservers ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Nameservers {
    #[serde(rename = "Server", skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(rename = "Address", default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,
}

// ─── DomainContacts ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainContacts {
    #[serde(rename = "SameDomainContact", skip_serializing_if = "Option::is_none")]
    pub same_domain_contact: Option<String>,
    #[serde(rename = "Contact", default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<Contact>,
}

// ─── RecordData ─────────────────────────────────────────────────────────────

/// Log or other record excerpts supporting the incident.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "observable-id", skip_serializing_if = "Option::is_none")]
    pub observable_id: Option<String>,
    #[serde(rename = "DateTime", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
    #[serde(rename = "Application", skip_serializing_if = "Option::is_none")]
    pub application: Option<SoftwareType>,
    #[serde(rename = "RecordPattern", default, skip_serializing_if = "Vec::is_empty")]
    pub record_patterns: Vec<RecordPattern>,
    #[serde(rename = "RecordItem", default, skip_serializing_if = "Vec::is_empty")]
    pub record_items: Vec<ExtensionType>,
    #[serde(rename = "URL", default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    #[serde(rename = "FileData", default, skip_serializing_if = "Vec::is_empty")]
    pub file_data: Vec<FileData>,
    #[serde(rename = "WindowsRegistryKeysModified", default, skip_serializing_if = "Vec::is_empty")]
    pub windows_registry_keys_modified: Vec<WindowsRegistryKeysModified>,
    #[serde(rename = "CertificateData", default, skip_serializing_if = "Vec::is_empty")]
    pub certificate_data: Vec<CertificateData>,
    #[serde(rename = "AdditionalData", default, skip_serializing_if = "Vec::is_empty")]
    pub additional_data: Vec<ExtensionType>,
}

// ─── RecordPattern ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordPattern {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub pattern_type: Option<RecordPatternType>,
    #[serde(rename = "ext-type", skip_serializing_if = "Option::is_none")]
    pub ext_pattern_type: Option<String>,
    #[serde(default, with = "crate::lenient::int_opt", skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offsetunit: Option<OffsetUnit>,
    #[serde(rename = "ext-offsetunit", skip_serializing_if = "Option::is_none")]
    pub ext_offsetunit: Option<String>,
    #[serde(default, with = "crate::lenient::int_opt", skip_serializing_if = "Option::is_none")]
    pub instance: Option<i64>,
}

// ─── WindowsRegistryKeysModified ────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowsRegistryKeysModified {
    #[serde(rename = "observable-id", skip_serializing_if = "Option::is_none")]
    pub observable_id: Option<String>,
    #[serde(rename = "Key", default, skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<RegistryKey>,
}

// ─── Key ────────────────────────────────────────────────────────────────────

/// A single registry key touched by the incident.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registryaction: Option<RegistryAction>,
    #[serde(rename = "ext-registryaction", skip_serializing_if = "Option::is_none")]
    pub ext_registryaction: Option<String>,
    #[serde(rename = "observable-id", skip_serializing_if = "Option::is_none")]
    pub observable_id: Option<String>,
    #[serde(rename = "KeyName", skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    #[serde(rename = "KeyValue", skip_serializing_if = "Option::is_none")]
    pub key_value: Option<String>,
}

// ─── CertificateData ────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificateData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "observable-id", skip_serializing_if = "Option::is_none")]
    pub observable_id: Option<String>,
    #[serde(rename = "Certificate", default, skip_serializing_if = "Vec::is_empty")]
    pub certificates: Vec<Certificate>,
}

// ─── Certificate ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(rename = "observable-id", skip_serializing_if = "Option::is_none")]
    pub observable_id: Option<String>,
    #[serde(rename = "X509Data", skip_serializing_if = "Option::is_none")]
    pub x509_data: Option<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
}

// ─── FileData ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FileData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "observable-id", skip_serializing_if = "Option::is_none")]
    pub observable_id: Option<String>,
    #[serde(rename = "File", default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<File>,
}

// ─── File ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct File {
    #[serde(rename = "observable-id", skip_serializing_if = "Option::is_none")]
    pub observable_id: Option<String>,
    #[serde(rename = "FileName", skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(rename = "FileSize", default, with = "crate::lenient::int_opt", skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
    #[serde(rename = "FileType", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(rename = "URL", default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    #[serde(rename = "HashData", skip_serializing_if = "Option::is_none")]
    pub hash_data: Option<HashData>,
    #[serde(rename = "Signature", default, skip_serializing_if = "Vec::is_empty")]
    pub signatures: Vec<String>,
    #[serde(rename = "AssociatedSoftware", skip_serializing_if = "Option::is_none")]
    pub associated_software: Option<SoftwareType>,
    #[serde(rename = "FileProperties", default, skip_serializing_if = "Vec::is_empty")]
    pub file_properties: Vec<ExtensionType>,
}

// ─── HashData ───────────────────────────────────────────────────────────────

/// Cryptographic or fuzzy hashes over some scope of a file or message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HashData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<HashScope>,
    #[serde(rename = "ext-scope", skip_serializing_if = "Option::is_none")]
    pub ext_scope: Option<String>,
    #[serde(rename = "HashTargetID", skip_serializing_if = "Option::is_none")]
    pub hash_target_id: Option<String>,
    #[serde(rename = "Hash", default, skip_serializing_if = "Vec::is_empty")]
    pub hashes: Vec<Hash>,
    #[serde(rename = "FuzzyHash", default, skip_serializing_if = "Vec::is_empty")]
    pub fuzzy_hashes: Vec<FuzzyHash>,
}

// ─── Hash ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hash {
    #[serde(rename = "DigestMethod", skip_serializing_if = "Option::is_none")]
    pub digest_method: Option<String>,
    #[serde(rename = "DigestValue", skip_serializing_if = "Option::is_none")]
    pub digest_value: Option<String>,
    #[serde(rename = "CanonicalizationMethod", skip_serializing_if = "Option::is_none")]
    pub canonicalization_method: Option<String>,
    #[serde(rename = "Application", skip_serializing_if = "Option::is_none")]
    pub application: Option<SoftwareType>,
}

// ─── FuzzyHash ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FuzzyHash {
    #[serde(rename = "FuzzyHashValue", default, skip_serializing_if = "Vec::is_empty")]
    pub fuzzy_hash_values: Vec<ExtensionType>,
    #[serde(rename = "Application", skip_serializing_if = "Option::is_none")]
    pub application: Option<SoftwareType>,
    #[serde(rename = "AdditionalData", default, skip_serializing_if = "Vec::is_empty")]
    pub additional_data: Vec<ExtensionType>,
}

// ─── Indicator ──────────────────────────────────────────────────────────────

/// A cyber threat indicator. Carries exactly one of an observable, an observable
/// reference, an indicator expression or an indicator reference.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "IndicatorID", skip_serializing_if = "Option::is_none")]
    pub indicator_id: Option<IndicatorId>,
    #[serde(rename = "AlternativeIndicatorID", default, skip_serializing_if = "Vec::is_empty")]
    pub alternative_indicator_ids: Vec<AlternativeIndicatorId>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
    #[serde(rename = "StartTime", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(rename = "EndTime", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(rename = "Confidence", skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    #[serde(rename = "Contact", default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<Contact>,
    #[serde(rename = "Observable", skip_serializing_if = "Option::is_none")]
    pub observable: Option<Observable>,
    #[serde(rename = "ObservableReference", skip_serializing_if = "Option::is_none")]
    pub observable_reference: Option<ObservableReference>,
    #[serde(rename = "IndicatorExpression", skip_serializing_if = "Option::is_none")]
    pub indicator_expression: Option<IndicatorExpression>,
    #[serde(rename = "IndicatorReference", skip_serializing_if = "Option::is_none")]
    pub indicator_reference: Option<IndicatorReference>,
    #[serde(rename = "NodeRole", default, skip_serializing_if = "Vec::is_empty")]
    pub node_roles: Vec<NodeRole>,
    #[serde(rename = "AttackPhase", default, skip_serializing_if = "Vec::is_empty")]
    pub attack_phases: Vec<AttackPhase>,
    #[serde(rename = "Reference", default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<Reference>,
    #[serde(rename = "AdditionalData", default, skip_serializing_if = "Vec::is_empty")]
    pub additional_data: Vec<ExtensionType>,
}

// ─── AlternativeIndicatorID ─────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AlternativeIndicatorId {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "IndicatorID", default, skip_serializing_if = "Vec::is_empty")]
    pub indicator_ids: Vec<IndicatorId>,
}

// ─── Observable ─────────────────────────────────────────────────────────────

/// The thing an indicator describes. Exactly one payload slot is expected to be set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Observable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
    #[serde(rename = "ext-restriction", skip_serializing_if = "Option::is_none")]
    pub ext_restriction: Option<String>,
    #[serde(rename = "System", skip_serializing_if = "Option::is_none")]
    pub system: Option<System>,
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(rename = "DomainData", skip_serializing_if = "Option::is_none")]
    pub domain_data: Option<DomainData>,
    #[serde(rename = "EmailData", skip_serializing_if = "Option::is_none")]
    pub email_data: Option<EmailData>,
    #[serde(rename = "Service", skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,
    #[serde(rename = "WindowsRegistryKeysModified", skip_serializing_if = "Option::is_none")]
    pub windows_registry_keys_modified: Option<WindowsRegistryKeysModified>,
    #[serde(rename = "FileData", skip_serializing_if = "Option::is_none")]
    pub file_data: Option<FileData>,
    #[serde(rename = "CertificateData", skip_serializing_if = "Option::is_none")]
    pub certificate_data: Option<CertificateData>,
    #[serde(rename = "RegistryHandle", skip_serializing_if = "Option::is_none")]
    pub registry_handle: Option<RegistryHandle>,
    #[serde(rename = "RecordData", skip_serializing_if = "Option::is_none")]
    pub record_data: Option<RecordData>,
    #[serde(rename = "EventData", skip_serializing_if = "Option::is_none")]
    pub event_data: Option<Box<EventData>>,
    #[serde(rename = "Incident", skip_serializing_if = "Option::is_none")]
    pub incident: Option<Box<Incident>>,
    #[serde(rename = "Expectation", skip_serializing_if = "Option::is_none")]
    pub expectation: Option<Expectation>,
    #[serde(rename = "Reference", skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,
    #[serde(rename = "Assessment", skip_serializing_if = "Option::is_none")]
    pub assessment: Option<Assessment>,
    #[serde(rename = "DetectionPattern", skip_serializing_if = "Option::is_none")]
    pub detection_pattern: Option<DetectionPattern>,
    #[serde(rename = "HistoryItem", skip_serializing_if = "Option::is_none")]
    pub history_item: Option<HistoryItem>,
    #[serde(rename = "BulkObservable", skip_serializing_if = "Option::is_none")]
    pub bulk_observable: Option<BulkObservable>,
    #[serde(rename = "AdditionalData", default, skip_serializing_if = "Vec::is_empty")]
    pub additional_data: Vec<ExtensionType>,
}

// ─── BulkObservable ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkObservable {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub observable_type: Option<BulkObservableType>,
    #[serde(rename = "ext-type", skip_serializing_if = "Option::is_none")]
    pub ext_observable_type: Option<String>,
    #[serde(rename = "BulkObservableFormat", skip_serializing_if = "Option::is_none")]
    pub bulk_observable_format: Option<BulkObservableFormat>,
    #[serde(rename = "BulkObservableList", skip_serializing_if = "Option::is_none")]
    pub bulk_observable_list: Option<String>,
    #[serde(rename = "AdditionalData", default, skip_serializing_if = "Vec::is_empty")]
    pub additional_data: Vec<ExtensionType>,
}

// ─── BulkObservableFormat ───────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkObservableFormat {
    #[serde(rename = "Hash", skip_serializing_if = "Option::is_none")]
    pub hash: Option<Hash>,
    #[serde(rename = "AdditionalData", default, skip_serializing_if = "Vec::is_empty")]
    pub additional_data: Vec<ExtensionType>,
}

// ─── ObservableReference ────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservableReference {
    #[serde(rename = "uid-ref", skip_serializing_if = "Option::is_none")]
    pub uid_ref: Option<String>,
}

// ─── IndicatorExpression ────────────────────────────────────────────────────

/// Boolean composition of observables and other indicators.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorExpression {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<IndicatorOperator>,
    #[serde(rename = "IndicatorExpression", default, skip_serializing_if = "Vec::is_empty")]
    pub indicator_expressions: Vec<IndicatorExpression>,
    #[serde(rename = "Observable", default, skip_serializing_if = "Vec::is_empty")]
    pub observables: Vec<Observable>,
    #[serde(rename = "ObservableReference", default, skip_serializing_if = "Vec::is_empty")]
    pub observable_references: Vec<ObservableReference>,
    #[serde(rename = "IndicatorReference", default, skip_serializing_if = "Vec::is_empty")]
    pub indicator_references: Vec<IndicatorReference>,
    #[serde(rename = "Confidence", skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    #[serde(rename = "AdditionalData", default, skip_serializing_if = "Vec::is_empty")]
    pub additional_data: Vec<ExtensionType>,
}

// ─── IndicatorReference ─────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReference {
    #[serde(rename = "uid-ref", skip_serializing_if = "Option::is_none")]
    pub uid_ref: Option<String>,
    #[serde(rename = "euid-ref", skip_serializing_if = "Option::is_none")]
    pub euid_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

// ─── AttackPhase ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttackPhase {
    #[serde(rename = "AttackPhaseID", default, skip_serializing_if = "Vec::is_empty")]
    pub attack_phase_ids: Vec<String>,
    #[serde(rename = "URL", default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<MlString>,
    #[serde(rename = "AdditionalData", default, skip_serializing_if = "Vec::is_empty")]
    pub additional_data: Vec<ExtensionType>,
}

// ─── Convenience constructors ───────────────────────────────────────────────

impl IodefDocument {
    /// An empty document declaring [`IODEF_VERSION`] and the given language.
    pub fn new(lang: impl Into<String>) -> Self {
        IodefDocument {
            version: Some(IODEF_VERSION.to_string()),
            lang: Some(lang.into()),
            ..Default::default()
        }
    }
}

impl Incident {
    /// An incident with the three slots every incident needs besides a contact.
    pub fn new(
        purpose: IncidentPurpose,
        incident_id: IncidentId,
        generation_time: impl Into<String>,
    ) -> Self {
        Incident {
            purpose: Some(purpose),
            incident_id: Some(incident_id),
            generation_time: Some(generation_time.into()),
            ..Default::default()
        }
    }
}

impl IncidentId {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        IncidentId {
            id: Some(id.into()),
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

impl IndicatorId {
    pub fn new(id: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        IndicatorId {
            id: Some(id.into()),
            name: Some(name.into()),
            version: Some(version.into()),
        }
    }
}

impl Contact {
    pub fn new(role: ContactRole, contact_type: ContactType) -> Self {
        Contact {
            role: Some(role),
            contact_type: Some(contact_type),
            ..Default::default()
        }
    }

    /// Set `role` to `ext-value` and carry the real role in `ext-role`.
    pub fn with_ext_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(ContactRole::ExtValue);
        self.ext_role = Some(role.into());
        self
    }
}

impl Email {
    pub fn new(to: impl Into<String>) -> Self {
        Email {
            email_to: Some(to.into()),
            ..Default::default()
        }
    }
}

impl Confidence {
    pub fn rated(rating: ConfidenceRating) -> Self {
        Confidence {
            value: None,
            rating: Some(rating),
            ext_rating: None,
        }
    }

    pub fn numeric(value: f64) -> Self {
        Confidence {
            value: Some(value),
            rating: Some(ConfidenceRating::Numeric),
            ext_rating: None,
        }
    }
}

impl Address {
    pub fn new(value: impl Into<String>, category: AddressCategory) -> Self {
        Address {
            value: Some(value.into()),
            category: Some(category),
            ..Default::default()
        }
    }
}

impl Node {
    pub fn from_address(address: Address) -> Self {
        Node {
            addresses: vec![address],
            ..Default::default()
        }
    }
}

impl System {
    pub fn new(category: SystemCategory, node: Node) -> Self {
        System {
            category: Some(category),
            node: Some(node),
            ..Default::default()
        }
    }
}

impl ExtensionType {
    pub fn new(dtype: ExtensionDtype, value: impl Into<Value>) -> Self {
        ExtensionType {
            value: Some(value.into()),
            dtype: Some(dtype),
            ..Default::default()
        }
    }
}

impl HistoryItem {
    pub fn new(action: Action, date_time: impl Into<String>) -> Self {
        HistoryItem {
            action: Some(action),
            date_time: Some(date_time.into()),
            ..Default::default()
        }
    }
}

impl Indicator {
    pub fn new(indicator_id: IndicatorId, observable: Observable) -> Self {
        Indicator {
            indicator_id: Some(indicator_id),
            observable: Some(observable),
            ..Default::default()
        }
    }
}

impl Observable {
    pub fn from_system(system: System) -> Self {
        Observable {
            system: Some(system),
            ..Default::default()
        }
    }

    pub fn from_address(address: Address) -> Self {
        Observable {
            address: Some(address),
            ..Default::default()
        }
    }

    /// Wrap a nested incident. The nested tree is owned; see the module docs
    /// on depth.
    pub fn from_incident(incident: Incident) -> Self {
        Observable {
            incident: Some(Box::new(incident)),
            ..Default::default()
        }
    }
}
