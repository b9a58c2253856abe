//! Enumerations used throughout the IODEF data model.
//!
//! Each variant carries its exact JSON spelling. Enumerations that the RFC
//! marks as extensible include an `ExtValue` variant (`"ext-value"`), which
//! pairs with an `ext-<attr>` free-text slot on the owning record.
//!
//! The sets are IANA registries and grow over time. A string this crate does
//! not know decodes as `Unregistered` and encodes back unchanged, so only a
//! value of the wrong JSON type fails to decode.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ext::{EXT_VALUE, Extensible};

macro_rules! iodef_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            /// A value outside the set known to this crate, kept verbatim.
            Unregistered(String),
        }

        impl $name {
            /// Map a wire string onto a variant. Never fails.
            pub fn from_wire(text: &str) -> Self {
                match text {
                    $($text => $name::$variant,)+
                    other => $name::Unregistered(other.to_string()),
                }
            }

            /// The JSON spelling of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $text,)+
                    $name::Unregistered(text) => text,
                }
            }

            pub fn is_registered(&self) -> bool {
                !matches!(self, $name::Unregistered(_))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                Ok($name::from_wire(&text))
            }
        }

        impl Extensible for $name {
            fn is_ext_value(&self) -> bool {
                self.as_str() == EXT_VALUE
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

iodef_enum! {
    /// Disclosure guidance (`restriction`), including the TLP colors.
    Restriction {
        Public => "public",
        Partner => "partner",
        NeedToKnow => "need-to-know",
        Private => "private",
        Default => "default",
        White => "white",
        Green => "green",
        Amber => "amber",
        Red => "red",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    /// Why an incident is being reported.
    IncidentPurpose {
        Traceback => "traceback",
        Mitigation => "mitigation",
        Reporting => "reporting",
        Watch => "watch",
        Other => "other",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    IncidentStatus {
        New => "new",
        InProgress => "in-progress",
        Forwarded => "forwarded",
        Resolved => "resolved",
        Future => "future",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    ConfidenceRating {
        Low => "low",
        Medium => "medium",
        High => "high",
        Numeric => "numeric",
        Unknown => "unknown",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    /// The role a contact plays in the incident.
    ContactRole {
        Creator => "creator",
        Reporter => "reporter",
        Admin => "admin",
        Tech => "tech",
        Provider => "provider",
        User => "user",
        Billing => "billing",
        Legal => "legal",
        Irt => "irt",
        Abuse => "abuse",
        Cc => "cc",
        CcIrt => "cc-irt",
        Leo => "leo",
        Vendor => "vendor",
        VendorSupport => "vendor-support",
        Victim => "victim",
        VictimNotified => "victim-notified",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    ContactType {
        Person => "person",
        Organization => "organization",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    Registry {
        Internic => "internic",
        Apnic => "apnic",
        Arin => "arin",
        Lacnic => "lacnic",
        Ripe => "ripe",
        Afrinic => "afrinic",
        Local => "local",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    PostalAddressType {
        Street => "street",
        Mailing => "mailing",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    EmailType {
        Direct => "direct",
        Hotline => "hotline",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    TelephoneType {
        Wired => "wired",
        Mobile => "mobile",
        Fax => "fax",
        Hotline => "hotline",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    /// How an incident was discovered.
    DiscoverySource {
        Nidps => "nidps",
        Hips => "hips",
        Siem => "siem",
        Av => "av",
        ThirdPartyMonitoring => "third-party-monitoring",
        Incident => "incident",
        OsLog => "os-log",
        ApplicationLog => "application-log",
        DeviceLog => "device-log",
        NetworkFlow => "network-flow",
        PassiveDns => "passive-dns",
        Investigation => "investigation",
        Audit => "audit",
        InternalNotification => "internal-notification",
        ExternalNotification => "external-notification",
        Leo => "leo",
        Partner => "partner",
        Actor => "actor",
        Unknown => "unknown",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    Occurrence {
        Actual => "actual",
        Potential => "potential",
    }
}

iodef_enum! {
    /// Three-step severity shared by several impact records.
    Severity {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

iodef_enum! {
    Completion {
        Failed => "failed",
        Succeeded => "succeeded",
    }
}

iodef_enum! {
    SystemImpactType {
        TakeoverAccount => "takeover-account",
        TakeoverService => "takeover-service",
        TakeoverSystem => "takeover-system",
        CpsManipulation => "cps-manipulation",
        CpsDamage => "cps-damage",
        AvailabilityData => "availability-data",
        AvailabilityAccount => "availability-account",
        AvailabilityService => "availability-service",
        AvailabilitySystem => "availability-system",
        DamagedSystem => "damaged-system",
        DamagedData => "damaged-data",
        BreachProprietary => "breach-proprietary",
        BreachPrivacy => "breach-privacy",
        BreachCredential => "breach-credential",
        BreachConfiguration => "breach-configuration",
        IntegrityData => "integrity-data",
        IntegrityConfiguration => "integrity-configuration",
        IntegrityHardware => "integrity-hardware",
        TrafficRedirection => "traffic-redirection",
        MonitoringTraffic => "monitoring-traffic",
        MonitoringHost => "monitoring-host",
        Policy => "policy",
        Unknown => "unknown",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    BusinessImpactSeverity {
        None => "none",
        Low => "low",
        Medium => "medium",
        High => "high",
        Unknown => "unknown",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    BusinessImpactType {
        BreachProprietary => "breach-proprietary",
        BreachPrivacy => "breach-privacy",
        BreachCredential => "breach-credential",
        LossOfIntegrity => "loss-of-integrity",
        LossOfService => "loss-of-service",
        TheftFinancial => "theft-financial",
        TheftService => "theft-service",
        DegradedReputation => "degraded-reputation",
        AssetDamage => "asset-damage",
        AssetManipulation => "asset-manipulation",
        Legal => "legal",
        Extortion => "extortion",
        Unknown => "unknown",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    TimeImpactMetric {
        Labor => "labor",
        Elapsed => "elapsed",
        Downtime => "downtime",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    /// Unit of time for `duration` attributes.
    Duration {
        Second => "second",
        Minute => "minute",
        Hour => "hour",
        Day => "day",
        Month => "month",
        Quarter => "quarter",
        Year => "year",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    CounterType {
        Count => "count",
        Peak => "peak",
        Average => "average",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    CounterUnit {
        Byte => "byte",
        Mbit => "mbit",
        Packet => "packet",
        Flow => "flow",
        Session => "session",
        Alert => "alert",
        Message => "message",
        Event => "event",
        Host => "host",
        Site => "site",
        Organization => "organization",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    /// Response actions, used by `HistoryItem` and `Expectation`.
    Action {
        Nothing => "nothing",
        ContactSourceSite => "contact-source-site",
        ContactTargetSite => "contact-target-site",
        ContactSender => "contact-sender",
        Investigate => "investigate",
        BlockHost => "block-host",
        BlockNetwork => "block-network",
        BlockPort => "block-port",
        RateLimitHost => "rate-limit-host",
        RateLimitNetwork => "rate-limit-network",
        RateLimitPort => "rate-limit-port",
        RedirectTraffic => "redirect-traffic",
        Honeypot => "honeypot",
        UpgradeSoftware => "upgrade-software",
        RebuildAsset => "rebuild-asset",
        HardenAsset => "harden-asset",
        RemediateOther => "remediate-other",
        StatusTriage => "status-triage",
        StatusNewInfo => "status-new-info",
        WatchAndReport => "watch-and-report",
        Training => "training",
        DefinedCoa => "defined-coa",
        Other => "other",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    SystemCategory {
        Source => "source",
        Target => "target",
        Intermediate => "intermediate",
        Sensor => "sensor",
        Infrastructure => "infrastructure",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    YesNoUnknown {
        Yes => "yes",
        No => "no",
        Unknown => "unknown",
    }
}

iodef_enum! {
    Ownership {
        Organization => "organization",
        Personal => "personal",
        Partner => "partner",
        Customer => "customer",
        NoRelationship => "no-relationship",
        Unknown => "unknown",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    AddressCategory {
        Asn => "asn",
        Atm => "atm",
        EMail => "e-mail",
        Ipv4Addr => "ipv4-addr",
        Ipv4Net => "ipv4-net",
        Ipv4NetMasked => "ipv4-net-masked",
        Ipv4NetMask => "ipv4-net-mask",
        Ipv6Addr => "ipv6-addr",
        Ipv6Net => "ipv6-net",
        Ipv6NetMasked => "ipv6-net-masked",
        Mac => "mac",
        SiteUri => "site-uri",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    NodeRoleCategory {
        Client => "client",
        ClientEnterprise => "client-enterprise",
        ClientPartner => "client-partner",
        ClientRemote => "client-remote",
        ClientKiosk => "client-kiosk",
        ClientMobile => "client-mobile",
        ServerInternal => "server-internal",
        ServerPublic => "server-public",
        Www => "www",
        Mail => "mail",
        Webmail => "webmail",
        Messaging => "messaging",
        Streaming => "streaming",
        Voice => "voice",
        File => "file",
        Ftp => "ftp",
        P2p => "p2p",
        Name => "name",
        Directory => "directory",
        Credential => "credential",
        Print => "print",
        Application => "application",
        Database => "database",
        Backup => "backup",
        Dhcp => "dhcp",
        Assessment => "assessment",
        SourceControl => "source-control",
        ConfigManagement => "config-management",
        Monitoring => "monitoring",
        Infra => "infra",
        InfraFirewall => "infra-firewall",
        InfraRouter => "infra-router",
        InfraSwitch => "infra-switch",
        Camera => "camera",
        Proxy => "proxy",
        RemoteAccess => "remote-access",
        Log => "log",
        Virtualization => "virtualization",
        Pos => "pos",
        Scada => "scada",
        ScadaSupervisory => "scada-supervisory",
        Sinkhole => "sinkhole",
        Honeypot => "honeypot",
        Anomyzation => "anomyzation",
        C2Server => "c2-server",
        MalwareDistribution => "malware-distribution",
        DropServer => "drop-server",
        HopPoint => "hop-point",
        Reflector => "reflector",
        PhishingSite => "phishing-site",
        SpearPhishingSite => "spear-phishing-site",
        RecruitingSite => "recruiting-site",
        FraudulentSite => "fraudulent-site",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    /// Data type of an `ExtensionType` payload.
    ExtensionDtype {
        Boolean => "boolean",
        Byte => "byte",
        Bytes => "bytes",
        Character => "character",
        DateTime => "date-time",
        Ntpstamp => "ntpstamp",
        Integer => "integer",
        Portlist => "portlist",
        Real => "real",
        String => "string",
        File => "file",
        Path => "path",
        Frame => "frame",
        Packet => "packet",
        Ipv4Packet => "ipv4-packet",
        Ipv6Packet => "ipv6-packet",
        Url => "url",
        Csv => "csv",
        Winreg => "winreg",
        Xml => "xml",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    SoftwareSpecName {
        Custom => "custom",
        Cpe => "cpe",
        Swid => "swid",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    SoftwareDtype {
        Bytes => "bytes",
        Integer => "integer",
        Real => "real",
        String => "string",
        Xml => "xml",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    SystemStatus {
        Spoofed => "spoofed",
        Fraudulent => "fraudulent",
        InnocentHacked => "innocent-hacked",
        InnocentHijacked => "innocent-hijacked",
        Unknown => "unknown",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    DomainStatus {
        ReservedDelegation => "reservedDelegation",
        AssignedAndActive => "assignedAndActive",
        AssignedAndInactive => "assignedAndInactive",
        AssignedAndOnHold => "assignedAndOnHold",
        Revoked => "revoked",
        TransferPending => "transferPending",
        RegistryLock => "registryLock",
        RegistrarLock => "registrarLock",
        Other => "other",
        Unknown => "unknown",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    RecordPatternType {
        Regex => "regex",
        Binary => "binary",
        Xpath => "xpath",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    OffsetUnit {
        Line => "line",
        Byte => "byte",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    RegistryAction {
        AddKey => "add-key",
        AddValue => "add-value",
        DeleteKey => "delete-key",
        DeleteValue => "delete-value",
        ModifyKey => "modify-key",
        ModifyValue => "modify-value",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    HashScope {
        FileContents => "file-contents",
        FilePeSection => "file-pe-section",
        FilePeIat => "file-pe-iat",
        FilePeResource => "file-pe-resource",
        FilePdfObject => "file-pdf-object",
        EmailHash => "email-hash",
        EmailHeadersHash => "email-headers-hash",
        EmailBodyHash => "email-body-hash",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    BulkObservableType {
        Asn => "asn",
        Atm => "atm",
        EMail => "e-mail",
        EmailXMailer => "email-x-mailer",
        EmailSubject => "email-subject",
        FileName => "file-name",
        Flow => "flow",
        FlowRoute => "flow-route",
        Ipv4Addr => "ipv4-addr",
        Ipv4Net => "ipv4-net",
        Ipv4NetMask => "ipv4-net-mask",
        Ipv6Addr => "ipv6-addr",
        Ipv6Net => "ipv6-net",
        Ipv6NetMask => "ipv6-net-mask",
        Mac => "mac",
        SiteUri => "site-uri",
        DomainName => "domain-name",
        DomainToIpv4 => "domain-to-ipv4",
        DomainToIpv6 => "domain-to-ipv6",
        DomainToIpv4Timestamp => "domain-to-ipv4-timestamp",
        DomainToIpv6Timestamp => "domain-to-ipv6-timestamp",
        Ipv4Port => "ipv4-port",
        Ipv6Port => "ipv6-port",
        WindowsRegKey => "windows-reg-key",
        FileHash => "file-hash",
        ExtValue => "ext-value",
    }
}

iodef_enum! {
    /// Boolean operator combining the children of an `IndicatorExpression`.
    IndicatorOperator {
        Not => "not",
        And => "and",
        Or => "or",
        Xor => "xor",
    }
}
