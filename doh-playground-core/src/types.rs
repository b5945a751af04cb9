//! Public types shared by the query pipeline, the zone formatter and the UI.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::QueryError;

macro_rules! record_types {
    ($($variant:ident = $code:literal => $name:literal),+ $(,)?) => {
        /// DNS resource record type.
        ///
        /// Every variant carries its IANA type code; the table is usable in both
        /// directions through [`from_code`](Self::from_code) / [`code`](Self::code)
        /// and [`FromStr`] / [`Display`](fmt::Display).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum RecordType {
            $(
                #[doc = concat!("`", $name, "` (type ", stringify!($code), ").")]
                $variant,
            )+
            /// A type code with no mnemonic in the table, shown as `TYPE<code>`.
            Unknown(u16),
        }

        impl RecordType {
            /// All named record types, in table order.
            pub const ALL: &'static [RecordType] = &[$(RecordType::$variant),+];

            /// Look up a type by its numeric code.
            pub const fn from_code(code: u16) -> Self {
                match code {
                    $($code => Self::$variant,)+
                    other => Self::Unknown(other),
                }
            }

            /// Numeric type code.
            pub const fn code(self) -> u16 {
                match self {
                    $(Self::$variant => $code,)+
                    Self::Unknown(code) => code,
                }
            }

            /// Mnemonic, or `None` for [`Unknown`](Self::Unknown).
            pub const fn mnemonic(self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some($name),)+
                    Self::Unknown(_) => None,
                }
            }

            fn from_mnemonic(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

record_types! {
    A = 1 => "A",
    Ns = 2 => "NS",
    Cname = 5 => "CNAME",
    Soa = 6 => "SOA",
    Ptr = 12 => "PTR",
    Hinfo = 13 => "HINFO",
    Mx = 15 => "MX",
    Txt = 16 => "TXT",
    Rp = 17 => "RP",
    Afsdb = 18 => "AFSDB",
    Sig = 24 => "SIG",
    Key = 25 => "KEY",
    Aaaa = 28 => "AAAA",
    Loc = 29 => "LOC",
    Srv = 33 => "SRV",
    Naptr = 35 => "NAPTR",
    Kx = 36 => "KX",
    Cert = 37 => "CERT",
    Dname = 39 => "DNAME",
    Opt = 41 => "OPT",
    Apl = 42 => "APL",
    Ds = 43 => "DS",
    Sshfp = 44 => "SSHFP",
    Ipseckey = 45 => "IPSECKEY",
    Rrsig = 46 => "RRSIG",
    Nsec = 47 => "NSEC",
    Dnskey = 48 => "DNSKEY",
    Dhcid = 49 => "DHCID",
    Nsec3 = 50 => "NSEC3",
    Nsec3param = 51 => "NSEC3PARAM",
    Tlsa = 52 => "TLSA",
    Smimea = 53 => "SMIMEA",
    Hip = 55 => "HIP",
    Cds = 59 => "CDS",
    Cdnskey = 60 => "CDNSKEY",
    Openpgpkey = 61 => "OPENPGPKEY",
    Csync = 62 => "CSYNC",
    Zonemd = 63 => "ZONEMD",
    Svcb = 64 => "SVCB",
    Https = 65 => "HTTPS",
    Eui48 = 108 => "EUI48",
    Eui64 = 109 => "EUI64",
    Tkey = 249 => "TKEY",
    Tsig = 250 => "TSIG",
    Any = 255 => "ANY",
    Uri = 256 => "URI",
    Caa = 257 => "CAA",
    Ta = 32768 => "TA",
    Dlv = 32769 => "DLV",
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mnemonic() {
            Some(name) => f.write_str(name),
            None => write!(f, "TYPE{}", self.code()),
        }
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        if let Some(record_type) = Self::from_mnemonic(&upper) {
            return Ok(record_type);
        }
        // RFC 3597 generic notation
        upper
            .strip_prefix("TYPE")
            .and_then(|code| code.parse::<u16>().ok())
            .map(Self::from_code)
            .ok_or_else(|| format!("Unsupported DNS record type: {s}"))
    }
}

impl Serialize for RecordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RecordType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A displayable DNS answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    /// List key built from the answer fields and its position in the result
    /// set. Not a stable identifier.
    pub id: String,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Owner name, always fully qualified (trailing dot).
    pub name: String,
    /// Record data as presented by the resolver.
    pub data: String,
    /// Time-to-live in seconds.
    pub ttl: u32,
}

impl DnsRecord {
    /// Build a record from one resolver answer.
    ///
    /// `query_index` is the position of the sub-query in the batch and
    /// `answer_index` the position of the answer inside that sub-query.
    pub fn from_answer(answer: DohAnswer, query_index: usize, answer_index: usize) -> Self {
        let id = STANDARD.encode(format!(
            "{}{}{}{query_index}{answer_index}",
            answer.record_type, answer.name, answer.data
        ));
        Self {
            id,
            record_type: RecordType::from_code(answer.record_type),
            name: fully_qualified(answer.name),
            data: answer.data,
            ttl: answer.ttl,
        }
    }
}

/// Append the root label if `name` lacks it.
fn fully_qualified(mut name: String) -> String {
    if !name.ends_with('.') {
        name.push('.');
    }
    name
}

/// A named DoH endpoint speaking the JSON API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolver {
    /// Display name (also the value stored in the query string).
    pub name: &'static str,
    /// Base URL; `name` and `type` are appended as query parameters.
    pub url: &'static str,
}

/// JSON body returned by a DoH resolver (`application/dns-json`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DohResponse {
    /// DNS RCODE; `0` is NOERROR.
    pub status: u32,
    /// Answer section, absent on NXDOMAIN and friends.
    #[serde(default)]
    pub answer: Option<Vec<DohAnswer>>,
}

impl DohResponse {
    /// Flatten the answer section into records.
    ///
    /// A non-zero status or a missing answer section yields no records.
    pub fn into_records(self, query_index: usize) -> Vec<DnsRecord> {
        if self.status != 0 {
            return Vec::new();
        }
        self.answer
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(answer_index, answer)| DnsRecord::from_answer(answer, query_index, answer_index))
            .collect()
    }
}

/// One entry of the `Answer` array.
#[derive(Debug, Clone, Deserialize)]
pub struct DohAnswer {
    #[serde(rename = "type")]
    pub record_type: u16,
    pub name: String,
    pub data: String,
    #[serde(rename = "TTL")]
    pub ttl: u32,
}

/// Result of one pipeline run, shaped for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOutcome {
    /// Flattened records, in query issuance order.
    pub records: Vec<DnsRecord>,
    /// Informational message (set when the batch succeeded but returned nothing).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    /// Error message (set when any sub-query failed; `records` is then empty).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Message shown when a batch completes without any record.
pub const NO_RESULTS_INFO: &str = "No results returned from resolver";

impl QueryOutcome {
    /// Shape a batch result: errors discard every record, empty batches carry
    /// the informational message.
    pub fn from_result(result: Result<Vec<DnsRecord>, QueryError>) -> Self {
        match result {
            Ok(records) if records.is_empty() => Self {
                records,
                info: Some(NO_RESULTS_INFO.to_string()),
                error: None,
            },
            Ok(records) => Self {
                records,
                info: None,
                error: None,
            },
            Err(e) => Self {
                records: Vec::new(),
                info: None,
                error: Some(e.to_string()),
            },
        }
    }
}
