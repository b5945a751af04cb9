//! Shareable query string: `resolver`, `domain` and repeated `types`.
//!
//! The query string is the source of truth for the form on launch and is
//! rewritten on every submit, so a lookup can be bookmarked or passed around.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;
use url::Url;

use crate::resolvers::{default_resolver, resolver_or_default};
use crate::types::{RecordType, Resolver};

/// Record types selected when the query string carries none.
pub const DEFAULT_TYPES: [RecordType; 3] = [RecordType::A, RecordType::Aaaa, RecordType::Cname];

const KEY_RESOLVER: &str = "resolver";
const KEY_DOMAIN: &str = "domain";
const KEY_TYPES: &str = "types";

/// Form values as persisted in the query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    /// Resolver display name.
    pub resolver: String,
    /// Comma separated domain list, as typed.
    pub domain: String,
    /// Record type names.
    pub types: Vec<String>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            resolver: default_resolver().name.to_string(),
            domain: String::new(),
            types: DEFAULT_TYPES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl QueryParams {
    /// Parse a query string, applying defaults for missing keys.
    ///
    /// Accepts `a=b&c=d`, `?a=b&c=d`, or a full URL (only its query is read).
    /// When a key repeats, the first `resolver` / `domain` value wins.
    pub fn parse(input: &str) -> Self {
        let query = query_part(input);

        let mut resolver = None;
        let mut domain = None;
        let mut types = Vec::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                KEY_RESOLVER if resolver.is_none() => resolver = Some(value.into_owned()),
                KEY_DOMAIN if domain.is_none() => domain = Some(value.into_owned()),
                KEY_TYPES if !value.is_empty() => types.push(value.into_owned()),
                _ => {}
            }
        }

        let defaults = Self::default();
        Self {
            resolver: resolver.filter(|r| !r.is_empty()).unwrap_or(defaults.resolver),
            domain: domain.unwrap_or_default(),
            types: if types.is_empty() { defaults.types } else { types },
        }
    }

    /// Serialize as `resolver=…&domain=…&types=…&types=…` (no leading `?`).
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair(KEY_RESOLVER, &self.resolver);
        serializer.append_pair(KEY_DOMAIN, &self.domain);
        for record_type in &self.types {
            serializer.append_pair(KEY_TYPES, record_type);
        }
        serializer.finish()
    }

    /// Domains to query: comma separated and trimmed.
    ///
    /// Blank parts are kept and queried as-is, so `"a.test,"` or an empty
    /// field reaches the resolver and its rejection shows up as an error.
    pub fn domains(&self) -> Vec<String> {
        split_domains(&self.domain)
    }

    /// Selected record types; unrecognized names are skipped.
    pub fn record_types(&self) -> Vec<RecordType> {
        self.types
            .iter()
            .filter_map(|name| match name.parse::<RecordType>() {
                Ok(record_type) => Some(record_type),
                Err(e) => {
                    log::warn!("{e}");
                    None
                }
            })
            .collect()
    }

    /// Selected resolver, falling back to the default one.
    pub fn resolver(&self) -> &'static Resolver {
        resolver_or_default(&self.resolver)
    }
}

/// Extract the bare query (no leading `?`) from a query string or full URL.
pub fn query_part(input: &str) -> String {
    let input = input.trim();
    if input.contains("://") {
        match Url::parse(input) {
            Ok(url) => url.query().unwrap_or_default().to_string(),
            Err(e) => {
                log::warn!("Ignoring unparsable URL \"{input}\": {e}");
                String::new()
            }
        }
    } else {
        input.trim_start_matches('?').to_string()
    }
}

/// Split a comma separated domain list, trimming every part.
pub fn split_domains(input: &str) -> Vec<String> {
    input.split(',').map(str::trim).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_gives_defaults() {
        let params = QueryParams::parse("");
        assert_eq!(params, QueryParams::default());
        assert_eq!(params.resolver, "Cloudflare");
        assert_eq!(params.types, vec!["A", "AAAA", "CNAME"]);
        assert!(params.domain.is_empty());
    }

    #[test]
    fn test_parse_all_keys() {
        let params = QueryParams::parse("?resolver=Google&domain=example.com%2C+example.org&types=MX&types=TXT");
        assert_eq!(params.resolver, "Google");
        assert_eq!(params.domain, "example.com, example.org");
        assert_eq!(params.types, vec!["MX", "TXT"]);
    }

    #[test]
    fn test_parse_full_url() {
        let params = QueryParams::parse("https://doh.example/playground?domain=rust-lang.org&types=AAAA");
        assert_eq!(params.domain, "rust-lang.org");
        assert_eq!(params.types, vec!["AAAA"]);
        assert_eq!(params.resolver, "Cloudflare");
    }

    #[test]
    fn test_query_part() {
        assert_eq!(query_part("?domain=a.test"), "domain=a.test");
        assert_eq!(query_part("  domain=a.test "), "domain=a.test");
        assert_eq!(query_part("https://x.test/p?types=A#frag"), "types=A");
        assert_eq!(query_part("https://x.test/p"), "");
    }

    #[test]
    fn test_first_value_wins() {
        let params = QueryParams::parse("domain=a.test&domain=b.test");
        assert_eq!(params.domain, "a.test");
    }

    #[test]
    fn test_query_string_round_trip() {
        let params = QueryParams {
            resolver: "Google".to_string(),
            domain: "example.com,example.net".to_string(),
            types: vec!["A".to_string(), "NS".to_string()],
        };
        let encoded = params.to_query_string();
        assert_eq!(
            encoded,
            "resolver=Google&domain=example.com%2Cexample.net&types=A&types=NS"
        );
        assert_eq!(QueryParams::parse(&encoded), params);
    }

    #[test]
    fn test_domains_are_trimmed_and_blanks_kept() {
        let params = QueryParams {
            domain: " example.com ,, example.org,".to_string(),
            ..QueryParams::default()
        };
        assert_eq!(params.domains(), vec!["example.com", "", "example.org", ""]);
        assert_eq!(split_domains(""), vec![""]);
    }

    #[test]
    fn test_record_types_skip_unknown_names() {
        let params = QueryParams {
            types: vec!["a".to_string(), "NOPE".to_string(), "CAA".to_string()],
            ..QueryParams::default()
        };
        assert_eq!(params.record_types(), vec![RecordType::A, RecordType::Caa]);
    }

    #[test]
    fn test_unknown_resolver_falls_back() {
        let params = QueryParams::parse("resolver=Nowhere");
        assert_eq!(params.resolver, "Nowhere");
        assert_eq!(params.resolver().name, "Cloudflare");
    }
}
