//! DNS-over-HTTPS playground core
//!
//! Looks up DNS records through public DoH resolvers speaking the JSON API
//! (`application/dns-json`), flattens the answers into display rows and
//! exports them as zone-file text. Stateless apart from the HTTP client.

mod error;
mod params;
mod resolvers;
mod services;
mod transport;
mod types;

#[cfg(test)]
mod test_utils;

pub use error::{QueryError, QueryResult};
pub use params::{query_part, split_domains, QueryParams, DEFAULT_TYPES};
pub use resolvers::{default_resolver, find_resolver, resolver_index, resolver_or_default, RESOLVERS};
pub use services::{build_query_url, format_zone, QueryPipeline};
pub use transport::{DohTransport, HttpReply, ReqwestTransport, DNS_JSON};
pub use types::{
    DnsRecord, DohAnswer, DohResponse, QueryOutcome, RecordType, Resolver, NO_RESULTS_INFO,
};
