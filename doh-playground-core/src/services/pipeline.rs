//! Parallel DoH lookups for a set of domains × record types.

use std::sync::Arc;

use futures::future::join_all;
use url::Url;

use crate::error::{QueryError, QueryResult};
use crate::transport::{truncate_for_log, DohTransport};
use crate::types::{DnsRecord, DohResponse, QueryOutcome, RecordType, Resolver};

/// Fans one lookup out per (domain, type) pair and joins the answers.
#[derive(Clone)]
pub struct QueryPipeline {
    transport: Arc<dyn DohTransport>,
}

impl QueryPipeline {
    pub fn new(transport: Arc<dyn DohTransport>) -> Self {
        Self { transport }
    }

    /// Run a batch and shape it for display.
    ///
    /// Any failing sub-query turns the whole batch into an error; an empty but
    /// successful batch carries an informational message instead.
    pub async fn run(
        &self,
        domains: &[String],
        types: &[RecordType],
        resolver: &Resolver,
    ) -> QueryOutcome {
        QueryOutcome::from_result(self.try_run(domains, types, resolver).await)
    }

    /// Run a batch, returning every record or the first error.
    ///
    /// Requests are issued concurrently (types outer, domains inner) and all of
    /// them are awaited before the result is assembled, so record order is
    /// independent of completion order.
    pub async fn try_run(
        &self,
        domains: &[String],
        types: &[RecordType],
        resolver: &Resolver,
    ) -> QueryResult<Vec<DnsRecord>> {
        let base = Url::parse(resolver.url)
            .map_err(|e| QueryError::InvalidUrl(format!("{}: {e}", resolver.url)))?;

        let lookups = types
            .iter()
            .flat_map(|record_type| domains.iter().map(move |domain| (domain, *record_type)))
            .enumerate()
            .map(|(index, (domain, record_type))| {
                self.lookup(build_query_url(&base, domain, record_type), index)
            });

        let settled = join_all(lookups).await;
        let batch_size = settled.len();

        let records = settled
            .into_iter()
            .collect::<QueryResult<Vec<_>>>()
            .inspect_err(|e| log::warn!("[{}] Batch of {batch_size} failed: {e}", resolver.name))?
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        log::info!(
            "[{}] {batch_size} lookups returned {} records",
            resolver.name,
            records.len()
        );
        Ok(records)
    }

    async fn lookup(&self, url: Url, index: usize) -> QueryResult<Vec<DnsRecord>> {
        let reply = self.transport.get(url).await?;

        if !reply.is_success() {
            log::warn!(
                "Resolver returned HTTP {}: {}",
                reply.status,
                truncate_for_log(&reply.body)
            );
            return Err(QueryError::HttpStatus(reply.status));
        }

        let response: DohResponse = serde_json::from_str(&reply.body).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            QueryError::ParseError(e.to_string())
        })?;

        Ok(response.into_records(index))
    }
}

/// `base?name=<domain>&type=<TYPE>`; existing query pairs on `base` are kept.
pub fn build_query_url(base: &Url, domain: &str, record_type: RecordType) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("name", domain)
        .append_pair("type", &record_type.to_string());
    url
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::resolvers::RESOLVERS;
    use crate::test_utils::MockTransport;
    use crate::types::NO_RESULTS_INFO;

    const CLOUDFLARE: &str = "https://cloudflare-dns.com/dns-query";

    fn domains(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn pipeline(mock: &Arc<MockTransport>) -> QueryPipeline {
        QueryPipeline::new(mock.clone())
    }

    #[test]
    fn test_build_query_url() {
        let base = Url::parse(CLOUDFLARE).unwrap();
        let url = build_query_url(&base, "example.com", RecordType::Aaaa);
        assert_eq!(
            url.as_str(),
            "https://cloudflare-dns.com/dns-query?name=example.com&type=AAAA"
        );
    }

    #[test]
    fn test_build_query_url_keeps_existing_query() {
        let base = Url::parse("https://doh.test/resolve?ct=json").unwrap();
        let url = build_query_url(&base, "a.test", RecordType::Txt);
        assert_eq!(url.as_str(), "https://doh.test/resolve?ct=json&name=a.test&type=TXT");
    }

    #[tokio::test]
    async fn test_single_answer_scenario() {
        let mock = Arc::new(MockTransport::new());
        mock.respond(
            "example.com",
            "A",
            200,
            r#"{"Status":0,"Answer":[{"type":1,"name":"example.com","data":"93.184.216.34","TTL":300}]}"#,
        );

        let outcome = pipeline(&mock)
            .run(&domains(&["example.com"]), &[RecordType::A], &RESOLVERS[0])
            .await;

        assert!(outcome.error.is_none());
        assert!(outcome.info.is_none());
        assert_eq!(outcome.records.len(), 1);
        let record = &outcome.records[0];
        assert_eq!(record.record_type, RecordType::A);
        assert_eq!(record.name, "example.com.");
        assert_eq!(record.data, "93.184.216.34");
        assert_eq!(record.ttl, 300);
    }

    #[tokio::test]
    async fn test_requests_carry_name_and_type() {
        let mock = Arc::new(MockTransport::new());
        pipeline(&mock)
            .run(&domains(&["example.com"]), &[RecordType::Mx], &RESOLVERS[1])
            .await;

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].as_str(),
            "https://dns.google/resolve?name=example.com&type=MX"
        );
    }

    #[tokio::test]
    async fn test_one_request_per_domain_and_type() {
        let mock = Arc::new(MockTransport::new());
        pipeline(&mock)
            .run(
                &domains(&["a.test", "b.test"]),
                &[RecordType::A, RecordType::Aaaa, RecordType::Cname],
                &RESOLVERS[0],
            )
            .await;
        assert_eq!(mock.requests().len(), 6);
    }

    #[tokio::test]
    async fn test_order_follows_types_then_domains() {
        let mock = Arc::new(MockTransport::new());
        for (domain, record_type, code, data) in [
            ("a.test", "A", 1, "1.1.1.1"),
            ("b.test", "A", 1, "2.2.2.2"),
            ("a.test", "TXT", 16, "\\\"hello\\\""),
            ("b.test", "TXT", 16, "\\\"world\\\""),
        ] {
            mock.respond(
                domain,
                record_type,
                200,
                &format!(
                    r#"{{"Status":0,"Answer":[{{"type":{code},"name":"{domain}","data":"{data}","TTL":60}}]}}"#
                ),
            );
        }

        let outcome = pipeline(&mock)
            .run(
                &domains(&["a.test", "b.test"]),
                &[RecordType::A, RecordType::Txt],
                &RESOLVERS[0],
            )
            .await;

        let seen: Vec<(String, RecordType)> = outcome
            .records
            .iter()
            .map(|r| (r.name.clone(), r.record_type))
            .collect();
        assert_eq!(
            seen,
            vec![
                ("a.test.".to_string(), RecordType::A),
                ("b.test.".to_string(), RecordType::A),
                ("a.test.".to_string(), RecordType::Txt),
                ("b.test.".to_string(), RecordType::Txt),
            ]
        );
    }

    #[tokio::test]
    async fn test_nxdomain_contributes_no_records() {
        let mock = Arc::new(MockTransport::new());
        mock.respond(
            "nope.test",
            "A",
            200,
            r#"{"Status":3,"Answer":[{"type":1,"name":"nope.test","data":"0.0.0.0","TTL":1}]}"#,
        );

        let outcome = pipeline(&mock)
            .run(&domains(&["nope.test"]), &[RecordType::A], &RESOLVERS[0])
            .await;

        assert!(outcome.records.is_empty());
        assert_eq!(outcome.info.as_deref(), Some(NO_RESULTS_INFO));
        assert!(outcome.error.is_none());
    }

    #[tokio::test]
    async fn test_trailing_comma_queries_blank_name() {
        let mock = Arc::new(MockTransport::new());
        mock.respond("", "A", 400, r#"{"Status":1}"#);

        let params = crate::params::QueryParams {
            domain: "example.com,".to_string(),
            types: vec!["A".to_string()],
            ..crate::params::QueryParams::default()
        };
        let outcome = pipeline(&mock)
            .run(&params.domains(), &params.record_types(), params.resolver())
            .await;

        assert_eq!(mock.requests().len(), 2);
        assert!(outcome.records.is_empty());
        assert!(outcome.info.is_none());
        assert_eq!(
            outcome.error.as_deref(),
            Some("Error response from resolver: 400")
        );
    }

    #[tokio::test]
    async fn test_http_500_fails_whole_batch() {
        let mock = Arc::new(MockTransport::new());
        mock.respond(
            "good.test",
            "A",
            200,
            r#"{"Status":0,"Answer":[{"type":1,"name":"good.test","data":"1.2.3.4","TTL":60}]}"#,
        );
        mock.respond("bad.test", "A", 500, "internal error");

        let outcome = pipeline(&mock)
            .run(&domains(&["good.test", "bad.test"]), &[RecordType::A], &RESOLVERS[0])
            .await;

        assert!(outcome.records.is_empty());
        assert!(outcome.info.is_none());
        assert!(outcome.error.unwrap().contains("500"));
        // Every request was still issued.
        assert_eq!(mock.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_network_error_surfaces_message() {
        let mock = Arc::new(MockTransport::new());
        mock.fail("down.test", "A", "connection refused");

        let outcome = pipeline(&mock)
            .run(&domains(&["down.test"]), &[RecordType::A], &RESOLVERS[0])
            .await;

        assert!(outcome.records.is_empty());
        assert!(outcome.error.unwrap().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_an_error() {
        let mock = Arc::new(MockTransport::new());
        mock.respond("x.test", "A", 200, "<html>not json</html>");

        let result = pipeline(&mock)
            .try_run(&domains(&["x.test"]), &[RecordType::A], &RESOLVERS[0])
            .await;

        assert!(matches!(result, Err(QueryError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_empty_inputs_issue_no_requests() {
        let mock = Arc::new(MockTransport::new());
        let outcome = pipeline(&mock)
            .run(&[], &[RecordType::A], &RESOLVERS[0])
            .await;

        assert!(mock.requests().is_empty());
        assert_eq!(outcome.info.as_deref(), Some(NO_RESULTS_INFO));
    }

    #[tokio::test]
    async fn test_invalid_resolver_url() {
        let mock = Arc::new(MockTransport::new());
        let resolver = Resolver {
            name: "Broken",
            url: "not a url",
        };
        let result = pipeline(&mock)
            .try_run(&domains(&["a.test"]), &[RecordType::A], &resolver)
            .await;
        assert!(matches!(result, Err(QueryError::InvalidUrl(_))));
    }
}
