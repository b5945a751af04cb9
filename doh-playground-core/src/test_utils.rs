//! 测试辅助模块
//!
//! In-memory [`DohTransport`] keyed by the `name` / `type` query parameters.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use url::Url;

use crate::error::{QueryError, QueryResult};
use crate::transport::{DohTransport, HttpReply};

const EMPTY_NOERROR: &str = r#"{"Status":0}"#;

enum MockReply {
    Reply(HttpReply),
    Fail(String),
}

/// Canned replies per (name, type); unknown pairs get an empty NOERROR answer.
pub struct MockTransport {
    replies: Mutex<HashMap<(String, String), MockReply>>,
    requests: Mutex<Vec<Url>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer `name` / `record_type` with the given status and body.
    pub fn respond(&self, name: &str, record_type: &str, status: u16, body: &str) {
        self.insert(
            name,
            record_type,
            MockReply::Reply(HttpReply {
                status,
                body: body.to_string(),
            }),
        );
    }

    /// Fail `name` / `record_type` with a network error.
    pub fn fail(&self, name: &str, record_type: &str, message: &str) {
        self.insert(name, record_type, MockReply::Fail(message.to_string()));
    }

    /// URLs requested so far, in call order.
    pub fn requests(&self) -> Vec<Url> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    fn insert(&self, name: &str, record_type: &str, reply: MockReply) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.insert((name.to_string(), record_type.to_string()), reply);
        }
    }
}

#[async_trait]
impl DohTransport for MockTransport {
    async fn get(&self, url: Url) -> QueryResult<HttpReply> {
        let param = |key: &str| {
            url.query_pairs()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.into_owned())
                .unwrap_or_default()
        };
        let key = (param("name"), param("type"));

        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.clone());
        }

        let replies = self
            .replies
            .lock()
            .map_err(|e| QueryError::NetworkError(e.to_string()))?;
        match replies.get(&key) {
            Some(MockReply::Reply(reply)) => Ok(reply.clone()),
            Some(MockReply::Fail(message)) => Err(QueryError::NetworkError(message.clone())),
            None => Ok(HttpReply {
                status: 200,
                body: EMPTY_NOERROR.to_string(),
            }),
        }
    }
}
