//! Query and export services.
//!
//! [`QueryPipeline`] performs the lookups; [`format_zone`] turns the resulting
//! records into clipboard-ready text.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use doh_playground_core::{default_resolver, QueryParams, QueryPipeline, ReqwestTransport};
//! # async fn demo() -> doh_playground_core::QueryResult<()> {
//! let pipeline = QueryPipeline::new(Arc::new(ReqwestTransport::new()?));
//! let params = QueryParams::parse("domain=example.com&types=A");
//! let outcome = pipeline
//!     .run(&params.domains(), &params.record_types(), default_resolver())
//!     .await;
//! print!("{}", doh_playground_core::format_zone(&outcome.records));
//! # Ok(())
//! # }
//! ```

mod pipeline;
mod zone;

pub use pipeline::{build_query_url, QueryPipeline};
pub use zone::format_zone;
