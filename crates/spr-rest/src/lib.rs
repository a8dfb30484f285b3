//! # sprinklr-rest
//!
//! Sprinklr REST API client.
//!
//! ## Features
//!
//! - **Resource operations** - Generic create/fetch/update/delete driven
//!   by a declarative endpoint table (see [`endpoints`])
//! - **Entity search** - Filtered search with opaque-cursor pagination;
//!   each search owns its cursor, so searches don't interfere
//! - **Report queries** - A declarative [`ReportBuilder`] assembling the
//!   nested filter/group-by/projection document
//!
//! Every operation returns a `Result`; nothing panics and nothing is
//! stored on the client between calls.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sprinklr_rest::{EntityType, ReportBuilder, SearchRequest, SprinklrRestClient};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sprinklr_rest::Error> {
//!     let client = SprinklrRestClient::new("app-key", "access-token")?;
//!
//!     // Paginated search
//!     let mut page = client
//!         .search(
//!             EntityType::Case,
//!             &SearchRequest::new(json!({"key": "status", "value": "OPEN"})),
//!         )
//!         .await?;
//!     while page.has_next() {
//!         page = client.search_next(&page).await?;
//!     }
//!
//!     // Report query
//!     let mut report = ReportBuilder::new();
//!     report.set_engine("PLATFORM")?;
//!     report.set_name("ENGAGEMENT");
//!     report.add_column("Mentions", "MENTIONS_COUNT", "SUM", None);
//!     let results = client.fetch_report(&report.build()).await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
mod error;
mod report;
mod search;

pub use client::SprinklrRestClient;
pub use endpoints::{ApiVersion, ResourceSpec};
pub use error::{Error, ErrorKind, Result};
pub use report::{
    AggregateFunction, Filter, FilterType, GroupBy, GroupType, Projection, ReportBuilder,
    ReportRequest, ReportingEngine,
};
pub use search::{EntityType, SearchPage, SearchRequest, SortOrder};
