//! Report query building.
//!
//! The Sprinklr reporting endpoint takes one nested JSON document naming a
//! reporting engine, a report, a time range, and three ordered collections:
//! group-bys (row bucketing), filters, and projections (aggregated
//! columns). [`ReportBuilder`] accumulates those declaratively and
//! assembles the wire document.
//!
//! Apart from the engine name and the page number, nothing is validated
//! locally: dimension and measurement names, filter arity, and group types
//! are checked by the backend, which reports mismatches through the normal
//! HTTP error path.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, ErrorKind, Result};

/// The backend subsystem a report query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportingEngine {
    Ad,
    Platform,
    InboundMessage,
    Listening,
}

impl ReportingEngine {
    /// Parse an engine name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "AD" => Some(ReportingEngine::Ad),
            "PLATFORM" => Some(ReportingEngine::Platform),
            "INBOUND_MESSAGE" => Some(ReportingEngine::InboundMessage),
            "LISTENING" => Some(ReportingEngine::Listening),
            _ => None,
        }
    }

    /// The canonical upper-case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportingEngine::Ad => "AD",
            ReportingEngine::Platform => "PLATFORM",
            ReportingEngine::InboundMessage => "INBOUND_MESSAGE",
            ReportingEngine::Listening => "LISTENING",
        }
    }
}

impl std::fmt::Display for ReportingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReportingEngine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| Error::new(ErrorKind::InvalidEngine(s.to_string())))
    }
}

/// Declares string-backed wire enums with documented variants and an open
/// fallback for values the backend accepts but this library predates.
macro_rules! open_wire_enum {
    ($(#[$doc:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(into = "String", from = "String")]
        pub enum $name {
            $($variant,)+
            /// Any other value, passed through to the backend unchanged.
            Other(String),
        }

        impl $name {
            /// The wire representation.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Other(s) => s.as_str(),
                }
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> String {
                v.as_str().to_string()
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> $name {
                match s.as_str() {
                    $($wire => $name::$variant,)+
                    _ => $name::Other(s),
                }
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> $name {
                $name::from(s.to_string())
            }
        }
    };
}

open_wire_enum! {
    /// How a group-by buckets report rows.
    GroupType {
        DateHistogram => "DATE_HISTOGRAM",
        TimeOfDay => "TIME_OF_DAY",
        DayOfWeek => "DAY_OF_WEEK",
        MonthOfYear => "MONTH_OF_YEAR",
        Field => "FIELD",
    }
}

open_wire_enum! {
    /// How a filter matches a dimension. Which types are valid depends on
    /// the reporting engine; `Between` expects exactly two bounding values,
    /// `In`/`Nin` an arbitrary-length set. Arity is enforced by the
    /// backend, not here.
    FilterType {
        In => "IN",
        Gt => "GT",
        Gte => "GTE",
        Lt => "LT",
        Lte => "LTE",
        Nin => "NIN",
        Between => "BETWEEN",
        StartsWith => "STARTS_WITH",
        Contains => "CONTAINS",
        Equals => "EQUALS",
        Exists => "EXISTS",
    }
}

open_wire_enum! {
    /// How a projection aggregates its measurement.
    AggregateFunction {
        Sum => "SUM",
        Avg => "AVG",
        Min => "MIN",
        Max => "MAX",
        Stats => "STATS",
    }
}

/// A dimension used to bucket report rows before aggregation.
///
/// Entry order is semantically meaningful: it defines the nesting level of
/// grouped results returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBy {
    pub heading: String,
    pub dimension_name: String,
    pub group_type: GroupType,
    pub details: Option<Value>,
}

/// A filter entry restricting which rows a report covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub filter_type: FilterType,
    pub dimension_name: String,
    pub values: Vec<Value>,
    pub details: Option<Value>,
}

/// A requested aggregated measurement (a report column).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub heading: String,
    pub measurement_name: String,
    pub aggregate_function: AggregateFunction,
    pub details: Option<Value>,
}

/// The assembled report request wire document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub reporting_engine: Option<ReportingEngine>,
    pub report: Option<String>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub time_zone: Option<String>,
    pub page: u32,
    pub page_size: u32,
    pub group_bys: Vec<GroupBy>,
    pub filters: Vec<Filter>,
    pub projections: Vec<Projection>,
}

/// Accumulator for report query parameters.
///
/// # Example
///
/// ```rust,ignore
/// let mut builder = ReportBuilder::new();
/// builder.set_engine("listening")?;
/// builder.set_name("SPRINKSIGHTS");
/// builder.add_column("Insights", "NLP_DOC_INSIGHT_COUNT", "SUM", None);
/// builder.add_group_by("Location", "LOCATION_IDS", "FIELD", None);
/// let request = builder.build();
/// let results = client.fetch_report(&request).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    engine: Option<ReportingEngine>,
    name: Option<String>,
    start_time: Option<i64>,
    end_time: Option<i64>,
    time_zone: Option<String>,
    page: u32,
    page_size: u32,
    group_bys: Vec<GroupBy>,
    filters: Vec<Filter>,
    columns: Vec<Projection>,
}

/// Default rows per call. The backend allows up to 2000.
const DEFAULT_PAGE_SIZE: u32 = 10;

impl ReportBuilder {
    /// Create an empty builder (page 0, page size 10).
    pub fn new() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            ..Self::default()
        }
    }

    /// Set the reporting engine, case-insensitively.
    ///
    /// Fails without mutating state if the name is not one of AD,
    /// PLATFORM, INBOUND_MESSAGE, or LISTENING.
    pub fn set_engine(&mut self, name: &str) -> Result<&mut Self> {
        match ReportingEngine::parse(name) {
            Some(engine) => {
                self.engine = Some(engine);
                Ok(self)
            }
            None => Err(Error::new(ErrorKind::InvalidEngine(name.to_string()))),
        }
    }

    /// The currently stored engine, if any.
    pub fn engine(&self) -> Option<ReportingEngine> {
        self.engine
    }

    /// Set the report name.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Set the requested page.
    ///
    /// Only strictly positive pages representable as a u32 are accepted;
    /// anything else resets the stored page to 0 and fails. The caller's
    /// rejected page number is discarded, not kept.
    pub fn set_page(&mut self, page: i64) -> Result<&mut Self> {
        match u32::try_from(page) {
            Ok(p) if p > 0 => {
                self.page = p;
                Ok(self)
            }
            _ => {
                self.page = 0;
                Err(Error::new(ErrorKind::InvalidPage(page)))
            }
        }
    }

    /// The currently stored page.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Set the start of the reporting window, epoch milliseconds.
    pub fn set_start_time(&mut self, millis: i64) -> &mut Self {
        self.start_time = Some(millis);
        self
    }

    /// Set the end of the reporting window, epoch milliseconds.
    pub fn set_end_time(&mut self, millis: i64) -> &mut Self {
        self.end_time = Some(millis);
        self
    }

    /// Set the time zone (UTC when unset).
    pub fn set_time_zone(&mut self, tz: impl Into<String>) -> &mut Self {
        self.time_zone = Some(tz.into());
        self
    }

    /// Set the rows returned per call (backend default 10, max 2000).
    pub fn set_page_size(&mut self, page_size: u32) -> &mut Self {
        self.page_size = page_size;
        self
    }

    /// Append a group-by entry. Order is preserved and defines the nesting
    /// of grouped results. The group type is not validated locally.
    pub fn add_group_by(
        &mut self,
        heading: impl Into<String>,
        dimension_name: impl Into<String>,
        group_type: impl Into<GroupType>,
        details: Option<Value>,
    ) -> &mut Self {
        self.group_bys.push(GroupBy {
            heading: heading.into(),
            dimension_name: dimension_name.into(),
            group_type: group_type.into(),
            details,
        });
        self
    }

    /// Append a filter entry. Value arity per filter type is enforced by
    /// the backend.
    pub fn add_filter(
        &mut self,
        filter_type: impl Into<FilterType>,
        dimension_name: impl Into<String>,
        values: Vec<Value>,
        details: Option<Value>,
    ) -> &mut Self {
        self.filters.push(Filter {
            filter_type: filter_type.into(),
            dimension_name: dimension_name.into(),
            values,
            details,
        });
        self
    }

    /// Append a projection (column) entry.
    pub fn add_column(
        &mut self,
        heading: impl Into<String>,
        measurement_name: impl Into<String>,
        aggregate_function: impl Into<AggregateFunction>,
        details: Option<Value>,
    ) -> &mut Self {
        self.columns.push(Projection {
            heading: heading.into(),
            measurement_name: measurement_name.into(),
            aggregate_function: aggregate_function.into(),
            details,
        });
        self
    }

    /// Assemble the wire document from the current builder state.
    ///
    /// The builder stays usable afterwards; its collections are cloned
    /// into the request. Fields never set serialize as null, matching what
    /// the backend expects for omitted parameters.
    pub fn build(&self) -> ReportRequest {
        ReportRequest {
            reporting_engine: self.engine,
            report: self.name.clone(),
            start_time: self.start_time,
            end_time: self.end_time,
            time_zone: self.time_zone.clone(),
            page: self.page,
            page_size: self.page_size,
            group_bys: self.group_bys.clone(),
            filters: self.filters.clone(),
            projections: self.columns.clone(),
        }
    }
}
