//! Core types shared by the engines: records, queries, clock and errors

pub mod clock;
pub mod date_format;
pub mod error;
pub mod order;
pub mod query;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ChartError, ConfigError, DashboardError, DashboardResult, StoreError};
pub use order::{OrderRecord, OrderStatus, OrderUser};
pub use query::{DateRange, Page, PaginationMeta, QuerySpec, SortColumn, SortDirection};
pub use store::RecordSource;
