//! # Dashboard Core
//!
//! Headless engines behind an e-commerce admin dashboard.
//!
//! ## Features
//!
//! - **Orders Table Queries**: search, status and date-range filters, column sort and pagination
//! - **Severity Ordering**: statuses sort by domain priority, not alphabetically
//! - **Donut Chart Layout**: SVG path data for proportional, gapped ring segments
//! - **Relative Dates**: "Just now", "5 minutes ago", "Yesterday" against an injectable clock
//! - **Session State**: table interaction and UI context as plain values, no globals
//! - **Configuration-Based**: page sizes and chart geometry via YAML configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use dashboard::prelude::*;
//! use std::sync::Arc;
//!
//! let now = DateTime::parse_from_rfc3339("2024-09-21T12:00:00Z").unwrap();
//! let store = InMemoryOrderStore::new(seed_orders(now)).unwrap();
//! let engine = RecordQueryEngine::new(Arc::new(FixedClock::new(now)));
//!
//! let spec = QuerySpec::default()
//!     .with_statuses([OrderStatus::Rejected, OrderStatus::Pending])
//!     .with_sort(SortColumn::Status, SortDirection::Ascending);
//! let page = engine.query(&store, &spec);
//! assert_eq!(page.items[0].status, OrderStatus::Rejected);
//!
//! let chart = DashboardConfig::default_config().donut.chart_spec(sales_segments());
//! let arcs = DonutLayoutEngine::layout(&chart).unwrap();
//! assert_eq!(arcs.len(), 4);
//! ```

pub mod chart;
pub mod config;
pub mod core;
pub mod logging;
pub mod panel;
pub mod session;
pub mod storage;
pub mod table;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        clock::{Clock, FixedClock, SystemClock},
        date_format::{format_relative, format_table_date},
        error::{
            ChartError, ConfigError, DashboardError, DashboardResult, ErrorResponse,
            FieldValidationError, StoreError,
        },
        order::{OrderRecord, OrderStatus, OrderUser},
        query::{DateRange, Page, PaginationMeta, QuerySpec, SortColumn, SortDirection},
        store::RecordSource,
    };

    // === Engines ===
    pub use crate::chart::{
        ArcSegment, CapStyle, DonutChartSpec, DonutLayoutEngine, DonutSegment, Point,
    };
    pub use crate::table::{DateWindow, RecordQueryEngine};

    // === Session & Panel ===
    pub use crate::panel::{PanelFeed, PanelItem, PanelItemKind};
    pub use crate::session::{DashboardContext, TableSession, Theme};

    // === Storage ===
    pub use crate::storage::InMemoryOrderStore;
    pub use crate::storage::seed::{sales_segments, seed_orders, seed_panel_feed};

    // === Config ===
    pub use crate::config::{DashboardConfig, DonutConfig, TableConfig};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::{DateTime, Duration, FixedOffset, Utc};
    pub use serde::{Deserialize, Serialize};
}
