//! Caller-owned interaction state

pub mod context;
pub mod table;

pub use context::{DashboardContext, Theme};
pub use table::TableSession;
