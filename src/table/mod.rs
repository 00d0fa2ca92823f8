//! Client-side query engine for the orders table

pub mod engine;
pub mod filters;
pub mod sort;

pub use engine::RecordQueryEngine;
pub use filters::DateWindow;
pub use sort::locale_cmp;
