//! Donut chart segment geometry

pub mod donut;
pub mod geometry;
pub mod spec;

pub use donut::{ArcSegment, DonutLayoutEngine};
pub use geometry::Point;
pub use spec::{CapStyle, DonutChartSpec, DonutSegment};
