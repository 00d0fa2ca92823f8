//! Ring chart layout: proportional arcs separated by fixed gaps
//!
//! The ring starts at 12 o'clock (`-π/2`) and runs clockwise. Gaps take a
//! fixed angle after every segment; the remaining `2π - gap * n` is shared
//! out in proportion to each segment's value.

use crate::chart::geometry::{Point, centerline_arc, wedge};
use crate::chart::spec::{CapStyle, DonutChartSpec, DonutSegment};
use crate::core::error::ChartError;
use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, TAU};

/// One laid-out segment, ready to render
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcSegment {
    /// SVG path data; empty when the segment has no angular width
    pub path_data: String,
    pub segment: DonutSegment,
    /// Radians, `-π/2` is 12 o'clock
    pub start_angle: f64,
    pub end_angle: f64,
}

impl ArcSegment {
    /// Angular width in radians
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// Anchor for a label or tooltip placed at `radius` from `center`
    pub fn label_position(&self, center: Point, radius: f64) -> Point {
        center.polar(radius, self.mid_angle())
    }

    pub fn is_empty(&self) -> bool {
        self.path_data.is_empty()
    }
}

/// Lays out donut charts; holds no state
pub struct DonutLayoutEngine;

impl DonutLayoutEngine {
    /// Compute arc geometry for every segment, in input order
    ///
    /// # Errors
    /// Returns a [`ChartError`] for negative or non-finite values, a gap
    /// configuration that leaves no room for segments, or dimensions that
    /// leave no drawable ring. Nothing is clamped.
    pub fn layout(spec: &DonutChartSpec) -> Result<Vec<ArcSegment>, ChartError> {
        if let Err(err) = spec.validate() {
            tracing::warn!(error = %err, code = err.error_code(), "Donut chart rejected");
            return Err(err);
        }

        let total = spec.total();
        let gap = spec.segment_gap_degrees.to_radians();
        let available = TAU - gap * spec.segments.len() as f64;
        let center = spec.center();

        let mut cumulative = -FRAC_PI_2;
        let arcs: Vec<ArcSegment> = spec
            .segments
            .iter()
            .map(|segment| {
                let span = if total > 0.0 {
                    segment.value / total * available
                } else {
                    0.0
                };
                let start_angle = cumulative;
                let end_angle = cumulative + span;
                cumulative += span + gap;

                let path_data = if span > 0.0 {
                    match spec.cap_style {
                        CapStyle::Rounded => {
                            centerline_arc(center, spec.centerline_radius(), start_angle, end_angle)
                        }
                        CapStyle::Wedge => wedge(
                            center,
                            spec.outer_radius(),
                            spec.inner_radius(),
                            start_angle,
                            end_angle,
                        ),
                    }
                } else {
                    String::new()
                };

                ArcSegment {
                    path_data,
                    segment: segment.clone(),
                    start_angle,
                    end_angle,
                }
            })
            .collect();

        tracing::debug!(
            segments = arcs.len(),
            total,
            gap_degrees = spec.segment_gap_degrees,
            cap_style = ?spec.cap_style,
            "Donut chart laid out"
        );

        Ok(arcs)
    }
}
