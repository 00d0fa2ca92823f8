//! Donut chart input: segments, canvas and ring configuration

use crate::core::error::ChartError;
use crate::chart::geometry::Point;
use serde::{Deserialize, Serialize};

/// One weighted slice of the ring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutSegment {
    /// Legend label ("Direct", "Affiliate", ...)
    pub name: String,
    /// Non-negative weight; shares are normalized by the sum of all weights
    pub value: f64,
    /// Display token, irrelevant to geometry
    pub color: String,
}

impl DonutSegment {
    pub fn new(name: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            color: color.into(),
        }
    }

    /// Share of `total` as a percentage, 0 when the total is 0
    pub fn share_of(&self, total: f64) -> f64 {
        if total > 0.0 {
            self.value / total * 100.0
        } else {
            0.0
        }
    }
}

/// How segment ends are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapStyle {
    /// A centerline arc stroked at the ring thickness with round line caps
    #[default]
    Rounded,
    /// A filled closed path between the outer and inner arcs, square ends
    Wedge,
}

/// Everything the layout engine needs to draw one ring chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutChartSpec {
    pub segments: Vec<DonutSegment>,
    pub width: f64,
    pub height: f64,
    /// Ring thickness in pixels
    pub stroke_width: f64,
    /// Angular dead space after each segment, in degrees
    pub segment_gap_degrees: f64,
    /// Space between the canvas edge and the outer radius
    pub margin: f64,
    pub cap_style: CapStyle,
}

impl Default for DonutChartSpec {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
            width: 120.0,
            height: 120.0,
            stroke_width: 20.0,
            segment_gap_degrees: 4.0,
            margin: 2.0,
            cap_style: CapStyle::Rounded,
        }
    }
}

impl DonutChartSpec {
    pub fn new(segments: Vec<DonutSegment>) -> Self {
        Self {
            segments,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_gap(mut self, degrees: f64) -> Self {
        self.segment_gap_degrees = degrees;
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_cap_style(mut self, cap_style: CapStyle) -> Self {
        self.cap_style = cap_style;
        self
    }

    /// Sum of all segment weights
    pub fn total(&self) -> f64 {
        self.segments.iter().map(|s| s.value).sum()
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn outer_radius(&self) -> f64 {
        self.width.min(self.height) / 2.0 - self.margin
    }

    pub fn inner_radius(&self) -> f64 {
        self.outer_radius() - self.stroke_width
    }

    /// Radius of the stroked arc in rounded mode, midway through the ring
    pub fn centerline_radius(&self) -> f64 {
        self.outer_radius() - self.stroke_width / 2.0
    }

    /// Total angle consumed by gaps, in degrees
    pub fn total_gap_degrees(&self) -> f64 {
        self.segment_gap_degrees * self.segments.len() as f64
    }

    /// Check every precondition the layout relies on
    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.segment_gap_degrees.is_finite() || self.segment_gap_degrees < 0.0 {
            return Err(ChartError::InvalidGap {
                degrees: self.segment_gap_degrees,
            });
        }

        for (index, segment) in self.segments.iter().enumerate() {
            if !segment.value.is_finite() {
                return Err(ChartError::NonFiniteValue { index });
            }
            if segment.value < 0.0 {
                return Err(ChartError::NegativeValue {
                    index,
                    value: segment.value,
                });
            }
        }

        if !self.segments.is_empty() && self.total_gap_degrees() >= 360.0 {
            return Err(ChartError::GapExceedsCircle {
                total_gap_degrees: self.total_gap_degrees(),
                segment_count: self.segments.len(),
            });
        }

        let dims = [self.width, self.height, self.stroke_width, self.margin];
        if dims.iter().any(|d| !d.is_finite()) {
            return Err(ChartError::InvalidDimensions {
                message: "dimensions must be finite".to_string(),
            });
        }
        if self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidDimensions {
                message: format!("stroke width {} must be positive", self.stroke_width),
            });
        }
        if self.outer_radius() <= 0.0 {
            return Err(ChartError::InvalidDimensions {
                message: format!(
                    "canvas {}x{} with margin {} leaves no radius",
                    self.width, self.height, self.margin
                ),
            });
        }
        if self.inner_radius() < 0.0 {
            return Err(ChartError::InvalidDimensions {
                message: format!(
                    "stroke width {} exceeds outer radius {}",
                    self.stroke_width,
                    self.outer_radius()
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> DonutChartSpec {
        DonutChartSpec::new(vec![
            DonutSegment::new("Direct", 38.6, "#1C1C1C"),
            DonutSegment::new("Affiliate", 22.5, "#BAEDBD"),
        ])
    }

    #[test]
    fn test_radii() {
        let spec = spec();
        assert_eq!(spec.outer_radius(), 58.0);
        assert_eq!(spec.inner_radius(), 38.0);
        assert_eq!(spec.centerline_radius(), 48.0);
    }

    #[test]
    fn test_radius_uses_smaller_side() {
        let spec = spec().with_size(300.0, 120.0);
        assert_eq!(spec.outer_radius(), 58.0);
        assert_eq!(spec.center(), Point::new(150.0, 60.0));
    }

    #[test]
    fn test_share_of() {
        let s = DonutSegment::new("Direct", 25.0, "#000");
        assert_eq!(s.share_of(200.0), 12.5);
        assert_eq!(s.share_of(0.0), 0.0);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(spec().validate().is_ok());
        assert!(DonutChartSpec::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_value() {
        let mut spec = spec();
        spec.segments[1].value = -0.1;
        assert_eq!(
            spec.validate(),
            Err(ChartError::NegativeValue {
                index: 1,
                value: -0.1
            })
        );
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut spec = spec();
        spec.segments[0].value = f64::NAN;
        assert_eq!(spec.validate(), Err(ChartError::NonFiniteValue { index: 0 }));
    }

    #[test]
    fn test_validate_rejects_full_circle_of_gaps() {
        let err = spec().with_gap(180.0).validate().unwrap_err();
        assert!(matches!(err, ChartError::GapExceedsCircle { segment_count: 2, .. }));

        assert!(spec().with_gap(179.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_gap() {
        assert!(matches!(
            spec().with_gap(-1.0).validate(),
            Err(ChartError::InvalidGap { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_thick_stroke() {
        assert!(matches!(
            spec().with_stroke_width(59.0).validate(),
            Err(ChartError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            spec().with_stroke_width(0.0).validate(),
            Err(ChartError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            spec().with_size(4.0, 4.0).validate(),
            Err(ChartError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_cap_style_serde() {
        let json = serde_json::to_string(&CapStyle::Wedge).unwrap();
        assert_eq!(json, "\"wedge\"");
    }
}
