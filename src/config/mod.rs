//! Configuration loading and management

use crate::chart::spec::{CapStyle, DonutChartSpec, DonutSegment};
use crate::core::error::ConfigError;
use crate::core::query::{DateRange, QuerySpec};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::{Validate, ValidationError};

/// Defaults for the orders table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page when the table first renders
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub default_page_size: usize,

    /// Choices offered by the rows-per-page selector
    #[validate(custom(function = "validate_page_size_options"))]
    pub page_size_options: Vec<usize>,

    /// Date window selected when the table first renders
    pub default_date_range: DateRange,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            page_size_options: vec![5, 10, 25],
            default_date_range: DateRange::AllTime,
        }
    }
}

impl TableConfig {
    /// The query the table starts from
    pub fn initial_query(&self) -> QuerySpec {
        QuerySpec::default()
            .with_date_range(self.default_date_range)
            .with_page(0, self.default_page_size)
    }
}

fn validate_page_size_options(options: &Vec<usize>) -> Result<(), ValidationError> {
    if options.is_empty() {
        return Err(ValidationError::new("empty").with_message("must not be empty".into()));
    }
    if options.contains(&0) {
        return Err(
            ValidationError::new("zero").with_message("page sizes must be at least 1".into()),
        );
    }
    Ok(())
}

/// Drawing parameters for the sales donut chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DonutConfig {
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub width: f64,

    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub height: f64,

    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub stroke_width: f64,

    /// Angular gap between adjacent segments
    #[validate(range(min = 0.0, max = 360.0, message = "must be between 0 and 360"))]
    pub segment_gap_degrees: f64,

    /// Space kept between the ring and the canvas edge
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub margin: f64,

    pub cap_style: CapStyle,
}

impl Default for DonutConfig {
    fn default() -> Self {
        let spec = DonutChartSpec::default();
        Self {
            width: spec.width,
            height: spec.height,
            stroke_width: spec.stroke_width,
            segment_gap_degrees: spec.segment_gap_degrees,
            margin: spec.margin,
            cap_style: spec.cap_style,
        }
    }
}

impl DonutConfig {
    /// Chart spec for `segments` drawn with these parameters
    pub fn chart_spec(&self, segments: Vec<DonutSegment>) -> DonutChartSpec {
        DonutChartSpec::new(segments)
            .with_size(self.width, self.height)
            .with_stroke_width(self.stroke_width)
            .with_gap(self.segment_gap_degrees)
            .with_margin(self.margin)
            .with_cap_style(self.cap_style)
    }
}

/// Complete dashboard configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DashboardConfig {
    #[validate(nested)]
    pub table: TableConfig,

    #[validate(nested)]
    pub donut: DonutConfig,
}

impl DashboardConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content, Some(path.display().to_string()))?;
        tracing::debug!(path = %path.display(), "loaded dashboard config");
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(Self::parse(yaml, None)?)
    }

    fn parse(yaml: &str, file: Option<String>) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Create the default configuration
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Merge several configurations into one
    ///
    /// Configs are applied in order. A field overrides the result only when it
    /// differs from its default, so a later file can change one setting without
    /// restating the others.
    pub fn merge(configs: Vec<DashboardConfig>) -> DashboardConfig {
        let defaults = DashboardConfig::default();
        let mut merged = DashboardConfig::default();

        for config in configs {
            let (table, donut) = (config.table, config.donut);

            let (into, base) = (&mut merged.table, &defaults.table);
            overlay(&mut into.default_page_size, table.default_page_size, &base.default_page_size);
            overlay(&mut into.page_size_options, table.page_size_options, &base.page_size_options);
            overlay(
                &mut into.default_date_range,
                table.default_date_range,
                &base.default_date_range,
            );

            let (into, base) = (&mut merged.donut, &defaults.donut);
            overlay(&mut into.width, donut.width, &base.width);
            overlay(&mut into.height, donut.height, &base.height);
            overlay(&mut into.stroke_width, donut.stroke_width, &base.stroke_width);
            overlay(
                &mut into.segment_gap_degrees,
                donut.segment_gap_degrees,
                &base.segment_gap_degrees,
            );
            overlay(&mut into.margin, donut.margin, &base.margin);
            overlay(&mut into.cap_style, donut.cap_style, &base.cap_style);
        }

        merged
    }
}

fn overlay<T: PartialEq>(target: &mut T, value: T, default: &T) {
    if value != *default {
        *target = value;
    }
}
