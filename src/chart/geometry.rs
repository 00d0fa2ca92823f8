//! SVG arc path construction

use serde::Serialize;
use std::f64::consts::{PI, TAU};
use std::fmt::Write;

/// Spans this close to a full turn are drawn as two half arcs
const FULL_TURN_EPSILON: f64 = 1e-9;

/// A point on the chart canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` along `angle` (radians, clockwise from 3 o'clock)
    pub fn polar(self, radius: f64, angle: f64) -> Self {
        Self {
            x: self.x + radius * angle.cos(),
            y: self.y + radius * angle.sin(),
        }
    }
}

/// Format a coordinate for path data: four decimals, trailing zeros trimmed, no `-0`
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

fn large_arc_flag(span: f64) -> u8 {
    // Half turns produced by splitting a full circle must stay small arcs.
    if span > PI + FULL_TURN_EPSILON { 1 } else { 0 }
}

/// Angles the arc passes through, split in two when it closes on itself
fn arc_stops(start: f64, end: f64) -> Vec<f64> {
    let span = end - start;
    if span >= TAU - FULL_TURN_EPSILON {
        vec![start, start + span / 2.0, end]
    } else {
        vec![start, end]
    }
}

fn push_arcs(path: &mut String, center: Point, radius: f64, stops: &[f64], sweep: u8) {
    let r = fmt_num(radius);
    for pair in stops.windows(2) {
        let to = center.polar(radius, pair[1]);
        let _ = write!(
            path,
            " A {r} {r} 0 {} {sweep} {} {}",
            large_arc_flag((pair[1] - pair[0]).abs()),
            fmt_num(to.x),
            fmt_num(to.y)
        );
    }
}

/// Open arc along `radius` from `start` to `end`, drawn clockwise
///
/// Meant to be stroked with round line caps.
pub fn centerline_arc(center: Point, radius: f64, start: f64, end: f64) -> String {
    let from = center.polar(radius, start);
    let mut path = format!("M {} {}", fmt_num(from.x), fmt_num(from.y));
    push_arcs(&mut path, center, radius, &arc_stops(start, end), 1);
    path
}

/// Closed ring wedge between `inner` and `outer` radii from `start` to `end`
///
/// Outer arc clockwise, straight seam to the inner arc, inner arc back
/// counter-clockwise, then close to the starting point.
pub fn wedge(center: Point, outer: f64, inner: f64, start: f64, end: f64) -> String {
    let stops = arc_stops(start, end);
    let from = center.polar(outer, start);
    let inner_end = center.polar(inner, end);

    let mut path = format!("M {} {}", fmt_num(from.x), fmt_num(from.y));
    push_arcs(&mut path, center, outer, &stops, 1);
    let _ = write!(path, " L {} {}", fmt_num(inner_end.x), fmt_num(inner_end.y));

    let reversed: Vec<f64> = stops.iter().rev().copied().collect();
    push_arcs(&mut path, center, inner, &reversed, 0);
    path.push_str(" Z");
    path
}
