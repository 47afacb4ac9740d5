// src/layout/routing.rs

//! Orthogonal connector routing between dependent rows.

use std::fmt::Write as _;

use tracing::debug;

use crate::config::model::DependencyRecord;
use crate::layout::positions::{PositionMap, WorkPosition};
use crate::types::{DependencyType, WorkId};

/// Rows closer than this (px) are treated as one line.
pub const ALIGNED_TOLERANCE: f64 = 5.0;

/// Room left before the end point for the arrowhead marker (px).
pub const ARROWHEAD_GAP: f64 = 6.0;

/// The end must be at least this far right of the start for a forward route.
pub const FORWARD_MIN_GAP: f64 = 30.0;

/// Column of the vertical segment of a forward route, right of the start.
pub const FORWARD_JOG: f64 = 20.0;

/// Horizontal clearance of a backward route at both ends.
pub const BACKWARD_JOG: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Lag annotation drawn next to an arrow.
#[derive(Debug, Clone, PartialEq)]
pub struct LagLabel {
    pub at: Point,
    pub text: String,
}

/// A routed dependency arrow.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowPath {
    pub dependency_id: i64,
    pub predecessor: WorkId,
    pub successor: WorkId,
    pub dependency_type: DependencyType,
    pub points: Vec<Point>,
    pub label: Option<LagLabel>,
}

impl ArrowPath {
    /// SVG path data (`M x y L x y ...`).
    pub fn path_data(&self) -> String {
        path_data(&self.points)
    }
}

/// Start and end x for an edge of `kind`, actual dates first, planned as
/// fallback.
///
/// FS: pred end → succ start; SS: pred start → succ start;
/// FF: pred end → succ end; SF: pred start → succ end.
pub fn anchor_xs(
    kind: DependencyType,
    predecessor: &WorkPosition,
    successor: &WorkPosition,
) -> Option<(f64, f64)> {
    let start_x = if kind.anchors_predecessor_end() {
        predecessor.end_x()
    } else {
        predecessor.start_x()
    }?;
    let end_x = if kind.anchors_successor_end() {
        successor.end_x()
    } else {
        successor.start_x()
    }?;
    Some((start_x, end_x))
}

/// Orthogonal polyline from `start` to `end`.
///
/// - Aligned rows: one segment, stopping short of `end` for the arrowhead.
/// - End well to the right: right, down/up, right, bending at
///   `start.x + FORWARD_JOG`.
/// - Otherwise: out to the right of the start, across at the vertical
///   midpoint to the left of the end, then into the end from the left.
pub fn route(start: Point, end: Point) -> Vec<Point> {
    if (end.y - start.y).abs() < ALIGNED_TOLERANCE {
        return vec![start, Point::new(end.x - ARROWHEAD_GAP, start.y)];
    }

    if end.x > start.x + FORWARD_MIN_GAP {
        let jog_x = start.x + FORWARD_JOG;
        return vec![
            start,
            Point::new(jog_x, start.y),
            Point::new(jog_x, end.y),
            end,
        ];
    }

    let out_x = start.x + BACKWARD_JOG;
    let in_x = end.x - BACKWARD_JOG;
    let mid_y = (start.y + end.y) / 2.0;
    vec![
        start,
        Point::new(out_x, start.y),
        Point::new(out_x, mid_y),
        Point::new(in_x, mid_y),
        Point::new(in_x, end.y),
        end,
    ]
}

/// Label for a strictly positive lag; zero and negative lag get none.
pub fn lag_label(lag_days: i32, start: Point, end: Point) -> Option<LagLabel> {
    if lag_days <= 0 {
        return None;
    }
    Some(LagLabel {
        at: Point::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0),
        text: format!("+{lag_days}d"),
    })
}

/// Route one dependency, or `None` if either end cannot be placed.
pub fn route_dependency(record: &DependencyRecord, positions: &PositionMap) -> Option<ArrowPath> {
    let predecessor = positions.get(&record.depends_on_work_id)?;
    let successor = positions.get(&record.work_id)?;
    let (start_x, end_x) = anchor_xs(record.dependency_type, predecessor, successor)?;

    let start = Point::new(start_x, predecessor.center_y());
    let end = Point::new(end_x, successor.center_y());

    Some(ArrowPath {
        dependency_id: record.id,
        predecessor: record.depends_on_work_id,
        successor: record.work_id,
        dependency_type: record.dependency_type,
        points: route(start, end),
        label: lag_label(record.lag_days, start, end),
    })
}

/// Route every record that can be placed, in record order.
pub fn synthesize_arrows(records: &[DependencyRecord], positions: &PositionMap) -> Vec<ArrowPath> {
    records
        .iter()
        .filter_map(|record| {
            let arrow = route_dependency(record, positions);
            if arrow.is_none() {
                debug!(
                    dependency = record.id,
                    from = record.depends_on_work_id,
                    to = record.work_id,
                    "dependency not drawn: endpoint unresolved"
                );
            }
            arrow
        })
        .collect()
}

/// Format a coordinate with at most two decimals and no trailing zeros.
pub fn fmt_coord(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

pub fn path_data(points: &[Point]) -> String {
    let mut d = String::new();
    for (idx, p) in points.iter().enumerate() {
        let cmd = if idx == 0 { 'M' } else { 'L' };
        if idx > 0 {
            d.push(' ');
        }
        let _ = write!(d, "{cmd} {} {}", fmt_coord(p.x), fmt_coord(p.y));
    }
    d
}
