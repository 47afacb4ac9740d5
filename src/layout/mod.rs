// src/layout/mod.rs

//! Arrow layout for the schedule grid.
//!
//! - [`axis`] maps dates to x coordinates on a day or week axis.
//! - [`positions`] captures row geometry from a grid snapshot.
//! - [`routing`] picks anchor points per dependency kind and routes
//!   orthogonal polylines between them.
//! - [`overlay`] renders the routed arrows as an SVG overlay.
//!
//! Every function here is pure; the event-driven recomputation lives in
//! `engine`.

pub mod axis;
pub mod overlay;
pub mod positions;
pub mod routing;

pub use axis::{week_start, x_position_of, TimeAxis};
pub use overlay::render_overlay;
pub use positions::{
    capture_positions, ContainerGeometry, GridRow, GridSnapshot, PositionMap, WorkPosition,
};
pub use routing::{
    anchor_xs, lag_label, route, route_dependency, synthesize_arrows, ArrowPath, LagLabel, Point,
};
