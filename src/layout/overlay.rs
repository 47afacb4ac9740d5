// src/layout/overlay.rs

use std::fmt::Write as _;

use crate::layout::routing::{fmt_coord, ArrowPath};

const ARROW_COLOR: &str = "#64748b";
const MARKER_ID: &str = "workdeps-arrowhead";

/// Render arrows as an SVG overlay covering `width` x `height` content pixels.
///
/// The overlay is absolutely positioned over the grid and ignores pointer
/// events so rows underneath stay clickable.
pub fn render_overlay(arrows: &[ArrowPath], width: f64, height: f64) -> String {
    let width = fmt_coord(width.max(0.0));
    let height = fmt_coord(height.max(0.0));
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" style="position:absolute;top:0;left:0;pointer-events:none;overflow:visible">"#
    );
    let _ = writeln!(
        svg,
        r#"  <defs>
    <marker id="{MARKER_ID}" markerWidth="6" markerHeight="6" refX="5" refY="3" orient="auto" markerUnits="userSpaceOnUse">
      <path d="M0,0 L6,3 L0,6 z" fill="{ARROW_COLOR}" />
    </marker>
  </defs>"#
    );

    for arrow in arrows {
        let _ = writeln!(
            svg,
            r#"  <path data-dependency-id="{}" data-type="{}" d="{}" fill="none" stroke="{ARROW_COLOR}" stroke-width="1.5" marker-end="url(#{MARKER_ID})" />"#,
            arrow.dependency_id,
            arrow.dependency_type,
            arrow.path_data(),
        );

        if let Some(label) = &arrow.label {
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{}" font-size="10" text-anchor="middle" dy="-3" fill="{ARROW_COLOR}">{}</text>"#,
                fmt_coord(label.at.x),
                fmt_coord(label.at.y),
                label.text,
            );
        }
    }

    svg.push_str("</svg>\n");
    svg
}
