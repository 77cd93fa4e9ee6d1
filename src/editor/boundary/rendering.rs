//! Gizmo rendering systems for boundary drawing entities.

use bevy::prelude::*;

use crate::constants::MARKER_RADIUS;
use crate::theme;

use super::components::{BoundaryShape, PreviewLine, VertexMarker};

pub fn render_vertex_markers(mut gizmos: Gizmos, markers: Query<&VertexMarker>) {
    for marker in markers.iter() {
        gizmos.circle_2d(
            Isometry2d::from_translation(marker.position),
            MARKER_RADIUS,
            theme::MARKER_OUTLINE,
        );
        gizmos.circle_2d(
            Isometry2d::from_translation(marker.position),
            MARKER_RADIUS * 0.6,
            theme::MARKER_FILL,
        );
    }
}

pub fn render_preview_lines(mut gizmos: Gizmos, lines: Query<&PreviewLine>) {
    for line in lines.iter() {
        if line.points.len() < 2 {
            continue;
        }

        for window in line.points.windows(2) {
            gizmos.line_2d(window[0], window[1], theme::PREVIEW_LINE);
        }
    }
}

pub fn render_boundary_shapes(mut gizmos: Gizmos, shapes: Query<&BoundaryShape>) {
    for shape in shapes.iter() {
        draw_closed_outline(&mut gizmos, &shape.points, theme::BOUNDARY_OUTLINE);
    }
}

/// Draw a polygon outline including the implicit closing edge from the last
/// point back to the first.
pub(crate) fn draw_closed_outline(gizmos: &mut Gizmos, points: &[Vec2], color: Color) {
    if points.len() < 2 {
        return;
    }

    for window in points.windows(2) {
        gizmos.line_2d(window[0], window[1], color);
    }
    if points.len() > 2 {
        gizmos.line_2d(points[points.len() - 1], points[0], color);
    }
}
