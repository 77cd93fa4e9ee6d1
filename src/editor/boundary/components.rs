//! Component types for boundary drawing entities.
//!
//! Positions are stored in canvas world space (already projected) so the
//! gizmo rendering systems never touch geographic coordinates.

use bevy::prelude::*;

/// One clicked vertex, shown as a circle marker while drawing.
/// `index` preserves click order so "remove most recent" is well defined.
#[derive(Component, Debug, Clone)]
pub struct VertexMarker {
    pub index: usize,
    pub position: Vec2,
}

/// The live polyline through the in-progress vertices.
#[derive(Component, Debug, Clone)]
pub struct PreviewLine {
    pub points: Vec<Vec2>,
}

/// A closed draft polygon (the result of finishing a drawing session).
#[derive(Component, Debug, Clone)]
pub struct BoundaryShape {
    pub points: Vec<Vec2>,
}
