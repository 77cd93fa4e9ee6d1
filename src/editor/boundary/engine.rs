//! The boundary drawing state machine.
//!
//! The engine owns only semantic state: the ordered vertex buffer and the
//! drawing mode. Every operation returns a list of [`RenderCommand`]s for the
//! rendering adapter to execute; the engine itself never touches the scene.
//! This keeps the click-to-polygon logic independent of any particular
//! renderer and makes the full state machine testable without a window.
//!
//! Invariants maintained across operations:
//! - while `Drawing`, exactly one marker is shown per buffered vertex, and a
//!   preview line is shown iff the buffer holds at least two vertices;
//! - while `Idle`, no markers or preview line are shown and the closed
//!   polygon is;
//! - a stale preview line is always removed before a replacement is drawn.

use thiserror::Error;

use crate::constants::MIN_BOUNDARY_VERTICES;
use crate::geo::{polygon_area, GeoBounds, GeoPoint};

/// Whether the engine is accepting new vertices or holding a closed polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Accepting clicks; markers and the preview line are live
    #[default]
    Drawing,
    /// Buffer frozen; the closed polygon is rendered solid
    Idle,
}

/// One declarative view mutation, mirroring the rendering hooks the host
/// exposes. "Remove" variants target the most recently added artifact of
/// their kind and are no-ops when nothing is shown.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    AddMarker(GeoPoint),
    RemoveMarker,
    DrawLine(Vec<GeoPoint>),
    RemoveLine,
    DrawPolygon(Vec<GeoPoint>),
    RemovePolygon,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    #[error("a boundary needs at least {MIN_BOUNDARY_VERTICES} points")]
    InsufficientVertices,
}

/// The outcome of a successful save: the frozen vertex sequence (no closing
/// duplicate appended) and its bounding-box center.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryResult {
    pub coordinates: Vec<GeoPoint>,
    pub center: GeoPoint,
}

#[derive(Debug, Default)]
pub struct BoundaryEngine {
    vertices: Vec<GeoPoint>,
    mode: DrawMode,
}

impl BoundaryEngine {
    /// A fresh engine: empty buffer, accepting vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an edit session from an existing boundary. With three or more
    /// usable vertices the engine starts `Idle` showing the closed polygon;
    /// a shorter (malformed) seed falls back to a `Drawing` session with the
    /// usable vertices replayed.
    pub fn with_initial(coordinates: Vec<GeoPoint>) -> (Self, Vec<RenderCommand>) {
        let vertices: Vec<GeoPoint> = coordinates.into_iter().filter(GeoPoint::is_finite).collect();

        if vertices.len() >= MIN_BOUNDARY_VERTICES {
            let commands = vec![RenderCommand::DrawPolygon(vertices.clone())];
            let engine = Self {
                vertices,
                mode: DrawMode::Idle,
            };
            return (engine, commands);
        }

        let mut engine = Self::new();
        let mut commands = Vec::new();
        for point in vertices {
            commands.extend(engine.add_vertex(point));
        }
        (engine, commands)
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Append a clicked vertex. No-op unless in `Drawing` mode (the UI gates
    /// this, but a late click must not corrupt a frozen polygon) or when the
    /// point is not finite. Points are never deduplicated or merged.
    pub fn add_vertex(&mut self, point: GeoPoint) -> Vec<RenderCommand> {
        if self.mode != DrawMode::Drawing || !point.is_finite() {
            return Vec::new();
        }

        self.vertices.push(point);

        let mut commands = vec![RenderCommand::AddMarker(point)];
        if self.vertices.len() >= 2 {
            // The stale preview line must go before its replacement appears
            if self.vertices.len() > 2 {
                commands.push(RenderCommand::RemoveLine);
            }
            commands.push(RenderCommand::DrawLine(self.vertices.clone()));
        }
        commands
    }

    /// Drop the most recently added vertex. Single-step only; no redo
    /// history is kept. No-op on an empty buffer or outside `Drawing` mode.
    pub fn undo(&mut self) -> Vec<RenderCommand> {
        if self.mode != DrawMode::Drawing || self.vertices.is_empty() {
            return Vec::new();
        }

        self.vertices.pop();

        let mut commands = vec![RenderCommand::RemoveMarker];
        let previous_len = self.vertices.len() + 1;
        if previous_len >= 2 {
            commands.push(RenderCommand::RemoveLine);
        }
        if self.vertices.len() >= 2 {
            commands.push(RenderCommand::DrawLine(self.vertices.clone()));
        }
        commands
    }

    /// Close the polygon: freeze the buffer, drop the drawing artifacts and
    /// show the filled shape. The buffer stays intact as the source of truth
    /// for a subsequent [`save`](Self::save).
    pub fn finish(&mut self) -> Result<Vec<RenderCommand>, BoundaryError> {
        if self.vertices.len() < MIN_BOUNDARY_VERTICES {
            return Err(BoundaryError::InsufficientVertices);
        }

        self.mode = DrawMode::Idle;

        let mut commands = vec![RenderCommand::RemovePolygon];
        for _ in 0..self.vertices.len() {
            commands.push(RenderCommand::RemoveMarker);
        }
        commands.push(RenderCommand::RemoveLine);
        commands.push(RenderCommand::DrawPolygon(self.vertices.clone()));
        Ok(commands)
    }

    /// Reopen a closed polygon for editing ("Redraw"): back to `Drawing`
    /// with the buffer retained, markers and preview line restored.
    pub fn resume(&mut self) -> Vec<RenderCommand> {
        if self.mode != DrawMode::Idle {
            return Vec::new();
        }

        self.mode = DrawMode::Drawing;

        let mut commands = vec![RenderCommand::RemovePolygon];
        for point in &self.vertices {
            commands.push(RenderCommand::AddMarker(*point));
        }
        if self.vertices.len() >= 2 {
            commands.push(RenderCommand::DrawLine(self.vertices.clone()));
        }
        commands
    }

    /// Discard everything: empty buffer, all artifacts removed, back to
    /// `Drawing`. Irreversible; undo does not restore a cleared boundary.
    pub fn clear(&mut self) -> Vec<RenderCommand> {
        let mut commands = Vec::new();
        match self.mode {
            DrawMode::Drawing => {
                for _ in 0..self.vertices.len() {
                    commands.push(RenderCommand::RemoveMarker);
                }
                if self.vertices.len() >= 2 {
                    commands.push(RenderCommand::RemoveLine);
                }
            }
            DrawMode::Idle => {
                commands.push(RenderCommand::RemovePolygon);
            }
        }

        self.vertices.clear();
        self.mode = DrawMode::Drawing;
        commands
    }

    /// Produce the save result: the vertex sequence as drawn plus the
    /// bounding-box center. Pure; the engine state is untouched, and no
    /// closing duplicate of the first vertex is appended.
    pub fn save(&self) -> Result<BoundaryResult, BoundaryError> {
        if self.vertices.len() < MIN_BOUNDARY_VERTICES {
            return Err(BoundaryError::InsufficientVertices);
        }

        // of() cannot fail here: the buffer is non-empty
        let bounds = GeoBounds::of(&self.vertices).ok_or(BoundaryError::InsufficientVertices)?;
        Ok(BoundaryResult {
            coordinates: self.vertices.clone(),
            center: bounds.center(),
        })
    }

    /// Planar area of the current buffer in square meters; 0.0 below three
    /// vertices. Computed on demand, never cached.
    pub fn area(&self) -> f64 {
        polygon_area(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng)
    }

    fn engine_with(points: &[GeoPoint]) -> BoundaryEngine {
        let mut engine = BoundaryEngine::new();
        for point in points {
            engine.add_vertex(*point);
        }
        engine
    }

    fn quad() -> Vec<GeoPoint> {
        vec![p(10.0, 10.0), p(10.0, 20.0), p(20.0, 20.0), p(20.0, 10.0)]
    }

    // construction

    #[test]
    fn test_new_engine_is_empty_and_drawing() {
        let engine = BoundaryEngine::new();
        assert_eq!(engine.vertex_count(), 0);
        assert_eq!(engine.mode(), DrawMode::Drawing);
    }

    #[test]
    fn test_with_initial_starts_idle_showing_polygon() {
        let (engine, commands) = BoundaryEngine::with_initial(quad());
        assert_eq!(engine.mode(), DrawMode::Idle);
        assert_eq!(engine.vertices(), quad().as_slice());
        assert_eq!(commands, vec![RenderCommand::DrawPolygon(quad())]);
    }

    #[test]
    fn test_with_initial_short_seed_falls_back_to_drawing() {
        let (engine, commands) = BoundaryEngine::with_initial(vec![p(1.0, 1.0), p(2.0, 2.0)]);
        assert_eq!(engine.mode(), DrawMode::Drawing);
        assert_eq!(engine.vertex_count(), 2);
        assert_eq!(
            commands,
            vec![
                RenderCommand::AddMarker(p(1.0, 1.0)),
                RenderCommand::AddMarker(p(2.0, 2.0)),
                RenderCommand::DrawLine(vec![p(1.0, 1.0), p(2.0, 2.0)]),
            ]
        );
    }

    #[test]
    fn test_with_initial_filters_non_finite() {
        let seed = vec![p(1.0, 1.0), p(f64::NAN, 2.0), p(2.0, 2.0), p(3.0, 1.0)];
        let (engine, _) = BoundaryEngine::with_initial(seed);
        assert_eq!(engine.vertex_count(), 3);
        assert_eq!(engine.mode(), DrawMode::Idle);
    }

    // add_vertex

    #[test]
    fn test_first_vertex_adds_marker_only() {
        let mut engine = BoundaryEngine::new();
        let commands = engine.add_vertex(p(1.0, 2.0));
        assert_eq!(commands, vec![RenderCommand::AddMarker(p(1.0, 2.0))]);
        assert_eq!(engine.vertices(), &[p(1.0, 2.0)]);
    }

    #[test]
    fn test_second_vertex_draws_line_without_stale_removal() {
        let mut engine = engine_with(&[p(0.0, 0.0)]);
        let commands = engine.add_vertex(p(1.0, 1.0));
        // No line existed yet, so no RemoveLine before the first DrawLine
        assert_eq!(
            commands,
            vec![
                RenderCommand::AddMarker(p(1.0, 1.0)),
                RenderCommand::DrawLine(vec![p(0.0, 0.0), p(1.0, 1.0)]),
            ]
        );
    }

    #[test]
    fn test_third_vertex_removes_stale_line_before_redraw() {
        let mut engine = engine_with(&[p(0.0, 0.0), p(1.0, 1.0)]);
        let commands = engine.add_vertex(p(2.0, 0.0));
        assert_eq!(
            commands,
            vec![
                RenderCommand::AddMarker(p(2.0, 0.0)),
                RenderCommand::RemoveLine,
                RenderCommand::DrawLine(vec![p(0.0, 0.0), p(1.0, 1.0), p(2.0, 0.0)]),
            ]
        );
    }

    #[test]
    fn test_add_vertex_never_deduplicates() {
        let point = p(5.0, 5.0);
        let mut engine = BoundaryEngine::new();
        engine.add_vertex(point);
        engine.add_vertex(point);
        engine.add_vertex(point);
        assert_eq!(engine.vertex_count(), 3);
    }

    #[test]
    fn test_add_vertex_ignored_when_idle() {
        let (mut engine, _) = BoundaryEngine::with_initial(quad());
        let commands = engine.add_vertex(p(0.0, 0.0));
        assert!(commands.is_empty());
        assert_eq!(engine.vertex_count(), 4);
    }

    #[test]
    fn test_add_vertex_ignores_non_finite() {
        let mut engine = BoundaryEngine::new();
        assert!(engine.add_vertex(p(f64::NAN, 0.0)).is_empty());
        assert!(engine.add_vertex(p(0.0, f64::NEG_INFINITY)).is_empty());
        assert_eq!(engine.vertex_count(), 0);
    }

    // undo

    #[test]
    fn test_undo_on_empty_buffer_is_noop() {
        let mut engine = BoundaryEngine::new();
        let commands = engine.undo();
        assert!(commands.is_empty());
        assert_eq!(engine.vertex_count(), 0);
        assert_eq!(engine.mode(), DrawMode::Drawing);
    }

    #[test]
    fn test_add_add_undo_leaves_first_vertex() {
        let mut engine = BoundaryEngine::new();
        engine.add_vertex(p(1.0, 1.0));
        engine.add_vertex(p(2.0, 2.0));
        engine.undo();
        assert_eq!(engine.vertices(), &[p(1.0, 1.0)]);
    }

    #[test]
    fn test_undo_below_two_vertices_removes_line_entirely() {
        let mut engine = engine_with(&[p(0.0, 0.0), p(1.0, 1.0)]);
        let commands = engine.undo();
        assert_eq!(
            commands,
            vec![RenderCommand::RemoveMarker, RenderCommand::RemoveLine]
        );
    }

    #[test]
    fn test_undo_redraws_line_through_remainder() {
        let mut engine = engine_with(&[p(0.0, 0.0), p(1.0, 1.0), p(2.0, 0.0)]);
        let commands = engine.undo();
        assert_eq!(
            commands,
            vec![
                RenderCommand::RemoveMarker,
                RenderCommand::RemoveLine,
                RenderCommand::DrawLine(vec![p(0.0, 0.0), p(1.0, 1.0)]),
            ]
        );
    }

    #[test]
    fn test_undo_single_vertex_removes_marker_only() {
        let mut engine = engine_with(&[p(0.0, 0.0)]);
        let commands = engine.undo();
        assert_eq!(commands, vec![RenderCommand::RemoveMarker]);
        assert_eq!(engine.vertex_count(), 0);
    }

    #[test]
    fn test_undo_is_single_step_no_redo() {
        let mut engine = engine_with(&[p(0.0, 0.0), p(1.0, 1.0)]);
        engine.undo();
        // A second undo keeps stepping back; nothing restores the popped vertex
        engine.undo();
        assert_eq!(engine.vertex_count(), 0);
    }

    // finish

    #[test]
    fn test_finish_below_three_vertices_fails_and_stays_drawing() {
        let mut engine = engine_with(&[p(0.0, 0.0), p(1.0, 1.0)]);
        assert_eq!(engine.finish(), Err(BoundaryError::InsufficientVertices));
        assert_eq!(engine.mode(), DrawMode::Drawing);
        assert_eq!(engine.vertex_count(), 2);
    }

    #[test]
    fn test_finish_freezes_buffer_and_swaps_artifacts() {
        let mut engine = engine_with(&quad());
        let commands = engine.finish().unwrap();
        assert_eq!(engine.mode(), DrawMode::Idle);
        assert_eq!(engine.vertices(), quad().as_slice());
        assert_eq!(
            commands,
            vec![
                RenderCommand::RemovePolygon,
                RenderCommand::RemoveMarker,
                RenderCommand::RemoveMarker,
                RenderCommand::RemoveMarker,
                RenderCommand::RemoveMarker,
                RenderCommand::RemoveLine,
                RenderCommand::DrawPolygon(quad()),
            ]
        );
    }

    #[test]
    fn test_finish_does_not_append_closing_duplicate() {
        let mut engine = engine_with(&quad());
        engine.finish().unwrap();
        assert_eq!(engine.vertex_count(), 4);
        assert_ne!(engine.vertices().first(), engine.vertices().last());
    }

    // resume

    #[test]
    fn test_resume_restores_drawing_artifacts() {
        let mut engine = engine_with(&quad());
        engine.finish().unwrap();
        let commands = engine.resume();
        assert_eq!(engine.mode(), DrawMode::Drawing);
        assert_eq!(commands[0], RenderCommand::RemovePolygon);
        let markers = commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::AddMarker(_)))
            .count();
        assert_eq!(markers, 4);
        assert_eq!(commands.last(), Some(&RenderCommand::DrawLine(quad())));
    }

    #[test]
    fn test_resume_while_drawing_is_noop() {
        let mut engine = engine_with(&[p(0.0, 0.0)]);
        assert!(engine.resume().is_empty());
        assert_eq!(engine.mode(), DrawMode::Drawing);
    }

    #[test]
    fn test_resume_then_add_continues_the_buffer() {
        let mut engine = engine_with(&quad());
        engine.finish().unwrap();
        engine.resume();
        engine.add_vertex(p(30.0, 15.0));
        assert_eq!(engine.vertex_count(), 5);
    }

    // clear

    #[test]
    fn test_clear_while_drawing_removes_markers_and_line() {
        let mut engine = engine_with(&[p(0.0, 0.0), p(1.0, 1.0), p(2.0, 0.0)]);
        let commands = engine.clear();
        assert_eq!(
            commands,
            vec![
                RenderCommand::RemoveMarker,
                RenderCommand::RemoveMarker,
                RenderCommand::RemoveMarker,
                RenderCommand::RemoveLine,
            ]
        );
        assert_eq!(engine.vertex_count(), 0);
        assert_eq!(engine.mode(), DrawMode::Drawing);
    }

    #[test]
    fn test_clear_while_idle_removes_polygon() {
        let mut engine = engine_with(&quad());
        engine.finish().unwrap();
        let commands = engine.clear();
        assert_eq!(commands, vec![RenderCommand::RemovePolygon]);
        assert_eq!(engine.vertex_count(), 0);
        assert_eq!(engine.mode(), DrawMode::Drawing);
    }

    #[test]
    fn test_clear_empty_engine_is_clean_noop() {
        let mut engine = BoundaryEngine::new();
        assert!(engine.clear().is_empty());
        assert_eq!(engine.mode(), DrawMode::Drawing);
    }

    #[test]
    fn test_clear_is_irreversible() {
        let mut engine = engine_with(&quad());
        engine.clear();
        assert!(engine.undo().is_empty());
        assert_eq!(engine.vertex_count(), 0);
    }

    // save

    #[test]
    fn test_save_below_three_vertices_fails() {
        let engine = engine_with(&[p(0.0, 0.0), p(1.0, 1.0)]);
        assert_eq!(engine.save(), Err(BoundaryError::InsufficientVertices));
    }

    #[test]
    fn test_save_yields_bbox_center() {
        let engine = engine_with(&quad());
        let result = engine.save().unwrap();
        assert_eq!(result.center, p(15.0, 15.0));
        assert_eq!(result.coordinates, quad());
    }

    #[test]
    fn test_save_is_pure() {
        let mut engine = engine_with(&quad());
        engine.save().unwrap();
        engine.save().unwrap();
        assert_eq!(engine.vertex_count(), 4);
        assert_eq!(engine.mode(), DrawMode::Drawing);
        // The buffer is still editable afterwards
        engine.add_vertex(p(25.0, 15.0));
        assert_eq!(engine.vertex_count(), 5);
    }

    #[test]
    fn test_finish_then_save_emits_frozen_sequence_unmodified() {
        let mut engine = engine_with(&quad());
        engine.finish().unwrap();
        let result = engine.save().unwrap();
        assert_eq!(result.coordinates, quad());
    }

    // area

    #[test]
    fn test_area_zero_below_three_vertices() {
        assert_eq!(BoundaryEngine::new().area(), 0.0);
        assert_eq!(engine_with(&[p(0.0, 0.0), p(0.0, 1.0)]).area(), 0.0);
    }

    #[test]
    fn test_area_unit_square_flat_earth_value() {
        let engine = engine_with(&[p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)]);
        assert_eq!(engine.area(), 12_321_000_000.0);
    }

    #[test]
    fn test_area_unaffected_by_finish() {
        let mut engine = engine_with(&quad());
        let open_area = engine.area();
        engine.finish().unwrap();
        assert_eq!(engine.area(), open_area);
    }
}
