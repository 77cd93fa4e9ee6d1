//! Executes the engine's declarative render commands against the ECS scene.
//!
//! This is the swappable half of the drawing pipeline: the engine only knows
//! [`RenderCommand`]; this module turns commands into marker/line/shape
//! entities that the gizmo systems draw each frame. Removal commands tolerate
//! an already-empty scene, so the engine's defensive removals are harmless.

use bevy::prelude::*;

use crate::geo::geo_to_world;

use super::components::{BoundaryShape, PreviewLine, VertexMarker};
use super::engine::RenderCommand;
use super::state::RenderCommandQueue;

pub fn apply_render_commands(
    mut commands: Commands,
    mut queue: ResMut<RenderCommandQueue>,
    markers: Query<(Entity, &VertexMarker)>,
    lines: Query<Entity, With<PreviewLine>>,
    shapes: Query<Entity, With<BoundaryShape>>,
) {
    if queue.commands.is_empty() {
        return;
    }

    // Queries don't see entities spawned earlier in this same batch, so
    // batch-local spawns are tracked separately; removals pop those first
    // (they are always the most recent artifacts).
    let mut existing_markers: Vec<(usize, Entity)> =
        markers.iter().map(|(entity, m)| (m.index, entity)).collect();
    existing_markers.sort_by_key(|(index, _)| *index);
    let mut next_index = existing_markers.last().map(|(index, _)| index + 1).unwrap_or(0);
    let mut batch_markers: Vec<Entity> = Vec::new();

    let mut existing_lines: Vec<Entity> = lines.iter().collect();
    let mut batch_line: Option<Entity> = None;
    let mut existing_shapes: Vec<Entity> = shapes.iter().collect();
    let mut batch_shape: Option<Entity> = None;

    for command in queue.commands.drain(..) {
        match command {
            RenderCommand::AddMarker(point) => {
                let entity = commands
                    .spawn(VertexMarker {
                        index: next_index,
                        position: geo_to_world(point),
                    })
                    .id();
                next_index += 1;
                batch_markers.push(entity);
            }
            RenderCommand::RemoveMarker => {
                let most_recent = batch_markers
                    .pop()
                    .or_else(|| existing_markers.pop().map(|(_, entity)| entity));
                if let Some(entity) = most_recent {
                    commands.entity(entity).despawn();
                }
            }
            RenderCommand::DrawLine(points) => {
                if let Some(entity) = batch_line.take() {
                    commands.entity(entity).despawn();
                }
                let world: Vec<Vec2> = points.iter().map(|p| geo_to_world(*p)).collect();
                batch_line = Some(commands.spawn(PreviewLine { points: world }).id());
            }
            RenderCommand::RemoveLine => {
                if let Some(entity) = batch_line.take() {
                    commands.entity(entity).despawn();
                }
                for entity in existing_lines.drain(..) {
                    commands.entity(entity).despawn();
                }
            }
            RenderCommand::DrawPolygon(points) => {
                if let Some(entity) = batch_shape.take() {
                    commands.entity(entity).despawn();
                }
                let world: Vec<Vec2> = points.iter().map(|p| geo_to_world(*p)).collect();
                batch_shape = Some(commands.spawn(BoundaryShape { points: world }).id());
            }
            RenderCommand::RemovePolygon => {
                if let Some(entity) = batch_shape.take() {
                    commands.entity(entity).despawn();
                }
                for entity in existing_shapes.drain(..) {
                    commands.entity(entity).despawn();
                }
            }
        }
    }
}
