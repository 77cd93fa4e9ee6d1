//! Click handling for the Draw Boundary tool.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::editor::params::{is_cursor_over_ui, CameraParams};
use crate::editor::tools::{CurrentTool, EditorTool};
use crate::geo::world_to_geo;

use super::messages::UndoVertexRequest;
use super::state::{BoundaryDraft, RenderCommandQueue};

/// Append a vertex for each left click on the canvas while the Draw Boundary
/// tool is active. Clicks over UI panels are ignored.
pub fn handle_boundary_clicks(
    mouse_button: Res<ButtonInput<MouseButton>>,
    current_tool: Res<CurrentTool>,
    mut draft: ResMut<BoundaryDraft>,
    mut queue: ResMut<RenderCommandQueue>,
    camera: CameraParams,
    mut contexts: EguiContexts,
) {
    if current_tool.tool != EditorTool::DrawBoundary {
        return;
    }

    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    if is_cursor_over_ui(&mut contexts) {
        return;
    }

    let Some(world_pos) = camera.cursor_world_pos() else {
        return;
    };

    let point = world_to_geo(world_pos);
    let commands = draft.engine.add_vertex(point);
    if !commands.is_empty() {
        debug!(
            "Added boundary vertex {} at ({:.5}, {:.5})",
            draft.engine.vertex_count(),
            point.lat,
            point.lng
        );
        queue.extend(commands);
    }
}

/// Ctrl+Z steps back one vertex while drawing.
pub fn handle_boundary_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_tool: Res<CurrentTool>,
    mut undo_events: MessageWriter<UndoVertexRequest>,
    mut contexts: EguiContexts,
) {
    if current_tool.tool != EditorTool::DrawBoundary {
        return;
    }

    // Don't steal the shortcut while typing in a text field
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if ctrl && keyboard.just_pressed(KeyCode::KeyZ) {
        undo_events.write(UndoVertexRequest);
    }
}
