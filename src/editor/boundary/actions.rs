//! Action systems consuming the boundary tool's request messages.
//!
//! Each system runs only when its message fires (wired with
//! `run_if(on_message::<T>)` in the editor plugin). Recoverable failures land
//! in [`BoundaryStatus`] for the UI; nothing here aborts the session.

use bevy::prelude::*;

use crate::editor::tools::{CurrentTool, EditorTool};
use crate::map::{BoundarySaved, GraveyardRegistry, SelectedGraveyard};

use super::engine::BoundaryEngine;
use super::messages::{
    ClearBoundaryRequest, EditBoundaryRequest, FinishBoundaryRequest, ResumeDrawingRequest,
    SaveBoundaryRequest, UndoVertexRequest,
};
use super::state::{BoundaryDraft, BoundaryStatus, RenderCommandQueue, SaveForm};

pub fn undo_vertex_system(
    mut events: MessageReader<UndoVertexRequest>,
    mut draft: ResMut<BoundaryDraft>,
    mut queue: ResMut<RenderCommandQueue>,
) {
    for _ in events.read() {
        let commands = draft.engine.undo();
        if commands.is_empty() {
            debug!("Undo requested with nothing to undo");
        }
        queue.extend(commands);
    }
}

pub fn finish_boundary_system(
    mut events: MessageReader<FinishBoundaryRequest>,
    mut draft: ResMut<BoundaryDraft>,
    mut queue: ResMut<RenderCommandQueue>,
    mut status: ResMut<BoundaryStatus>,
) {
    for _ in events.read() {
        match draft.engine.finish() {
            Ok(commands) => {
                queue.extend(commands);
                status.info(format!(
                    "Boundary closed with {} points",
                    draft.engine.vertex_count()
                ));
                info!(
                    "Closed boundary draft with {} vertices",
                    draft.engine.vertex_count()
                );
            }
            Err(e) => {
                status.error(e.to_string());
                warn!("Cannot finish boundary: {}", e);
            }
        }
    }
}

pub fn clear_boundary_system(
    mut events: MessageReader<ClearBoundaryRequest>,
    mut draft: ResMut<BoundaryDraft>,
    mut queue: ResMut<RenderCommandQueue>,
    mut status: ResMut<BoundaryStatus>,
    mut form: ResMut<SaveForm>,
) {
    for _ in events.read() {
        queue.extend(draft.engine.clear());
        draft.editing = None;
        form.reset();
        status.clear();
        info!("Cleared boundary draft");
    }
}

pub fn resume_drawing_system(
    mut events: MessageReader<ResumeDrawingRequest>,
    mut draft: ResMut<BoundaryDraft>,
    mut queue: ResMut<RenderCommandQueue>,
    mut status: ResMut<BoundaryStatus>,
) {
    for _ in events.read() {
        queue.extend(draft.engine.resume());
        status.clear();
    }
}

pub fn save_boundary_system(
    mut events: MessageReader<SaveBoundaryRequest>,
    mut draft: ResMut<BoundaryDraft>,
    mut queue: ResMut<RenderCommandQueue>,
    mut status: ResMut<BoundaryStatus>,
    mut form: ResMut<SaveForm>,
    mut saved: MessageWriter<BoundarySaved>,
) {
    for _ in events.read() {
        // Vertex count first, then the name: same order the user sees
        let result = match draft.engine.save() {
            Ok(result) => result,
            Err(e) => {
                status.error(e.to_string());
                warn!("Cannot save boundary: {}", e);
                continue;
            }
        };

        let name = form.name.trim().to_string();
        if name.is_empty() {
            status.error("Please enter a graveyard name");
            continue;
        }

        let location = if form.location.trim().is_empty() {
            "No location specified".to_string()
        } else {
            form.location.trim().to_string()
        };

        info!(
            "Saving boundary '{}' ({} points, center {:.4}, {:.4})",
            name,
            result.coordinates.len(),
            result.center.lat,
            result.center.lng
        );
        saved.write(BoundarySaved {
            graveyard_id: draft.editing,
            name,
            location,
            coordinates: result.coordinates,
            center: result.center,
        });

        queue.extend(draft.engine.clear());
        draft.editing = None;
        form.reset();
        status.info("Boundary saved");
    }
}

#[allow(clippy::too_many_arguments)]
pub fn edit_boundary_system(
    mut events: MessageReader<EditBoundaryRequest>,
    registry: Res<GraveyardRegistry>,
    mut draft: ResMut<BoundaryDraft>,
    mut queue: ResMut<RenderCommandQueue>,
    mut status: ResMut<BoundaryStatus>,
    mut form: ResMut<SaveForm>,
    mut current_tool: ResMut<CurrentTool>,
    mut selected: ResMut<SelectedGraveyard>,
) {
    for event in events.read() {
        let Some(graveyard) = registry.get(event.graveyard_id) else {
            warn!("Edit requested for unknown graveyard {}", event.graveyard_id);
            continue;
        };
        let Some(boundary) = &graveyard.boundary else {
            warn!("Graveyard '{}' has no boundary to edit", graveyard.name);
            continue;
        };

        // Drop whatever draft was in progress before seeding the new one
        queue.extend(draft.engine.clear());

        let (engine, commands) = BoundaryEngine::with_initial(boundary.coordinates.clone());
        queue.extend(commands);
        draft.engine = engine;
        draft.editing = Some(graveyard.id);
        form.name = graveyard.name.clone();
        form.location = graveyard.location.clone();
        status.clear();
        current_tool.tool = EditorTool::DrawBoundary;
        selected.id = None;
        info!("Editing boundary of '{}'", graveyard.name);
    }
}
