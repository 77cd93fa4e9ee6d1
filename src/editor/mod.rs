pub mod boundary;
mod camera;
mod graticule;
pub mod params;
mod select_tool;
pub mod tools;

pub use camera::MapCamera;
pub use tools::{CurrentTool, EditorTool};

use bevy::prelude::*;

use crate::config::ConfigLoaded;

/// System set for everything that feeds the render-command queue; the
/// adapter drains the queue after this set so commands land in the same
/// frame they were emitted.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundaryOps;

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<tools::CurrentTool>()
            .init_resource::<boundary::BoundaryDraft>()
            .init_resource::<boundary::RenderCommandQueue>()
            .init_resource::<boundary::BoundaryStatus>()
            .init_resource::<boundary::SaveForm>()
            .add_message::<boundary::UndoVertexRequest>()
            .add_message::<boundary::FinishBoundaryRequest>()
            .add_message::<boundary::ClearBoundaryRequest>()
            .add_message::<boundary::ResumeDrawingRequest>()
            .add_message::<boundary::SaveBoundaryRequest>()
            .add_message::<boundary::EditBoundaryRequest>()
            // Camera placement depends on the loaded config
            .add_systems(Startup, camera::spawn_camera.after(ConfigLoaded))
            .add_systems(
                Update,
                (
                    camera::camera_pan,
                    camera::camera_zoom,
                    camera::apply_camera_zoom,
                    camera::set_default_view_system
                        .run_if(on_message::<crate::config::SetDefaultViewRequest>),
                    graticule::draw_graticule,
                    tools::handle_tool_shortcuts,
                    tools::update_cursor_icon,
                    select_tool::handle_select_click,
                ),
            )
            .add_systems(
                Update,
                (
                    boundary::handle_boundary_clicks,
                    boundary::handle_boundary_shortcuts,
                    boundary::undo_vertex_system
                        .run_if(on_message::<boundary::UndoVertexRequest>),
                    boundary::finish_boundary_system
                        .run_if(on_message::<boundary::FinishBoundaryRequest>),
                    boundary::clear_boundary_system
                        .run_if(on_message::<boundary::ClearBoundaryRequest>),
                    boundary::resume_drawing_system
                        .run_if(on_message::<boundary::ResumeDrawingRequest>),
                    boundary::save_boundary_system
                        .run_if(on_message::<boundary::SaveBoundaryRequest>),
                    boundary::edit_boundary_system
                        .run_if(on_message::<boundary::EditBoundaryRequest>),
                )
                    .in_set(BoundaryOps),
            )
            .add_systems(
                Update,
                (
                    boundary::apply_render_commands.after(BoundaryOps),
                    boundary::render_vertex_markers,
                    boundary::render_preview_lines,
                    boundary::render_boundary_shapes,
                ),
            );
    }
}
