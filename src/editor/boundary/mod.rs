//! Boundary drawing tool: turn map clicks into a closed cemetery boundary.
//!
//! The tool is split the way the rest of the editor is:
//!
//! - [`engine`] - the pure drawing state machine (vertex buffer, mode,
//!   render-command emission); everything testable lives here
//! - [`components`] - entity components for drawn artifacts
//! - [`state`] - resources (draft, command queue, status line, save form)
//! - [`messages`] - request messages written by the UI and shortcuts
//! - [`draw_tool`] - click and keyboard input
//! - [`actions`] - message-driven operations (undo/finish/clear/save/edit)
//! - [`adapter`] - render-command execution against the ECS scene
//! - [`rendering`] - gizmo drawing of markers, preview line and shapes

mod actions;
mod adapter;
mod components;
mod draw_tool;
pub mod engine;
mod messages;
mod rendering;
mod state;

// Re-exports - Engine
pub use engine::{BoundaryEngine, BoundaryError, BoundaryResult, DrawMode, RenderCommand};

// Re-exports - Components
pub use components::{BoundaryShape, PreviewLine, VertexMarker};

// Re-exports - State
pub use state::{BoundaryDraft, BoundaryStatus, RenderCommandQueue, SaveForm};

// Re-exports - Messages
pub use messages::{
    ClearBoundaryRequest, EditBoundaryRequest, FinishBoundaryRequest, ResumeDrawingRequest,
    SaveBoundaryRequest, UndoVertexRequest,
};

// Re-exports - Systems
pub use actions::{
    clear_boundary_system, edit_boundary_system, finish_boundary_system, resume_drawing_system,
    save_boundary_system, undo_vertex_system,
};
pub use adapter::apply_render_commands;
pub use draw_tool::{handle_boundary_clicks, handle_boundary_shortcuts};
pub use rendering::{render_boundary_shapes, render_preview_lines, render_vertex_markers};

// Shared with the graveyard overlay rendering
pub(crate) use rendering::draw_closed_outline;
