//! Message types for boundary tool operations.
//!
//! The UI writes these; the action systems in this module's parent consume
//! them. Keeping the operations message-driven means buttons and keyboard
//! shortcuts share one code path.

use bevy::prelude::*;

/// Drop the most recently added vertex of the draft.
#[derive(Message)]
pub struct UndoVertexRequest;

/// Close the draft polygon.
#[derive(Message)]
pub struct FinishBoundaryRequest;

/// Discard the draft entirely.
#[derive(Message)]
pub struct ClearBoundaryRequest;

/// Reopen a closed draft for further editing ("Redraw").
#[derive(Message)]
pub struct ResumeDrawingRequest;

/// Save the closed draft using the current save-form fields.
#[derive(Message)]
pub struct SaveBoundaryRequest;

/// Load an existing graveyard's boundary into the draft for re-editing.
#[derive(Message)]
pub struct EditBoundaryRequest {
    pub graveyard_id: u64,
}
