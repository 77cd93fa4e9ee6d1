//! State resources for the boundary drawing tool.

use bevy::prelude::*;

use super::engine::{BoundaryEngine, RenderCommand};

/// The in-progress boundary draft. `editing` holds the id of the graveyard
/// whose boundary is being re-edited, or `None` for a brand new one.
#[derive(Resource, Default)]
pub struct BoundaryDraft {
    pub engine: BoundaryEngine,
    pub editing: Option<u64>,
}

/// Render commands emitted by engine operations this frame, drained by the
/// adapter after all tool and action systems have run.
#[derive(Resource, Default)]
pub struct RenderCommandQueue {
    pub commands: Vec<RenderCommand>,
}

impl RenderCommandQueue {
    pub fn extend(&mut self, commands: Vec<RenderCommand>) {
        self.commands.extend(commands);
    }
}

/// User-facing status line for the boundary tool (recoverable errors and
/// confirmations). Overwritten by each operation that has something to say.
#[derive(Resource, Default)]
pub struct BoundaryStatus {
    pub message: Option<String>,
    pub is_error: bool,
}

impl BoundaryStatus {
    pub fn error(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.is_error = true;
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.is_error = false;
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.is_error = false;
    }
}

/// The save form fields shown while a closed draft awaits saving.
#[derive(Resource, Default)]
pub struct SaveForm {
    pub name: String,
    pub location: String,
}

impl SaveForm {
    pub fn reset(&mut self) {
        self.name.clear();
        self.location.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_and_clear() {
        let mut status = BoundaryStatus::default();
        status.error("nope");
        assert!(status.is_error);
        assert_eq!(status.message.as_deref(), Some("nope"));

        status.info("fine");
        assert!(!status.is_error);

        status.clear();
        assert!(status.message.is_none());
    }

    #[test]
    fn test_save_form_reset() {
        let mut form = SaveForm {
            name: "Old Town Cemetery".to_string(),
            location: "North ridge".to_string(),
        };
        form.reset();
        assert!(form.name.is_empty());
        assert!(form.location.is_empty());
    }
}
