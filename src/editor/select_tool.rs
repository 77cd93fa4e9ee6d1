//! Click-to-select for saved graveyard boundaries.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::geo::point_in_polygon;
use crate::map::{GraveyardRegistry, SelectedGraveyard};

use super::params::{is_cursor_over_ui, CameraParams};
use super::tools::{CurrentTool, EditorTool};

pub fn handle_select_click(
    mouse_button: Res<ButtonInput<MouseButton>>,
    current_tool: Res<CurrentTool>,
    registry: Res<GraveyardRegistry>,
    mut selected: ResMut<SelectedGraveyard>,
    camera: CameraParams,
    mut contexts: EguiContexts,
) {
    if current_tool.tool != EditorTool::Select {
        return;
    }

    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    if is_cursor_over_ui(&mut contexts) {
        return;
    }

    let Some(point) = camera.cursor_geo_pos() else {
        return;
    };

    // Later records draw on top, so the last hit wins; clicking empty
    // ground clears the selection
    let mut hit = None;
    for graveyard in registry.iter() {
        if let Some(boundary) = &graveyard.boundary
            && point_in_polygon(point, &boundary.coordinates)
        {
            hit = Some(graveyard.id);
        }
    }

    if selected.id != hit {
        selected.id = hit;
        match hit {
            Some(id) => info!("Selected graveyard {}", id),
            None => debug!("Selection cleared"),
        }
    }
}
