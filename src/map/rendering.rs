//! Overlay rendering of saved graveyard boundaries.

use bevy::prelude::*;

use crate::editor::boundary::{draw_closed_outline, BoundaryDraft};
use crate::geo::geo_to_world;
use crate::theme;

use super::{GraveyardRegistry, SelectedGraveyard};

pub fn render_graveyard_overlays(
    mut gizmos: Gizmos,
    registry: Res<GraveyardRegistry>,
    selected: Res<SelectedGraveyard>,
    draft: Res<BoundaryDraft>,
) {
    for graveyard in registry.iter() {
        let Some(boundary) = &graveyard.boundary else {
            continue;
        };

        // The record being re-edited is represented by the live draft
        if draft.editing == Some(graveyard.id) {
            continue;
        }

        let color = if selected.id == Some(graveyard.id) {
            theme::SELECTED_OUTLINE
        } else {
            theme::BOUNDARY_OUTLINE
        };

        let points: Vec<Vec2> = boundary.coordinates.iter().map(|p| geo_to_world(*p)).collect();
        draw_closed_outline(&mut gizmos, &points, color);
    }
}
