mod graveyard;
mod messages;
mod rendering;

pub use graveyard::{Boundary, Graveyard, GraveyardRegistry, SelectedGraveyard};
pub use messages::BoundarySaved;

use bevy::prelude::*;

pub struct MapPlugin;

impl Plugin for MapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GraveyardRegistry>()
            .init_resource::<SelectedGraveyard>()
            .add_message::<BoundarySaved>()
            .add_systems(
                Update,
                (
                    graveyard::apply_boundary_saved.run_if(on_message::<BoundarySaved>),
                    rendering::render_graveyard_overlays,
                ),
            );
    }
}
