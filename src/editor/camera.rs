use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::config::{AppConfig, SaveConfigRequest, SetDefaultViewRequest};
use crate::geo::{geo_to_world, world_to_geo};

#[derive(Component)]
pub struct MapCamera;

#[derive(Component)]
pub struct CameraZoom {
    pub scale: f32,
}

impl Default for CameraZoom {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

pub fn spawn_camera(mut commands: Commands, config: Res<AppConfig>) {
    let center = geo_to_world(config.data.default_center);
    commands.spawn((
        Camera2d,
        MapCamera,
        CameraZoom {
            scale: config.data.default_zoom,
        },
        Transform::from_translation(center.extend(1000.0)),
    ));
    info!(
        "Map view centered at ({:.4}, {:.4}), zoom {:.2}",
        config.data.default_center.lat, config.data.default_center.lng, config.data.default_zoom
    );
}

pub fn camera_pan(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<bevy::input::mouse::MouseMotion>,
    mut camera_query: Query<(&mut Transform, &CameraZoom), With<MapCamera>>,
) {
    if !mouse_button.pressed(MouseButton::Middle) {
        mouse_motion.clear();
        return;
    }

    let Ok((mut transform, zoom)) = camera_query.single_mut() else {
        return;
    };

    for event in mouse_motion.read() {
        let delta = event.delta * zoom.scale;
        transform.translation.x -= delta.x;
        transform.translation.y += delta.y;
    }
}

pub fn camera_zoom(
    mut scroll_events: MessageReader<MouseWheel>,
    mut camera_query: Query<&mut CameraZoom, With<MapCamera>>,
) {
    let Ok(mut zoom) = camera_query.single_mut() else {
        return;
    };

    for event in scroll_events.read() {
        let scroll_amount = match event.unit {
            MouseScrollUnit::Line => event.y * 0.1,
            MouseScrollUnit::Pixel => event.y * 0.001,
        };

        zoom.scale = (zoom.scale - scroll_amount).clamp(0.1, 10.0);
    }
}

pub fn apply_camera_zoom(
    mut camera_query: Query<(&CameraZoom, &mut Projection), (With<MapCamera>, Changed<CameraZoom>)>,
) {
    for (zoom, mut projection) in camera_query.iter_mut() {
        if let Projection::Orthographic(ref mut ortho) = *projection {
            ortho.scale = zoom.scale;
        }
    }
}

/// Persist the current camera position and zoom as the startup view.
pub fn set_default_view_system(
    mut events: MessageReader<SetDefaultViewRequest>,
    camera_query: Query<(&Transform, &CameraZoom), With<MapCamera>>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for _ in events.read() {
        let Ok((transform, zoom)) = camera_query.single() else {
            return;
        };

        let center = world_to_geo(transform.translation.truncate());
        config.data.default_center = center;
        config.data.default_zoom = zoom.scale;
        config.dirty = true;
        save_events.write(SaveConfigRequest);
        info!(
            "Default view set to ({:.4}, {:.4}) at zoom {:.2}",
            center.lat, center.lng, zoom.scale
        );
    }
}
