//! Message types for graveyard registry operations.

use bevy::prelude::*;

use crate::geo::GeoPoint;

/// A finished boundary emitted by the drawing tool, fire-and-forget.
/// `graveyard_id` names the record being re-edited, or `None` to create a
/// new record.
#[derive(Message)]
pub struct BoundarySaved {
    pub graveyard_id: Option<u64>,
    pub name: String,
    pub location: String,
    pub coordinates: Vec<GeoPoint>,
    pub center: GeoPoint,
}
