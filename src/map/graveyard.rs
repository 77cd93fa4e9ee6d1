//! Graveyard records and the in-memory registry.
//!
//! The registry is the collaborator that receives the drawing tool's save
//! results. Records live only for the session; there is deliberately no disk
//! persistence here.

use bevy::prelude::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MIN_BOUNDARY_VERTICES;
use crate::geo::{polygon_area, GeoPoint};

use super::messages::BoundarySaved;

/// A saved boundary polygon: the drawn vertex sequence plus its precomputed
/// bounding-box center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub coordinates: Vec<GeoPoint>,
    pub center: GeoPoint,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graveyard {
    pub id: u64,
    pub name: String,
    pub location: String,
    pub boundary: Option<Boundary>,
    pub total_plots: u32,
    pub created_at: DateTime<Utc>,
}

impl Graveyard {
    /// Planar boundary area in square meters, when a valid boundary exists.
    pub fn area(&self) -> Option<f64> {
        let boundary = self.boundary.as_ref()?;
        if boundary.coordinates.len() < MIN_BOUNDARY_VERTICES {
            return None;
        }
        Some(polygon_area(&boundary.coordinates))
    }
}

#[derive(Resource, Default)]
pub struct GraveyardRegistry {
    graveyards: Vec<Graveyard>,
    next_id: u64,
}

impl GraveyardRegistry {
    /// Insert a new record and return its id. New records start with zero
    /// plots; plot management belongs to another module entirely.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        location: impl Into<String>,
        boundary: Option<Boundary>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.graveyards.push(Graveyard {
            id,
            name: name.into(),
            location: location.into(),
            boundary,
            total_plots: 0,
            created_at: Utc::now(),
        });
        id
    }

    /// Replace the name, location and boundary of an existing record.
    /// Returns false when the id is unknown.
    pub fn update(
        &mut self,
        id: u64,
        name: impl Into<String>,
        location: impl Into<String>,
        boundary: Boundary,
    ) -> bool {
        match self.graveyards.iter_mut().find(|g| g.id == id) {
            Some(graveyard) => {
                graveyard.name = name.into();
                graveyard.location = location.into();
                graveyard.boundary = Some(boundary);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: u64) -> Option<&Graveyard> {
        self.graveyards.iter().find(|g| g.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Graveyard> {
        self.graveyards.iter()
    }

    pub fn len(&self) -> usize {
        self.graveyards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graveyards.is_empty()
    }
}

/// The graveyard currently highlighted on the map, if any.
#[derive(Resource, Default)]
pub struct SelectedGraveyard {
    pub id: Option<u64>,
}

/// Apply a finished boundary to the registry: update the record being
/// re-edited, or create a new one. The saved record becomes the selection.
pub fn apply_boundary_saved(
    mut events: MessageReader<BoundarySaved>,
    mut registry: ResMut<GraveyardRegistry>,
    mut selected: ResMut<SelectedGraveyard>,
) {
    for event in events.read() {
        let boundary = Boundary {
            coordinates: event.coordinates.clone(),
            center: event.center,
        };

        match event.graveyard_id {
            Some(id) => {
                if registry.update(id, event.name.clone(), event.location.clone(), boundary) {
                    selected.id = Some(id);
                    info!("Updated boundary of graveyard {} '{}'", id, event.name);
                } else {
                    warn!("Boundary saved for unknown graveyard {}", id);
                }
            }
            None => {
                let id = registry.add(event.name.clone(), event.location.clone(), Some(boundary));
                selected.id = Some(id);
                info!("Created graveyard {} '{}'", id, event.name);
            }
        }
    }
}
