//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels (also used for graticule viewport calculations)
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels (also used for graticule viewport calculations)
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Default map view center latitude (Islamabad) when no config exists
pub const DEFAULT_CENTER_LAT: f64 = 33.6844;

/// Default map view center longitude when no config exists
pub const DEFAULT_CENTER_LNG: f64 = 73.0479;

/// World units per degree for the equirectangular canvas projection.
/// At 100k units/degree one world unit is roughly a meter near the equator.
pub const WORLD_UNITS_PER_DEGREE: f64 = 100_000.0;

/// Meters per degree used by the flat-earth area approximation.
/// Area readouts depend on this value; do not change it casually.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Minimum vertices before a boundary polygon can be closed or saved
pub const MIN_BOUNDARY_VERTICES: usize = 3;

/// Graticule line spacing in degrees
pub const GRATICULE_STEP_DEG: f64 = 0.005;

/// Vertex marker radius in world units
pub const MARKER_RADIUS: f32 = 5.0;
