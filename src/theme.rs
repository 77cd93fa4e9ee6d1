//! Centralized color theme for the application.
//!
//! This module provides all colors used throughout the editor UI and rendering.
//! Modify values here to change the application's color scheme.

use bevy::prelude::Color;

// ============================================================================
// Graticule Colors
// ============================================================================

/// Semi-transparent grey graticule lines
pub const GRATICULE_COLOR: Color = Color::srgba(0.5, 0.5, 0.5, 0.3);

// ============================================================================
// Boundary Colors
// ============================================================================

/// Blue outline for boundary polygons (#3b82f6)
pub const BOUNDARY_OUTLINE: Color = Color::srgb(0.231, 0.510, 0.965);

/// Red outline for the selected graveyard boundary (#ff6b6b)
pub const SELECTED_OUTLINE: Color = Color::srgb(1.0, 0.420, 0.420);

// ============================================================================
// Drawing Preview Colors
// ============================================================================

/// Vertex marker fill (#3b82f6)
pub const MARKER_FILL: Color = Color::srgb(0.231, 0.510, 0.965);

/// Dark blue vertex marker outline (#1e40af)
pub const MARKER_OUTLINE: Color = Color::srgb(0.118, 0.251, 0.686);

/// Preview polyline through the in-progress vertices (#3b82f6 at 80%)
pub const PREVIEW_LINE: Color = Color::srgba(0.231, 0.510, 0.965, 0.8);

// ============================================================================
// UI Colors (egui)
// ============================================================================

pub mod ui {
    use bevy_egui::egui;

    /// Dark grey panel background (boundary action bar)
    pub const PANEL_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(45, 45, 48);

    /// Light grey for label text
    pub const LABEL_TEXT: egui::Color32 = egui::Color32::LIGHT_GRAY;

    /// Grey for help/hint text
    pub const HINT_TEXT: egui::Color32 = egui::Color32::GRAY;

    /// Red for error messages
    pub const ERROR_TEXT: egui::Color32 = egui::Color32::RED;

    /// Green for confirmations and the "ready to close" hint
    pub const OK_TEXT: egui::Color32 = egui::Color32::from_rgb(100, 200, 100);
}
