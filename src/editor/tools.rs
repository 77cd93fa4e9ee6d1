use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow, SystemCursorIcon};
use bevy_egui::EguiContexts;

use crate::map::SelectedGraveyard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    #[default]
    Select,
    DrawBoundary,
}

impl EditorTool {
    pub fn display_name(&self) -> &'static str {
        match self {
            EditorTool::Select => "Select (V)",
            EditorTool::DrawBoundary => "Draw Boundary (B)",
        }
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            EditorTool::Select => CursorIcon::System(SystemCursorIcon::Default),
            EditorTool::DrawBoundary => CursorIcon::System(SystemCursorIcon::Crosshair),
        }
    }

    pub fn all() -> &'static [EditorTool] {
        &[EditorTool::Select, EditorTool::DrawBoundary]
    }
}

#[derive(Resource, Default)]
pub struct CurrentTool {
    pub tool: EditorTool,
}

pub fn handle_tool_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut current_tool: ResMut<CurrentTool>,
    mut selected: ResMut<SelectedGraveyard>,
    mut contexts: EguiContexts,
) {
    // Don't change tools if typing in a text field
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    let new_tool = if keyboard.just_pressed(KeyCode::KeyV) {
        Some(EditorTool::Select)
    } else if keyboard.just_pressed(KeyCode::KeyB) {
        Some(EditorTool::DrawBoundary)
    } else {
        None
    };

    if let Some(tool) = new_tool {
        // Clear selection when switching tools
        if tool != current_tool.tool {
            selected.id = None;
        }
        current_tool.tool = tool;
    }
}

pub fn update_cursor_icon(
    current_tool: Res<CurrentTool>,
    mut window_query: Query<(Entity, &Window), With<PrimaryWindow>>,
    mut commands: Commands,
    mut contexts: EguiContexts,
) {
    let Ok((entity, _window)) = window_query.single_mut() else {
        return;
    };

    // Use default cursor over UI, tool cursor in canvas space
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.is_pointer_over_area()
    {
        commands
            .entity(entity)
            .insert(CursorIcon::System(SystemCursorIcon::Default));
        return;
    }

    commands.entity(entity).insert(current_tool.tool.cursor_icon());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(EditorTool::Select.display_name(), "Select (V)");
        assert_eq!(EditorTool::DrawBoundary.display_name(), "Draw Boundary (B)");
    }

    #[test]
    fn test_display_names_contain_shortcuts() {
        // Each display name should contain its keyboard shortcut in parentheses
        for tool in EditorTool::all() {
            let name = tool.display_name();
            assert!(name.contains('('), "Display name should contain shortcut: {}", name);
            assert!(name.contains(')'), "Display name should contain shortcut: {}", name);
        }
    }

    #[test]
    fn test_all_returns_all_tools() {
        let all = EditorTool::all();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&EditorTool::Select));
        assert!(all.contains(&EditorTool::DrawBoundary));
    }

    #[test]
    fn test_default_tool_is_select() {
        assert_eq!(EditorTool::default(), EditorTool::Select);
    }

    #[test]
    fn test_current_tool_default() {
        let current = CurrentTool::default();
        assert_eq!(current.tool, EditorTool::Select);
    }

    #[test]
    fn test_cursor_icons_are_system_cursors() {
        for tool in EditorTool::all() {
            let icon = tool.cursor_icon();
            assert!(matches!(icon, CursorIcon::System(_)));
        }
    }

    #[test]
    fn test_draw_boundary_has_crosshair() {
        assert_eq!(
            EditorTool::DrawBoundary.cursor_icon(),
            CursorIcon::System(SystemCursorIcon::Crosshair)
        );
    }
}
