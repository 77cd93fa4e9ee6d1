use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::{AppConfig, SaveConfigRequest, SetDefaultViewRequest};
use crate::constants::MIN_BOUNDARY_VERTICES;
use crate::editor::boundary::{
    BoundaryDraft, BoundaryStatus, ClearBoundaryRequest, DrawMode, EditBoundaryRequest,
    FinishBoundaryRequest, ResumeDrawingRequest, SaveBoundaryRequest, SaveForm,
    UndoVertexRequest,
};
use crate::editor::{CurrentTool, EditorTool};
use crate::map::{GraveyardRegistry, SelectedGraveyard};
use crate::theme;

/// Main toolbar showing tools, view controls and the current selection
#[allow(clippy::too_many_arguments)]
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut current_tool: ResMut<CurrentTool>,
    mut config: ResMut<AppConfig>,
    mut save_config_events: MessageWriter<SaveConfigRequest>,
    mut view_events: MessageWriter<SetDefaultViewRequest>,
    registry: Res<GraveyardRegistry>,
    selected: Res<SelectedGraveyard>,
    mut edit_events: MessageWriter<EditBoundaryRequest>,
) -> Result {
    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                // Tool buttons with keyboard shortcuts
                for tool in EditorTool::all() {
                    let is_selected = current_tool.tool == *tool;
                    let button_text = tool_button_label(tool);

                    let button = egui::Button::new(
                        egui::RichText::new(button_text).size(14.0).strong(),
                    )
                    .min_size(egui::vec2(0.0, 28.0))
                    .selected(is_selected);

                    let response = ui.add(button);
                    if response.clicked() {
                        current_tool.tool = *tool;
                    }
                    response.on_hover_text(tool.display_name());
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                // Graticule toggle, persisted in the app config
                if ui
                    .checkbox(&mut config.data.graticule_visible, "Graticule")
                    .changed()
                {
                    config.dirty = true;
                    save_config_events.write(SaveConfigRequest);
                }

                if ui
                    .add(egui::Button::new("Set Default View").min_size(egui::vec2(0.0, 24.0)))
                    .clicked()
                {
                    view_events.write(SetDefaultViewRequest);
                }

                // Right-aligned selection info
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let Some(graveyard) = selected.id.and_then(|id| registry.get(id)) else {
                        ui.colored_label(
                            theme::ui::HINT_TEXT,
                            format!("{} graveyards", registry.len()),
                        );
                        return;
                    };

                    if ui
                        .add(egui::Button::new("Edit Boundary").min_size(egui::vec2(0.0, 24.0)))
                        .clicked()
                    {
                        edit_events.write(EditBoundaryRequest {
                            graveyard_id: graveyard.id,
                        });
                    }

                    if let Some(area) = graveyard.area() {
                        ui.colored_label(
                            theme::ui::HINT_TEXT,
                            format!("{:.2} ha", area / 10_000.0),
                        );
                    }
                    ui.colored_label(
                        theme::ui::LABEL_TEXT,
                        format!("{} ({} plots)", graveyard.name, graveyard.total_plots),
                    );
                });
            });
        });
    Ok(())
}

/// Secondary toolbar showing the boundary drawing workflow
#[allow(clippy::too_many_arguments)]
pub fn boundary_panel_ui(
    mut contexts: EguiContexts,
    current_tool: Res<CurrentTool>,
    draft: Res<BoundaryDraft>,
    status: Res<BoundaryStatus>,
    mut form: ResMut<SaveForm>,
    mut undo_events: MessageWriter<UndoVertexRequest>,
    mut finish_events: MessageWriter<FinishBoundaryRequest>,
    mut clear_events: MessageWriter<ClearBoundaryRequest>,
    mut resume_events: MessageWriter<ResumeDrawingRequest>,
    mut save_events: MessageWriter<SaveBoundaryRequest>,
) -> Result {
    if current_tool.tool != EditorTool::DrawBoundary {
        return Ok(());
    }

    let count = draft.engine.vertex_count();
    let area = draft.engine.area();

    egui::TopBottomPanel::top("boundary_panel")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 6))
                .fill(theme::ui::PANEL_BACKGROUND),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 6.0;

                match draft.engine.mode() {
                    DrawMode::Drawing => {
                        ui.label(
                            egui::RichText::new("Drawing boundary:").color(theme::ui::LABEL_TEXT),
                        );

                        if ui
                            .add_enabled(count > 0, egui::Button::new("Undo"))
                            .on_hover_text("Remove the last point (Ctrl+Z)")
                            .clicked()
                        {
                            undo_events.write(UndoVertexRequest);
                        }

                        if ui
                            .add_enabled(
                                count >= MIN_BOUNDARY_VERTICES,
                                egui::Button::new("Finish Drawing"),
                            )
                            .clicked()
                        {
                            finish_events.write(FinishBoundaryRequest);
                        }

                        if ui
                            .add_enabled(count > 0, egui::Button::new("Clear"))
                            .clicked()
                        {
                            clear_events.write(ClearBoundaryRequest);
                        }
                    }
                    DrawMode::Idle => {
                        ui.label(
                            egui::RichText::new("Boundary closed:").color(theme::ui::LABEL_TEXT),
                        );

                        if ui.button("Redraw").clicked() {
                            resume_events.write(ResumeDrawingRequest);
                        }

                        ui.label("Name*:");
                        ui.add(
                            egui::TextEdit::singleline(&mut form.name)
                                .hint_text("Graveyard name")
                                .desired_width(160.0),
                        );

                        ui.label("Location:");
                        ui.add(
                            egui::TextEdit::singleline(&mut form.location)
                                .hint_text("Optional")
                                .desired_width(160.0),
                        );

                        if ui.button("Save Boundary").clicked() {
                            save_events.write(SaveBoundaryRequest);
                        }

                        if ui.button("Clear").clicked() {
                            clear_events.write(ClearBoundaryRequest);
                        }
                    }
                }

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(12.0);

                ui.label(
                    egui::RichText::new(format!("Points: {}", count)).color(theme::ui::LABEL_TEXT),
                );

                if count >= MIN_BOUNDARY_VERTICES {
                    ui.label(
                        egui::RichText::new(format!(
                            "Area: {:.0} m\u{b2} ({:.2} ha)",
                            area,
                            area / 10_000.0
                        ))
                        .color(theme::ui::LABEL_TEXT),
                    );

                    if draft.engine.mode() == DrawMode::Drawing {
                        ui.colored_label(theme::ui::OK_TEXT, "Ready to close");
                    }
                }

                if let Some(message) = &status.message {
                    ui.add_space(12.0);
                    let color = if status.is_error {
                        theme::ui::ERROR_TEXT
                    } else {
                        theme::ui::OK_TEXT
                    };
                    ui.colored_label(color, message);
                }
            });
        });
    Ok(())
}

/// Get the button label for a tool (with keyboard shortcut)
fn tool_button_label(tool: &EditorTool) -> &'static str {
    match tool {
        EditorTool::Select => "Select [V]",
        EditorTool::DrawBoundary => "Boundary [B]",
    }
}
