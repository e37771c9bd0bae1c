use egui::color_picker::{Alpha, color_edit_button_srgba};

use crate::components::ToolButton;
use crate::input::{CanvasEvent, ColorSelect};
use crate::state::PaintContext;
use crate::tool::Tool;

/// Swatches, picker, erase, rectangle toggle and reset.
///
/// Widgets only record what was clicked; the caller dispatches `events`.
pub fn tools_panel(context: &PaintContext, ctx: &egui::Context, events: &mut Vec<CanvasEvent>) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(140.0)
        .show(ctx, |ui| {
            ui.heading("Colors");
            ui.label("Click to use, double click to store the picker color.");

            egui::Grid::new("swatch_grid")
                .num_columns(3)
                .spacing([6.0, 6.0])
                .show(ui, |ui| {
                    for (index, color) in context.palette().swatches().iter().enumerate() {
                        let swatch = egui::Button::new("")
                            .fill(*color)
                            .min_size(egui::vec2(32.0, 32.0));
                        let response = ui.add(swatch);
                        // a double click is also reported as a click first
                        if response.clicked() {
                            events.push(CanvasEvent::ColorSelect(ColorSelect::Swatch(index)));
                        }
                        if response.double_clicked() {
                            events.push(CanvasEvent::ColorSelect(ColorSelect::SwatchAssign(index)));
                        }
                        if index % 3 == 2 {
                            ui.end_row();
                        }
                    }
                });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Picker:");
                let mut picker = context.palette().picker();
                if color_edit_button_srgba(ui, &mut picker, Alpha::Opaque).changed() {
                    events.push(CanvasEvent::ColorSelect(ColorSelect::Picker(picker)));
                }
            });

            if ui.button("Erase").clicked() {
                events.push(CanvasEvent::Erase);
            }

            ui.separator();
            ui.heading("Tools");

            let rectangle = Tool::RectangleSelect;
            let button = ToolButton::new(rectangle.name(), context.tools().is_active(rectangle));
            if button.show(ui).clicked() {
                events.push(CanvasEvent::ToolSelect(rectangle));
            }

            ui.separator();

            if ui.button("Reset").clicked() {
                events.push(CanvasEvent::Reset);
            }

            ui.separator();
            ui.label(format!("State: {}", context.tools().state().name()));
            ui.label(format!(
                "Painted: {} / {}",
                context.grid().painted_count(),
                context.grid().len()
            ));
        });
}
