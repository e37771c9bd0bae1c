use egui::Color32;

use crate::grid::GridLayout;
use crate::input::InputHandler;
use crate::renderer::GridRenderer;
use crate::state::PaintContext;

/// Lays out, feeds input to and draws the grid. The frame around the grid is
/// tinted with `border`.
pub fn central_panel(
    ctx: &egui::Context,
    context: &mut PaintContext,
    input: &mut InputHandler,
    renderer: &GridRenderer,
    cell_size: f32,
    border: Color32,
) {
    let frame = egui::Frame::default().fill(border).inner_margin(12.0);
    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        let available = ui.available_rect_before_wrap();
        let layout = GridLayout::fit_width(available, cell_size);
        let surface = layout.extent(context.grid().len());

        // claim the area so egui does not treat drags on it as window drags
        let response = ui.allocate_rect(surface, egui::Sense::click_and_drag());

        context.set_layout(layout);
        input.set_surface(surface);

        let events = input.process_input(&response, context.grid());
        context.dispatch_all(events);

        renderer.render(ui.painter(), context.grid());
    });
}
