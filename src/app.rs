use crate::config::GridConfig;
use crate::error::ConfigResult;
use crate::event::ChromeTint;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::GridRenderer;
use crate::state::PaintContext;

/// The eframe front end around a [`PaintContext`]
#[derive(Debug)]
pub struct GridPaintApp {
    context: PaintContext,
    input: InputHandler,
    renderer: GridRenderer,
    tint: ChromeTint,
    cell_size: f32,
}

impl GridPaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GridConfig) -> ConfigResult<Self> {
        Self::from_config(config)
    }

    pub fn from_config(config: GridConfig) -> ConfigResult<Self> {
        let cell_size = config.cell_size;
        let mut context = PaintContext::new(config)?;
        let tint = ChromeTint::new(context.colors().chrome());
        context.subscribe(tint.clone());

        Ok(Self {
            context,
            input: InputHandler::new(egui::Rect::NOTHING),
            renderer: GridRenderer::new(),
            tint,
            cell_size,
        })
    }

    pub fn context(&self) -> &PaintContext {
        &self.context
    }
}

impl eframe::App for GridPaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let nav = egui::Frame::default().fill(self.tint.get()).inner_margin(8.0);
        egui::TopBottomPanel::top("primary_nav")
            .frame(nav)
            .show(ctx, |ui| {
                ui.heading(egui::RichText::new("Pixel Painter").color(egui::Color32::WHITE));
            });

        let mut events = Vec::new();
        tools_panel(&self.context, ctx, &mut events);
        self.context.dispatch_all(events);

        central_panel(
            ctx,
            &mut self.context,
            &mut self.input,
            &self.renderer,
            self.cell_size,
            self.tint.get(),
        );
    }
}
