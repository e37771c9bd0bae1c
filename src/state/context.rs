//! The application state of the paint surface and the single place events
//! are applied to it.
//!
//! `PaintContext` owns the grid, the color state, the palette, the tool
//! machine and the event bus. [`PaintContext::dispatch`] takes `&mut self`
//! and runs each event to completion, so a rectangle fill is finished before
//! the next pointer event is looked at.
//!
//! # Example
//!
//! ```rust
//! use eframe_grid_paint::{CanvasEvent, GridConfig, PaintContext, Tool};
//!
//! let mut context = PaintContext::new(GridConfig::default()).unwrap();
//! context.dispatch(CanvasEvent::ToolSelect(Tool::RectangleSelect));
//! assert!(context.tools().is_active(Tool::RectangleSelect));
//! ```
use egui::{Color32, Pos2};

use crate::color::{ColorState, Fill};
use crate::config::GridConfig;
use crate::error::ConfigResult;
use crate::event::{EventBus, EventHandler, PaintEvent};
use crate::grid::{CellGrid, CellId, CellLayout, DEFAULT_COLUMNS, GridLayout};
use crate::input::{CanvasEvent, ColorSelect};
use crate::paint;
use crate::palette::Palette;
use crate::tool::{Tool, ToolStateMachine};

#[derive(Debug)]
pub struct PaintContext {
    grid: CellGrid,
    colors: ColorState,
    palette: Palette,
    tools: ToolStateMachine,
    event_bus: EventBus,
    cell_count: usize,
    default_color: Color32,
}

impl PaintContext {
    /// Build the surface described by `config`, laid out on a default grid.
    pub fn new(config: GridConfig) -> ConfigResult<Self> {
        let layout = GridLayout::new(Pos2::ZERO, config.cell_size, DEFAULT_COLUMNS);
        Self::with_layout(config, layout)
    }

    pub fn with_layout(config: GridConfig, layout: impl CellLayout + 'static) -> ConfigResult<Self> {
        config.validate()?;
        let default_color = config.default_color()?;
        Ok(Self {
            grid: CellGrid::new(config.cell_count, layout),
            colors: ColorState::new(default_color),
            palette: config.palette()?,
            tools: ToolStateMachine::new(),
            event_bus: EventBus::new(),
            cell_count: config.cell_count,
            default_color,
        })
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Layout changes are the only grid mutation allowed from outside
    pub fn set_layout(&mut self, layout: impl CellLayout + 'static) {
        self.grid.set_layout(layout);
    }

    pub fn colors(&self) -> &ColorState {
        &self.colors
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn tools(&self) -> &ToolStateMachine {
        &self.tools
    }

    pub fn subscribe(&mut self, handler: impl EventHandler + 'static) {
        self.event_bus.subscribe(handler);
    }

    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = CanvasEvent>) {
        for event in events {
            self.dispatch(event);
        }
    }

    /// Apply one event
    pub fn dispatch(&mut self, event: CanvasEvent) {
        log::trace!("dispatch {:?}", event);
        match event {
            CanvasEvent::PointerDown { target, pos } => {
                if let Some(cell) = target {
                    self.brush(cell, true);
                }
                self.tools.begin_drag(pos);
                if let Some(anchor) = self.tools.state().anchor() {
                    self.event_bus.emit(PaintEvent::DragStarted { anchor });
                }
            }
            CanvasEvent::PointerMove {
                target: Some(cell),
                primary_held,
                ..
            } => {
                self.brush(cell, primary_held);
            }
            CanvasEvent::PointerMove { target: None, .. } => {}
            CanvasEvent::PointerUp { pos, .. } => {
                let old = self.tools.active_tool();
                if let Some(rect) = self.tools.end_drag(pos) {
                    let count = paint::paint_rectangle(&mut self.grid, rect, self.colors.current());
                    self.event_bus.emit(PaintEvent::CellsPainted { count });
                    self.emit_tool_change(old);
                }
            }
            CanvasEvent::ToolSelect(tool) => {
                let old = self.tools.active_tool();
                self.tools.select_tool(tool);
                log::info!("Tool selected: {} -> {}", old.name(), self.tools.active_tool().name());
                self.emit_tool_change(old);
            }
            CanvasEvent::ColorSelect(select) => self.select_color(select),
            CanvasEvent::Erase => {
                self.colors.erase();
                self.emit_color();
            }
            CanvasEvent::Reset => self.reset(),
        }
    }

    /// Rebuild the grid and restore colors, palette and tools to defaults
    pub fn reset(&mut self) {
        log::info!("Resetting surface with {} cells", self.cell_count);
        let old = self.tools.active_tool();

        self.grid.regenerate(self.cell_count);
        self.colors.set_current(self.default_color);
        self.palette.reset();
        self.tools.reset();

        self.event_bus.emit(PaintEvent::GridRegenerated {
            cell_count: self.grid.len(),
        });
        self.emit_color();
        self.emit_tool_change(old);
    }

    fn brush(&mut self, cell: CellId, button_pressed: bool) {
        debug_assert!(self.grid.contains(cell), "pointer event for stale cell {cell:?}");
        if !self.grid.contains(cell) {
            log::error!("Dropping pointer event for stale cell {:?}", cell);
            return;
        }
        let fill = self.colors.current();
        if paint::paint_under_pointer(&mut self.grid, cell, button_pressed, &self.tools, fill) {
            self.event_bus.emit(PaintEvent::CellsPainted { count: 1 });
        }
    }

    fn select_color(&mut self, select: ColorSelect) {
        let color = match select {
            ColorSelect::Swatch(index) => self.palette.swatch(index),
            ColorSelect::SwatchAssign(index) => {
                let assigned = self.palette.assign_picker_to(index);
                if let Some(color) = assigned {
                    self.event_bus.emit(PaintEvent::SwatchChanged { index, color });
                }
                assigned
            }
            ColorSelect::Picker(color) => {
                self.palette.set_picker(color);
                Some(color)
            }
        };

        match color {
            Some(color) => {
                self.colors.set_current(color);
                self.emit_color();
            }
            None => log::debug!("Ignoring {:?}: no such swatch", select),
        }
    }

    fn emit_color(&mut self) {
        self.event_bus.emit(PaintEvent::ColorChanged {
            fill: self.colors.current(),
            chrome: self.colors.chrome(),
        });
    }

    fn emit_tool_change(&mut self, old: Tool) {
        let new = self.tools.active_tool();
        if old != new {
            self.event_bus.emit(PaintEvent::ToolChanged { old, new });
        }
    }

    /// Shorthand used by tests and the UI
    pub fn fill_at(&self, index: usize) -> Option<Fill> {
        self.grid.id_at(index).and_then(|id| self.grid.fill_of(id))
    }
}
