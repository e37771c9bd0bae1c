use egui::{Context, Pos2, Rect, Response};

use super::CanvasEvent;
use crate::grid::{CellGrid, CellId};

/// The primary pointer as seen during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    pub pos: Option<Pos2>,
    pub primary_down: bool,
    pub primary_pressed: bool,
    pub primary_released: bool,
}

impl PointerSnapshot {
    pub fn from_egui(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            pos: input.pointer.hover_pos(),
            primary_down: input.pointer.primary_down(),
            primary_pressed: input.pointer.primary_pressed(),
            primary_released: input.pointer.primary_released(),
        })
    }

    /// The pointer as seen by the widget behind `response`. When the widget
    /// is not under the pointer (another layer such as a popup covers it)
    /// the position is dropped.
    pub fn from_response(response: &Response) -> Self {
        let mut pointer = Self::from_egui(&response.ctx);
        if !response.contains_pointer() {
            pointer.pos = None;
        }
        pointer
    }
}

/// Handles converting raw egui pointer input into [`CanvasEvent`]s for the
/// grid surface.
///
/// Moves are reported when the pointer crosses into another cell, presses
/// and releases whenever they happen over the surface. Anything outside the
/// surface, or over a layer drawn on top of it, is not forwarded.
#[derive(Debug, Clone)]
pub struct InputHandler {
    surface: Rect,
    hovered: Option<CellId>,
}

impl InputHandler {
    pub fn new(surface: Rect) -> Self {
        Self {
            surface,
            hovered: None,
        }
    }

    /// Update the surface rectangle (e.g. if window is resized)
    pub fn set_surface(&mut self, surface: Rect) {
        self.surface = surface;
    }

    pub fn hovered(&self) -> Option<CellId> {
        self.hovered
    }

    /// Translate this frame's pointer input as seen by the surface widget
    pub fn process_input(&mut self, surface: &Response, grid: &CellGrid) -> Vec<CanvasEvent> {
        self.translate(PointerSnapshot::from_response(surface), grid)
    }

    pub fn translate(&mut self, pointer: PointerSnapshot, grid: &CellGrid) -> Vec<CanvasEvent> {
        let mut events = Vec::new();

        let Some(pos) = pointer.pos.filter(|pos| self.surface.contains(*pos)) else {
            self.hovered = None;
            return events;
        };

        let target = grid.cell_at(pos);
        if target != self.hovered {
            self.hovered = target;
            if target.is_some() {
                events.push(CanvasEvent::PointerMove {
                    target,
                    pos,
                    primary_held: pointer.primary_down,
                });
            }
        }

        if pointer.primary_pressed {
            events.push(CanvasEvent::PointerDown { target, pos });
        }
        if pointer.primary_released {
            events.push(CanvasEvent::PointerUp { target, pos });
        }

        events
    }
}
