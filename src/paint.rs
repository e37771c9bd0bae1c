//! Decides which cells a pointer action repaints.

use egui::Rect;

use crate::color::Fill;
use crate::geometry::intersects;
use crate::grid::{CellGrid, CellId};
use crate::tool::ToolStateMachine;

/// Brush path: paint `cell` if the brush is the active, idle tool and the
/// primary button is held. Returns whether the cell was painted.
pub fn paint_under_pointer(
    grid: &mut CellGrid,
    cell: CellId,
    button_pressed: bool,
    tools: &ToolStateMachine,
    fill: Fill,
) -> bool {
    if !button_pressed || !tools.is_brushing() {
        return false;
    }
    grid.paint_one(cell, fill);
    true
}

/// Cells whose current bounds touch or overlap `rect`
pub fn cells_touching(grid: &CellGrid, rect: Rect) -> Vec<CellId> {
    grid.ids()
        .filter(|id| intersects(grid.bounds_of(*id), rect))
        .collect()
}

/// Paint every cell touched by `rect`. Returns the number of cells painted.
///
/// The matching set is fixed before the first cell changes, so painting
/// order cannot influence which cells qualify.
pub fn paint_rectangle(grid: &mut CellGrid, rect: Rect, fill: Fill) -> usize {
    let hits = cells_touching(grid, rect);
    for id in &hits {
        grid.paint_one(*id, fill);
    }
    log::debug!("Rectangle {:?} painted {} cells", rect, hits.len());
    hits.len()
}
