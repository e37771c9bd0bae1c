//! The boundary between raw pointer input and the paint core.

mod handler;

pub use handler::{InputHandler, PointerSnapshot};

use egui::{Color32, Pos2};

use crate::grid::CellId;
use crate::tool::Tool;

/// Ways the user can pick a color
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorSelect {
    /// Single click on a swatch: adopt its color
    Swatch(usize),
    /// Double click on a swatch: store the picker's value in it and adopt that
    SwatchAssign(usize),
    /// The color picker produced a new value
    Picker(Color32),
}

/// Everything the core reacts to, in arrival order.
///
/// `target` is the cell under the pointer, or `None` when the pointer is over
/// the grid surface but not over a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    PointerDown {
        target: Option<CellId>,
        pos: Pos2,
    },
    /// The pointer entered a new cell
    PointerMove {
        target: Option<CellId>,
        pos: Pos2,
        primary_held: bool,
    },
    PointerUp {
        target: Option<CellId>,
        pos: Pos2,
    },
    ToolSelect(Tool),
    ColorSelect(ColorSelect),
    Erase,
    Reset,
}
