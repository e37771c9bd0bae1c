//! The addressable collection of paintable cells.

mod layout;

pub use layout::{CellLayout, DEFAULT_COLUMNS, GridLayout};

use egui::{Pos2, Rect};
use uuid::Uuid;

use crate::color::Fill;

/// Handle to one cell of one grid generation.
///
/// Handles from before the last [`CellGrid::regenerate`] are stale and are
/// rejected by every lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId {
    generation: Uuid,
    index: usize,
}

impl CellId {
    /// Creation order of the cell inside its grid
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub fill: Fill,
}

pub struct CellGrid {
    generation: Uuid,
    cells: Vec<Cell>,
    layout: Box<dyn CellLayout>,
}

impl std::fmt::Debug for CellGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellGrid")
            .field("generation", &self.generation)
            .field("cells", &format!("<{} cells>", self.cells.len()))
            .finish_non_exhaustive()
    }
}

impl CellGrid {
    pub fn new(count: usize, layout: impl CellLayout + 'static) -> Self {
        let mut grid = Self {
            generation: Uuid::nil(),
            cells: Vec::new(),
            layout: Box::new(layout),
        };
        grid.regenerate(count);
        grid
    }

    /// Throw away every cell and build `count` blank ones.
    pub fn regenerate(&mut self, count: usize) {
        self.cells.clear();
        self.cells.resize_with(count, Cell::default);
        self.generation = Uuid::new_v4();
        log::debug!("Regenerated grid {} with {} cells", self.generation, count);
    }

    pub fn set_layout(&mut self, layout: impl CellLayout + 'static) {
        self.layout = Box::new(layout);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, id: CellId) -> bool {
        id.generation == self.generation && id.index < self.cells.len()
    }

    /// Handle of the cell created at position `index`
    pub fn id_at(&self, index: usize) -> Option<CellId> {
        (index < self.cells.len()).then_some(CellId {
            generation: self.generation,
            index,
        })
    }

    pub fn ids(&self) -> impl Iterator<Item = CellId> + '_ {
        (0..self.cells.len()).map(|index| CellId {
            generation: self.generation,
            index,
        })
    }

    /// Visit every current cell once, in creation order
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &Cell)> + '_ {
        self.ids().zip(self.cells.iter())
    }

    pub fn for_each(&self, mut f: impl FnMut(CellId, &Cell)) {
        for (id, cell) in self.iter() {
            f(id, cell);
        }
    }

    pub fn get(&self, id: CellId) -> Option<&Cell> {
        if id.generation != self.generation {
            return None;
        }
        self.cells.get(id.index)
    }

    pub fn fill_of(&self, id: CellId) -> Option<Fill> {
        self.get(id).map(|cell| cell.fill)
    }

    /// Repaint a single cell.
    ///
    /// Callers must pass a live handle; a stale one is a bug upstream.
    pub fn paint_one(&mut self, id: CellId, fill: Fill) {
        debug_assert!(self.contains(id), "stale cell handle {id:?}");
        if id.generation != self.generation {
            log::error!("Ignoring paint on stale cell handle {:?}", id);
            return;
        }
        match self.cells.get_mut(id.index) {
            Some(cell) => cell.fill = fill,
            None => log::error!("Ignoring paint on out of range cell {}", id.index),
        }
    }

    /// Current bounds of a cell, asked fresh from the layout
    pub fn bounds_of(&self, id: CellId) -> Rect {
        debug_assert!(self.contains(id), "stale cell handle {id:?}");
        self.layout.cell_rect(id.index)
    }

    /// The cell under `pos`
    pub fn cell_at(&self, pos: Pos2) -> Option<CellId> {
        self.layout
            .index_at(pos, self.cells.len())
            .and_then(|index| self.id_at(index))
    }

    /// Number of cells that are not blank
    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.fill.is_blank()).count()
    }
}
