use egui::{Pos2, Rect, Vec2, vec2};

use crate::geometry::cell_index_at;

/// Where cells sit on screen.
///
/// The grid never caches these answers: a layout may change between two
/// calls when the window is resized.
pub trait CellLayout: Send {
    /// Bounds of the cell created at `index`
    fn cell_rect(&self, index: usize) -> Rect;

    /// Index of the cell under `pos`, if any of the first `count` cells is there
    fn index_at(&self, pos: Pos2, count: usize) -> Option<usize>;
}

/// Columns used before the surface has been measured
pub const DEFAULT_COLUMNS: usize = 65;

/// Equal sized cells wrapped into rows, left to right then top to bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    origin: Pos2,
    cell_size: Vec2,
    /// Never zero
    columns: usize,
}

impl GridLayout {
    pub fn new(origin: Pos2, cell_size: f32, columns: usize) -> Self {
        Self {
            origin,
            cell_size: vec2(cell_size, cell_size),
            columns: columns.max(1),
        }
    }

    pub fn origin(&self) -> Pos2 {
        self.origin
    }

    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Fit as many columns of `cell_size` as the `available` rect allows
    pub fn fit_width(available: Rect, cell_size: f32) -> Self {
        let columns = if cell_size > 0.0 {
            (available.width() / cell_size).floor() as usize
        } else {
            1
        };
        Self::new(available.min, cell_size, columns)
    }

    pub fn rows_for(&self, count: usize) -> usize {
        count.div_ceil(self.columns)
    }

    /// Total area covered by `count` cells
    pub fn extent(&self, count: usize) -> Rect {
        let rows = self.rows_for(count);
        let columns = self.columns.min(count);
        Rect::from_min_size(
            self.origin,
            vec2(
                columns as f32 * self.cell_size.x,
                rows as f32 * self.cell_size.y,
            ),
        )
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(Pos2::ZERO, 12.0, DEFAULT_COLUMNS)
    }
}

impl CellLayout for GridLayout {
    fn cell_rect(&self, index: usize) -> Rect {
        let column = index % self.columns;
        let row = index / self.columns;
        let min = self.origin
            + vec2(
                column as f32 * self.cell_size.x,
                row as f32 * self.cell_size.y,
            );
        Rect::from_min_size(min, self.cell_size)
    }

    fn index_at(&self, pos: Pos2, count: usize) -> Option<usize> {
        cell_index_at(pos, self.origin, self.cell_size, self.columns, count)
    }
}
