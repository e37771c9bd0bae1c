use egui::{Color32, Painter, Stroke};

use crate::grid::CellGrid;

/// Paints the cells of a grid with an egui painter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRenderer {
    /// What blank cells look like
    pub background: Color32,
    pub cell_outline: Stroke,
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            cell_outline: Stroke::new(0.5, Color32::from_gray(220)),
        }
    }
}

impl GridRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, painter: &Painter, grid: &CellGrid) {
        let clip = painter.clip_rect();
        for (id, cell) in grid.iter() {
            let rect = grid.bounds_of(id);
            if !clip.intersects(rect) {
                continue;
            }
            painter.rect_filled(rect, 0.0, cell.fill.resolve(self.background));
            painter.rect_stroke(rect, 0.0, self.cell_outline);
        }
    }
}
