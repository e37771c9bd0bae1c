use egui::{Pos2, Vec2};

/// Row-major hit test for cells of `cell_size` wrapped into `columns` columns
/// starting at `origin`.
///
/// A point on a shared edge belongs to the cell to its right / below.
pub fn cell_index_at(
    pos: Pos2,
    origin: Pos2,
    cell_size: Vec2,
    columns: usize,
    count: usize,
) -> Option<usize> {
    if columns == 0 || cell_size.x <= 0.0 || cell_size.y <= 0.0 {
        return None;
    }
    let local = pos - origin;
    if !local.x.is_finite() || !local.y.is_finite() || local.x < 0.0 || local.y < 0.0 {
        return None;
    }

    let column = (local.x / cell_size.x).floor() as usize;
    let row = (local.y / cell_size.y).floor() as usize;
    if column >= columns {
        return None;
    }

    let index = row.checked_mul(columns)?.checked_add(column)?;
    (index < count).then_some(index)
}
