//! Axis-aligned rectangle math shared by the paint engine and the layouts.

pub mod hit_testing;

use egui::{Pos2, Rect, pos2};

pub use hit_testing::cell_index_at;

/// Inclusive overlap test: rectangles that merely touch along an edge or a
/// corner intersect.
pub fn intersects(a: Rect, b: Rect) -> bool {
    a.max.x >= b.min.x && a.min.x <= b.max.x && a.max.y >= b.min.y && a.min.y <= b.max.y
}

/// Bounding box of two corners given in any order.
pub fn normalize(x1: f32, y1: f32, x2: f32, y2: f32) -> Rect {
    Rect::from_min_max(pos2(x1.min(x2), y1.min(y2)), pos2(x1.max(x2), y1.max(y2)))
}

/// [`normalize`] for a drag anchor and the release point
pub fn drag_rect(anchor: Pos2, release: Pos2) -> Rect {
    normalize(anchor.x, anchor.y, release.x, release.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(l: f32, t: f32, r: f32, b: f32) -> Rect {
        Rect::from_min_max(pos2(l, t), pos2(r, b))
    }

    #[test]
    fn touching_edges_count() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(intersects(a, rect(10.0, 0.0, 20.0, 10.0)));
        assert!(intersects(a, rect(10.0, 10.0, 20.0, 20.0)));
        assert!(!intersects(a, rect(10.5, 0.0, 20.0, 10.0)));
    }

    #[test]
    fn intersection_is_symmetric() {
        let rects = [
            rect(0.0, 0.0, 10.0, 10.0),
            rect(5.0, 5.0, 15.0, 15.0),
            rect(10.0, 0.0, 20.0, 10.0),
            rect(25.0, 25.0, 30.0, 30.0),
            rect(-5.0, 3.0, 2.0, 4.0),
            rect(3.0, 3.0, 3.0, 3.0),
        ];
        for a in rects {
            for b in rects {
                assert_eq!(intersects(a, b), intersects(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn normalize_is_direction_independent() {
        let expected = rect(5.0, 5.0, 15.0, 15.0);
        assert_eq!(normalize(5.0, 5.0, 15.0, 15.0), expected);
        assert_eq!(normalize(15.0, 15.0, 5.0, 5.0), expected);
        assert_eq!(normalize(15.0, 5.0, 5.0, 15.0), expected);
        assert_eq!(normalize(5.0, 15.0, 15.0, 5.0), expected);
    }

    #[test]
    fn degenerate_drag_is_a_point() {
        let r = drag_rect(pos2(7.0, 3.0), pos2(7.0, 3.0));
        assert_eq!(r.min, r.max);
        assert!(intersects(r, rect(0.0, 0.0, 10.0, 10.0)));
    }
}
