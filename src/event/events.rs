use egui::{Color32, Pos2};

use crate::color::Fill;
use crate::tool::Tool;

/// Notifications the core sends to the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum PaintEvent {
    /// The current color changed; `chrome` tints the border and nav bar
    ColorChanged { fill: Fill, chrome: Color32 },
    ToolChanged { old: Tool, new: Tool },
    DragStarted { anchor: Pos2 },
    /// A brush stroke or rectangle changed `count` cells
    CellsPainted { count: usize },
    /// The palette swatch at `index` now holds `color`
    SwatchChanged { index: usize, color: Color32 },
    GridRegenerated { cell_count: usize },
}
