//! Which tool is active and what it is doing.

mod machine;

pub use machine::ToolStateMachine;

use egui::Pos2;

/// The tools a user can pick. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Paints the cell under the pointer while the primary button is held
    Brush,
    /// Paints every cell touched by a dragged rectangle on release
    RectangleSelect,
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Brush => "Brush",
            Self::RectangleSelect => "Rectangle",
        }
    }
}

/// The possible states of the tool machine.
///
/// ```text
///                select(Rect)                 begin_drag
///  ┌──────────┐ ───────────► ┌──────────┐ ───────────► ┌──────────┐
///  │   Idle   │              │   Idle   │              │ Dragging │
///  │  Brush   │ ◄─────────── │   Rect   │              │  anchor  │
///  └──────────┘ select(Rect) └──────────┘              └────┬─────┘
///        ▲      select(Brush)                               │
///        └──────────────────────────────────────────────────┘
///            end_drag / select(Rect) / select(Brush)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolState {
    Idle(Tool),
    /// A rectangle drag in progress; only the rectangle tool drags
    Dragging { anchor: Pos2 },
}

impl Default for ToolState {
    fn default() -> Self {
        Self::Idle(Tool::Brush)
    }
}

impl ToolState {
    pub fn active_tool(&self) -> Tool {
        match self {
            Self::Idle(tool) => *tool,
            Self::Dragging { .. } => Tool::RectangleSelect,
        }
    }

    pub fn anchor(&self) -> Option<Pos2> {
        match self {
            Self::Dragging { anchor } => Some(*anchor),
            Self::Idle(_) => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle(Tool::Brush) => "Idle(Brush)",
            Self::Idle(Tool::RectangleSelect) => "Idle(Rectangle)",
            Self::Dragging { .. } => "Dragging(Rectangle)",
        }
    }
}
