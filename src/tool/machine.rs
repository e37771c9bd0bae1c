use egui::{Pos2, Rect};

use super::{Tool, ToolState};
use crate::geometry::drag_rect;

/// Drives [`ToolState`] transitions.
///
/// Transitions that make no sense in the current state (a release without a
/// press, a press while the brush is active) are ignored rather than
/// reported: they come from ordinary pointer noise such as a button released
/// outside the grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolStateMachine {
    state: ToolState,
}

impl ToolStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ToolState {
        self.state
    }

    pub fn active_tool(&self) -> Tool {
        self.state.active_tool()
    }

    /// Whether `tool` should be highlighted as active
    pub fn is_active(&self, tool: Tool) -> bool {
        self.active_tool() == tool
    }

    /// Whether pointer moves should paint single cells
    pub fn is_brushing(&self) -> bool {
        self.state == ToolState::Idle(Tool::Brush)
    }

    /// Pick a tool. Picking the rectangle tool while it is already active
    /// turns it off again, the way its toggle button behaves.
    pub fn select_tool(&mut self, tool: Tool) {
        let next = match (tool, self.state.active_tool()) {
            (Tool::Brush, _) => ToolState::Idle(Tool::Brush),
            (Tool::RectangleSelect, Tool::RectangleSelect) => ToolState::Idle(Tool::Brush),
            (Tool::RectangleSelect, Tool::Brush) => ToolState::Idle(Tool::RectangleSelect),
        };
        self.transition(next);
    }

    /// Remember where a rectangle drag started
    pub fn begin_drag(&mut self, pos: Pos2) {
        match self.state {
            ToolState::Idle(Tool::RectangleSelect) | ToolState::Dragging { .. } => {
                self.transition(ToolState::Dragging { anchor: pos });
            }
            ToolState::Idle(Tool::Brush) => {
                log::trace!("begin_drag ignored while brushing");
            }
        }
    }

    /// Finish a drag, returning the selected rectangle.
    ///
    /// Selection is single-shot: the brush is active again afterwards.
    pub fn end_drag(&mut self, pos: Pos2) -> Option<Rect> {
        let ToolState::Dragging { anchor } = self.state else {
            log::trace!("end_drag ignored in {}", self.state.name());
            return None;
        };
        self.transition(ToolState::Idle(Tool::Brush));
        Some(drag_rect(anchor, pos))
    }

    pub fn reset(&mut self) {
        self.transition(ToolState::default());
    }

    fn transition(&mut self, next: ToolState) {
        if self.state != next {
            log::debug!("Tool state {} -> {}", self.state.name(), next.name());
        }
        self.state = next;
    }
}
