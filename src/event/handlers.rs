use std::sync::Arc;

use egui::Color32;
use parking_lot::Mutex;

use crate::event::{EventHandler, PaintEvent};

/// Tracks the chrome tint so the UI can read it between frames
#[derive(Debug, Clone)]
pub struct ChromeTint {
    tint: Arc<Mutex<Color32>>,
}

impl ChromeTint {
    pub fn new(initial: Color32) -> Self {
        Self {
            tint: Arc::new(Mutex::new(initial)),
        }
    }

    pub fn get(&self) -> Color32 {
        *self.tint.lock()
    }
}

impl EventHandler for ChromeTint {
    fn handle_event(&mut self, event: &PaintEvent) {
        if let PaintEvent::ColorChanged { chrome, .. } = event {
            *self.tint.lock() = *chrome;
        }
    }
}

/// Keeps every event it receives; clones share the same log
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<PaintEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PaintEvent> {
        self.events.lock().clone()
    }

    pub fn take(&self) -> Vec<PaintEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventHandler for EventLog {
    fn handle_event(&mut self, event: &PaintEvent) {
        self.events.lock().push(event.clone());
    }
}
