use crate::event::{EventHandler, PaintEvent};

/// A simple event bus for broadcasting core events to registered handlers
#[derive(Default)]
pub struct EventBus {
    handlers: Vec<Box<dyn EventHandler>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.len()))
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&mut self, handler: impl EventHandler + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Emit an event to all registered handlers, in subscription order
    pub fn emit(&mut self, event: PaintEvent) {
        log::trace!("emit {:?}", event);
        for handler in &mut self.handlers {
            handler.handle_event(&event);
        }
    }
}
