mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::PaintEvent;
pub use handlers::{ChromeTint, EventLog};

/// Something that wants to hear about changes made by the core
pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &PaintEvent);
}

