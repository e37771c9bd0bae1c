#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod paint;
pub mod palette;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod tool;

pub use app::GridPaintApp;
pub use color::{ColorState, Fill};
pub use config::GridConfig;
pub use error::{ColorParseError, ConfigError};
pub use event::{EventBus, EventHandler, PaintEvent};
pub use grid::{CellGrid, CellId, CellLayout, GridLayout};
pub use input::{CanvasEvent, ColorSelect, InputHandler, PointerSnapshot};
pub use palette::Palette;
pub use renderer::GridRenderer;
pub use state::PaintContext;
pub use tool::{Tool, ToolState, ToolStateMachine};
