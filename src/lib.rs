#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod file_handler;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod stroke;
pub mod surface;

pub use app::PaintApp;
pub use brush::{BRUSH_WIDTHS, BrushWidth, Step};
pub use command::Command;
pub use config::CanvasConfig;
pub use document::Document;
pub use engine::StrokeEngine;
pub use error::{CanvasError, CanvasResult};
pub use geometry::Point;
pub use renderer::Renderer;
pub use stroke::{DisplayList, Segment};
pub use surface::{BACKGROUND, RasterSurface};
