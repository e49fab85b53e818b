#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod console;
pub mod document;
pub mod error;
pub mod input;
pub mod launch;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod tool;

pub use app::CadApp;
pub use command::{Command, CommandError};
pub use config::Config;
pub use console::{Console, ConsoleExit, NoWindow, RenderSignal};
pub use document::{Document, SharedDocument};
pub use error::{CadError, Result};
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use shape::{Point, Shape};
pub use tool::{Gesture, PlacementTool, ShapeKind};
