pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod controls;
pub mod geometry;
pub mod input;
pub mod math;
pub mod panel;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod timing;
pub mod viewer;

pub use config::ViewerConfig;
pub use viewer::{RenderSurface, SceneViewer};
