use std::path::PathBuf;

use crate::geometry::Geometry;
use crate::math::{Color, Transform};

/// Which faces of a mesh are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    Double,
}

/// Surface appearance of a mesh
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub color: Color,
    pub wireframe: bool,
    /// Image multiplied into the base color
    pub map: Option<PathBuf>,
    pub side: Side,
}

impl Material {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            wireframe: false,
            map: None,
            side: Side::Front,
        }
    }

    pub fn with_map(mut self, path: impl Into<PathBuf>) -> Self {
        self.map = Some(path.into());
        self
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

/// Renderable object: shape + appearance + placement
#[derive(Debug, Clone)]
pub struct Mesh {
    pub name: String,
    pub geometry: Geometry,
    pub material: Material,
    pub transform: Transform,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Mesh {
    pub fn new(name: impl Into<String>, geometry: Geometry, material: Material) -> Self {
        Self {
            name: name.into(),
            geometry,
            material,
            transform: Transform::IDENTITY,
            cast_shadow: false,
            receive_shadow: false,
        }
    }
}
