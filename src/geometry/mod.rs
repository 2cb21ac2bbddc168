//! Shape descriptions and their triangle meshes.
//!
//! Each [`Geometry`] builds an [`IndexedGeometry`] laid out the same way the
//! common web 3D primitives are (face order, UV orientation, pole handling),
//! which is then expanded into a flat [`Vertex`] list for drawing.

mod primitives;
mod vertex;

use glam::{Vec2, Vec3};

pub use vertex::Vertex;

/// Shape description of a mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Plane {
        width: f32,
        height: f32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
}

impl Geometry {
    pub fn name(&self) -> &'static str {
        match self {
            Geometry::Box { .. } => "box",
            Geometry::Plane { .. } => "plane",
            Geometry::Sphere { .. } => "sphere",
            Geometry::Cylinder { .. } => "cylinder",
        }
    }

    /// Build the indexed triangle mesh for this shape
    pub fn build(&self) -> IndexedGeometry {
        match *self {
            Geometry::Box {
                width,
                height,
                depth,
            } => primitives::build_box(width, height, depth),
            Geometry::Plane { width, height } => primitives::build_plane(width, height),
            Geometry::Sphere {
                radius,
                width_segments,
                height_segments,
            } => primitives::build_sphere(radius, width_segments.max(3), height_segments.max(2)),
            Geometry::Cylinder {
                radius_top,
                radius_bottom,
                height,
                radial_segments,
            } => primitives::build_cylinder(
                radius_top,
                radius_bottom,
                height,
                radial_segments.max(3),
            ),
        }
    }
}

/// Triangle mesh with shared vertices
#[derive(Debug, Clone, Default)]
pub struct IndexedGeometry {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl IndexedGeometry {
    pub(crate) fn push_vertex(&mut self, position: Vec3, normal: Vec3, uv: Vec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        index
    }

    pub(crate) fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Expand into an unindexed triangle list with barycentric corners
    pub fn to_vertices(&self) -> Vec<Vertex> {
        const CORNERS: [[f32; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

        self.indices
            .chunks_exact(3)
            .flat_map(|triangle| {
                triangle.iter().zip(CORNERS).map(|(&index, barycentric)| {
                    let i = index as usize;
                    Vertex {
                        position: self.positions[i].to_array(),
                        normal: self.normals[i].to_array(),
                        uv: self.uvs[i].to_array(),
                        barycentric,
                    }
                })
            })
            .collect()
    }
}
