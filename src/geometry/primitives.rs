use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use super::IndexedGeometry;

const X: usize = 0;
const Y: usize = 1;
const Z: usize = 2;

/// One face of a box: which axes span it, their directions and the face offset
struct BoxFace {
    u: usize,
    v: usize,
    w: usize,
    u_dir: f32,
    v_dir: f32,
    width: f32,
    height: f32,
    depth: f32,
}

pub fn build_box(width: f32, height: f32, depth: f32) -> IndexedGeometry {
    let faces = [
        // +x, -x, +y, -y, +z, -z
        BoxFace { u: Z, v: Y, w: X, u_dir: -1.0, v_dir: -1.0, width: depth, height, depth: width },
        BoxFace { u: Z, v: Y, w: X, u_dir: 1.0, v_dir: -1.0, width: depth, height, depth: -width },
        BoxFace { u: X, v: Z, w: Y, u_dir: 1.0, v_dir: 1.0, width, height: depth, depth: height },
        BoxFace { u: X, v: Z, w: Y, u_dir: 1.0, v_dir: -1.0, width, height: depth, depth: -height },
        BoxFace { u: X, v: Y, w: Z, u_dir: 1.0, v_dir: -1.0, width, height, depth },
        BoxFace { u: X, v: Y, w: Z, u_dir: -1.0, v_dir: -1.0, width, height, depth: -depth },
    ];

    let mut geometry = IndexedGeometry::default();
    for face in &faces {
        push_box_face(&mut geometry, face);
    }
    geometry
}

fn push_box_face(geometry: &mut IndexedGeometry, face: &BoxFace) {
    let mut normal = Vec3::ZERO;
    normal[face.w] = face.depth.signum();

    let mut corners = [0u32; 4];
    for (iy, row) in [0.0f32, 1.0].into_iter().enumerate() {
        for (ix, col) in [0.0f32, 1.0].into_iter().enumerate() {
            let mut position = Vec3::ZERO;
            position[face.u] = (col - 0.5) * face.width * face.u_dir;
            position[face.v] = (row - 0.5) * face.height * face.v_dir;
            position[face.w] = face.depth * 0.5;

            corners[iy * 2 + ix] =
                geometry.push_vertex(position, normal, Vec2::new(col, 1.0 - row));
        }
    }

    let [a, d, b, c] = corners;
    geometry.push_triangle(a, b, d);
    geometry.push_triangle(b, c, d);
}

/// Plane in the XY plane facing +Z
pub fn build_plane(width: f32, height: f32) -> IndexedGeometry {
    let mut geometry = IndexedGeometry::default();
    let mut corners = [0u32; 4];

    for (iy, row) in [0.0f32, 1.0].into_iter().enumerate() {
        for (ix, col) in [0.0f32, 1.0].into_iter().enumerate() {
            let x = (col - 0.5) * width;
            let y = (row - 0.5) * height;
            corners[iy * 2 + ix] = geometry.push_vertex(
                Vec3::new(x, -y, 0.0),
                Vec3::Z,
                Vec2::new(col, 1.0 - row),
            );
        }
    }

    let [a, d, b, c] = corners;
    geometry.push_triangle(a, b, d);
    geometry.push_triangle(b, c, d);
    geometry
}

/// UV sphere; the pole rows emit one triangle per quad
pub fn build_sphere(radius: f32, width_segments: u32, height_segments: u32) -> IndexedGeometry {
    let mut geometry = IndexedGeometry::default();
    let mut grid: Vec<Vec<u32>> = Vec::with_capacity(height_segments as usize + 1);

    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;

        // Center the texture seam on the degenerate pole vertices
        let u_offset = if iy == 0 {
            0.5 / width_segments as f32
        } else if iy == height_segments {
            -0.5 / width_segments as f32
        } else {
            0.0
        };

        let row = (0..=width_segments)
            .map(|ix| {
                let u = ix as f32 / width_segments as f32;
                let phi = u * TAU;
                let theta = v * PI;
                let position = Vec3::new(
                    -radius * phi.cos() * theta.sin(),
                    radius * theta.cos(),
                    radius * phi.sin() * theta.sin(),
                );
                geometry.push_vertex(
                    position,
                    position.normalize_or_zero(),
                    Vec2::new(u + u_offset, 1.0 - v),
                )
            })
            .collect();
        grid.push(row);
    }

    for iy in 0..height_segments as usize {
        for ix in 0..width_segments as usize {
            let a = grid[iy][ix + 1];
            let b = grid[iy][ix];
            let c = grid[iy + 1][ix];
            let d = grid[iy + 1][ix + 1];

            if iy != 0 {
                geometry.push_triangle(a, b, d);
            }
            if iy != height_segments as usize - 1 {
                geometry.push_triangle(b, c, d);
            }
        }
    }

    geometry
}

/// Closed cylinder (or cone frustum) along Y, centered on the origin
pub fn build_cylinder(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    radial_segments: u32,
) -> IndexedGeometry {
    let mut geometry = IndexedGeometry::default();
    let half_height = height * 0.5;
    let slope = (radius_bottom - radius_top) / height;

    let rings: Vec<Vec<u32>> = [0.0f32, 1.0]
        .into_iter()
        .map(|v| {
            let radius = v * (radius_bottom - radius_top) + radius_top;
            (0..=radial_segments)
                .map(|x| {
                    let u = x as f32 / radial_segments as f32;
                    let (sin, cos) = (u * TAU).sin_cos();
                    geometry.push_vertex(
                        Vec3::new(radius * sin, -v * height + half_height, radius * cos),
                        Vec3::new(sin, slope, cos).normalize(),
                        Vec2::new(u, 1.0 - v),
                    )
                })
                .collect()
        })
        .collect();

    for x in 0..radial_segments as usize {
        let a = rings[0][x];
        let b = rings[1][x];
        let c = rings[1][x + 1];
        let d = rings[0][x + 1];
        geometry.push_triangle(a, b, d);
        geometry.push_triangle(b, c, d);
    }

    if radius_top > 0.0 {
        push_cylinder_cap(&mut geometry, radius_top, half_height, radial_segments, true);
    }
    if radius_bottom > 0.0 {
        push_cylinder_cap(&mut geometry, radius_bottom, half_height, radial_segments, false);
    }

    geometry
}

fn push_cylinder_cap(
    geometry: &mut IndexedGeometry,
    radius: f32,
    half_height: f32,
    radial_segments: u32,
    top: bool,
) {
    let sign = if top { 1.0 } else { -1.0 };
    let normal = Vec3::new(0.0, sign, 0.0);

    // One center vertex per segment so each wedge gets its own UV
    let center_start = geometry.vertex_count() as u32;
    for _ in 0..radial_segments {
        geometry.push_vertex(
            Vec3::new(0.0, half_height * sign, 0.0),
            normal,
            Vec2::splat(0.5),
        );
    }

    let rim_start = geometry.vertex_count() as u32;
    for x in 0..=radial_segments {
        let u = x as f32 / radial_segments as f32;
        let (sin, cos) = (u * TAU).sin_cos();
        geometry.push_vertex(
            Vec3::new(radius * sin, half_height * sign, radius * cos),
            normal,
            Vec2::new(cos * 0.5 + 0.5, sin * 0.5 * sign + 0.5),
        );
    }

    for x in 0..radial_segments {
        let center = center_start + x;
        let rim = rim_start + x;
        if top {
            geometry.push_triangle(rim, rim + 1, center);
        } else {
            geometry.push_triangle(rim + 1, rim, center);
        }
    }
}
