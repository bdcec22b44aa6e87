//! Marker sphere that rides on the surface
//!
//! The marker lives in parameter space: `u` in degrees wraps around
//! [0, 360) and `v` in degrees is clamped to [-90, 90]. Its world
//! position is always the surface point at those angles.

use glam::DVec3;
use tracing::trace;

use crate::config::MarkerConfig;
use crate::grid::{ParameterGrid, Resolution};
use crate::surface::SurfaceShape;
use crate::triangulate::triangulate;

/// Latitude and longitude subdivisions of the marker sphere
pub const MARKER_SUBDIVISIONS: u32 = 20;

/// One key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerMove {
    /// Decrease u
    Left,
    /// Increase u
    Right,
    /// Increase v (toward the north pole)
    Up,
    /// Decrease v (toward the south end)
    Down,
}

impl MarkerMove {
    /// Map a key character (`L`/`R`/`U`/`D` or `A`/`D`/`W`/`S`)
    ///
    /// `D` is ambiguous between the two layouts and means Down.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_uppercase() {
            'L' | 'A' => Some(Self::Left),
            'R' => Some(Self::Right),
            'U' | 'W' => Some(Self::Up),
            'D' | 'S' => Some(Self::Down),
            _ => None,
        }
    }
}

/// Marker position in parameter space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    u_degrees: f64,
    v_degrees: f64,
    step_degrees: f64,
}

impl Marker {
    /// Marker at `(u, v)` degrees moving `step_degrees` per key press
    pub fn new(u_degrees: f64, v_degrees: f64, step_degrees: f64) -> Self {
        Self {
            u_degrees: wrap_degrees(u_degrees),
            v_degrees: v_degrees.clamp(-90.0, 90.0),
            step_degrees,
        }
    }

    /// Marker on the equator at u = 0
    pub fn from_config(config: &MarkerConfig) -> Self {
        Self::new(0.0, 0.0, config.step_degrees)
    }

    pub fn u_degrees(&self) -> f64 {
        self.u_degrees
    }

    pub fn v_degrees(&self) -> f64 {
        self.v_degrees
    }

    /// Apply one key press
    pub fn step(&mut self, movement: MarkerMove) {
        match movement {
            MarkerMove::Left => {
                self.u_degrees = wrap_degrees(self.u_degrees - self.step_degrees);
            }
            MarkerMove::Right => {
                self.u_degrees = wrap_degrees(self.u_degrees + self.step_degrees);
            }
            MarkerMove::Up => {
                self.v_degrees = (self.v_degrees + self.step_degrees).min(90.0);
            }
            MarkerMove::Down => {
                self.v_degrees = (self.v_degrees - self.step_degrees).max(-90.0);
            }
        }
        trace!(
            "Marker moved {:?} to u={:.1} v={:.1}",
            movement, self.u_degrees, self.v_degrees
        );
    }

    /// World-space center on `shape`
    pub fn center(&self, shape: &SurfaceShape) -> DVec3 {
        shape.point(self.u_degrees.to_radians(), self.v_degrees.to_radians())
    }
}

/// Wrap an angle into [0, 360)
///
/// `rem_euclid` rounds tiny negative inputs up to exactly 360.0.
fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Triangulated sphere for drawing the marker
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerMesh {
    /// `[x, y, z]` per vertex
    pub positions: Vec<f32>,
    /// Unit radial normals, `[x, y, z]` per vertex
    pub normals: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MarkerMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Latitude/longitude sphere with a fixed 20 × 20 subdivision
///
/// Uses the surface lattice layout (rows from -90° to 90°, a seam column
/// at 360°) and the same cell split, so it has 441 vertices and 800
/// triangles regardless of `radius`.
pub fn generate_marker_sphere(center: DVec3, radius: f64) -> MarkerMesh {
    let unit_sphere = SurfaceShape {
        radius: 1.0,
        amplitude: 0.0,
        frequency: 0,
    };
    let resolution = Resolution::square(MARKER_SUBDIVISIONS);
    let grid = ParameterGrid::sample(&unit_sphere, resolution);

    let mut mesh = MarkerMesh {
        positions: Vec::with_capacity(grid.positions().len() * 3),
        normals: Vec::with_capacity(grid.positions().len() * 3),
        indices: Vec::with_capacity(resolution.triangle_count() as usize * 3),
    };

    for &unit in grid.positions() {
        let position = center + unit * radius;
        mesh.positions.extend_from_slice(&position.as_vec3().to_array());
        mesh.normals.extend_from_slice(&unit.as_vec3().to_array());
    }

    for tri in triangulate(&resolution) {
        mesh.indices.extend_from_slice(&tri);
    }

    mesh
}
