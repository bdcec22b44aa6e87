//! Corrugated sphere generation
//!
//! Builds a flat-shaded, texture-mapped and normal-mapped mesh of a
//! parametric "corrugated sphere", plus a marker sphere that can be driven
//! across the surface and a wireframe variant of the same lattice.
//!
//! The core pipeline runs in double precision and hands back plain `f32`
//! buffers ready for upload:
//!
//! 1. [`ParameterGrid::sample`] evaluates [`SurfaceShape::point`] over a
//!    `(v + 1) × (u + 1)` lattice, seam column included.
//! 2. [`triangulate`] splits every cell into two triangles.
//! 3. [`accumulate_normals`] builds area-weighted smooth normals per
//!    lattice vertex.
//! 4. [`expand`] replicates three vertices per triangle with one shared
//!    face normal and face tangent.
//! 5. [`pack`] flattens them into [`SurfaceBuffers`].
//!
//! # Example
//! ```
//! use corrugate::{TessellationConfig, generate_surface};
//!
//! let buffers = generate_surface(&TessellationConfig::new(48, 24))?;
//! assert_eq!(buffers.vertex_count(), 6 * 48 * 24);
//! assert_eq!(buffers.indices[..3], [0, 1, 2]);
//! # Ok::<(), corrugate::GeometryError>(())
//! ```
//!
//! Resolution changes are full rebuilds; [`Scene`] wraps that for hosts
//! with interactive controls.

pub mod buffers;
pub mod config;
pub mod error;
pub mod export;
pub mod flat;
pub mod grid;
pub mod marker;
pub mod normals;
pub mod pipeline;
pub mod scene;
pub mod surface;
pub mod triangulate;
pub mod uv;
pub mod wireframe;

pub use buffers::{SurfaceBuffers, interleaved_bytes, pack};
pub use config::{MarkerConfig, SurfaceConfig, TessellationConfig};
pub use error::{ConfigError, GeometryError};
pub use export::{write_marker_obj, write_obj, write_obj_to, write_wireframe_obj};
pub use flat::{FlatVertex, expand};
pub use grid::{ParameterGrid, Resolution};
pub use marker::{Marker, MarkerMesh, MarkerMove, generate_marker_sphere};
pub use normals::{FaceGeometry, VertexNormals, accumulate_normals};
pub use pipeline::{generate_flat_vertices, generate_surface, generate_surface_with};
pub use scene::Scene;
pub use surface::{SurfaceShape, surface_point};
pub use triangulate::{Triangle, triangulate};
pub use uv::{face_tangent, param_to_uv};
pub use wireframe::{WireframeBuffers, generate_wireframe};
