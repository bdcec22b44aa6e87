//! Error types for surface generation and configuration

use thiserror::Error;

/// Errors raised by the geometry pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Invalid resolution {u_resolution}x{v_resolution}: both axes must be >= 1")]
    InvalidResolution { u_resolution: u32, v_resolution: u32 },

    #[error("Vertex count {vertex_count} cannot be addressed by indices limited to {max} vertices")]
    IndexOverflow { vertex_count: u64, max: u64 },
}

/// Errors raised while loading a [`SurfaceConfig`](crate::SurfaceConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("Invalid value for {field}: {value} (must be finite and > 0)")]
    InvalidValue { field: &'static str, value: f64 },
}
