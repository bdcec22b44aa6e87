//! Surface configuration (`corrugate.toml`)
//!
//! Every section and field is optional:
//!
//! ```toml
//! [tessellation]
//! u_resolution = 48
//! v_resolution = 24
//!
//! [shape]
//! radius = 1.0
//! amplitude = 0.24
//! frequency = 6
//!
//! [marker]
//! radius = 0.04
//! step_degrees = 5.0
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, GeometryError};
use crate::grid::Resolution;
use crate::surface::SurfaceShape;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SurfaceConfig {
    #[serde(default)]
    pub tessellation: TessellationConfig,
    #[serde(default)]
    pub shape: SurfaceShape,
    #[serde(default)]
    pub marker: MarkerConfig,
}

/// Lattice resolution, the only input the pipeline reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TessellationConfig {
    /// Cells around u (longitude). Must be >= 1.
    #[serde(default = "default_u_resolution")]
    pub u_resolution: u32,
    /// Cells along v (latitude). Must be >= 1.
    #[serde(default = "default_v_resolution")]
    pub v_resolution: u32,
}

fn default_u_resolution() -> u32 {
    48
}

fn default_v_resolution() -> u32 {
    24
}

impl TessellationConfig {
    pub fn new(u_resolution: u32, v_resolution: u32) -> Self {
        Self {
            u_resolution,
            v_resolution,
        }
    }

    /// Validate into a [`Resolution`]
    pub fn resolution(&self) -> Result<Resolution, GeometryError> {
        Resolution::new(self.u_resolution, self.v_resolution)
    }
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self::new(default_u_resolution(), default_v_resolution())
    }
}

/// Marker sphere settings
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MarkerConfig {
    /// Sphere radius in world units
    #[serde(default = "default_marker_radius")]
    pub radius: f64,
    /// Angle moved per key press, in degrees
    #[serde(default = "default_step_degrees")]
    pub step_degrees: f64,
}

fn default_marker_radius() -> f64 {
    0.04
}

fn default_step_degrees() -> f64 {
    5.0
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            radius: default_marker_radius(),
            step_degrees: default_step_degrees(),
        }
    }
}

impl SurfaceConfig {
    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML from memory
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value the pipeline and marker depend on
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tessellation.resolution()?;
        positive("marker.radius", self.marker.radius)?;
        positive("marker.step_degrees", self.marker.step_degrees)?;
        positive("shape.radius", self.shape.radius)?;
        if !self.shape.amplitude.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "shape.amplitude",
                value: self.shape.amplitude,
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}
