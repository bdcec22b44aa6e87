//! Scene state driven by the host's controls
//!
//! Holds the current configuration, the last generated buffers and the
//! marker. Resolution changes trigger a full rebuild; the pipeline itself
//! stays a pure function of its inputs.

use glam::DVec3;
use tracing::{debug, warn};

use crate::buffers::SurfaceBuffers;
use crate::config::{SurfaceConfig, TessellationConfig};
use crate::error::{ConfigError, GeometryError};
use crate::marker::{Marker, MarkerMesh, MarkerMove, generate_marker_sphere};
use crate::pipeline::generate_surface_with;
use crate::wireframe::{WireframeBuffers, generate_wireframe};

/// Configuration, surface buffers and marker for an interactive host
pub struct Scene {
    config: SurfaceConfig,
    buffers: SurfaceBuffers,
    marker: Marker,
}

impl Scene {
    /// Validate `config` and build the initial surface
    pub fn new(config: SurfaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let buffers = generate_surface_with(&config.shape, &config.tessellation)?;
        let marker = Marker::from_config(&config.marker);
        Ok(Self {
            config,
            buffers,
            marker,
        })
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn tessellation(&self) -> TessellationConfig {
        self.config.tessellation
    }

    /// Current buffers (empty after [`Scene::take_buffers`] until the next rebuild)
    pub fn buffers(&self) -> &SurfaceBuffers {
        &self.buffers
    }

    /// Hand the current buffers to a renderer
    pub fn take_buffers(&mut self) -> SurfaceBuffers {
        std::mem::take(&mut self.buffers)
    }

    /// Change the resolution and rebuild
    ///
    /// Returns `Ok(false)` when nothing changed and buffers are present.
    /// An invalid resolution is rejected before any work and leaves the
    /// previous configuration and buffers untouched.
    pub fn set_resolution(
        &mut self,
        u_resolution: u32,
        v_resolution: u32,
    ) -> Result<bool, GeometryError> {
        let requested = TessellationConfig::new(u_resolution, v_resolution);
        if let Err(err) = requested.resolution() {
            warn!("Rejected resolution change: {}", err);
            return Err(err);
        }

        if requested == self.config.tessellation && !self.buffers.positions.is_empty() {
            return Ok(false);
        }

        self.buffers = generate_surface_with(&self.config.shape, &requested)?;
        self.config.tessellation = requested;
        debug!("Rebuilt surface at {}x{}", u_resolution, v_resolution);
        Ok(true)
    }

    /// Regenerate at the current resolution
    pub fn rebuild(&mut self) -> Result<(), GeometryError> {
        self.buffers = generate_surface_with(&self.config.shape, &self.config.tessellation)?;
        Ok(())
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    /// Apply one key press and return the marker's new center
    pub fn move_marker(&mut self, movement: MarkerMove) -> DVec3 {
        self.marker.step(movement);
        self.marker_center()
    }

    pub fn marker_center(&self) -> DVec3 {
        self.marker.center(&self.config.shape)
    }

    /// Marker sphere at the marker's current position
    pub fn marker_mesh(&self) -> MarkerMesh {
        generate_marker_sphere(self.marker_center(), self.config.marker.radius)
    }

    /// Wireframe variant at the current resolution
    pub fn wireframe(&self) -> Result<WireframeBuffers, GeometryError> {
        generate_wireframe(&self.config.shape, self.config.tessellation.resolution()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_scene() -> Scene {
        let mut config = SurfaceConfig::default();
        config.tessellation = TessellationConfig::new(4, 2);
        Scene::new(config).unwrap()
    }

    #[test]
    fn test_initial_build() {
        let scene = small_scene();
        assert_eq!(scene.buffers().vertex_count(), 48);
    }

    #[test]
    fn test_invalid_initial_config() {
        let mut config = SurfaceConfig::default();
        config.tessellation = TessellationConfig::new(0, 2);
        assert!(matches!(
            Scene::new(config),
            Err(ConfigError::Geometry(GeometryError::InvalidResolution { .. }))
        ));
    }

    #[test]
    fn test_non_finite_config_rejected() {
        let mut config = SurfaceConfig::default();
        config.tessellation = TessellationConfig::new(4, 2);
        config.shape.radius = f64::NAN;
        assert!(matches!(
            Scene::new(config),
            Err(ConfigError::InvalidValue {
                field: "shape.radius",
                ..
            })
        ));

        let mut config = SurfaceConfig::default();
        config.marker.step_degrees = f64::INFINITY;
        assert!(matches!(
            Scene::new(config),
            Err(ConfigError::InvalidValue {
                field: "marker.step_degrees",
                ..
            })
        ));
    }

    #[test]
    fn test_set_resolution_rebuilds() {
        let mut scene = small_scene();
        assert_eq!(scene.set_resolution(8, 4), Ok(true));
        assert_eq!(scene.buffers().vertex_count(), 6 * 8 * 4);
        assert_eq!(scene.tessellation(), TessellationConfig::new(8, 4));
    }

    #[test]
    fn test_same_resolution_is_noop() {
        let mut scene = small_scene();
        assert_eq!(scene.set_resolution(4, 2), Ok(false));
    }

    #[test]
    fn test_invalid_resolution_keeps_previous() {
        let mut scene = small_scene();
        let before = scene.buffers().clone();
        assert!(scene.set_resolution(0, 9).is_err());
        assert_eq!(scene.buffers(), &before);
        assert_eq!(scene.tessellation(), TessellationConfig::new(4, 2));
    }

    #[test]
    fn test_take_then_rebuild() {
        let mut scene = small_scene();
        let taken = scene.take_buffers();
        assert_eq!(taken.vertex_count(), 48);
        assert_eq!(scene.buffers().vertex_count(), 0);

        // Same resolution still rebuilds once the buffers were handed off
        assert_eq!(scene.set_resolution(4, 2), Ok(true));
        assert_eq!(scene.buffers(), &taken);
    }

    #[test]
    fn test_move_marker() {
        let mut scene = small_scene();
        let start = scene.marker_center();
        let moved = scene.move_marker(MarkerMove::Up);
        assert!(moved.z > start.z);
        assert_eq!(scene.marker().v_degrees(), 5.0);

        let mesh = scene.marker_mesh();
        assert_eq!(mesh.vertex_count(), 441);
    }

    #[test]
    fn test_wireframe_follows_resolution() {
        let mut scene = small_scene();
        scene.set_resolution(6, 3).unwrap();
        let wire = scene.wireframe().unwrap();
        assert_eq!(wire.vertex_count(), 7 * 4);
    }
}
