//! Subcommand implementations

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use corrugate::{
    MarkerMove, Scene, SurfaceConfig, write_marker_obj, write_obj, write_wireframe_obj,
};

use crate::SurfaceArgs;

/// Load the config file (if any) and apply command-line overrides
fn load_config(args: &SurfaceArgs) -> Result<SurfaceConfig> {
    let mut config = match &args.config {
        Some(path) => SurfaceConfig::load(path)
            .with_context(|| format!("Failed to load config: {:?}", path))?,
        None => SurfaceConfig::default(),
    };

    if let Some(u) = args.u_resolution {
        config.tessellation.u_resolution = u;
    }
    if let Some(v) = args.v_resolution {
        config.tessellation.v_resolution = v;
    }
    config.validate()?;

    Ok(config)
}

fn build_scene(args: &SurfaceArgs) -> Result<Scene> {
    let config = load_config(args)?;
    Scene::new(config).context("Failed to generate surface")
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("Failed to create output: {:?}", path))?;
    Ok(BufWriter::new(file))
}

pub fn generate(args: &SurfaceArgs, output: &Path, name: &str) -> Result<()> {
    let mut scene = build_scene(args)?;
    let tessellation = scene.tessellation();
    let buffers = scene.take_buffers();

    write_obj(&buffers, output, name)
        .with_context(|| format!("Failed to write OBJ: {:?}", output))?;

    tracing::info!(
        "Generated {}x{} surface: {} triangles, {} vertices -> {:?}",
        tessellation.u_resolution,
        tessellation.v_resolution,
        buffers.triangle_count(),
        buffers.vertex_count(),
        output
    );
    Ok(())
}

pub fn wireframe(args: &SurfaceArgs, output: &Path) -> Result<()> {
    let scene = build_scene(args)?;
    let wire = scene.wireframe()?;

    let mut writer = create_output(output)?;
    write_wireframe_obj(&wire, &mut writer, "corrugated_wireframe")?;
    writer.flush()?;

    tracing::info!(
        "Generated wireframe: {} segments over {} points -> {:?}",
        wire.segment_count(),
        wire.vertex_count(),
        output
    );
    Ok(())
}

pub fn marker(args: &SurfaceArgs, moves: &str, output: Option<&Path>) -> Result<()> {
    let mut scene = build_scene(args)?;

    for key in moves.chars().filter(|c| !c.is_whitespace()) {
        let Some(movement) = MarkerMove::from_key(key) else {
            bail!("Unknown marker key {:?} (expected L, R, U or D)", key);
        };
        scene.move_marker(movement);
    }

    let marker = scene.marker();
    let center = scene.marker_center();
    println!(
        "u={:.1} v={:.1} center=({:.6}, {:.6}, {:.6})",
        marker.u_degrees(),
        marker.v_degrees(),
        center.x,
        center.y,
        center.z
    );

    if let Some(path) = output {
        let mesh = scene.marker_mesh();
        let mut writer = create_output(path)?;
        write_marker_obj(&mesh, &mut writer, "marker")?;
        writer.flush()?;
        tracing::info!("Wrote marker sphere ({} vertices) -> {:?}", mesh.vertex_count(), path);
    }

    Ok(())
}

pub fn stats(args: &SurfaceArgs) -> Result<()> {
    let scene = build_scene(args)?;
    let tessellation = scene.tessellation();
    let buffers = scene.buffers();

    let attribute_bytes = buffers.position_bytes().len()
        + buffers.normal_bytes().len()
        + buffers.tangent_bytes().len()
        + buffers.texcoord_bytes().len();

    println!(
        "resolution: {}x{}",
        tessellation.u_resolution, tessellation.v_resolution
    );
    println!("triangles: {}", buffers.triangle_count());
    println!("vertices: {}", buffers.vertex_count());
    println!("attribute bytes: {}", attribute_bytes);
    println!("index bytes (u32): {}", buffers.index_bytes().len());
    match buffers.indices_u16() {
        Ok(_) => println!("u16 indices: ok"),
        Err(err) => println!("u16 indices: unavailable ({})", err),
    }

    Ok(())
}
