//! Assembles a scene from a feature-set JSON file and prints a per-layer
//! summary.
//!
//! Usage:
//! ```text
//! cargo run --example summary -- map.json                 # default parameters
//! cargo run --example summary -- map.json params.json     # custom heights/sizes
//! RUST_LOG=tactimesh=trace cargo run --example summary -- map.json
//! ```

use std::error::Error;

use tactimesh::scene::LayerName;
use tactimesh::tessellation::TriangleMesh;
use tactimesh::{assemble_scene, SceneParams, TactileMapData};

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, INFO for tactimesh.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("tactimesh=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let Some(map_path) = args.next() else {
        return Err("usage: summary <map.json> [params.json]".into());
    };
    let data = TactileMapData::from_json(&std::fs::read_to_string(map_path)?)?;
    let params = match args.next() {
        Some(path) => SceneParams::from_json(&std::fs::read_to_string(path)?)?,
        None => SceneParams::default(),
    };

    let mut scene = assemble_scene(&data, &params);
    println!(
        "plate {} x {} mm, {} features",
        scene.plate_width_mm(),
        scene.plate_height_mm(),
        data.feature_count()
    );
    for layer in scene.layers() {
        let triangles: usize = scene
            .meshes(layer.name)
            .map(TriangleMesh::triangle_count)
            .sum();
        println!(
            "  {:<20} {:>4} meshes {:>8} triangles  {}",
            layer.label,
            layer.meshes.len(),
            triangles,
            layer.color
        );
    }
    let top = scene
        .merged(LayerName::OrientationMarker)
        .bounds()
        .map_or(0.0, |(_, max)| max.z);
    println!("tallest feature: {top} mm");

    let released = scene.dispose();
    println!("released {released} meshes");
    Ok(())
}
