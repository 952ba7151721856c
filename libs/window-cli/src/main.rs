//! gothic-window CLI
//!
//! Builds a gothic window into a fresh in-memory scene and prints what was
//! produced.

use anyhow::{Context, Result};
use clap::Parser;
use config::constants::{DEFAULT_DEPTH, DEFAULT_FRAME_THICKNESS, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use gothic_window::material::Material;
use gothic_window::{
    build_gothic_window, InMemoryScene, MaterialCache, MeshSnapshot, Scene, WindowAssembly, WindowParameters,
};
use serde::Serialize;
use tracing::{info, instrument};

#[derive(Parser, Debug)]
#[command(name = "gothic-window")]
#[command(about = "Procedural gothic window generator", long_about = None)]
struct Cli {
    /// Overall window width
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: f64,

    /// Overall window height
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: f64,

    /// Frame depth
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: f64,

    /// Frame thickness, drives the panel inset and bar widths
    #[arg(long, default_value_t = DEFAULT_FRAME_THICKNESS)]
    frame_thickness: f64,

    /// Keep mesh objects from earlier builds
    #[arg(long)]
    keep_existing: bool,

    /// Number of consecutive builds into the same scene
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    runs: u32,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn parameters(&self) -> WindowParameters {
        WindowParameters::new(self.width, self.height, self.depth, self.frame_thickness)
            .with_clear_existing(!self.keep_existing)
    }
}

#[derive(Serialize)]
struct PartReport {
    name: String,
    vertices: usize,
    triangles: usize,
    bounds_min: [f64; 3],
    bounds_max: [f64; 3],
}

impl From<&MeshSnapshot> for PartReport {
    fn from(snapshot: &MeshSnapshot) -> Self {
        let (min, max) = snapshot.world_bounds();
        Self {
            name: snapshot.name.clone(),
            vertices: snapshot.mesh.vertex_count(),
            triangles: snapshot.triangle_count(),
            bounds_min: min.to_array(),
            bounds_max: max.to_array(),
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    parameters: WindowParameters,
    scene_objects: Vec<String>,
    frame: PartReport,
    panel: PartReport,
    mullions: Vec<PartReport>,
    materials: Vec<&'a Material>,
}

impl<'a> Report<'a> {
    fn new(
        parameters: WindowParameters,
        scene: &InMemoryScene,
        window: &WindowAssembly,
        materials: &'a MaterialCache,
    ) -> Self {
        Self {
            parameters,
            scene_objects: scene
                .object_ids()
                .into_iter()
                .filter_map(|id| scene.object(id).map(|o| o.name.clone()))
                .collect(),
            frame: PartReport::from(&window.frame),
            panel: PartReport::from(&window.panel),
            mullions: window.mullions.iter().map(PartReport::from).collect(),
            materials: materials.iter().collect(),
        }
    }

    fn print_text(&self) {
        println!("Scene objects: {}", self.scene_objects.join(", "));
        for part in [&self.frame, &self.panel] {
            print_part(part);
        }
        println!("Mullions (before merge):");
        for part in &self.mullions {
            print!("  ");
            print_part(part);
        }
        println!("Materials:");
        for material in &self.materials {
            println!(
                "  {:<6} {:?} color {:?} roughness {} transmission {} ior {}",
                material.name,
                material.blend_mode,
                material.bsdf.base_color,
                material.bsdf.roughness,
                material.bsdf.transmission,
                material.bsdf.ior
            );
        }
    }
}

fn print_part(part: &PartReport) {
    println!(
        "{}: {} vertices, {} triangles, bounds {:?} .. {:?}",
        part.name, part.vertices, part.triangles, part.bounds_min, part.bounds_max
    );
}

/// Builds `runs` windows into one scene, returning the last assembly.
#[instrument(skip(scene, materials))]
fn run_builds(
    params: &WindowParameters,
    runs: u32,
    scene: &mut InMemoryScene,
    materials: &mut MaterialCache,
) -> Result<WindowAssembly> {
    let mut window = None;
    for run in 1..=runs {
        let built = build_gothic_window(scene, materials, params)
            .with_context(|| format!("build {run} of {runs} failed"))?;
        info!(run, objects = scene.object_count(), "build finished");
        window = Some(built);
    }
    window.context("no build was run")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let params = cli.parameters();

    let mut scene = InMemoryScene::with_startup_objects();
    let mut materials = MaterialCache::new();

    let window = run_builds(&params, cli.runs, &mut scene, &mut materials)?;

    let report = Report::new(params, &scene, &window, &materials);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print_text();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_come_from_config() {
        let cli = Cli::try_parse_from(["gothic-window"]).unwrap();
        let params = cli.parameters();
        assert_eq!(params, WindowParameters::default());
        assert_eq!(cli.runs, 1);
    }

    #[test]
    fn test_keep_existing_disables_clearing() {
        let cli = Cli::try_parse_from(["gothic-window", "--keep-existing", "--width", "3"]).unwrap();
        let params = cli.parameters();
        assert!(!params.clear_existing_meshes);
        assert_eq!(params.width, 3.0);
    }

    #[test]
    fn test_zero_runs_rejected() {
        assert!(Cli::try_parse_from(["gothic-window", "--runs", "0"]).is_err());
    }

    #[test]
    fn test_repeated_builds_keep_one_window() {
        let mut scene = InMemoryScene::with_startup_objects();
        let mut materials = MaterialCache::new();
        let window = run_builds(&WindowParameters::default(), 3, &mut scene, &mut materials).unwrap();
        assert_eq!(window.frame.name, "GothicWindowFrame");
        // Camera, Light, frame and panel
        assert_eq!(scene.object_count(), 4);
        assert_eq!(materials.len(), 2);
    }

    #[test]
    fn test_failed_build_reports_run() {
        let mut scene = InMemoryScene::new();
        let mut materials = MaterialCache::new();
        let params = WindowParameters::new(-1.0, 3.0, 0.2, 0.15);
        let err = run_builds(&params, 2, &mut scene, &mut materials).unwrap_err();
        assert!(err.to_string().contains("build 1 of 2"));
    }
}
