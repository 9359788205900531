// expose-place: compute an overview layout for a JSON scene.
//
// Usage: expose-place [--config PATH] [SCENE]
//
// SCENE is a JSON file (stdin when omitted or "-"):
//
//   {
//     "viewport": { "width": 1920, "height": 1080, "scale": 1.0 },
//     "windows": [ { "id": "term", "rect": { "x": 0, "y": 0, "width": 800, "height": 600 } } ]
//   }
//
// "area" (a rectangle) may be given instead of "viewport" to skip padding.
// The layout is printed to stdout as JSON; logs go to stderr.

use anyhow::{anyhow, bail, Context, Result};
use expose_core::{ConfigLoader, CoreConfig, Rectangle};
use expose_placement::{
    overview_area, scaled_viewport, NaturalPlacement, PlacementDiagnostics, PlacementEntry,
    ThumbnailPlacement, WindowKind,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Scene {
    viewport: Option<Viewport>,
    area: Option<Rectangle>,
    windows: Vec<SceneWindow>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Viewport {
    width: i32,
    height: i32,
    #[serde(default = "unit_scale")]
    scale: f32,
}

fn unit_scale() -> f32 {
    1.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneWindow {
    id: Value,
    rect: Rectangle,
    #[serde(default)]
    kind: WindowKind,
}

#[derive(Debug, Serialize)]
struct Layout {
    area: Rectangle,
    placements: Vec<ThumbnailPlacement<Value>>,
    diagnostics: Option<PlacementDiagnostics>,
}

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    scene: Option<PathBuf>,
}

const USAGE: &str = "Usage: expose-place [--config PATH] [SCENE]";

fn parse_args() -> Result<Option<Args>> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--config" => {
                let path = iter.next().context("--config requires a path")?;
                args.config = Some(PathBuf::from(path));
            }
            "-" => args.scene = None,
            other if other.starts_with('-') => bail!("Unknown option '{}'. {}", other, USAGE),
            other => {
                if args.scene.is_some() {
                    bail!("Only one scene may be given. {}", USAGE);
                }
                args.scene = Some(PathBuf::from(other));
            }
        }
    }
    Ok(Some(args))
}

fn read_scene(path: Option<&PathBuf>) -> Result<Scene> {
    let text = match path {
        Some(path) => {
            expose_core::utils::read_to_string(path).context("Failed to read scene file")?
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read scene from stdin")?;
            text
        }
    };
    serde_json::from_str(&text).context("Failed to parse scene JSON")
}

fn load_config(path: Option<&PathBuf>) -> Result<CoreConfig> {
    let config = match path {
        Some(path) => ConfigLoader::load_from_path(path),
        None => ConfigLoader::load(),
    };
    config.context("Failed to load configuration")
}

fn scene_area(scene: &Scene, config: &CoreConfig) -> Result<Rectangle> {
    match (&scene.viewport, scene.area) {
        (Some(_), Some(_)) => {
            Err(anyhow!("Scene must give either \"viewport\" or \"area\", not both"))
        }
        (None, Some(area)) => Ok(area),
        (Some(viewport), None) => {
            let (width, height) = scaled_viewport(viewport.width, viewport.height, viewport.scale);
            Ok(overview_area(width, height, config.placement.padding)?)
        }
        (None, None) => Err(anyhow!("Scene needs a \"viewport\" or an \"area\"")),
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_ref())?;
    let scene = read_scene(args.scene.as_ref())?;
    let area = scene_area(&scene, &config)?;

    let entries: Vec<PlacementEntry<Value>> = scene
        .windows
        .into_iter()
        .filter(|window| window.kind.is_overview_eligible())
        .map(|window| PlacementEntry::new(window.id, window.rect))
        .collect();
    debug!("{} eligible windows, area {:?}", entries.len(), area);

    let layout = if entries.is_empty() {
        Layout { area, placements: Vec::new(), diagnostics: None }
    } else {
        let outcome = NaturalPlacement::new(config.placement).place(&entries, area)?;
        let placements = outcome
            .placements
            .into_iter()
            .zip(&entries)
            .map(|(result, entry)| ThumbnailPlacement::from_result(result, entry.outer_rect))
            .collect();
        Layout { area, placements, diagnostics: Some(outcome.diagnostics) }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &layout).context("Failed to write layout")?;
    writeln!(out).context("Failed to write layout")?;
    info!("Placed {} windows", layout.placements.len());
    Ok(())
}

fn main() -> Result<()> {
    // stdout carries the layout, so logging stays on stderr.
    expose_core::init_minimal_logging();

    match parse_args()? {
        Some(args) => run(args),
        None => {
            println!("{}", USAGE);
            Ok(())
        }
    }
}
