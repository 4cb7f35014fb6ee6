// Imports
use crate::probe;
use crate::scene::Scene;
use anyhow::Context;
use clap::Parser;
use p2d::bounding_volume::Aabb;
use serde::Serialize;
use sketch_geom::{BindingQuery, BoundaryPolicy};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

///    sketch-cli{n}{n}
///    Loads a scene of shapes from a JSON file and runs geometry queries against it.{n}
///    Results are printed as JSON to stdout.
#[derive(clap::Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
    /// Overrides the binding margin of the scene file.
    #[arg(short = 'm', long, global = true)]
    pub(crate) margin: Option<f64>,
    /// The log filter, e.g. "debug" or "sketch_geom=trace".{n}
    /// Defaults to the `RUST_LOG` environment variable, or "warn" when it is not set.
    #[arg(long, global = true)]
    pub(crate) log_level: Option<String>,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub(crate) enum Command {
    /// Prints the bounds of every shape of the scene.
    Bounds {
        /// The scene file.
        scene_file: PathBuf,
        /// Also print the bounds expanded by the binding margin.
        #[arg(short = 'e', long, action = clap::ArgAction::SetTrue)]
        expanded: bool,
    },
    /// Prints the shapes hit by a point.
    #[command(allow_negative_numbers = true)]
    HitPoint {
        /// The scene file.
        scene_file: PathBuf,
        /// X-position of the point.
        x: f64,
        /// Y-position of the point.
        y: f64,
        /// How points exactly on the outline of a shape are classified.
        #[arg(short = 'b', long, default_value_t = BoundaryPolicy::default())]
        boundary: BoundaryPolicy,
    },
    /// Prints the shapes whose outline is crossed by a line segment.
    #[command(allow_negative_numbers = true)]
    HitSegment {
        /// The scene file.
        scene_file: PathBuf,
        /// X-position of the segment start.
        x1: f64,
        /// Y-position of the segment start.
        y1: f64,
        /// X-position of the segment end.
        x2: f64,
        /// Y-position of the segment end.
        y2: f64,
    },
    /// Prints the shapes inside of or crossing a rectangular region.
    #[command(allow_negative_numbers = true)]
    HitBounds {
        /// The scene file.
        scene_file: PathBuf,
        /// X-position of the upper-left point.
        x: f64,
        /// Y-position of the upper-left point.
        y: f64,
        /// Width of the region.
        width: f64,
        /// Height of the region.
        height: f64,
    },
    /// Resolves where an arrow handle binds to the shapes of the scene.{n}
    /// The arrow approaches from the origin towards the handle.
    #[command(allow_negative_numbers = true)]
    Bind {
        /// The scene file.
        scene_file: PathBuf,
        /// X-position of the arrow handle.
        x: f64,
        /// Y-position of the arrow handle.
        y: f64,
        /// X-position of the origin the arrow approaches from.
        #[arg(long)]
        origin_x: f64,
        /// Y-position of the origin the arrow approaches from.
        #[arg(long)]
        origin_y: f64,
        /// Bind directly to the handle position, regardless of the proximity rules.
        #[arg(short = 'a', long, action = clap::ArgAction::SetTrue)]
        bind_anywhere: bool,
        /// Only resolve against the shape with this id.
        #[arg(long)]
        id: Option<String>,
    },
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.log_level.as_deref())?;

    match cli.command {
        Command::Bounds {
            scene_file,
            expanded,
        } => {
            let scene = Scene::load_from_file(&scene_file)?.with_margin(cli.margin)?;
            print_json(&probe::run_bounds(&scene, expanded))?;
        }
        Command::HitPoint {
            scene_file,
            x,
            y,
            boundary,
        } => {
            let scene = Scene::load_from_file(&scene_file)?.with_margin(cli.margin)?;
            print_json(&probe::run_hit_point(&scene, na::vector![x, y], boundary))?;
        }
        Command::HitSegment {
            scene_file,
            x1,
            y1,
            x2,
            y2,
        } => {
            let scene = Scene::load_from_file(&scene_file)?.with_margin(cli.margin)?;
            print_json(&probe::run_hit_segment(
                &scene,
                na::vector![x1, y1],
                na::vector![x2, y2],
            ))?;
        }
        Command::HitBounds {
            scene_file,
            x,
            y,
            width,
            height,
        } => {
            if width < 0.0 || height < 0.0 {
                return Err(anyhow::anyhow!(
                    "Region width and height must not be negative, are {width} and {height}."
                ));
            }
            let scene = Scene::load_from_file(&scene_file)?.with_margin(cli.margin)?;
            let region = Aabb::new(na::point![x, y], na::point![x + width, y + height]);
            print_json(&probe::run_hit_bounds(&scene, region))?;
        }
        Command::Bind {
            scene_file,
            x,
            y,
            origin_x,
            origin_y,
            bind_anywhere,
            id,
        } => {
            let scene = Scene::load_from_file(&scene_file)?.with_margin(cli.margin)?;
            let query = BindingQuery::from_origin_to_point(
                na::vector![origin_x, origin_y],
                na::vector![x, y],
            )
            .with_bind_anywhere(bind_anywhere);
            print_json(&probe::run_bind(&scene, &query, id.as_deref())?)?;
        }
    }

    Ok(())
}

fn setup_tracing(log_level: Option<&str>) -> anyhow::Result<()> {
    let filter = match log_level {
        Some(log_level) => EnvFilter::try_new(log_level)
            .with_context(|| format!("Invalid log level \"{log_level}\"."))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Initializing the tracing subscriber failed, Err: {e:?}"))
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("Serializing the result failed.")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args() {
        let cli = Cli::try_parse_from([
            "sketch-cli",
            "hit-point",
            "scene.json",
            "-3.5",
            "4",
            "--boundary",
            "inclusive",
            "--margin",
            "8",
        ])
        .unwrap();

        assert_eq!(cli.margin, Some(8.0));
        let Command::HitPoint { x, y, boundary, .. } = cli.command else {
            panic!("expected the hit-point command");
        };
        assert_eq!((x, y), (-3.5, 4.0));
        assert_eq!(boundary, BoundaryPolicy::Inclusive);
    }

    #[test]
    fn parse_bind_args() {
        let cli = Cli::try_parse_from([
            "sketch-cli",
            "bind",
            "scene.json",
            "5",
            "5",
            "--origin-x",
            "-20",
            "--origin-y",
            "5",
            "--bind-anywhere",
        ])
        .unwrap();

        let Command::Bind {
            origin_x,
            bind_anywhere,
            id,
            ..
        } = cli.command
        else {
            panic!("expected the bind command");
        };
        assert_eq!(origin_x, -20.0);
        assert!(bind_anywhere);
        assert!(id.is_none());
    }
}
