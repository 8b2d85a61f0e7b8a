//! Headless viewer: compile a tile map, walk the camera for a few tics and
//! dump the final frame as ASCII.
//!
//! ```bash
//! RUST_LOG=debug cargo run -- maps/room.txt --x 2.5 --y 2.5 --ticks 20 --forward 1
//! ```

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use glam::dvec2;

use wallcast::{
    config::EngineConfig,
    engine::{Column, Screen, column_span},
    sim::{InputCmd, TicRunner},
    world::{Camera, DEMO_MAP, Projection, World},
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Tile map file (built-in demo level when omitted)
    #[arg(value_name = "MAP")]
    map: Option<PathBuf>,

    /// Columns in the frame
    #[arg(long, default_value_t = 80)]
    width: usize,

    /// Rows in the frame
    #[arg(long, default_value_t = 24)]
    height: usize,

    /// Start position
    #[arg(long, default_value_t = 5.5)]
    x: f64,
    #[arg(long, default_value_t = 11.5)]
    y: f64,

    /// Compass heading in degrees (0 = north, clockwise)
    #[arg(long, default_value_t = 90.0)]
    heading: f64,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    fov: f64,

    /// Sample the view with even angles instead of a flat plane
    #[arg(long)]
    angular: bool,

    /// Tics to simulate before the dump
    #[arg(long, default_value_t = 0)]
    ticks: u32,

    /// Per-tic input, each in -1..1
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    forward: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    strafe: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    turn: f64,

    /// Print one line per column instead of the picture
    #[arg(long)]
    table: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.width == 0 || args.height == 0 {
        bail!("frame must be at least 1x1, got {}x{}", args.width, args.height);
    }

    let world = match &args.map {
        Some(path) => World::from_file(path)
            .with_context(|| format!("loading map {}", path.display()))?,
        None => World::from_map(DEMO_MAP).context("compiling demo map")?,
    };

    let projection = if args.angular {
        Projection::Angular
    } else {
        Projection::Planar
    };
    let camera = Camera::new(
        dvec2(args.x, args.y),
        args.heading.to_radians(),
        args.fov.to_radians(),
    )
    .with_projection(projection);

    let screen = Screen::new(args.width, args.height);
    let mut sim = TicRunner::new(&world, camera, screen, EngineConfig::default());

    let cmd = InputCmd {
        forward: args.forward.clamp(-1.0, 1.0),
        strafe: args.strafe.clamp(-1.0, 1.0),
        turn: args.turn.clamp(-1.0, 1.0),
    };
    for _ in 0..args.ticks {
        sim.tick(cmd).context("simulating")?;
    }
    if sim.tics() == 0 {
        sim.tick(InputCmd::default()).context("casting frame")?;
    }

    let cam = sim.camera();
    println!(
        "{} walls | eye ({:.3}, {:.3}) heading {:.1}° | {} tics",
        world.walls().len(),
        cam.location().x,
        cam.location().y,
        cam.direction().to_degrees(),
        sim.tics()
    );

    if args.table {
        print_table(sim.columns());
    } else {
        print_frame(sim.columns(), &screen);
    }
    Ok(())
}

fn print_table(columns: &[Column]) {
    println!("{:>5} {:>6} {:>10} {:>10} {:>9}  point", "col", "wall", "dist", "corr", "height");
    for c in columns {
        match c.hit {
            Some(h) => println!(
                "{:>5} {:>6} {:>10.4} {:>10.4} {:>9.2}  ({:.3}, {:.3})",
                c.index, h.wall, h.distance, h.corrected_distance, h.height, h.point.x, h.point.y
            ),
            None => println!("{:>5} {:>6}", c.index, "-"),
        }
    }
}

/// Closer walls get denser glyphs; wall boundaries get a `|`.
fn shade(distance: f64) -> char {
    match distance {
        d if d < 2.0 => '#',
        d if d < 5.0 => '%',
        d if d < 10.0 => '+',
        _ => '.',
    }
}

fn print_frame(columns: &[Column], screen: &Screen) {
    let h = screen.h as f64;
    let mut rows = vec![vec![' '; screen.w]; screen.h];

    for (i, c) in columns.iter().enumerate() {
        let Some(hit) = c.hit else { continue };
        let glyph = if c.is_edge(i.checked_sub(1).map(|p| &columns[p])) {
            '|'
        } else {
            shade(hit.corrected_distance)
        };
        let (top, bottom) = column_span(h, hit.height);
        let first = top.max(0.0).round() as usize;
        let last = (bottom.round().max(0.0) as usize).min(screen.h);
        for row in rows.iter_mut().take(last).skip(first) {
            row[c.index] = glyph;
        }
    }

    for row in rows {
        println!("{}", row.into_iter().collect::<String>());
    }
}
