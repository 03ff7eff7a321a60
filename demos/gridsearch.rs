//! Terminal path-finding visualizer.
//!
//! Run: cargo run --bin gridsearch -- --algorithm bfs --density 0.3 --seed 42

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use crossterm::{cursor, execute, queue, terminal};
use gridsearch_core::{Grid, Layout, Point};
use gridsearch_demos::{Overlay, draw, parse_point, scatter_obstacles, summary};
use gridsearch_paths::{
    Algorithm, DEFAULT_END, DEFAULT_START, RunConfig, RunController, RunOutcome,
};
use log::{LevelFilter, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(name = "gridsearch")]
#[command(version)]
#[command(about = "Watch A*, BFS and DFS search a grid")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = 50)]
    cols: i32,

    /// Grid height in cells
    #[arg(long, default_value_t = 50)]
    rows: i32,

    /// Start cell as x,y
    #[arg(short, long, value_parser = parse_point)]
    start: Option<Point>,

    /// End cell as x,y
    #[arg(short, long, value_parser = parse_point)]
    end: Option<Point>,

    /// A*, BFS or DFS
    #[arg(short, long, default_value = "A*")]
    algorithm: Algorithm,

    /// ASCII layout file (`#` wall, `.` floor, `S` start, `E` end)
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Chance for each interior cell to become an obstacle
    #[arg(short, long, default_value_t = 0.0)]
    density: f64,

    /// Seed for obstacle placement
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the step animation and print only the result
    #[arg(long)]
    no_steps: bool,

    /// Delay between animation frames in milliseconds
    #[arg(long, default_value_t = 20)]
    delay_ms: u64,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let (mut grid, start, end) = match &cli.layout {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let layout = Layout::parse(&text)?;
            info!(
                "loaded {}x{} layout from {}",
                layout.grid.cols(),
                layout.grid.rows(),
                path.display()
            );
            (
                layout.grid,
                cli.start.or(layout.start).unwrap_or(DEFAULT_START),
                cli.end.or(layout.end).unwrap_or(DEFAULT_END),
            )
        }
        None => (
            Grid::new(cli.cols, cli.rows)?,
            cli.start.unwrap_or(DEFAULT_START),
            cli.end.unwrap_or(DEFAULT_END),
        ),
    };

    if cli.density > 0.0 {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let n = scatter_obstacles(&mut grid, cli.density, &mut rng, &[start, end]);
        info!("scattered {n} obstacles");
    }

    let animate = !cli.no_steps && !cli.json;
    let cfg = RunConfig::new(start, end, cli.algorithm).with_steps(animate);
    let mut ctl = RunController::new(grid);
    ctl.begin(&cfg)?;

    let mut out = io::stdout().lock();
    if animate {
        execute!(out, terminal::Clear(terminal::ClearType::All), cursor::Hide)?;
        let delay = Duration::from_millis(cli.delay_ms);
        while let Some(snap) = ctl.steps().next() {
            queue!(out, cursor::MoveTo(0, 0))?;
            draw(
                &mut out,
                ctl.grid(),
                &Overlay::from_snapshot(&snap, Some(start), Some(end)),
            )?;
            out.flush()?;
            thread::sleep(delay);
        }
    }
    let outcome = ctl.finish();
    if animate {
        execute!(out, cursor::Show)?;
    }
    let outcome = outcome?;

    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&outcome)?)?;
        return Ok(());
    }

    if animate {
        queue!(out, cursor::MoveTo(0, 0))?;
    }
    let path = match &outcome {
        RunOutcome::Found(r) => r.path.as_slice(),
        RunOutcome::NoPathFound => &[],
    };
    draw(
        &mut out,
        ctl.grid(),
        &Overlay {
            start: Some(start),
            end: Some(end),
            path,
            ..Overlay::default()
        },
    )?;
    writeln!(out, "{}", summary(cli.algorithm.name(), &outcome))?;
    out.flush()?;
    Ok(())
}
