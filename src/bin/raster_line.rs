//! CLI demo wiring two endpoints to the rasterizer and SVG renderer.
//!
//! # Usage
//!
//! ```bash
//! raster_line --start 0,0 --end 15,2 --output line.svg
//! raster_line --start 5,5 --end -3,1 --print-cells
//! RUST_LOG=debug raster_line --end 9,7 --output line.svg
//! ```

use clap::Parser;
use log::{info, warn};

use rekha_raster::{rasterize, CanvasConfig, CellSink, GridPoint, Segment, SvgCanvas};

/// Rasterize a line segment onto a grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Segment start as "x,y"
    #[arg(short, long, default_value = "0,0", allow_hyphen_values = true)]
    start: String,

    /// Segment end as "x,y"
    #[arg(short, long, default_value = "15,2", allow_hyphen_values = true)]
    end: String,

    /// Output SVG file (omit to skip rendering)
    #[arg(short, long)]
    output: Option<String>,

    /// Grid size in cells per side (0 = fit to the segment)
    #[arg(short, long, default_value = "0")]
    grid_size: usize,

    /// Print every rasterized cell, one per line
    #[arg(long)]
    print_cells: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let start = parse_point(&args.start)?;
    let end = parse_point(&args.end)?;

    let cells = rasterize(start, end);
    info!(
        "Rasterized ({}, {}) -> ({}, {}): {} cells",
        start.x,
        start.y,
        end.x,
        end.y,
        cells.len()
    );

    println!(
        "({}, {}) -> ({}, {}): {} cells",
        start.x,
        start.y,
        end.x,
        end.y,
        cells.len()
    );

    if args.print_cells {
        for cell in &cells {
            println!("{},{}", cell.x, cell.y);
        }
    }

    if let Some(path) = args.output {
        let config = if args.grid_size > 0 {
            CanvasConfig::with_grid_size(args.grid_size)
        } else {
            CanvasConfig::fitting(&cells)
        };

        let mut canvas = SvgCanvas::new(config);
        for &cell in &cells {
            canvas.mark(cell);
        }
        if canvas.skipped() > 0 {
            warn!(
                "{} of {} cells fall outside the grid; pass a larger --grid-size \
                 (negative coordinates are not drawn)",
                canvas.skipped(),
                cells.len()
            );
        }

        canvas.save(&path, Some(Segment::new(start, end)))?;
        println!("Wrote {}", path);
    }

    Ok(())
}

fn parse_point(text: &str) -> Result<GridPoint, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("Expected \"x,y\", got \"{}\"", text))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("Bad x coordinate \"{}\": {}", x, e))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("Bad y coordinate \"{}\": {}", y, e))?;
    Ok(GridPoint::new(x, y))
}
