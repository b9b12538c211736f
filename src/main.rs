//! mc-region-pool: inspect the chunks stored in a world's region files.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use mc_region_pool::{NoMask, World};

#[derive(Parser)]
#[command(
    name = "mc-region-pool",
    about = "Scan a world's region files and report the chunks they contain"
)]
struct Args {
    /// World directory (the one containing a `region` subdirectory).
    world: PathBuf,

    /// Decode a single chunk and report its decompressed payload size.
    #[arg(long, value_names = ["X", "Z"], num_args = 2, allow_negative_numbers = true)]
    chunk: Option<Vec<i32>>,

    /// List every discovered chunk coordinate.
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let world = World::new(&args.world);

    if let Some(coords) = &args.chunk {
        let (x, z) = (coords[0], coords[1]);
        let mut stream = world
            .open_chunk(x, z)
            .with_context(|| format!("opening chunk {x},{z}"))?;
        let mut payload = Vec::new();
        stream
            .read_to_end(&mut payload)
            .with_context(|| format!("decompressing chunk {x},{z}"))?;
        println!("chunk {x},{z}: {} bytes decompressed", payload.len());
        return Ok(());
    }

    let pool = world
        .chunk_pool(&NoMask)
        .with_context(|| format!("scanning {}", args.world.display()))?;

    println!("{} chunks", pool.remaining());
    match pool.bounding_box().extent() {
        Some(extent) => println!(
            "bounds: ({}, {}) .. ({}, {})",
            extent.min_x, extent.min_z, extent.max_x, extent.max_z
        ),
        None => println!("bounds: empty"),
    }

    if args.list {
        let mut positions: Vec<_> = pool.positions().collect();
        positions.sort_by_key(|pos| (pos.z, pos.x));
        for pos in positions {
            println!("{},{}", pos.x, pos.z);
        }
    }

    Ok(())
}
