use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use log::{error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use swiss_random::config::{
    DEFAULT_BATCH_SIZE, DEFAULT_MAP_BASE_URL, DEFAULT_MAP_ZOOM, SHAPEFILE_PATH,
};
use swiss_random::{BoundaryIndex, Coordinate, CoordinateSampler, Extrema, MapLink};

#[derive(Parser, Debug)]
#[command(name = "swiss-random")]
#[command(about = "Random coordinates within the borders of Switzerland")]
struct Args {
    /// Boundary shapefile, in the same frame as --frame
    #[arg(long, default_value = SHAPEFILE_PATH)]
    shapefile: PathBuf,

    /// Reference frame name (only LV95 is supported)
    #[arg(long)]
    frame: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a batch of coordinates and report its extrema
    Generate {
        #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
        count: usize,

        /// Seed for a reproducible batch
        #[arg(long)]
        seed: Option<u64>,

        /// Give up on a coordinate after this many rejected draws
        #[arg(long)]
        max_attempts: Option<u64>,

        /// Print the batch and its extrema as JSON
        #[arg(long)]
        json: bool,

        #[arg(long, default_value = DEFAULT_MAP_BASE_URL)]
        base_url: String,

        #[arg(long, default_value_t = DEFAULT_MAP_ZOOM)]
        zoom: u8,
    },

    /// Check whether a coordinate lies within the boundary
    Check {
        #[arg(allow_negative_numbers = true)]
        east: f64,
        #[arg(allow_negative_numbers = true)]
        north: f64,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            error!("{e}");
            process::exit(2);
        }
    }
}

fn run(args: Args) -> swiss_random::Result<i32> {
    let boundary = BoundaryIndex::load(&args.shapefile)?;
    info!(
        "loaded {} boundary polygons from {}",
        boundary.polygon_count(),
        args.shapefile.display()
    );

    match args.command {
        Command::Generate {
            count,
            seed,
            max_attempts,
            json,
            base_url,
            zoom,
        } => {
            let rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let mut sampler = CoordinateSampler::with_rng(&boundary, rng);
            if let Some(max) = max_attempts {
                sampler = sampler.with_max_attempts(max);
            }
            sampler.set_reference_frame(args.frame.as_deref())?;

            let envelope = sampler.bounding_envelope();
            let extent = boundary.bounding_rect();
            if !envelope.contains(extent.min().x, extent.min().y)
                || !envelope.contains(extent.max().x, extent.max().y)
            {
                let frame = sampler.reference_frame();
                warn!("boundary extent {extent:?} exceeds the {frame} envelope, is the shapefile in {frame}?");
            }
            info!(
                "expected acceptance ratio {:.3}",
                boundary.area() / envelope.area()
            );

            info!("travelling back and forth across Switzerland . . .");
            let mut coords = Vec::with_capacity(count);
            for _ in 0..count {
                coords.push(sampler.generate()?);
            }

            let extrema = Extrema::of(&coords);
            if json {
                print_json(&coords, extrema.as_ref());
            } else {
                let link = MapLink::new(base_url, zoom);
                print_report(&sampler, &coords, extrema.as_ref(), &link);
            }
            Ok(0)
        }
        Command::Check { east, north } => {
            let mut sampler = CoordinateSampler::new(&boundary);
            sampler.set_reference_frame(args.frame.as_deref())?;

            let coordinate = Coordinate::new(east, north);
            let inside = sampler.check_containment(&coordinate);
            println!(
                "{} {coordinate} is {} the boundary",
                sampler.reference_frame(),
                if inside { "inside" } else { "outside" }
            );
            Ok(if inside { 0 } else { 1 })
        }
    }
}

fn print_report(
    sampler: &CoordinateSampler<'_, StdRng>,
    coords: &[Coordinate],
    extrema: Option<&Extrema>,
    link: &MapLink,
) {
    for c in coords {
        println!("{c}");
    }
    println!("last: {sampler}");

    if let Some(extrema) = extrema {
        for (side, c) in extrema.iter() {
            println!("{side} {c} {}", link.url(&c));
        }
    }
}

fn print_json(coords: &[Coordinate], extrema: Option<&Extrema>) {
    let report = serde_json::json!({
        "coordinates": coords,
        "extrema": extrema,
    });
    match serde_json::to_string_pretty(&report) {
        Ok(s) => println!("{s}"),
        Err(e) => error!("failed to serialise report: {e}"),
    }
}
