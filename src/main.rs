//! Command line tool for preparing ashfall model output for plotting

// ashtools crates
use ashtools::boundary::{read_boundary_file, write_json, CoastlineRequest, Region, Resolution};
use ashtools::field::{read_field_json, write_field_json, Normalizer};
use ashtools::sites::{site_key_from_path, SiteTable};

// standard library
use std::error::Error;
use std::path::PathBuf;
use std::process;

// external crates
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};

type CliResult = Result<(), Box<dyn Error>>;

#[derive(Parser, Debug)]
#[command(name = "ashtools", version, about, arg_required_else_help(true))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all log output (overrules --verbose)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read a GMT boundary file and summarise it
    Boundary(BoundaryArgs),
    /// Print the gmt arguments for extracting coastlines over a region
    Coast(CoastArgs),
    /// Crop, mask, and add an eruption frame to a deposit field
    Normalize(NormalizeArgs),
    /// Print the source location of a known volcano
    Site(SiteArgs),
}

#[derive(Args, Debug)]
struct BoundaryArgs {
    /// Path to the multi-segment text file
    file: PathBuf,

    /// Also write the polylines to a JSON file
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CoastArgs {
    /// Extent as west/east/south/north in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    region: Region,

    /// Shoreline resolution (f, h, i, l, c)
    #[arg(long, default_value = "l")]
    resolution: Resolution,
}

#[derive(Args, Debug)]
struct NormalizeArgs {
    /// Path to the JSON field
    field: PathBuf,

    /// Cells must be strictly above this value to count as deposit
    #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
    threshold: f64,

    /// Eruption start time (RFC 3339, e.g. 2018-08-27T12:00:00Z)
    #[arg(short, long)]
    eruption: DateTime<Utc>,

    /// Units label for the output
    #[arg(short, long)]
    units: Option<String>,

    /// Site key for the source location, taken from the file name if not set
    #[arg(short, long)]
    site: Option<String>,

    /// Path for the normalised JSON field
    #[arg(short, long, value_name = "PATH")]
    output: PathBuf,
}

#[derive(Args, Debug)]
struct SiteArgs {
    /// Site key, e.g. spurr
    #[arg(required_unless_present = "list")]
    key: Option<String>,

    /// List every known site instead
    #[arg(short, long)]
    list: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Boundary(args) => run_boundary(args),
        Commands::Coast(args) => run_coast(args),
        Commands::Normalize(args) => run_normalize(args),
        Commands::Site(args) => run_site(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Warnings by default, each -v adds a level
fn init_logging(verbose: u8, quiet: bool) {
    let logger = stderrlog::new()
        .modules(["ashtools", "ashtools_boundary", "ashtools_field", "ashtools_sites"])
        .quiet(quiet)
        .verbosity(verbose as usize + 1)
        .show_module_names(false)
        .init();

    if let Err(e) = logger {
        eprintln!("Unable to initialise logging: {e}");
    }
}

fn run_boundary(args: BoundaryArgs) -> CliResult {
    let polylines = read_boundary_file(&args.file)?;
    println!("{polylines}");

    if let Some(path) = args.json {
        write_json(&polylines, &path)?;
        info!("Written to {}", path.display());
    }
    Ok(())
}

fn run_coast(args: CoastArgs) -> CliResult {
    let request = CoastlineRequest::new(args.region, args.resolution)?;
    println!("gmt {}", request.pscoast_args().join(" "));
    Ok(())
}

fn run_normalize(args: NormalizeArgs) -> CliResult {
    let mut field = read_field_json(&args.field)?;
    info!("Read {}", args.field.display());

    let table = SiteTable::volcanoes();
    match &args.site {
        Some(key) => field.metadata.source = Some(table.lookup(key)?),
        None => match site_key_from_path(&args.field).and_then(|key| table.lookup(&key)) {
            Ok(location) => field.metadata.source = Some(location),
            Err(e) => warn!("No source location attached: {e}"),
        },
    }

    let mut normalizer = Normalizer::new(args.threshold);
    if let Some(units) = args.units {
        normalizer.set_units(units);
    }

    let result = normalizer.normalize(&field, args.eruption)?;
    info!("{result}");

    write_field_json(&result, &args.output)?;
    info!("Written to {}", args.output.display());
    Ok(())
}

fn run_site(args: SiteArgs) -> CliResult {
    let table = SiteTable::volcanoes();

    if args.list {
        for key in table.keys() {
            println!("{key:<12} {}", table.lookup(key)?);
        }
        return Ok(());
    }

    if let Some(key) = args.key {
        println!("{}", table.lookup(&key)?);
    }
    Ok(())
}
